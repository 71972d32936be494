/// Mock Renderer for unit tests (no GPU required)
///
/// This mock renderer allows testing the capture pipeline, the render graph
/// and the baker without a real backend. It tracks created resources, records
/// submitted command names and delivers readbacks filled with a constant value.

use std::any::Any;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex, Weak};
use glam::Mat4;

use crate::renderer::{
    Renderer, RendererStats, Texture, TextureDesc, TextureInfo, Shader, ShaderDesc,
    ShaderProgram, CommandList, RenderPassDesc, Viewport, ReadbackCallback, ReadbackResult,
};
use crate::resource::Mesh;
use crate::error::Result;
use crate::baker_bail;

// ============================================================================
// Mock Texture
// ============================================================================

#[derive(Debug)]
pub struct MockTexture {
    pub info: TextureInfo,
}

impl Texture for MockTexture {
    fn info(&self) -> &TextureInfo {
        &self.info
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

// ============================================================================
// Mock Shader
// ============================================================================

#[derive(Debug)]
pub struct MockShader {
    pub name: String,
    pub program: ShaderProgram,
}

impl MockShader {
    pub fn depth_encode(name: &str) -> Self {
        Self { name: name.to_string(), program: ShaderProgram::DepthEncode }
    }
}

impl Shader for MockShader {
    fn name(&self) -> &str {
        &self.name
    }

    fn program(&self) -> ShaderProgram {
        self.program
    }
}

// ============================================================================
// Mock CommandList
// ============================================================================

#[derive(Debug, Default)]
pub struct MockCommandList {
    pub commands: Vec<String>,
}

impl MockCommandList {
    pub fn new() -> Self {
        Self { commands: Vec::new() }
    }
}

impl CommandList for MockCommandList {
    fn begin(&mut self) -> Result<()> {
        self.commands.push("begin".to_string());
        Ok(())
    }

    fn end(&mut self) -> Result<()> {
        self.commands.push("end".to_string());
        Ok(())
    }

    fn begin_render_pass(&mut self, desc: &RenderPassDesc) -> Result<()> {
        let label = desc.color.as_ref().map(|c| c.texture.info().label.clone())
            .or_else(|| desc.depth.as_ref().map(|d| d.texture.info().label.clone()))
            .unwrap_or_default();
        self.commands.push(format!("begin_render_pass:{}", label));
        Ok(())
    }

    fn end_render_pass(&mut self) -> Result<()> {
        self.commands.push("end_render_pass".to_string());
        Ok(())
    }

    fn set_viewport(&mut self, _viewport: Viewport) -> Result<()> {
        self.commands.push("set_viewport".to_string());
        Ok(())
    }

    fn set_view_projection(&mut self, _matrix: Mat4) -> Result<()> {
        self.commands.push("set_view_projection".to_string());
        Ok(())
    }

    fn draw_mesh(&mut self, mesh: &Arc<Mesh>, _world: Mat4) -> Result<()> {
        self.commands.push(format!("draw_mesh:{}", mesh.name()));
        Ok(())
    }

    fn bind_shader(&mut self, shader: &Arc<dyn Shader>) -> Result<()> {
        self.commands.push(format!("bind_shader:{}", shader.name()));
        Ok(())
    }

    fn bind_texture(&mut self, slot: u32, texture: &Arc<dyn Texture>) -> Result<()> {
        self.commands.push(format!("bind_texture:{}:{}", slot, texture.info().label));
        Ok(())
    }

    fn push_constants(&mut self, _data: &[u8]) -> Result<()> {
        self.commands.push("push_constants".to_string());
        Ok(())
    }

    fn draw_fullscreen(&mut self) -> Result<()> {
        self.commands.push("draw_fullscreen".to_string());
        Ok(())
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

// ============================================================================
// Mock Renderer
// ============================================================================

/// Mock Renderer that tracks created resources without GPU
pub struct MockRenderer {
    /// Labels of created textures
    pub created_textures: Arc<Mutex<Vec<String>>>,
    /// Names of created shaders
    pub created_shaders: Arc<Mutex<Vec<String>>>,
    /// Commands of every submitted command list, in submission order
    pub submitted_commands: Arc<Mutex<Vec<String>>>,
    /// Weak references to created textures (to count live ones)
    live: Vec<Weak<dyn Texture>>,
    /// Pending readbacks (behind a Mutex: callbacks are Send but not Sync)
    pending: Mutex<VecDeque<(ReadbackResult, ReadbackCallback)>>,
    /// Value written in every byte of successful readbacks
    readback_fill: u8,
    /// When set, every readback reports an error
    fail_readbacks: bool,
    /// When set, texture creation fails after this many textures
    texture_budget: Option<usize>,
    stats: RendererStats,
}

impl MockRenderer {
    pub fn new() -> Self {
        Self {
            created_textures: Arc::new(Mutex::new(Vec::new())),
            created_shaders: Arc::new(Mutex::new(Vec::new())),
            submitted_commands: Arc::new(Mutex::new(Vec::new())),
            live: Vec::new(),
            pending: Mutex::new(VecDeque::new()),
            readback_fill: 0,
            fail_readbacks: false,
            texture_budget: None,
            stats: RendererStats::default(),
        }
    }

    /// Fill successful readbacks with this byte
    pub fn set_readback_fill(&mut self, value: u8) {
        self.readback_fill = value;
    }

    /// Make every readback report `has_error`
    pub fn set_fail_readbacks(&mut self, fail: bool) {
        self.fail_readbacks = fail;
    }

    /// Fail texture creation once `budget` textures exist
    pub fn set_texture_budget(&mut self, budget: usize) {
        self.texture_budget = Some(budget);
    }

    pub fn get_created_textures(&self) -> Vec<String> {
        self.created_textures.lock().unwrap().clone()
    }

    pub fn get_submitted_commands(&self) -> Vec<String> {
        self.submitted_commands.lock().unwrap().clone()
    }

    /// Number of created textures still referenced somewhere
    pub fn live_texture_count(&self) -> usize {
        self.live.iter().filter(|weak| weak.strong_count() > 0).count()
    }
}

impl Renderer for MockRenderer {
    fn create_texture(&mut self, desc: TextureDesc) -> Result<Arc<dyn Texture>> {
        if let Some(budget) = self.texture_budget {
            if self.created_textures.lock().unwrap().len() >= budget {
                return Err(crate::baker::Error::OutOfMemory);
            }
        }
        if desc.width == 0 || desc.height == 0 {
            baker_bail!("baker::mock", "create_texture: zero-sized texture '{}'", desc.label);
        }
        self.created_textures.lock().unwrap().push(desc.label.clone());
        self.stats.textures_created += 1;
        let texture: Arc<dyn Texture> = Arc::new(MockTexture { info: TextureInfo::from(&desc) });
        self.live.push(Arc::downgrade(&texture));
        Ok(texture)
    }

    fn create_shader(&mut self, desc: ShaderDesc) -> Result<Arc<dyn Shader>> {
        self.created_shaders.lock().unwrap().push(desc.name.clone());
        Ok(Arc::new(MockShader { name: desc.name, program: desc.program }))
    }

    fn create_command_list(&self) -> Result<Box<dyn CommandList>> {
        Ok(Box::new(MockCommandList::new()))
    }

    fn submit(&mut self, commands: &[&dyn CommandList]) -> Result<()> {
        for cmd in commands {
            let Some(mock) = cmd.as_any().downcast_ref::<MockCommandList>() else {
                baker_bail!("baker::mock", "submit: foreign command list");
            };
            for command in &mock.commands {
                if command.starts_with("draw_mesh") {
                    self.stats.draw_calls += 1;
                } else if command == "draw_fullscreen" {
                    self.stats.fullscreen_passes += 1;
                }
            }
            self.submitted_commands.lock().unwrap().extend(mock.commands.iter().cloned());
        }
        Ok(())
    }

    fn request_readback(
        &mut self,
        texture: &Arc<dyn Texture>,
        callback: ReadbackCallback,
    ) -> Result<()> {
        let info = texture.info();
        let result = if self.fail_readbacks {
            ReadbackResult::failed(info.width, info.height, info.format)
        } else {
            ReadbackResult::completed(
                info.width,
                info.height,
                info.format,
                vec![self.readback_fill; info.byte_size()],
            )
        };
        let pending = self.pending.get_mut().unwrap();
        pending.push_back((result, callback));
        self.stats.readbacks_pending = pending.len() as u32;
        Ok(())
    }

    fn poll(&mut self) -> usize {
        let delivered: Vec<_> = self.pending.get_mut().unwrap().drain(..).collect();
        self.stats.readbacks_pending = 0;
        self.stats.readbacks_completed += delivered.len() as u32;
        let count = delivered.len();
        for (result, callback) in delivered {
            callback(result);
        }
        count
    }

    fn wait_idle(&mut self) -> Result<()> {
        self.poll();
        Ok(())
    }

    fn stats(&self) -> RendererStats {
        self.stats
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
#[path = "mock_renderer_tests.rs"]
mod tests;
