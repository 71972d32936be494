/// CommandList - software implementation of the CommandList trait
///
/// Records commands for execution at submit time, validating the
/// recording state the way a GPU command buffer would.

use std::any::Any;
use std::sync::Arc;
use glam::Mat4;
use depth_tile_baker::baker::{Result, Error};
use depth_tile_baker::baker::render::{
    CommandList as RendererCommandList, RenderPassDesc, Shader, Texture, Viewport,
};
use depth_tile_baker::baker::resource::Mesh;

/// A recorded command
#[derive(Clone)]
pub(crate) enum Command {
    BeginRenderPass(RenderPassDesc),
    EndRenderPass,
    SetViewport(Viewport),
    SetViewProjection(Mat4),
    DrawMesh { mesh: Arc<Mesh>, world: Mat4 },
    BindShader(Arc<dyn Shader>),
    BindTexture { slot: u32, texture: Arc<dyn Texture> },
    PushConstants(Vec<u8>),
    DrawFullscreen,
}

impl Command {
    /// Short name for traces
    #[cfg_attr(not(feature = "command-trace"), allow(dead_code))]
    pub(crate) fn name(&self) -> &'static str {
        match self {
            Command::BeginRenderPass(_) => "begin_render_pass",
            Command::EndRenderPass => "end_render_pass",
            Command::SetViewport(_) => "set_viewport",
            Command::SetViewProjection(_) => "set_view_projection",
            Command::DrawMesh { .. } => "draw_mesh",
            Command::BindShader(_) => "bind_shader",
            Command::BindTexture { .. } => "bind_texture",
            Command::PushConstants(_) => "push_constants",
            Command::DrawFullscreen => "draw_fullscreen",
        }
    }
}

/// Software command list implementation
///
/// Records rendering commands for later execution by the renderer.
#[derive(Default)]
pub struct CommandList {
    /// Recorded commands
    commands: Vec<Command>,
    /// Whether the command list is currently recording
    is_recording: bool,
    /// Whether we're inside a render pass
    in_render_pass: bool,
    /// Whether `end()` was called at least once
    is_ended: bool,
}

impl CommandList {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn commands(&self) -> &[Command] {
        &self.commands
    }

    /// Whether the list was recorded completely and can be submitted
    pub(crate) fn is_executable(&self) -> bool {
        self.is_ended && !self.is_recording
    }

    fn check_recording(&self, what: &str) -> Result<()> {
        if !self.is_recording {
            return Err(Error::BackendError(format!("{}: command list not recording", what)));
        }
        Ok(())
    }

    fn check_in_pass(&self, what: &str) -> Result<()> {
        self.check_recording(what)?;
        if !self.in_render_pass {
            return Err(Error::BackendError(format!("{}: not inside a render pass", what)));
        }
        Ok(())
    }

    fn record_in_pass(&mut self, what: &str, command: Command) -> Result<()> {
        self.check_in_pass(what)?;
        self.commands.push(command);
        Ok(())
    }
}

impl RendererCommandList for CommandList {
    fn begin(&mut self) -> Result<()> {
        if self.is_recording {
            return Err(Error::BackendError("begin: command list already recording".to_string()));
        }
        self.commands.clear();
        self.is_recording = true;
        self.is_ended = false;
        Ok(())
    }

    fn end(&mut self) -> Result<()> {
        self.check_recording("end")?;
        if self.in_render_pass {
            return Err(Error::BackendError("end: render pass still open".to_string()));
        }
        self.is_recording = false;
        self.is_ended = true;
        Ok(())
    }

    fn begin_render_pass(&mut self, desc: &RenderPassDesc) -> Result<()> {
        self.check_recording("begin_render_pass")?;
        if self.in_render_pass {
            return Err(Error::BackendError("begin_render_pass: render pass already open".to_string()));
        }
        if desc.extent().is_none() {
            return Err(Error::InvalidResource("begin_render_pass: no attachment".to_string()));
        }
        self.in_render_pass = true;
        self.commands.push(Command::BeginRenderPass(desc.clone()));
        Ok(())
    }

    fn end_render_pass(&mut self) -> Result<()> {
        self.check_in_pass("end_render_pass")?;
        self.in_render_pass = false;
        self.commands.push(Command::EndRenderPass);
        Ok(())
    }

    fn set_viewport(&mut self, viewport: Viewport) -> Result<()> {
        if viewport.width <= 0.0 || viewport.height <= 0.0 {
            return Err(Error::InvalidResource(format!(
                "set_viewport: empty viewport {}x{}", viewport.width, viewport.height)));
        }
        self.record_in_pass("set_viewport", Command::SetViewport(viewport))
    }

    fn set_view_projection(&mut self, matrix: Mat4) -> Result<()> {
        self.record_in_pass("set_view_projection", Command::SetViewProjection(matrix))
    }

    fn draw_mesh(&mut self, mesh: &Arc<Mesh>, world: Mat4) -> Result<()> {
        self.record_in_pass("draw_mesh", Command::DrawMesh { mesh: Arc::clone(mesh), world })
    }

    fn bind_shader(&mut self, shader: &Arc<dyn Shader>) -> Result<()> {
        self.check_recording("bind_shader")?;
        self.commands.push(Command::BindShader(Arc::clone(shader)));
        Ok(())
    }

    fn bind_texture(&mut self, slot: u32, texture: &Arc<dyn Texture>) -> Result<()> {
        self.check_recording("bind_texture")?;
        self.commands.push(Command::BindTexture { slot, texture: Arc::clone(texture) });
        Ok(())
    }

    fn push_constants(&mut self, data: &[u8]) -> Result<()> {
        self.check_recording("push_constants")?;
        self.commands.push(Command::PushConstants(data.to_vec()));
        Ok(())
    }

    fn draw_fullscreen(&mut self) -> Result<()> {
        self.record_in_pass("draw_fullscreen", Command::DrawFullscreen)
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}
