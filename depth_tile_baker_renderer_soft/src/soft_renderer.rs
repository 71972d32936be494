/// SoftRenderer - CPU implementation of the Renderer trait
///
/// Command lists are executed at submit time: meshes are rasterized into
/// the bound depth (and color) attachments, the depth-encode program runs
/// as a fullscreen blit. Readbacks copy the texture content when they are
/// requested and deliver it after `readback_latency` calls to `poll()`,
/// or on `wait_idle()`.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex, PoisonError};
use glam::Mat4;
use rustc_hash::FxHashMap;
use depth_tile_baker::baker::{Result, Error};
use depth_tile_baker::baker::render::{
    CommandList as RendererCommandList, DepthEncodeParams, LoadOp, ReadbackCallback,
    ReadbackResult, Renderer, RendererConfig, RendererStats, RenderPassDesc,
    Shader as RendererShader, ShaderDesc, ShaderProgram, Texture as RendererTexture,
    TextureDesc, TextureUsage, Viewport,
};
use depth_tile_baker::baker::resource::Mesh;
use depth_tile_baker::{baker_bail, baker_debug, baker_trace};

use crate::debug;
use crate::raster::{blit_depth_encode, to_window, RasterCounts, RasterTarget};
use crate::soft_command_list::{Command, CommandList};
use crate::soft_shader::Shader;
use crate::soft_texture::{encode_color, TexelStorage, Texture};

/// Readback waiting for delivery
struct PendingReadback {
    ticks_remaining: u32,
    result: ReadbackResult,
    callback: ReadbackCallback,
}

/// State of one command list execution
#[derive(Default)]
struct ExecState {
    color: Option<Arc<dyn RendererTexture>>,
    depth: Option<Arc<dyn RendererTexture>>,
    viewport: Option<Viewport>,
    view_projection: Mat4,
    shader: Option<Arc<dyn RendererShader>>,
    textures: FxHashMap<u32, Arc<dyn RendererTexture>>,
    push_constants: Vec<u8>,
}

/// Software renderer
pub struct SoftRenderer {
    config: RendererConfig,
    /// Pending readbacks (behind a Mutex: callbacks are Send but not Sync)
    pending: Mutex<VecDeque<PendingReadback>>,
    /// Fail the next readback request
    fail_next_readback: bool,
    stats: RendererStats,
}

impl SoftRenderer {
    pub fn new(config: RendererConfig) -> Self {
        baker_debug!("baker::soft", "Software renderer '{}' created (readback latency {})",
            config.app_name, config.readback_latency);
        Self {
            config,
            pending: Mutex::new(VecDeque::new()),
            fail_next_readback: false,
            stats: RendererStats::default(),
        }
    }

    pub fn config(&self) -> &RendererConfig {
        &self.config
    }

    /// Make the next readback report a transfer error
    pub fn fail_next_readback(&mut self) {
        self.fail_next_readback = true;
    }

    /// Number of readbacks not yet delivered
    pub fn pending_readbacks(&mut self) -> usize {
        self.pending.get_mut().unwrap_or_else(PoisonError::into_inner).len()
    }

    fn deliver(&mut self, ready: Vec<PendingReadback>) -> usize {
        let count = ready.len();
        self.stats.readbacks_completed += count as u32;
        self.stats.readbacks_pending = self.pending_readbacks() as u32;
        for readback in ready {
            (readback.callback)(readback.result);
        }
        count
    }

    // ===== EXECUTION =====

    fn execute(&mut self, list: &CommandList) -> Result<()> {
        let mut state = ExecState::default();
        for command in list.commands() {
            #[cfg(feature = "command-trace")]
            baker_trace!("baker::soft", "execute {}", command.name());

            match command {
                Command::BeginRenderPass(desc) => Self::begin_render_pass(&mut state, desc)?,
                Command::EndRenderPass => {
                    state.color = None;
                    state.depth = None;
                    state.viewport = None;
                }
                Command::SetViewport(viewport) => state.viewport = Some(*viewport),
                Command::SetViewProjection(matrix) => state.view_projection = *matrix,
                Command::DrawMesh { mesh, world } => self.draw_mesh(&state, mesh, *world)?,
                Command::BindShader(shader) => state.shader = Some(Arc::clone(shader)),
                Command::BindTexture { slot, texture } => {
                    state.textures.insert(*slot, Arc::clone(texture));
                }
                Command::PushConstants(data) => state.push_constants = data.clone(),
                Command::DrawFullscreen => self.draw_fullscreen(&state)?,
            }
        }
        Ok(())
    }

    fn begin_render_pass(state: &mut ExecState, desc: &RenderPassDesc) -> Result<()> {
        if let (Some(color), Some(depth)) = (&desc.color, &desc.depth) {
            let (c, d) = (color.texture.info(), depth.texture.info());
            if (c.width, c.height) != (d.width, d.height) {
                baker_bail!(InvalidResource, "baker::soft",
                    "Attachments '{}' ({}x{}) and '{}' ({}x{}) differ in size",
                    c.label, c.width, c.height, d.label, d.width, d.height);
            }
        }

        if let Some(color) = &desc.color {
            if color.load_op == LoadOp::Clear {
                Texture::downcast(&color.texture)?.clear_color(color.clear_color)?;
            }
            state.color = Some(Arc::clone(&color.texture));
        }
        if let Some(depth) = &desc.depth {
            if depth.load_op == LoadOp::Clear {
                Texture::downcast(&depth.texture)?.clear_depth(depth.clear_depth)?;
            }
            state.depth = Some(Arc::clone(&depth.texture));
        }
        Ok(())
    }

    fn draw_mesh(&mut self, state: &ExecState, mesh: &Mesh, world: Mat4) -> Result<()> {
        let Some(depth_texture) = &state.depth else {
            baker_bail!("baker::soft", "draw_mesh '{}' without a depth attachment", mesh.name());
        };
        let depth_texture = Texture::downcast(depth_texture)?;
        let info = depth_texture.info().clone();
        let viewport = state.viewport.unwrap_or_else(|| Viewport::full(info.width, info.height));

        let color_texture = state.color.as_ref().map(Texture::downcast).transpose()?;
        let texel = color_texture
            .map(|t| encode_color(t.info().format, [1.0; 4]))
            .unwrap_or_default();
        let mut color_guard = color_texture.map(|t| t.lock()).transpose()?;
        let color = match color_guard.as_deref_mut() {
            Some(TexelStorage::Bytes(bytes)) => Some((bytes.as_mut_slice(), texel.as_slice())),
            _ => None,
        };

        let mut depth_guard = depth_texture.lock()?;
        let TexelStorage::Depth(depth) = &mut *depth_guard else {
            baker_bail!(InvalidResource, "baker::soft", "'{}' is not a depth texture", info.label);
        };

        let mut target = RasterTarget { width: info.width, height: info.height, depth, color };
        let mvp = state.view_projection * world;
        let mut counts = RasterCounts::default();
        for triangle in mesh.triangles() {
            let window = [
                to_window(mvp * triangle[0].extend(1.0), &viewport),
                to_window(mvp * triangle[1].extend(1.0), &viewport),
                to_window(mvp * triangle[2].extend(1.0), &viewport),
            ];
            if let [Some(a), Some(b), Some(c)] = window {
                counts.add(target.draw_triangle([a, b, c]));
            }
        }

        self.stats.draw_calls += 1;
        self.stats.triangles += counts.triangles;
        debug::record_draw(counts);
        Ok(())
    }

    fn draw_fullscreen(&mut self, state: &ExecState) -> Result<()> {
        let Some(shader) = &state.shader else {
            baker_bail!("baker::soft", "draw_fullscreen without a bound shader");
        };
        match shader.program() {
            ShaderProgram::DepthEncode => {}
        }

        let Some(source) = state.textures.get(&0) else {
            baker_bail!(InvalidResource, "baker::soft",
                "Shader '{}' needs a depth texture in slot 0", shader.name());
        };
        let source_info = source.info().clone();
        let Some(depth) = Texture::downcast(source)?.snapshot_depth()? else {
            baker_bail!(InvalidResource, "baker::soft",
                "Slot 0 texture '{}' is not a depth texture", source_info.label);
        };

        let params = bytemuck::try_pod_read_unaligned::<DepthEncodeParams>(&state.push_constants)
            .map_err(|e| Error::InvalidResource(format!(
                "Shader '{}': invalid push constants ({} bytes): {:?}",
                shader.name(), state.push_constants.len(), e)))?;

        let Some(target) = &state.color else {
            baker_bail!("baker::soft", "draw_fullscreen without a color attachment");
        };
        let target = Texture::downcast(target)?;
        let target_info = target.info().clone();
        let mut guard = target.lock()?;
        let TexelStorage::Bytes(bytes) = &mut *guard else {
            baker_bail!(InvalidResource, "baker::soft", "'{}' is not a color texture", target_info.label);
        };

        blit_depth_encode(
            &depth,
            (source_info.width, source_info.height),
            bytes,
            (target_info.width, target_info.height),
            target_info.format.bytes_per_pixel(),
            &params,
        );
        self.stats.fullscreen_passes += 1;
        Ok(())
    }
}

impl Default for SoftRenderer {
    fn default() -> Self {
        Self::new(RendererConfig::default())
    }
}

impl Renderer for SoftRenderer {
    fn create_texture(&mut self, desc: TextureDesc) -> Result<Arc<dyn RendererTexture>> {
        if desc.width == 0 || desc.height == 0 {
            baker_bail!(InvalidResource, "baker::soft",
                "Texture '{}' has zero size ({}x{})", desc.label, desc.width, desc.height);
        }
        if desc.format.is_depth() != (desc.usage == TextureUsage::DepthStencil) {
            baker_bail!(InvalidResource, "baker::soft",
                "Texture '{}': format {:?} does not match usage {:?}", desc.label, desc.format, desc.usage);
        }

        baker_trace!("baker::soft", "create_texture '{}' {}x{} {:?}",
            desc.label, desc.width, desc.height, desc.format);
        self.stats.textures_created += 1;
        Ok(Arc::new(Texture::new(&desc)))
    }

    fn create_shader(&mut self, desc: ShaderDesc) -> Result<Arc<dyn RendererShader>> {
        if desc.name.is_empty() {
            baker_bail!(InvalidResource, "baker::soft", "Shader with an empty name");
        }
        baker_trace!("baker::soft", "create_shader '{}' ({:?})", desc.name, desc.program);
        Ok(Arc::new(Shader::new(desc)))
    }

    fn create_command_list(&self) -> Result<Box<dyn RendererCommandList>> {
        Ok(Box::new(CommandList::new()))
    }

    fn submit(&mut self, commands: &[&dyn RendererCommandList]) -> Result<()> {
        for cmd in commands {
            let Some(list) = cmd.as_any().downcast_ref::<CommandList>() else {
                baker_bail!(InvalidResource, "baker::soft",
                    "submit: command list was not created by the software renderer");
            };
            if !list.is_executable() {
                baker_bail!("baker::soft", "submit: command list is not ended");
            }
            self.execute(list)?;
        }
        Ok(())
    }

    fn request_readback(
        &mut self,
        texture: &Arc<dyn RendererTexture>,
        callback: ReadbackCallback,
    ) -> Result<()> {
        let soft = Texture::downcast(texture)?;
        let info = soft.info();
        let result = if std::mem::take(&mut self.fail_next_readback) {
            debug::record_failed_readback();
            ReadbackResult::failed(info.width, info.height, info.format)
        } else {
            ReadbackResult::completed(info.width, info.height, info.format, soft.snapshot_bytes()?)
        };

        let ticks_remaining = self.config.readback_latency.max(1);
        let pending = self.pending.get_mut().unwrap_or_else(PoisonError::into_inner);
        pending.push_back(PendingReadback { ticks_remaining, result, callback });
        self.stats.readbacks_pending = pending.len() as u32;
        Ok(())
    }

    fn poll(&mut self) -> usize {
        let ready = {
            let pending = self.pending.get_mut().unwrap_or_else(PoisonError::into_inner);
            for readback in pending.iter_mut() {
                readback.ticks_remaining = readback.ticks_remaining.saturating_sub(1);
            }
            let (ready, waiting): (Vec<_>, Vec<_>) = pending.drain(..)
                .partition(|readback| readback.ticks_remaining == 0);
            pending.extend(waiting);
            ready
        };
        self.deliver(ready)
    }

    fn wait_idle(&mut self) -> Result<()> {
        let ready: Vec<_> = self.pending.get_mut()
            .unwrap_or_else(PoisonError::into_inner)
            .drain(..)
            .collect();
        self.deliver(ready);
        Ok(())
    }

    fn stats(&self) -> RendererStats {
        self.stats
    }
}
