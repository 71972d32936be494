/// Renderer trait - main rendering factory interface

use std::sync::Arc;
use crate::error::Result;
use crate::renderer::{
    CommandList, ReadbackCallback, Shader, ShaderDesc, Texture, TextureDesc,
};

/// Renderer configuration
#[derive(Debug, Clone)]
pub struct RendererConfig {
    /// Application name
    pub app_name: String,
    /// Number of `poll()` ticks before a readback completes
    /// (0 = delivered on the next poll)
    pub readback_latency: u32,
}

impl Default for RendererConfig {
    fn default() -> Self {
        Self {
            app_name: "Depth Tile Baker".to_string(),
            readback_latency: 2,
        }
    }
}

/// Renderer statistics
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RendererStats {
    /// Number of mesh draw calls executed
    pub draw_calls: u32,
    /// Number of triangles rasterized
    pub triangles: u32,
    /// Number of fullscreen passes executed
    pub fullscreen_passes: u32,
    /// Number of textures created since startup
    pub textures_created: u32,
    /// Readbacks waiting for delivery
    pub readbacks_pending: u32,
    /// Readbacks delivered (successful or not)
    pub readbacks_completed: u32,
}

/// Main renderer trait
///
/// This is the central factory interface for creating GPU resources,
/// submitting recorded work and transferring results back to the host.
/// Implemented by backend-specific renderers (e.g. `SoftRenderer`).
pub trait Renderer: Send + Sync {
    /// Create a texture
    fn create_texture(&mut self, desc: TextureDesc) -> Result<Arc<dyn Texture>>;

    /// Create a shader
    fn create_shader(&mut self, desc: ShaderDesc) -> Result<Arc<dyn Shader>>;

    /// Create an empty command list
    fn create_command_list(&self) -> Result<Box<dyn CommandList>>;

    /// Execute recorded command lists, in order
    fn submit(&mut self, commands: &[&dyn CommandList]) -> Result<()>;

    /// Request a non-blocking copy of `texture` to host memory
    ///
    /// The texture content is captured when the request is issued, so the
    /// caller may drop its references right after this returns. `callback`
    /// runs exactly once, from a later `poll()` or `wait_idle()`.
    fn request_readback(
        &mut self,
        texture: &Arc<dyn Texture>,
        callback: ReadbackCallback,
    ) -> Result<()>;

    /// Advance one tick and deliver completed readbacks
    ///
    /// Returns the number of callbacks invoked.
    fn poll(&mut self) -> usize;

    /// Wait for all outstanding work, delivering every pending readback
    fn wait_idle(&mut self) -> Result<()>;

    /// Get statistics about the renderer
    fn stats(&self) -> RendererStats;
}
