/// CommandList trait - for recording rendering commands

use std::any::Any;
use std::sync::Arc;
use glam::Mat4;
use crate::error::Result;
use crate::renderer::{Shader, Texture};
use crate::resource::Mesh;

/// Command list for recording rendering commands
///
/// Commands are recorded and later executed by `Renderer::submit()`.
/// Within a submission, commands execute in recording order.
pub trait CommandList: Send + Sync {
    /// Begin recording commands
    fn begin(&mut self) -> Result<()>;

    /// End recording commands
    fn end(&mut self) -> Result<()>;

    /// Begin a render pass on the given attachments
    fn begin_render_pass(&mut self, desc: &RenderPassDesc) -> Result<()>;

    /// End the current render pass
    fn end_render_pass(&mut self) -> Result<()>;

    /// Set the viewport
    fn set_viewport(&mut self, viewport: Viewport) -> Result<()>;

    /// Set the view-projection matrix used by subsequent `draw_mesh` calls
    fn set_view_projection(&mut self, matrix: Mat4) -> Result<()>;

    /// Draw a mesh with the given world matrix into the current attachments
    fn draw_mesh(&mut self, mesh: &Arc<Mesh>, world: Mat4) -> Result<()>;

    /// Bind a shader for subsequent `draw_fullscreen` calls
    fn bind_shader(&mut self, shader: &Arc<dyn Shader>) -> Result<()>;

    /// Bind a texture as a shader input
    ///
    /// # Arguments
    ///
    /// * `slot` - Input slot (0 = first input)
    /// * `texture` - Texture to sample
    fn bind_texture(&mut self, slot: u32, texture: &Arc<dyn Texture>) -> Result<()>;

    /// Push constants to the bound shader
    fn push_constants(&mut self, data: &[u8]) -> Result<()>;

    /// Draw a fullscreen triangle with the bound shader
    fn draw_fullscreen(&mut self) -> Result<()>;

    /// Backend downcast hook
    fn as_any(&self) -> &dyn Any;
}

/// Load operation of an attachment
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOp {
    /// Clear the attachment at the start of the pass
    Clear,
    /// Keep the previous content
    Load,
}

/// Color attachment of a render pass
#[derive(Clone)]
pub struct ColorAttachment {
    pub texture: Arc<dyn Texture>,
    pub load_op: LoadOp,
    pub clear_color: [f32; 4],
}

/// Depth attachment of a render pass
#[derive(Clone)]
pub struct DepthAttachment {
    pub texture: Arc<dyn Texture>,
    pub load_op: LoadOp,
    pub clear_depth: f32,
}

/// Attachments of a render pass
#[derive(Clone, Default)]
pub struct RenderPassDesc {
    pub color: Option<ColorAttachment>,
    pub depth: Option<DepthAttachment>,
}

impl RenderPassDesc {
    /// Width and height shared by the attachments, if any
    pub fn extent(&self) -> Option<(u32, u32)> {
        self.color.as_ref().map(|c| c.texture.info())
            .or_else(|| self.depth.as_ref().map(|d| d.texture.info()))
            .map(|info| (info.width, info.height))
    }
}

/// Viewport dimensions and depth range
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub min_depth: f32,
    pub max_depth: f32,
}

impl Viewport {
    /// Full-texture viewport with depth range [0, 1]
    pub fn full(width: u32, height: u32) -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            width: width as f32,
            height: height as f32,
            min_depth: 0.0,
            max_depth: 1.0,
        }
    }
}
