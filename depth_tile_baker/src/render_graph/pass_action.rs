/// Pass action trait and implementations.
///
/// Defines how a render pass records its draw commands between
/// begin_render_pass() and end_render_pass().

use std::sync::Arc;
use crate::error::Result;
use crate::renderer::{CommandList, Shader, Texture};

/// Action executed by a render pass
///
/// Determines what draw commands are recorded between
/// begin_render_pass() and end_render_pass(). `inputs` holds the
/// textures of the pass input targets, in declaration order.
pub trait PassAction: Send + Sync {
    /// Record draw commands into the command list
    fn execute(&mut self, cmd: &mut dyn CommandList, inputs: &[Arc<dyn Texture>]) -> Result<()>;
}

/// Fullscreen pass action (data-driven, no closure)
///
/// Binds a shader, binds every input texture to its slot, pushes the
/// constants and draws a fullscreen triangle. Used for blits such as
/// the depth-encode pass.
pub struct FullscreenAction {
    shader: Arc<dyn Shader>,
    push_constants: Vec<u8>,
}

impl FullscreenAction {
    pub fn new(shader: Arc<dyn Shader>, push_constants: Vec<u8>) -> Self {
        Self { shader, push_constants }
    }

    /// Get the bound shader
    pub fn shader(&self) -> &Arc<dyn Shader> {
        &self.shader
    }
}

impl PassAction for FullscreenAction {
    fn execute(&mut self, cmd: &mut dyn CommandList, inputs: &[Arc<dyn Texture>]) -> Result<()> {
        cmd.bind_shader(&self.shader)?;
        for (slot, texture) in inputs.iter().enumerate() {
            cmd.bind_texture(slot as u32, texture)?;
        }
        if !self.push_constants.is_empty() {
            cmd.push_constants(&self.push_constants)?;
        }
        cmd.draw_fullscreen()
    }
}

/// Custom pass action (closure-based)
///
/// Executes a user-provided closure for full control over
/// draw command recording. Used for scene rendering passes.
pub struct CustomAction {
    callback: Box<dyn FnMut(&mut dyn CommandList, &[Arc<dyn Texture>]) -> Result<()> + Send + Sync>,
}

impl CustomAction {
    pub fn new<F>(callback: F) -> Self
    where
        F: FnMut(&mut dyn CommandList, &[Arc<dyn Texture>]) -> Result<()> + Send + Sync + 'static,
    {
        Self { callback: Box::new(callback) }
    }
}

impl PassAction for CustomAction {
    fn execute(&mut self, cmd: &mut dyn CommandList, inputs: &[Arc<dyn Texture>]) -> Result<()> {
        (self.callback)(cmd, inputs)
    }
}
