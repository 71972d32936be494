/// Renderer module - backend-agnostic rendering API

pub mod renderer;
pub mod texture;
pub mod shader;
pub mod command_list;
pub mod readback;

#[cfg(test)]
pub mod mock_renderer;

pub use renderer::*;
pub use texture::*;
pub use shader::*;
pub use command_list::*;
pub use readback::*;
