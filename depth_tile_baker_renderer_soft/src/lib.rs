/*!
# Depth Tile Baker - Software Renderer Backend

CPU implementation of the depth tile baker rendering API.

This crate provides a software backend that implements the depth_tile_baker
traits without any GPU: an edge-function rasterizer with a LESS depth test,
the depth-encode program as a fullscreen blit, and readbacks delivered after
a configurable number of `poll()` ticks.
*/

mod soft_renderer;
mod soft_texture;
mod soft_shader;
mod soft_command_list;
mod raster;
mod debug;

pub use soft_renderer::SoftRenderer;
pub use soft_texture::Texture as SoftTexture;
pub use soft_shader::Shader as SoftShader;
pub use soft_command_list::CommandList as SoftCommandList;

// Re-export rasterizer statistics
pub use debug::{RasterStats, get_raster_stats, reset_raster_stats, print_raster_stats_report};
