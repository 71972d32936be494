/// Per-request capture targets.
///
/// A capture renders into a full-color working buffer with its own depth
/// attachment, then encodes depth into a single-channel buffer. All three
/// textures are R×R and belong to one request only.

use std::sync::Arc;
use crate::error::Result;
use crate::renderer::{Renderer, Texture, TextureDesc, TextureFormat, TextureUsage};

/// Graph target name of the color working buffer
pub const SCENE_COLOR_TARGET: &str = "scene_color";
/// Graph target name of the depth attachment
pub const SCENE_DEPTH_TARGET: &str = "scene_depth";
/// Graph target name of the encoded single-channel buffer
pub const ENCODED_DEPTH_TARGET: &str = "encoded_depth";

/// Textures owned by one capture request
pub struct CaptureTargets {
    /// RGBA8 working buffer
    pub color: Arc<dyn Texture>,
    /// D32 depth attachment of the working buffer
    pub depth: Arc<dyn Texture>,
    /// R8 encoded depth (the readback source)
    pub encoded: Arc<dyn Texture>,
}

impl CaptureTargets {
    /// Allocate the three R×R textures
    ///
    /// On failure, textures allocated so far are dropped before returning.
    pub fn allocate(renderer: &mut dyn Renderer, resolution: u32) -> Result<Self> {
        let desc = |label: &str, format: TextureFormat, usage: TextureUsage| TextureDesc {
            label: label.to_string(),
            width: resolution,
            height: resolution,
            format,
            usage,
        };

        let color = renderer.create_texture(desc(
            SCENE_COLOR_TARGET,
            TextureFormat::R8G8B8A8_UNORM,
            TextureUsage::RenderTarget,
        ))?;
        let depth = renderer.create_texture(desc(
            SCENE_DEPTH_TARGET,
            TextureFormat::D32_FLOAT,
            TextureUsage::DepthStencil,
        ))?;
        let encoded = renderer.create_texture(desc(
            ENCODED_DEPTH_TARGET,
            TextureFormat::R8_UNORM,
            TextureUsage::SampledAndRenderTarget,
        ))?;

        Ok(Self { color, depth, encoded })
    }

    /// Tile resolution of the targets
    pub fn resolution(&self) -> u32 {
        self.encoded.info().width
    }

    /// Release every texture held by the request
    pub fn release(self) {
        drop(self);
    }
}

#[cfg(test)]
#[path = "render_target_tests.rs"]
mod tests;
