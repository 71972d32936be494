/// Texture trait, texture descriptor, and texture info

use std::any::Any;

/// Texture format
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[allow(non_camel_case_types)]
pub enum TextureFormat {
    /// 8-bit RGBA color (the ARGB32 working buffer)
    R8G8B8A8_UNORM,
    /// Single 8-bit channel (encoded depth tiles)
    R8_UNORM,
    /// 32-bit float depth attachment
    D32_FLOAT,
}

impl TextureFormat {
    /// Bytes used by one texel
    pub fn bytes_per_pixel(&self) -> usize {
        match self {
            TextureFormat::R8G8B8A8_UNORM => 4,
            TextureFormat::R8_UNORM => 1,
            TextureFormat::D32_FLOAT => 4,
        }
    }

    /// True for depth formats
    pub fn is_depth(&self) -> bool {
        matches!(self, TextureFormat::D32_FLOAT)
    }
}

/// Texture usage flags
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextureUsage {
    /// Texture can be sampled in shaders
    Sampled,
    /// Texture can be used as render target
    RenderTarget,
    /// Texture can be used for both
    SampledAndRenderTarget,
    /// Texture can be used as depth attachment (and sampled by the depth-encode pass)
    DepthStencil,
}

// ===== TEXTURE DESC =====

/// Descriptor for creating a texture
#[derive(Debug, Clone)]
pub struct TextureDesc {
    /// Debug label
    pub label: String,
    /// Width in pixels
    pub width: u32,
    /// Height in pixels
    pub height: u32,
    /// Pixel format
    pub format: TextureFormat,
    /// Usage flags
    pub usage: TextureUsage,
}

// ===== TEXTURE INFO =====

/// Read-only properties of a created texture.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextureInfo {
    /// Debug label
    pub label: String,
    /// Width in pixels
    pub width: u32,
    /// Height in pixels
    pub height: u32,
    /// Pixel format
    pub format: TextureFormat,
    /// Usage flags
    pub usage: TextureUsage,
}

impl TextureInfo {
    /// Number of texels
    pub fn texel_count(&self) -> usize {
        self.width as usize * self.height as usize
    }

    /// Size of a tightly packed copy of the texture, in bytes
    pub fn byte_size(&self) -> usize {
        self.texel_count() * self.format.bytes_per_pixel()
    }

    /// Whether the texture can be bound as a render pass attachment
    pub fn is_attachment(&self) -> bool {
        matches!(
            self.usage,
            TextureUsage::RenderTarget
                | TextureUsage::SampledAndRenderTarget
                | TextureUsage::DepthStencil
        )
    }
}

impl From<&TextureDesc> for TextureInfo {
    fn from(desc: &TextureDesc) -> Self {
        Self {
            label: desc.label.clone(),
            width: desc.width,
            height: desc.height,
            format: desc.format,
            usage: desc.usage,
        }
    }
}

// ===== TEXTURE TRAIT =====

/// Texture resource trait
///
/// Implemented by backend-specific texture types.
/// The texture is released when the last reference is dropped.
pub trait Texture: Send + Sync {
    /// Get the read-only properties of this texture
    fn info(&self) -> &TextureInfo;

    /// Backend downcast hook
    fn as_any(&self) -> &dyn Any;
}

#[cfg(test)]
#[path = "texture_tests.rs"]
mod tests;
