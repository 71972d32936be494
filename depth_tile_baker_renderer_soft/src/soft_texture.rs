/// Texture - software implementation of the Texture trait
///
/// Color and single-channel textures store bytes, depth textures store
/// one f32 per texel. Storage sits behind a Mutex so command execution
/// can write through a shared `Arc<dyn Texture>`.

use std::any::Any;
use std::sync::{Arc, Mutex, MutexGuard};
use depth_tile_baker::baker::{Result, Error};
use depth_tile_baker::baker::render::{
    Texture as RendererTexture, TextureDesc, TextureFormat, TextureInfo,
};
use depth_tile_baker::baker_bail;

/// Texel storage of a software texture
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum TexelStorage {
    /// Unorm bytes, `bytes_per_pixel` per texel
    Bytes(Vec<u8>),
    /// Depth values in [0, 1]
    Depth(Vec<f32>),
}

/// Software texture implementation
#[derive(Debug)]
pub struct Texture {
    /// Read-only texture properties
    info: TextureInfo,
    /// Texel data
    storage: Mutex<TexelStorage>,
}

impl Texture {
    /// Create a zero-filled texture (depth textures start at 1.0)
    pub(crate) fn new(desc: &TextureDesc) -> Self {
        let info = TextureInfo::from(desc);
        let storage = if info.format.is_depth() {
            TexelStorage::Depth(vec![1.0; info.texel_count()])
        } else {
            TexelStorage::Bytes(vec![0; info.byte_size()])
        };
        Self { info, storage: Mutex::new(storage) }
    }

    /// Downcast a renderer texture to a software texture
    pub(crate) fn downcast(texture: &Arc<dyn RendererTexture>) -> Result<&Texture> {
        match texture.as_any().downcast_ref::<Texture>() {
            Some(texture) => Ok(texture),
            None => baker_bail!(InvalidResource, "baker::soft",
                "Texture '{}' was not created by the software renderer", texture.info().label),
        }
    }

    pub(crate) fn lock(&self) -> Result<MutexGuard<'_, TexelStorage>> {
        self.storage.lock()
            .map_err(|_| Error::BackendError(format!("Texture '{}' storage poisoned", self.info.label)))
    }

    /// Copy of the texel data as bytes (depth as little-endian f32)
    pub fn snapshot_bytes(&self) -> Result<Vec<u8>> {
        Ok(match &*self.lock()? {
            TexelStorage::Bytes(bytes) => bytes.clone(),
            TexelStorage::Depth(depth) => bytemuck::cast_slice::<f32, u8>(depth).to_vec(),
        })
    }

    /// Copy of the depth values, `None` for non-depth textures
    pub fn snapshot_depth(&self) -> Result<Option<Vec<f32>>> {
        Ok(match &*self.lock()? {
            TexelStorage::Depth(depth) => Some(depth.clone()),
            TexelStorage::Bytes(_) => None,
        })
    }

    /// Fill every texel with `color` (converted to the texture format)
    pub(crate) fn clear_color(&self, color: [f32; 4]) -> Result<()> {
        let texel = encode_color(self.info.format, color);
        match &mut *self.lock()? {
            TexelStorage::Bytes(bytes) => {
                for chunk in bytes.chunks_exact_mut(texel.len()) {
                    chunk.copy_from_slice(&texel);
                }
                Ok(())
            }
            TexelStorage::Depth(_) => baker_bail!(InvalidResource, "baker::soft",
                "Color clear of depth texture '{}'", self.info.label),
        }
    }

    /// Fill every texel with `depth`
    pub(crate) fn clear_depth(&self, depth: f32) -> Result<()> {
        match &mut *self.lock()? {
            TexelStorage::Depth(values) => {
                values.fill(depth);
                Ok(())
            }
            TexelStorage::Bytes(_) => baker_bail!(InvalidResource, "baker::soft",
                "Depth clear of color texture '{}'", self.info.label),
        }
    }
}

impl RendererTexture for Texture {
    fn info(&self) -> &TextureInfo {
        &self.info
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

/// Bytes of one texel of `format` holding `color`
pub(crate) fn encode_color(format: TextureFormat, color: [f32; 4]) -> Vec<u8> {
    let unorm = |c: f32| (c.clamp(0.0, 1.0) * 255.0).round() as u8;
    match format {
        TextureFormat::R8G8B8A8_UNORM => color.iter().map(|&c| unorm(c)).collect(),
        TextureFormat::R8_UNORM => vec![unorm(color[0])],
        TextureFormat::D32_FLOAT => color[0].to_le_bytes().to_vec(),
    }
}
