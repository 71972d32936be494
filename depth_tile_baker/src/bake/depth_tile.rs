/// Baked depth tile sampling.
///
/// Loads an imported tile back into memory and samples it with bilinear
/// filtering, either in texture space or at a world XZ position inside
/// the region footprint.

use std::path::Path;
use image::DynamicImage;
use crate::error::Result;
use crate::baker_bail;
use super::import::TileHandle;
use super::region::RegionSettings;

/// Decoded single-channel depth tile
#[derive(Debug, Clone, PartialEq)]
pub struct DepthTile {
    width: u32,
    height: u32,
    data: Vec<u8>,
}

impl DepthTile {
    /// Build a tile from raw row-major pixels
    pub fn from_pixels(width: u32, height: u32, data: Vec<u8>) -> Result<Self> {
        if width == 0 || height == 0 {
            baker_bail!(InvalidResource, "baker::DepthTile", "Empty depth tile ({}x{})", width, height);
        }
        if data.len() != width as usize * height as usize {
            baker_bail!(InvalidResource, "baker::DepthTile",
                "{} bytes do not form a {}x{} depth tile", data.len(), width, height);
        }
        Ok(Self { width, height, data })
    }

    /// Decode the PNG at `path`, keeping only its red (first) channel
    pub fn load(path: &Path) -> Result<Self> {
        let image = match image::open(path) {
            Ok(image) => image,
            Err(e) => baker_bail!(Encode, "baker::DepthTile",
                "Cannot decode depth tile {}: {}", path.display(), e),
        };
        let (width, height) = (image.width(), image.height());
        let data = match image {
            DynamicImage::ImageLuma8(luma) => luma.into_raw(),
            other => other.to_rgb8().pixels().map(|p| p[0]).collect(),
        };
        Self::from_pixels(width, height, data)
    }

    /// Decode the tile behind an imported handle
    pub fn from_handle(handle: &TileHandle) -> Result<Self> {
        Self::load(&handle.path)
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Raw encoded value of pixel (x, y), clamped to the tile
    pub fn value(&self, x: u32, y: u32) -> u8 {
        let x = x.min(self.width - 1) as usize;
        let y = y.min(self.height - 1) as usize;
        self.data[y * self.width as usize + x]
    }

    /// Normalized depth at texture coordinates (u, v), bilinear
    ///
    /// Pixel centers sit at `(i + 0.5) / size`; coordinates are clamped
    /// to the edge.
    pub fn sample(&self, u: f32, v: f32) -> f32 {
        let fx = (u * self.width as f32 - 0.5).clamp(0.0, (self.width - 1) as f32);
        let fy = (v * self.height as f32 - 0.5).clamp(0.0, (self.height - 1) as f32);
        let (x0, y0) = (fx.floor() as u32, fy.floor() as u32);
        let (tx, ty) = (fx - x0 as f32, fy - y0 as f32);

        let texel = |x: u32, y: u32| self.value(x, y) as f32 / 255.0;
        let top = texel(x0, y0) * (1.0 - tx) + texel(x0 + 1, y0) * tx;
        let bottom = texel(x0, y0 + 1) * (1.0 - tx) + texel(x0 + 1, y0 + 1) * tx;
        top * (1.0 - ty) + bottom * ty
    }

    /// Normalized depth at world position (x, z), or `None` outside the footprint
    ///
    /// Columns follow +X and the first row is the -Z edge.
    pub fn sample_world(&self, settings: &RegionSettings, x: f32, z: f32) -> Option<f32> {
        let size = settings.footprint_size;
        let half = size * 0.5;
        let u = (x - (settings.center.x - half)) / size;
        let v = (z - (settings.center.z - half)) / size;
        if !(0.0..=1.0).contains(&u) || !(0.0..=1.0).contains(&v) {
            return None;
        }
        Some(self.sample(u, v))
    }

    /// World height of the captured surface at (x, z)
    pub fn surface_height(&self, settings: &RegionSettings, x: f32, z: f32) -> Option<f32> {
        let far = settings.max_range + settings.height_offset;
        self.sample_world(settings, x, z)
            .map(|depth| settings.center.y + settings.height_offset - depth * far)
    }
}

#[cfg(test)]
#[path = "depth_tile_tests.rs"]
mod tests;
