/// Tile encoder.
///
/// Packs a delivered single-channel buffer into an 8-bit grayscale image
/// and serializes it to PNG. Pure: the same pixels always give the same
/// bytes.

use std::path::{Path, PathBuf};
use image::{ImageBuffer, ImageEncoder, Luma, ExtendedColorType};
use image::codecs::png::PngEncoder;
use crate::error::Result;
use crate::baker_bail;
use crate::renderer::{ReadbackResult, TextureFormat};
use super::writer::tile_path;

/// Encoded depth tile, ready to be written
#[derive(Debug, Clone, PartialEq)]
pub struct TileAsset {
    /// Region identity the tile belongs to
    pub identity: String,
    /// Destination file
    pub file_path: PathBuf,
    /// PNG file content
    pub png_bytes: Vec<u8>,
    /// Width in pixels
    pub width: u32,
    /// Height in pixels
    pub height: u32,
}

/// Encoding stage
pub struct TileEncoder;

impl TileEncoder {
    /// Encode `width`×`height` grayscale pixels to PNG
    ///
    /// # Errors
    ///
    /// Returns `Encode` if the pixel count does not match or the PNG
    /// encoder fails.
    pub fn encode_png(width: u32, height: u32, pixels: Vec<u8>) -> Result<Vec<u8>> {
        let len = pixels.len();
        let Some(image) = ImageBuffer::<Luma<u8>, Vec<u8>>::from_raw(width, height, pixels) else {
            baker_bail!(Encode, "baker::Encoder",
                "{} bytes do not form a {}x{} single-channel image", len, width, height);
        };

        let mut bytes = Vec::new();
        let encoder = PngEncoder::new(&mut bytes);
        if let Err(e) = encoder.write_image(image.as_raw(), width, height, ExtendedColorType::L8) {
            baker_bail!(Encode, "baker::Encoder", "PNG encoding failed: {}", e);
        }
        Ok(bytes)
    }

    /// Encode a delivered readback as the tile of region `identity`
    ///
    /// # Errors
    ///
    /// Returns `Encode` if the readback is not single-channel 8-bit or
    /// its size does not match its dimensions.
    pub fn encode(identity: &str, storage_dir: &Path, readback: ReadbackResult) -> Result<TileAsset> {
        if readback.format != TextureFormat::R8_UNORM {
            baker_bail!(Encode, "baker::Encoder",
                "Expected a single-channel 8-bit readback, got {:?}", readback.format);
        }
        let (width, height) = (readback.width, readback.height);
        let png_bytes = Self::encode_png(width, height, readback.data)?;

        crate::baker_debug!("baker::Encoder", "Encoded {}x{} tile for '{}' ({} bytes)",
            width, height, identity, png_bytes.len());

        Ok(TileAsset {
            identity: identity.to_string(),
            file_path: tile_path(storage_dir, identity),
            png_bytes,
            width,
            height,
        })
    }
}

#[cfg(test)]
#[path = "encoder_tests.rs"]
mod tests;
