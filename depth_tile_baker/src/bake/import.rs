/// Tile import.
///
/// After a tile is written it is re-imported with fixed settings
/// (single channel taken from red, CPU-readable, uncompressed) and the
/// resulting handle is what the region keeps. `TileImporter` is the seam
/// for asset databases; `MetaFileImporter` records the settings in a JSON
/// sidecar next to the PNG.

use std::fs;
use std::path::{Path, PathBuf};
use serde::{Deserialize, Serialize};
use crate::error::{Error, Result};
use crate::baker_bail;

/// Texture import type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TextureType {
    Default,
    SingleChannel,
}

/// Source component of a single-channel texture
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ChannelComponent {
    Alpha,
    Red,
}

/// Texture compression
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Compression {
    None,
    Compressed,
}

/// Settings applied when importing a texture
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImportSettings {
    pub texture_type: TextureType,
    pub readable: bool,
    pub single_channel_component: ChannelComponent,
    pub compression: Compression,
}

impl ImportSettings {
    /// Fixed settings of every depth tile
    pub fn depth_tile() -> Self {
        Self {
            texture_type: TextureType::SingleChannel,
            readable: true,
            single_channel_component: ChannelComponent::Red,
            compression: Compression::None,
        }
    }
}

/// Handle of an imported depth tile
#[derive(Debug, Clone, PartialEq)]
pub struct TileHandle {
    pub path: PathBuf,
    pub width: u32,
    pub height: u32,
    pub settings: ImportSettings,
}

/// Re-imports a freshly written tile
pub trait TileImporter: Send + Sync {
    /// Apply `settings` to the file at `path` and return its handle
    fn reimport(&self, path: &Path, settings: &ImportSettings) -> Result<TileHandle>;
}

/// Content of a `.meta` sidecar
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
struct MetaFile {
    version: u32,
    importer: String,
    width: u32,
    height: u32,
    settings: ImportSettings,
}

const META_VERSION: u32 = 1;
const META_IMPORTER: &str = "TextureImporter";

/// Importer writing `{file}.meta` JSON sidecars
#[derive(Debug, Clone, Copy, Default)]
pub struct MetaFileImporter;

impl MetaFileImporter {
    pub fn new() -> Self {
        Self
    }

    /// Sidecar path of `path` (`Bay_DepthTile.png` → `Bay_DepthTile.png.meta`)
    pub fn meta_path(path: &Path) -> PathBuf {
        let mut meta = path.as_os_str().to_os_string();
        meta.push(".meta");
        PathBuf::from(meta)
    }

    /// Read back the settings recorded for `path`
    pub fn read_settings(path: &Path) -> Result<ImportSettings> {
        let meta_path = Self::meta_path(path);
        let text = fs::read_to_string(&meta_path)
            .map_err(|e| Error::filesystem(&meta_path, &e))?;
        match serde_json::from_str::<MetaFile>(&text) {
            Ok(meta) => Ok(meta.settings),
            Err(e) => baker_bail!(ResourceLoad, "baker::Import",
                "Invalid meta file {}: {}", meta_path.display(), e),
        }
    }
}

impl TileImporter for MetaFileImporter {
    fn reimport(&self, path: &Path, settings: &ImportSettings) -> Result<TileHandle> {
        let (width, height) = match image::image_dimensions(path) {
            Ok(dimensions) => dimensions,
            Err(e) => baker_bail!(Encode, "baker::Import",
                "Cannot read tile header {}: {}", path.display(), e),
        };

        let meta = MetaFile {
            version: META_VERSION,
            importer: META_IMPORTER.to_string(),
            width,
            height,
            settings: *settings,
        };
        let json = match serde_json::to_string_pretty(&meta) {
            Ok(json) => json,
            Err(e) => baker_bail!(Encode, "baker::Import", "Cannot serialize meta: {}", e),
        };

        let meta_path = Self::meta_path(path);
        fs::write(&meta_path, json).map_err(|e| {
            crate::baker_error!("baker::Import", "Cannot write {}: {}", meta_path.display(), e);
            Error::filesystem(&meta_path, &e)
        })?;

        crate::baker_debug!("baker::Import", "Imported {} ({}x{})", path.display(), width, height);

        Ok(TileHandle {
            path: path.to_path_buf(),
            width,
            height,
            settings: *settings,
        })
    }
}

#[cfg(test)]
#[path = "import_tests.rs"]
mod tests;
