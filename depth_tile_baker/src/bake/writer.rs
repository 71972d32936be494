/// Tile writer.
///
/// Persists an encoded tile at the path derived from its region identity,
/// re-imports it with the depth tile settings and records the imported
/// handle on the region. An existing tile of the same identity is
/// overwritten in place.

use std::fs;
use std::path::{Path, PathBuf};
use crate::error::{Error, Result};
use super::encoder::TileAsset;
use super::import::{ImportSettings, MetaFileImporter, TileHandle, TileImporter};
use super::region::SharedRegion;

/// Tile file of region `name` in `storage_dir`: `{storage_dir}/{name}_DepthTile.png`
pub fn tile_path(storage_dir: &Path, name: &str) -> PathBuf {
    storage_dir.join(format!("{}_DepthTile.png", name))
}

/// Writing stage
pub struct TileWriter {
    importer: Box<dyn TileImporter>,
}

impl TileWriter {
    pub fn new(importer: Box<dyn TileImporter>) -> Self {
        Self { importer }
    }

    /// Write `asset`, re-import it and record the handle on `region`
    ///
    /// # Errors
    ///
    /// Returns `Filesystem` if the directory or the file cannot be
    /// written; the region is left untouched on any error.
    pub fn write(&self, asset: &TileAsset, region: &SharedRegion) -> Result<TileHandle> {
        if let Some(dir) = asset.file_path.parent().filter(|d| !d.as_os_str().is_empty()) {
            fs::create_dir_all(dir).map_err(|e| {
                crate::baker_error!("baker::Writer", "Cannot create {}: {}", dir.display(), e);
                Error::filesystem(dir, &e)
            })?;
        }

        fs::write(&asset.file_path, &asset.png_bytes).map_err(|e| {
            crate::baker_error!("baker::Writer", "Cannot write {}: {}", asset.file_path.display(), e);
            Error::filesystem(&asset.file_path, &e)
        })?;

        let handle = self.importer.reimport(&asset.file_path, &ImportSettings::depth_tile())?;

        let mut region = region.lock()
            .map_err(|_| crate::baker_err!("baker::Writer", "Region lock poisoned"))?;
        region.set_depth_tile(handle.clone());

        crate::baker_info!("baker::Writer", "Wrote depth tile for '{}' at {}",
            asset.identity, asset.file_path.display());
        Ok(handle)
    }
}

impl Default for TileWriter {
    fn default() -> Self {
        Self::new(Box::new(MetaFileImporter::new()))
    }
}

#[cfg(test)]
#[path = "writer_tests.rs"]
mod tests;
