/// Bake regions.
///
/// A region is a named square area of a scene that owns one depth tile.
/// Its tiles are stored in a directory derived from the scene path, and
/// the imported tile handle is recorded on it after each bake.

use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};
use glam::Vec3;
use crate::error::Result;
use crate::scene::LayerMask;
use super::import::TileHandle;
use super::request::CaptureRequest;

/// Region shared between the caller and the readback continuation
pub type SharedRegion = Arc<Mutex<Region>>;

/// Capture settings of a region
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RegionSettings {
    /// World-space center of the footprint
    pub center: Vec3,
    /// Edge length of the footprint
    pub footprint_size: f32,
    /// Tile width and height in pixels
    pub tile_resolution: u32,
    /// Layers drawn into the tile
    pub culling_mask: LayerMask,
    /// Depth recorded below the center
    pub max_range: f32,
    /// Camera height above the center
    pub height_offset: f32,
}

impl Default for RegionSettings {
    fn default() -> Self {
        Self {
            center: Vec3::ZERO,
            footprint_size: 250.0,
            tile_resolution: 1024,
            culling_mask: LayerMask::ALL,
            max_range: 40.0,
            height_offset: 50.0,
        }
    }
}

impl RegionSettings {
    /// Validated capture request for these settings
    pub fn capture_request(&self) -> Result<CaptureRequest> {
        CaptureRequest::new(
            self.tile_resolution,
            self.footprint_size,
            self.center,
            self.height_offset,
            self.max_range,
            self.culling_mask,
        )
    }
}

/// Storage directory of the tiles of a scene: its path without the final extension
///
/// `Scenes/Harbor.scene` → `Scenes/Harbor`
pub fn storage_dir_for_scene(scene_path: &Path) -> PathBuf {
    scene_path.with_extension("")
}

/// Whether `name` can name a tile file inside a storage directory
///
/// Rejects empty names, path separators and `..`.
pub fn is_valid_region_name(name: &str) -> bool {
    !name.is_empty()
        && !name.contains(['/', '\\', '\0'])
        && !name.contains("..")
}

/// Named region owning a depth tile
#[derive(Debug, Clone)]
pub struct Region {
    name: String,
    storage_dir: PathBuf,
    settings: RegionSettings,
    depth_tile: Option<TileHandle>,
}

impl Region {
    pub fn new(name: &str, storage_dir: &Path, settings: RegionSettings) -> Self {
        Self {
            name: name.to_string(),
            storage_dir: storage_dir.to_path_buf(),
            settings,
            depth_tile: None,
        }
    }

    /// Region storing its tiles next to `scene_path`
    pub fn for_scene(name: &str, scene_path: &Path, settings: RegionSettings) -> Self {
        Self::new(name, &storage_dir_for_scene(scene_path), settings)
    }

    /// Wrap in a `SharedRegion`
    pub fn shared(self) -> SharedRegion {
        Arc::new(Mutex::new(self))
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn storage_dir(&self) -> &Path {
        &self.storage_dir
    }

    pub fn settings(&self) -> &RegionSettings {
        &self.settings
    }

    pub fn settings_mut(&mut self) -> &mut RegionSettings {
        &mut self.settings
    }

    /// Handle of the last imported tile
    pub fn depth_tile(&self) -> Option<&TileHandle> {
        self.depth_tile.as_ref()
    }

    pub fn set_depth_tile(&mut self, handle: TileHandle) {
        self.depth_tile = Some(handle);
    }
}

#[cfg(test)]
#[path = "region_tests.rs"]
mod tests;
