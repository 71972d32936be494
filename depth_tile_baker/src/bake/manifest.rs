//! Bake manifest.
//!
//! JSON description of a scene and the regions to bake over it:
//!
//! ```json
//! {
//!   "scene": {
//!     "path": "Scenes/Harbor.scene",
//!     "objects": [
//!       { "name": "seabed", "shape": { "type": "plane", "size": 400.0 } },
//!       { "name": "buoy", "shape": { "type": "box", "half_extents": [1, 1, 1] },
//!         "translation": [10, -5, 0], "layer": 4 }
//!     ]
//!   },
//!   "regions": [
//!     { "name": "Bay", "center": [0, 0, 0], "size": 100, "resolution": 512 }
//!   ]
//! }
//! ```

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use glam::{Mat4, Quat, Vec3};
use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};
use crate::error::{Error, Result};
use crate::baker_bail;
use crate::resource::Mesh;
use crate::scene::{LayerMask, Scene};
use super::region::{is_valid_region_name, storage_dir_for_scene, Region, RegionSettings};

/// Manifest root
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BakeManifest {
    pub scene: SceneDesc,
    #[serde(default)]
    pub regions: Vec<RegionDesc>,
}

/// Scene section
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SceneDesc {
    /// Scene asset path; tiles go next to it
    pub path: PathBuf,
    #[serde(default)]
    pub objects: Vec<ObjectDesc>,
}

/// Scene object
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ObjectDesc {
    pub name: String,
    pub shape: ShapeDesc,
    #[serde(default)]
    pub translation: [f32; 3],
    #[serde(default = "unit_scale")]
    pub scale: [f32; 3],
    #[serde(default)]
    pub layer: u32,
}

/// Object geometry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ShapeDesc {
    /// Square in the XZ plane
    Plane { size: f32 },
    /// Axis-aligned box
    Box { half_extents: [f32; 3] },
    /// Raw triangle list
    Mesh { positions: Vec<[f32; 3]>, indices: Vec<u32> },
}

/// Region section
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegionDesc {
    pub name: String,
    #[serde(default)]
    pub center: [f32; 3],
    #[serde(default = "default_size")]
    pub size: f32,
    #[serde(default = "default_resolution")]
    pub resolution: u32,
    #[serde(default = "default_culling_mask")]
    pub culling_mask: u32,
    #[serde(default = "default_max_range")]
    pub max_range: f32,
    #[serde(default = "default_height_offset")]
    pub height_offset: f32,
}

fn unit_scale() -> [f32; 3] {
    [1.0; 3]
}

fn default_size() -> f32 {
    RegionSettings::default().footprint_size
}

fn default_resolution() -> u32 {
    RegionSettings::default().tile_resolution
}

fn default_culling_mask() -> u32 {
    RegionSettings::default().culling_mask.bits()
}

fn default_max_range() -> f32 {
    RegionSettings::default().max_range
}

fn default_height_offset() -> f32 {
    RegionSettings::default().height_offset
}

impl ShapeDesc {
    fn build(&self, name: &str) -> Result<Mesh> {
        match self {
            ShapeDesc::Plane { size } => Mesh::plane(name, *size),
            ShapeDesc::Box { half_extents } => Mesh::cuboid(name, Vec3::from_array(*half_extents)),
            ShapeDesc::Mesh { positions, indices } => Mesh::new(
                name,
                positions.iter().copied().map(Vec3::from_array).collect(),
                indices.clone(),
            ),
        }
    }
}

impl ObjectDesc {
    /// World matrix from translation and scale
    pub fn world_matrix(&self) -> Mat4 {
        Mat4::from_scale_rotation_translation(
            Vec3::from_array(self.scale),
            Quat::IDENTITY,
            Vec3::from_array(self.translation),
        )
    }
}

impl RegionDesc {
    pub fn settings(&self) -> RegionSettings {
        RegionSettings {
            center: Vec3::from_array(self.center),
            footprint_size: self.size,
            tile_resolution: self.resolution,
            culling_mask: LayerMask::from_bits_retain(self.culling_mask),
            max_range: self.max_range,
            height_offset: self.height_offset,
        }
    }
}

impl BakeManifest {
    /// Parse a manifest from JSON text
    pub fn from_json(text: &str) -> Result<Self> {
        match serde_json::from_str(text) {
            Ok(manifest) => Ok(manifest),
            Err(e) => baker_bail!(InvalidRequest, "baker::Manifest", "Invalid manifest: {}", e),
        }
    }

    /// Read and parse the manifest at `path`
    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path).map_err(|e| {
            crate::baker_error!("baker::Manifest", "Cannot read {}: {}", path.display(), e);
            Error::filesystem(path, &e)
        })?;
        let manifest = Self::from_json(&text)?;
        crate::baker_debug!("baker::Manifest", "Loaded {} ({} objects, {} regions)",
            path.display(), manifest.scene.objects.len(), manifest.regions.len());
        Ok(manifest)
    }

    /// Build the scene, sharing one mesh per object
    pub fn build_scene(&self) -> Result<Scene> {
        let mut scene = Scene::new();
        for object in &self.scene.objects {
            let mesh = Arc::new(object.shape.build(&object.name)?);
            scene.add_object(&object.name, mesh, object.world_matrix(), object.layer)?;
        }
        Ok(scene)
    }

    /// Build the regions, storing tiles next to the scene path resolved against `base_dir`
    pub fn build_regions(&self, base_dir: &Path) -> Result<Vec<Region>> {
        let storage_dir = storage_dir_for_scene(&base_dir.join(&self.scene.path));
        let mut seen = FxHashSet::default();
        let mut regions = Vec::with_capacity(self.regions.len());

        for desc in &self.regions {
            if desc.name.is_empty() {
                baker_bail!(InvalidRequest, "baker::Manifest", "Region with an empty name");
            }
            if !is_valid_region_name(&desc.name) {
                baker_bail!(InvalidRequest, "baker::Manifest",
                    "Region name '{}' must not contain path separators or '..'", desc.name);
            }
            if !seen.insert(desc.name.as_str()) {
                baker_bail!(InvalidRequest, "baker::Manifest", "Duplicate region '{}'", desc.name);
            }
            regions.push(Region::new(&desc.name, &storage_dir, desc.settings()));
        }
        Ok(regions)
    }

    /// Region names, in manifest order
    pub fn region_names(&self) -> Vec<&str> {
        self.regions.iter().map(|r| r.name.as_str()).collect()
    }
}

#[cfg(test)]
#[path = "manifest_tests.rs"]
mod tests;
