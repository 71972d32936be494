//! Command implementations, kept apart from argument parsing

use std::path::{Path, PathBuf};

use depth_tile_baker::baker::bake::{tile_path, BakeManifest, BakeReport, DepthBaker, Region, SharedRegion};
use depth_tile_baker::baker::{Error, Result};

/// Regions picked on the command line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selection {
    All,
    Named(Vec<String>),
}

/// Directory the manifest's scene path is resolved against
pub fn base_dir(manifest_path: &Path, root: Option<&Path>) -> PathBuf {
    match root {
        Some(root) => root.to_path_buf(),
        None => match manifest_path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
            _ => PathBuf::from("."),
        },
    }
}

/// Keep the selected regions, in selection order for named regions
pub fn select_regions(regions: Vec<Region>, selection: &Selection) -> Result<Vec<SharedRegion>> {
    match selection {
        Selection::All => Ok(regions.into_iter().map(Region::shared).collect()),
        Selection::Named(names) => {
            if names.is_empty() {
                return Err(Error::InvalidRequest("No region selected".to_string()));
            }
            let mut available: Vec<Option<Region>> = regions.into_iter().map(Some).collect();
            let mut selected = Vec::with_capacity(names.len());
            for name in names {
                let slot = available.iter_mut()
                    .find(|r| r.as_ref().is_some_and(|r| r.name() == name.as_str()));
                match slot.and_then(Option::take) {
                    Some(region) => selected.push(region.shared()),
                    None => {
                        return Err(Error::InvalidRequest(format!(
                            "Unknown or repeated region '{}'", name
                        )));
                    }
                }
            }
            Ok(selected)
        }
    }
}

/// Load a manifest and bake the selected regions with the engine's renderer
pub fn bake(manifest_path: &Path, root: Option<&Path>, selection: &Selection) -> Result<BakeReport> {
    let mut baker = DepthBaker::from_engine()?;
    bake_with(&mut baker, manifest_path, root, selection)
}

/// Load a manifest and bake the selected regions with `baker`
pub fn bake_with(
    baker: &mut DepthBaker,
    manifest_path: &Path,
    root: Option<&Path>,
    selection: &Selection,
) -> Result<BakeReport> {
    let manifest = BakeManifest::load(manifest_path)?;
    let scene = manifest.build_scene()?;
    let regions = manifest.build_regions(&base_dir(manifest_path, root))?;
    let selected = select_regions(regions, selection)?;
    Ok(baker.bake_all(&scene, &selected))
}

/// One summary line per region of the manifest
pub fn list(manifest_path: &Path) -> Result<Vec<String>> {
    let manifest = BakeManifest::load(manifest_path)?;
    let regions = manifest.build_regions(&base_dir(manifest_path, None))?;

    Ok(regions.iter().map(|region| {
        let settings = region.settings();
        let path = tile_path(region.storage_dir(), region.name());
        let state = if path.exists() { "baked" } else { "not baked" };
        format!(
            "{}: center ({}, {}, {}), size {}, resolution {}, mask {:#010x}, range {}, offset {} -> {} ({})",
            region.name(),
            settings.center.x, settings.center.y, settings.center.z,
            settings.footprint_size,
            settings.tile_resolution,
            settings.culling_mask.bits(),
            settings.max_range,
            settings.height_offset,
            path.display(),
            state,
        )
    }).collect())
}

#[cfg(test)]
#[path = "commands_tests.rs"]
mod tests;
