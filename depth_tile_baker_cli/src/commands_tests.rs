use super::*;
use std::fs;
use std::sync::{Arc, Mutex};
use depth_tile_baker::baker::bake::{DepthTile, RegionSettings};
use depth_tile_baker_renderer_soft::SoftRenderer;

const MANIFEST: &str = r#"{
    "scene": {
        "path": "Scenes/Harbor.scene",
        "objects": [
            { "name": "seabed", "shape": { "type": "plane", "size": 400.0 } }
        ]
    },
    "regions": [
        { "name": "Bay", "size": 100, "resolution": 16, "max_range": 200, "height_offset": 50 },
        { "name": "Pier", "center": [20, 0, 0], "size": 50, "resolution": 8 }
    ]
}"#;

fn write_manifest(dir: &Path) -> PathBuf {
    let path = dir.join("harbor.json");
    fs::write(&path, MANIFEST).unwrap();
    path
}

fn soft_baker() -> DepthBaker {
    DepthBaker::with_default_shaders(Arc::new(Mutex::new(SoftRenderer::default()))).unwrap()
}

fn regions() -> Vec<Region> {
    ["Bay", "Pier", "Dock"].iter()
        .map(|name| Region::new(name, Path::new("tiles"), RegionSettings::default()))
        .collect()
}

fn names(selected: &[SharedRegion]) -> Vec<String> {
    selected.iter().map(|r| r.lock().unwrap().name().to_string()).collect()
}

// ============================================================================
// BASE DIRECTORY
// ============================================================================

#[test]
fn test_base_dir_defaults_to_manifest_directory() {
    assert_eq!(base_dir(Path::new("assets/harbor.json"), None), PathBuf::from("assets"));
    assert_eq!(base_dir(Path::new("harbor.json"), None), PathBuf::from("."));
    assert_eq!(base_dir(Path::new("assets/harbor.json"), Some(Path::new("out"))), PathBuf::from("out"));
}

// ============================================================================
// REGION SELECTION
// ============================================================================

#[test]
fn test_select_all_keeps_manifest_order() {
    let selected = select_regions(regions(), &Selection::All).unwrap();
    assert_eq!(names(&selected), vec!["Bay", "Pier", "Dock"]);
}

#[test]
fn test_select_named_keeps_selection_order() {
    let selection = Selection::Named(vec!["Dock".to_string(), "Bay".to_string()]);
    let selected = select_regions(regions(), &selection).unwrap();
    assert_eq!(names(&selected), vec!["Dock", "Bay"]);
}

#[test]
fn test_select_unknown_or_repeated_region_fails() {
    let unknown = Selection::Named(vec!["Lagoon".to_string()]);
    assert!(matches!(select_regions(regions(), &unknown), Err(Error::InvalidRequest(_))));

    let repeated = Selection::Named(vec!["Bay".to_string(), "Bay".to_string()]);
    assert!(matches!(select_regions(regions(), &repeated), Err(Error::InvalidRequest(_))));

    let empty = Selection::Named(Vec::new());
    assert!(matches!(select_regions(regions(), &empty), Err(Error::InvalidRequest(_))));
}

// ============================================================================
// BAKE
// ============================================================================

#[test]
fn test_bake_named_region_writes_tile_next_to_scene() {
    let dir = tempfile::tempdir().unwrap();
    let manifest = write_manifest(dir.path());
    let mut baker = soft_baker();

    let report = bake_with(&mut baker, &manifest, None, &Selection::Named(vec!["Bay".to_string()])).unwrap();

    assert!(report.is_success());
    assert_eq!(report.succeeded(), vec!["Bay"]);
    let path = dir.path().join("Scenes/Harbor/Bay_DepthTile.png");
    let tile = DepthTile::load(&path).unwrap();
    assert_eq!((tile.width(), tile.height()), (16, 16));
    // Plane 50 units below the camera, 250 units of depth range
    assert!(tile.data().iter().all(|&v| v == 51));
    assert!(!dir.path().join("Scenes/Harbor/Pier_DepthTile.png").exists());
}

#[test]
fn test_bake_all_with_root_override() {
    let dir = tempfile::tempdir().unwrap();
    let manifest = write_manifest(dir.path());
    let root = dir.path().join("out");
    let mut baker = soft_baker();

    let report = bake_with(&mut baker, &manifest, Some(&root), &Selection::All).unwrap();

    assert_eq!(report.succeeded(), vec!["Bay", "Pier"]);
    assert!(root.join("Scenes/Harbor/Bay_DepthTile.png").exists());
    assert!(root.join("Scenes/Harbor/Pier_DepthTile.png").exists());
}

#[test]
fn test_bake_missing_manifest_fails() {
    let dir = tempfile::tempdir().unwrap();
    let mut baker = soft_baker();
    let result = bake_with(&mut baker, &dir.path().join("missing.json"), None, &Selection::All);
    assert!(matches!(result, Err(Error::Filesystem { .. })));
}

// ============================================================================
// LIST
// ============================================================================

#[test]
fn test_list_reports_settings_and_bake_state() {
    let dir = tempfile::tempdir().unwrap();
    let manifest = write_manifest(dir.path());

    let before = list(&manifest).unwrap();
    assert_eq!(before.len(), 2);
    assert!(before[0].starts_with("Bay: center (0, 0, 0), size 100, resolution 16"));
    assert!(before[0].ends_with("(not baked)"));
    assert!(before[1].contains("range 40, offset 50"));

    let mut baker = soft_baker();
    bake_with(&mut baker, &manifest, None, &Selection::Named(vec!["Bay".to_string()])).unwrap();

    let after = list(&manifest).unwrap();
    assert!(after[0].ends_with("(baked)"));
    assert!(after[1].ends_with("(not baked)"));
}
