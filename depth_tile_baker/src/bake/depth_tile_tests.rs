use glam::Vec3;
use super::*;
use crate::bake::TileEncoder;

fn gradient() -> DepthTile {
    // 2x2: left column 0, right column 255
    DepthTile::from_pixels(2, 2, vec![0, 255, 0, 255]).unwrap()
}

#[test]
fn test_from_pixels_validates_size() {
    assert!(DepthTile::from_pixels(2, 2, vec![0; 3]).is_err());
    assert!(DepthTile::from_pixels(0, 2, Vec::new()).is_err());
}

#[test]
fn test_sample_pixel_centers() {
    let tile = gradient();
    assert_eq!(tile.sample(0.25, 0.25), 0.0);
    assert_eq!(tile.sample(0.75, 0.25), 1.0);
    assert!((tile.sample(0.5, 0.5) - 0.5).abs() < 1e-6);
}

#[test]
fn test_sample_clamps_to_edges() {
    let tile = gradient();
    assert_eq!(tile.sample(-1.0, 0.5), 0.0);
    assert_eq!(tile.sample(2.0, 0.5), 1.0);
}

#[test]
fn test_sample_world_maps_footprint() {
    let tile = gradient();
    let settings = RegionSettings {
        center: Vec3::new(100.0, 0.0, 0.0),
        footprint_size: 10.0,
        ..RegionSettings::default()
    };

    assert_eq!(tile.sample_world(&settings, 95.0, 0.0), Some(0.0));
    assert_eq!(tile.sample_world(&settings, 105.0, 0.0), Some(1.0));
    assert_eq!(tile.sample_world(&settings, 90.0, 0.0), None);
    assert_eq!(tile.sample_world(&settings, 100.0, 6.0), None);
}

#[test]
fn test_surface_height_of_flat_tile() {
    // 51 / 255 * (200 + 50) = 50 below the camera
    let tile = DepthTile::from_pixels(4, 4, vec![51; 16]).unwrap();
    let settings = RegionSettings {
        footprint_size: 100.0,
        max_range: 200.0,
        height_offset: 50.0,
        ..RegionSettings::default()
    };
    let height = tile.surface_height(&settings, 0.0, 0.0).unwrap();
    assert!(height.abs() < 1e-4);
}

#[test]
fn test_load_png() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("Bay_DepthTile.png");
    let pixels: Vec<u8> = (0..16).collect();
    std::fs::write(&path, TileEncoder::encode_png(4, 4, pixels.clone()).unwrap()).unwrap();

    let tile = DepthTile::load(&path).unwrap();
    assert_eq!((tile.width(), tile.height()), (4, 4));
    assert_eq!(tile.data(), pixels.as_slice());
    assert_eq!(tile.value(3, 1), 7);
}

#[test]
fn test_load_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    assert!(DepthTile::load(&dir.path().join("missing.png")).is_err());
}

#[test]
fn test_load_color_png_reads_red_channel() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("Painted_DepthTile.png");
    let mut image = image::RgbImage::from_pixel(2, 2, image::Rgb([200, 0, 0]));
    image.put_pixel(1, 0, image::Rgb([30, 255, 255]));
    image.save(&path).unwrap();

    let tile = DepthTile::load(&path).unwrap();
    assert_eq!(tile.value(0, 0), 200);
    assert_eq!(tile.value(1, 0), 30);
    assert_eq!(tile.data(), &[200, 30, 200, 200]);
}
