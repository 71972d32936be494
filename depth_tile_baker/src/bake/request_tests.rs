use super::*;
use crate::error::Error;

fn request(resolution: u32, size: f32, offset: f32, range: f32) -> Result<CaptureRequest> {
    CaptureRequest::new(resolution, size, Vec3::ZERO, offset, range, LayerMask::ALL)
}

#[test]
fn test_valid_request() {
    let req = CaptureRequest::new(512, 100.0, Vec3::new(1.0, 2.0, 3.0), 50.0, 200.0, LayerMask::WATER)
        .unwrap();

    assert_eq!(req.tile_resolution(), 512);
    assert_eq!(req.footprint_size(), 100.0);
    assert_eq!(req.center(), Vec3::new(1.0, 2.0, 3.0));
    assert_eq!(req.culling_mask(), LayerMask::WATER);
    assert_eq!(req.near_plane(), 0.01);
    assert_eq!(req.far_plane(), 250.0);
    assert_eq!(req.eye(), Vec3::new(1.0, 52.0, 3.0));
}

#[test]
fn test_zero_resolution_rejected() {
    assert!(matches!(request(0, 100.0, 50.0, 200.0), Err(Error::InvalidRequest(_))));
}

#[test]
fn test_non_positive_footprint_rejected() {
    assert!(matches!(request(64, 0.0, 50.0, 200.0), Err(Error::InvalidRequest(_))));
    assert!(matches!(request(64, -5.0, 50.0, 200.0), Err(Error::InvalidRequest(_))));
    assert!(matches!(request(64, f32::INFINITY, 50.0, 200.0), Err(Error::InvalidRequest(_))));
}

#[test]
fn test_non_finite_values_rejected() {
    assert!(request(64, 10.0, f32::NAN, 200.0).is_err());
    assert!(request(64, 10.0, 50.0, f32::NAN).is_err());
    let bad_center = CaptureRequest::new(64, 10.0, Vec3::new(f32::NAN, 0.0, 0.0), 1.0, 1.0, LayerMask::ALL);
    assert!(bad_center.is_err());
}

#[test]
fn test_far_plane_must_exceed_near_plane() {
    assert!(request(64, 10.0, 0.0, 0.0).is_err());
    assert!(request(64, 10.0, -10.0, 5.0).is_err());
    assert!(request(64, 10.0, 0.0, 0.5).is_ok());
}

#[test]
fn test_with_culling_mask() {
    let req = request(64, 10.0, 5.0, 5.0).unwrap();
    let masked = req.with_culling_mask(LayerMask::DEFAULT);
    assert_eq!(masked.culling_mask(), LayerMask::DEFAULT);
    assert_eq!(masked.tile_resolution(), req.tile_resolution());
}
