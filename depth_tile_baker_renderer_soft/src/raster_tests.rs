use super::*;

fn target(width: u32, height: u32, depth: &mut [f32]) -> RasterTarget<'_> {
    RasterTarget { width, height, depth, color: None }
}

#[test]
fn test_to_window_maps_ndc_corners() {
    let viewport = Viewport::full(100, 50);
    let top_left = to_window(Vec4::new(-1.0, 1.0, 0.0, 1.0), &viewport).unwrap();
    assert_eq!(top_left, Vec3::new(0.0, 0.0, 0.0));
    let bottom_right = to_window(Vec4::new(1.0, -1.0, 1.0, 1.0), &viewport).unwrap();
    assert_eq!(bottom_right, Vec3::new(100.0, 50.0, 1.0));
}

#[test]
fn test_to_window_rejects_behind_eye() {
    assert!(to_window(Vec4::new(0.0, 0.0, 0.5, 0.0), &Viewport::full(4, 4)).is_none());
    assert!(to_window(Vec4::new(0.0, 0.0, 0.5, -1.0), &Viewport::full(4, 4)).is_none());
}

#[test]
fn test_triangle_covers_pixel_centers_both_windings() {
    // Lower-left half of a 4x4 target
    let tri = [Vec3::new(0.0, 0.0, 0.5), Vec3::new(0.0, 4.0, 0.5), Vec3::new(4.0, 4.0, 0.5)];
    let reversed = [tri[0], tri[2], tri[1]];

    for v in [tri, reversed] {
        let mut depth = vec![1.0f32; 16];
        let counts = target(4, 4, &mut depth).draw_triangle(v);
        assert_eq!(counts.triangles, 1);
        // Centers with x <= y: 4 + 3 + 2 + 1 = 10 (diagonal included)
        assert_eq!(counts.fragments_passed, 10);
        assert_eq!(depth[0], 0.5); // (0, 0) on the diagonal
        assert_eq!(depth[3], 1.0); // (3, 0) outside
        assert_eq!(depth[12], 0.5); // (0, 3) inside
    }
}

#[test]
fn test_depth_test_less() {
    let quad = |z: f32| {
        [Vec3::new(0.0, 0.0, z), Vec3::new(2.0, 0.0, z), Vec3::new(0.0, 2.0, z)]
    };
    let mut depth = vec![1.0f32; 4];
    let mut target = target(2, 2, &mut depth);

    assert_eq!(target.draw_triangle(quad(0.6)).fragments_passed, 3);
    assert_eq!(target.draw_triangle(quad(0.8)).fragments_passed, 0);
    assert_eq!(target.draw_triangle(quad(0.6)).fragments_passed, 0);
    assert_eq!(target.draw_triangle(quad(0.2)).fragments_passed, 3);
    assert_eq!(depth[0], 0.2);
}

#[test]
fn test_fragments_outside_depth_range_discarded() {
    let tri = |z: f32| [Vec3::new(0.0, 0.0, z), Vec3::new(4.0, 0.0, z), Vec3::new(0.0, 4.0, z)];
    let mut depth = vec![1.0f32; 16];
    let mut target = target(4, 4, &mut depth);

    let behind = target.draw_triangle(tri(1.5));
    assert_eq!(behind.fragments_passed, 0);
    assert!(behind.fragments_rejected > 0);
    assert_eq!(target.draw_triangle(tri(-0.1)).fragments_passed, 0);
}

#[test]
fn test_degenerate_and_offscreen_triangles() {
    let mut depth = vec![1.0f32; 16];
    let mut target = target(4, 4, &mut depth);

    let line = [Vec3::new(0.0, 0.0, 0.5), Vec3::new(2.0, 2.0, 0.5), Vec3::new(4.0, 4.0, 0.5)];
    assert_eq!(target.draw_triangle(line).triangles, 0);

    let offscreen = [Vec3::new(10.0, 10.0, 0.5), Vec3::new(20.0, 10.0, 0.5), Vec3::new(10.0, 20.0, 0.5)];
    assert_eq!(target.draw_triangle(offscreen).fragments_passed, 0);
}

#[test]
fn test_color_written_for_passing_fragments() {
    let mut depth = vec![1.0f32; 4];
    let mut color = vec![0u8; 16];
    let texel = [255u8, 128, 0, 255];
    let mut target = RasterTarget { width: 2, height: 2, depth: &mut depth, color: Some((color.as_mut_slice(), &texel[..])) };

    target.draw_triangle([Vec3::new(0.0, 0.0, 0.5), Vec3::new(2.0, 0.0, 0.5), Vec3::new(0.0, 2.0, 0.5)]);

    assert_eq!(&color[0..4], &texel);
    assert_eq!(&color[12..16], &[0, 0, 0, 0]); // (1, 1) outside
}

#[test]
fn test_blit_depth_encode() {
    let params = DepthEncodeParams::orthographic(0.01, 250.0);
    // Eye depth 50 in an orthographic [near, far] range
    let depth_50 = (50.0 - 0.01) / (250.0 - 0.01);
    let src = vec![depth_50, 1.0, 0.0, depth_50];
    let mut dst = vec![0u8; 4];

    blit_depth_encode(&src, (2, 2), &mut dst, (2, 2), 1, &params);

    assert_eq!(dst, vec![51, 255, 0, 51]);
}

#[test]
fn test_blit_depth_encode_resamples_and_fills_channels() {
    let params = DepthEncodeParams::orthographic(0.01, 100.0);
    let src = vec![1.0];
    let mut dst = vec![0u8; 2 * 2 * 4];

    blit_depth_encode(&src, (1, 1), &mut dst, (2, 2), 4, &params);

    assert!(dst.iter().all(|&b| b == 255));
}
