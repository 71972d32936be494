use std::sync::Arc;
use glam::Mat4;
use crate::renderer::Viewport;
use crate::resource::Mesh;
use crate::scene::Scene;
use super::*;

fn create_test_camera() -> Camera {
    Camera::new(Mat4::IDENTITY, Mat4::IDENTITY, Viewport::full(1024, 1024))
}

// ============================================================================
// Construction (via pub(crate) new)
// ============================================================================

#[test]
fn test_render_view_new_empty() {
    let view = RenderView::new(create_test_camera(), Vec::new());

    assert_eq!(view.visible_count(), 0);
    assert!(view.visible_objects().is_empty());
}

#[test]
fn test_render_view_with_keys() {
    let mut scene = Scene::new();
    let mesh = Arc::new(Mesh::plane("ground", 1.0).unwrap());
    let a = scene.add_object("a", Arc::clone(&mesh), Mat4::IDENTITY, 0).unwrap();
    let b = scene.add_object("b", mesh, Mat4::IDENTITY, 0).unwrap();

    let view = RenderView::new(create_test_camera(), vec![a, b]);

    assert_eq!(view.visible_count(), 2);
    assert_eq!(view.visible_objects(), &[a, b]);
}

// ============================================================================
// Accessors
// ============================================================================

#[test]
fn test_render_view_camera_snapshot() {
    let camera = create_test_camera();
    let view = RenderView::new(camera.clone(), Vec::new());

    assert_eq!(*view.camera().view_matrix(), Mat4::IDENTITY);
    assert_eq!(view.camera().viewport().width, 1024.0);
}

// ============================================================================
// Clone
// ============================================================================

#[test]
fn test_render_view_clone() {
    let view = RenderView::new(create_test_camera(), Vec::new());
    let cloned = view.clone();

    assert_eq!(cloned.visible_count(), view.visible_count());
    assert_eq!(*cloned.camera().view_matrix(), *view.camera().view_matrix());
}
