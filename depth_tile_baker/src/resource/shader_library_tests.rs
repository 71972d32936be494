/// Tests for ShaderLibrary
///
/// These tests validate shader registration, lookup, replacement,
/// removal and naming.

use super::*;
use crate::renderer::mock_renderer::MockShader;

fn shader(name: &str) -> Arc<dyn Shader> {
    Arc::new(MockShader::depth_encode(name))
}

#[test]
fn test_shader_library_new() {
    let library = ShaderLibrary::new();
    assert_eq!(library.count(), 0);
    assert!(library.names().is_empty());
}

#[test]
fn test_register_and_lookup() {
    let mut library = ShaderLibrary::new();
    assert!(library.register(shader("Utility/SceneDepth")).is_none());

    let found = library.shader("Utility/SceneDepth").unwrap();
    assert_eq!(found.name(), "Utility/SceneDepth");
    assert_eq!(library.count(), 1);
}

#[test]
fn test_lookup_not_found() {
    let library = ShaderLibrary::new();
    assert!(library.shader("Utility/SceneDepth").is_none());
}

#[test]
fn test_register_same_name_replaces() {
    let mut library = ShaderLibrary::new();
    let first = shader("Utility/SceneDepth");
    library.register(Arc::clone(&first));

    let previous = library.register(shader("Utility/SceneDepth")).unwrap();
    assert!(Arc::ptr_eq(&previous, &first));
    assert_eq!(library.count(), 1);
}

#[test]
fn test_remove() {
    let mut library = ShaderLibrary::new();
    library.register(shader("a"));
    library.register(shader("b"));

    assert!(library.remove("a").is_some());
    assert!(library.remove("a").is_none());
    assert!(library.shader("b").is_some());
    assert_eq!(library.count(), 1);
}

#[test]
fn test_names_and_clear() {
    let mut library = ShaderLibrary::new();
    library.register(shader("a"));
    library.register(shader("b"));

    let names = library.names();
    assert_eq!(names.len(), 2);
    assert!(names.contains(&"a"));
    assert!(names.contains(&"b"));

    library.clear();
    assert_eq!(library.count(), 0);
}
