//! Resource module
//!
//! Provides the host-side resources shared by the bake pipeline:
//! triangle meshes and the named shader library.

pub mod mesh;
pub mod shader_library;

pub use mesh::Mesh;
pub use shader_library::ShaderLibrary;
