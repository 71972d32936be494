/// Named shader storage.
///
/// Stores created shaders by asset name (e.g. "Utility/SceneDepth") so
/// that pipeline stages resolve them explicitly instead of searching an
/// asset database.

use std::sync::Arc;
use rustc_hash::FxHashMap;
use crate::renderer::Shader;

/// Shader library, keyed by shader name
#[derive(Default)]
pub struct ShaderLibrary {
    shaders: FxHashMap<String, Arc<dyn Shader>>,
}

impl ShaderLibrary {
    /// Create an empty shader library
    pub fn new() -> Self {
        Self {
            shaders: FxHashMap::default(),
        }
    }

    /// Register a shader under its own name
    ///
    /// Returns the shader previously registered under that name, if any.
    pub fn register(&mut self, shader: Arc<dyn Shader>) -> Option<Arc<dyn Shader>> {
        self.shaders.insert(shader.name().to_string(), shader)
    }

    /// Get a shader by name
    pub fn shader(&self, name: &str) -> Option<&Arc<dyn Shader>> {
        self.shaders.get(name)
    }

    /// Remove a shader by name
    pub fn remove(&mut self, name: &str) -> Option<Arc<dyn Shader>> {
        self.shaders.remove(name)
    }

    /// Get the number of shaders
    pub fn count(&self) -> usize {
        self.shaders.len()
    }

    /// Get all shader names
    pub fn names(&self) -> Vec<&str> {
        self.shaders.keys().map(|k| k.as_str()).collect()
    }

    /// Remove all shaders
    pub fn clear(&mut self) {
        self.shaders.clear();
    }
}

#[cfg(test)]
#[path = "shader_library_tests.rs"]
mod tests;
