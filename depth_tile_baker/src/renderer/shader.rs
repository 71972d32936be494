/// Shader trait, shader descriptor and the depth-encode parameter block

use bytemuck::{Pod, Zeroable};

/// Built-in shader programs a backend must provide
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShaderProgram {
    /// Fullscreen pass: reads the depth attachment bound at slot 0 and writes
    /// linear depth, normalized by the far plane, into an R8 color target.
    /// Parameters: `DepthEncodeParams` as push constants.
    DepthEncode,
}

/// Descriptor for creating a shader
#[derive(Debug, Clone)]
pub struct ShaderDesc {
    /// Asset name used for lookup (e.g. "Utility/SceneDepth")
    pub name: String,
    /// Program to instantiate
    pub program: ShaderProgram,
}

/// Shader resource trait
pub trait Shader: Send + Sync {
    /// Asset name of the shader
    fn name(&self) -> &str;

    /// Program implemented by this shader
    fn program(&self) -> ShaderProgram;
}

/// Push constant block of the depth-encode program.
///
/// The depth buffer comes from an orthographic projection, so depth is
/// linear in eye distance over [near, far]. Depth range is [0, 1] (zero at
/// the near plane).
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable)]
pub struct DepthEncodeParams {
    pub near: f32,
    pub far: f32,
    pub _padding: [u32; 2],
}

impl DepthEncodeParams {
    pub fn orthographic(near: f32, far: f32) -> Self {
        Self { near, far, _padding: [0; 2] }
    }

    /// Eye-space distance for a depth buffer value
    pub fn linear_eye_depth(&self, depth: f32) -> f32 {
        self.near + depth.clamp(0.0, 1.0) * (self.far - self.near)
    }

    /// Encoded 8-bit value: eye distance over far plane, rounded to 0..=255
    pub fn encode(&self, depth: f32) -> u8 {
        if self.far <= 0.0 {
            return u8::MAX;
        }
        let normalized = (self.linear_eye_depth(depth) / self.far).clamp(0.0, 1.0);
        (normalized * 255.0).round() as u8
    }
}

#[cfg(test)]
#[path = "shader_tests.rs"]
mod tests;
