/// Shader - software implementation of the Shader trait
///
/// Software shaders are built-in programs selected by `ShaderProgram`;
/// the shader object only carries its name.

use depth_tile_baker::baker::render::{Shader as RendererShader, ShaderDesc, ShaderProgram};

/// Software shader implementation
#[derive(Debug, Clone)]
pub struct Shader {
    name: String,
    program: ShaderProgram,
}

impl Shader {
    pub(crate) fn new(desc: ShaderDesc) -> Self {
        Self { name: desc.name, program: desc.program }
    }
}

impl RendererShader for Shader {
    fn name(&self) -> &str {
        &self.name
    }

    fn program(&self) -> ShaderProgram {
        self.program
    }
}
