/*!
# Depth Tile Baker

Core traits and types for baking top-down depth tiles of scene regions.

This crate provides the backend-agnostic rendering API the bake pipeline is
written against, using trait-based dynamic polymorphism. Backend
implementations (the CPU software rasterizer, GPU backends) provide concrete
types implementing these traits and are registered with the `Engine`.

## Architecture

- **Renderer**: Factory trait for textures, shaders and command lists, plus
  asynchronous readback
- **Texture**: Texture resource trait
- **Shader**: Shader program trait
- **CommandList**: Command recording trait
- **RenderGraph**: Orders capture passes by the targets they read and write
- **DepthBaker**: OffscreenCapture → DepthEncodePass → AsyncReadback →
  TileEncoder → TileWriter, per region

Backend implementations provide concrete types that implement these traits.
*/

// Internal modules
mod error;
mod engine;
pub mod log;
pub mod renderer;
pub mod resource;
pub mod scene;
pub mod camera;
pub mod render_graph;
pub mod bake;

// Main baker namespace module
pub mod baker {
    // Error types
    pub use crate::error::{Error, Result};

    // Engine singleton
    pub use crate::engine::Engine;

    // Renderer factory trait
    pub use crate::renderer::Renderer;

    // Logging sub-module (types only, NOT macros)
    pub mod log {
        pub use crate::log::{Logger, LogEntry, LogSeverity, DefaultLogger};
    }

    // Render sub-module with all rendering types
    pub mod render {
        pub use crate::renderer::*;
    }

    // Resource sub-module
    pub mod resource {
        pub use crate::resource::*;
    }

    // Scene sub-module
    pub mod scene {
        pub use crate::scene::*;
    }

    // Camera sub-module
    pub mod camera {
        pub use crate::camera::*;
    }

    // Render graph sub-module
    pub mod render_graph {
        pub use crate::render_graph::*;
    }

    // Bake pipeline sub-module
    pub mod bake {
        pub use crate::bake::*;
    }
}

// Re-export math library at crate root
pub use glam;
