/// Render target edge in a render graph.
///
/// High-level description of a rendering surface that connects
/// passes in the DAG. References a renderer texture by name.
///
/// A render target can be written by at most one pass (single writer)
/// and read by multiple passes (multiple readers).
///
/// Each target carries its own load/clear configuration via `TargetOps`,
/// auto-detected from the texture format (color vs depth).

use std::sync::Arc;
use crate::renderer::{LoadOp, Texture};

/// Per-target load/clear configuration.
///
/// Auto-detected from the `TextureFormat` when the target is created.
/// Each variant provides defaults that can be overridden via
/// `RenderGraph::set_target_ops()`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TargetOps {
    /// Configuration for color attachments
    Color {
        /// Clear color (RGBA), default: opaque black
        clear_color: [f32; 4],
        /// Load operation, default: Clear
        load_op: LoadOp,
    },
    /// Configuration for depth attachments
    Depth {
        /// Depth clear value, default: 1.0 (far plane)
        depth_clear: f32,
        /// Load operation, default: Clear
        load_op: LoadOp,
    },
}

impl TargetOps {
    /// Default ops for a color target
    pub fn default_color() -> Self {
        Self::Color {
            clear_color: [0.0, 0.0, 0.0, 1.0],
            load_op: LoadOp::Clear,
        }
    }

    /// Default ops for a depth target
    pub fn default_depth() -> Self {
        Self::Depth {
            depth_clear: 1.0,
            load_op: LoadOp::Clear,
        }
    }
}

pub struct GraphTarget {
    /// Target name (unique within the graph)
    name: String,
    /// The renderer texture this target references
    texture: Arc<dyn Texture>,
    /// Pass index that writes to this target (at most one)
    written_by: Option<usize>,
    /// Per-target load/clear configuration
    ops: TargetOps,
}

impl GraphTarget {
    pub(crate) fn new(name: &str, texture: Arc<dyn Texture>) -> Self {
        let ops = if texture.info().format.is_depth() {
            TargetOps::default_depth()
        } else {
            TargetOps::default_color()
        };

        Self {
            name: name.to_string(),
            texture,
            written_by: None,
            ops,
        }
    }

    /// Get the target name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get the texture this target references
    pub fn texture(&self) -> &Arc<dyn Texture> {
        &self.texture
    }

    /// Whether this target is a depth attachment
    pub fn is_depth(&self) -> bool {
        self.texture.info().format.is_depth()
    }

    /// Get the pass index that writes to this target
    pub fn written_by(&self) -> Option<usize> {
        self.written_by
    }

    /// Get the per-target ops configuration
    pub fn ops(&self) -> &TargetOps {
        &self.ops
    }

    /// Get a mutable reference to the per-target ops configuration
    pub(crate) fn ops_mut(&mut self) -> &mut TargetOps {
        &mut self.ops
    }

    /// Set the writer pass index
    pub(crate) fn set_written_by(&mut self, pass_id: usize) {
        self.written_by = Some(pass_id);
    }
}
