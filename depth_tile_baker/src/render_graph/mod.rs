//! Render graph module
//!
//! A render graph is a directed acyclic graph (DAG) describing how a
//! capture is rendered: which passes execute, which targets they
//! read/write, and in what order.

mod render_graph;
mod render_pass;
mod render_target;
mod pass_action;

pub use render_graph::RenderGraph;
pub use render_pass::GraphPass;
pub use render_target::{GraphTarget, TargetOps};
pub use pass_action::{PassAction, FullscreenAction, CustomAction};
