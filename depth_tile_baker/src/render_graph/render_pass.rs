/// Render pass node in a render graph.
///
/// High-level description of a rendering step (scene depth pass,
/// depth-encode pass). This is a DAG node: not to be confused with
/// `render::RenderPassDesc` which is the low-level attachment
/// configuration recorded into a command list.
///
/// Each pass declares which targets it reads from (inputs) and
/// writes to (outputs), using target indices within the parent
/// `RenderGraph`.

use super::pass_action::PassAction;

pub struct GraphPass {
    /// Pass name (unique within the graph)
    name: String,
    /// Target indices this pass reads from
    inputs: Vec<usize>,
    /// Target indices this pass writes to
    outputs: Vec<usize>,
    /// Commands recorded inside the pass
    action: Box<dyn PassAction>,
}

impl GraphPass {
    pub(crate) fn new(
        name: &str,
        inputs: Vec<usize>,
        outputs: Vec<usize>,
        action: Box<dyn PassAction>,
    ) -> Self {
        Self {
            name: name.to_string(),
            inputs,
            outputs,
            action,
        }
    }

    /// Get the pass name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get the target indices this pass reads from
    pub fn inputs(&self) -> &[usize] {
        &self.inputs
    }

    /// Get the target indices this pass writes to
    pub fn outputs(&self) -> &[usize] {
        &self.outputs
    }

    /// Get the pass action
    pub(crate) fn action_mut(&mut self) -> &mut dyn PassAction {
        self.action.as_mut()
    }
}
