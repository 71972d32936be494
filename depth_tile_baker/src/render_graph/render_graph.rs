/// Render graph: a DAG describing how a capture is rendered.
///
/// A render graph defines the render passes and the named targets that
/// connect them. Passes declare the targets they read and write; the
/// graph is compiled into an order in which every writer runs before
/// its readers, then recorded into a single command list.

use std::sync::Arc;
use rustc_hash::FxHashMap;
use crate::error::Result;
use crate::baker_bail;
use crate::renderer::{
    CommandList, ColorAttachment, DepthAttachment, RenderPassDesc, Texture, Viewport,
};
use super::pass_action::PassAction;
use super::render_pass::GraphPass;
use super::render_target::{GraphTarget, TargetOps};

pub struct RenderGraph {
    /// Graph name (for logs)
    name: String,
    /// Targets, indexed by target id
    targets: Vec<GraphTarget>,
    /// Target name → target id
    target_ids: FxHashMap<String, usize>,
    /// Passes, indexed by pass id (insertion order)
    passes: Vec<GraphPass>,
    /// Pass name → pass id
    pass_ids: FxHashMap<String, usize>,
    /// Compiled execution order (None until compiled or after a change)
    order: Option<Vec<usize>>,
}

impl RenderGraph {
    /// Create an empty render graph
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            targets: Vec::new(),
            target_ids: FxHashMap::default(),
            passes: Vec::new(),
            pass_ids: FxHashMap::default(),
            order: None,
        }
    }

    /// Get the graph name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Add a named target referencing a texture
    ///
    /// # Errors
    ///
    /// Returns an error if a target with the same name already exists or
    /// the texture cannot be used as an attachment.
    pub fn add_target(&mut self, name: &str, texture: Arc<dyn Texture>) -> Result<usize> {
        if self.target_ids.contains_key(name) {
            baker_bail!("baker::RenderGraph", "Target '{}' already exists in graph '{}'", name, self.name);
        }
        if !texture.info().is_attachment() {
            baker_bail!(InvalidResource, "baker::RenderGraph",
                "Texture '{}' of target '{}' is not an attachment", texture.info().label, name);
        }

        let id = self.targets.len();
        self.targets.push(GraphTarget::new(name, texture));
        self.target_ids.insert(name.to_string(), id);
        Ok(id)
    }

    /// Add a pass reading `inputs` and writing `outputs` (target names)
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - A pass with the same name already exists
    /// - A target name is unknown
    /// - The pass has no output, or more than one color or depth output
    /// - An output target already has a writer
    pub fn add_pass(
        &mut self,
        name: &str,
        inputs: &[&str],
        outputs: &[&str],
        action: Box<dyn PassAction>,
    ) -> Result<usize> {
        if self.pass_ids.contains_key(name) {
            baker_bail!("baker::RenderGraph", "Pass '{}' already exists in graph '{}'", name, self.name);
        }
        if outputs.is_empty() {
            baker_bail!("baker::RenderGraph", "Pass '{}' has no output target", name);
        }

        let input_ids = inputs.iter()
            .map(|target| self.target_id(target))
            .collect::<Result<Vec<_>>>()?;
        let output_ids = outputs.iter()
            .map(|target| self.target_id(target))
            .collect::<Result<Vec<_>>>()?;

        let depth_outputs = output_ids.iter().filter(|&&id| self.targets[id].is_depth()).count();
        if depth_outputs > 1 || output_ids.len() - depth_outputs > 1 {
            baker_bail!("baker::RenderGraph",
                "Pass '{}' writes more than one color or depth target", name);
        }

        for &id in &output_ids {
            if let Some(writer) = self.targets[id].written_by() {
                baker_bail!("baker::RenderGraph",
                    "Target '{}' is already written by pass '{}'",
                    self.targets[id].name(), self.passes[writer].name());
            }
        }

        let pass_id = self.passes.len();
        for &id in &output_ids {
            self.targets[id].set_written_by(pass_id);
        }
        self.passes.push(GraphPass::new(name, input_ids, output_ids, action));
        self.pass_ids.insert(name.to_string(), pass_id);
        self.order = None;
        Ok(pass_id)
    }

    /// Override the load/clear configuration of a target
    pub fn set_target_ops(&mut self, name: &str, ops: TargetOps) -> Result<()> {
        let id = self.target_id(name)?;
        let target = &mut self.targets[id];
        let compatible = matches!(
            (target.is_depth(), &ops),
            (true, TargetOps::Depth { .. }) | (false, TargetOps::Color { .. })
        );
        if !compatible {
            baker_bail!("baker::RenderGraph", "Ops kind does not match target '{}'", name);
        }
        *target.ops_mut() = ops;
        Ok(())
    }

    /// Get a target by name
    pub fn target(&self, name: &str) -> Option<&GraphTarget> {
        self.target_ids.get(name).map(|&id| &self.targets[id])
    }

    /// Get a pass by name
    pub fn pass(&self, name: &str) -> Option<&GraphPass> {
        self.pass_ids.get(name).map(|&id| &self.passes[id])
    }

    /// Get the number of passes
    pub fn pass_count(&self) -> usize {
        self.passes.len()
    }

    /// Get the number of targets
    pub fn target_count(&self) -> usize {
        self.targets.len()
    }

    /// Compute the execution order
    ///
    /// Kahn topological sort: a pass becomes ready once the writers of all
    /// its inputs are scheduled. Among ready passes, the earliest added
    /// runs first.
    ///
    /// # Errors
    ///
    /// Returns an error if an input target has no writer, or if the
    /// passes form a cycle.
    pub fn compile(&mut self) -> Result<&[usize]> {
        let pass_count = self.passes.len();
        let mut dependents: Vec<Vec<usize>> = vec![Vec::new(); pass_count];
        let mut pending: Vec<usize> = vec![0; pass_count];

        for (pass_id, pass) in self.passes.iter().enumerate() {
            for &input in pass.inputs() {
                let target = &self.targets[input];
                let Some(writer) = target.written_by() else {
                    baker_bail!("baker::RenderGraph",
                        "Pass '{}' reads target '{}' which no pass writes",
                        pass.name(), target.name());
                };
                if writer == pass_id {
                    baker_bail!("baker::RenderGraph",
                        "Pass '{}' reads its own output '{}'", pass.name(), target.name());
                }
                dependents[writer].push(pass_id);
                pending[pass_id] += 1;
            }
        }

        let mut scheduled = vec![false; pass_count];
        let mut order = Vec::with_capacity(pass_count);
        while order.len() < pass_count {
            let Some(next) = (0..pass_count).find(|&id| !scheduled[id] && pending[id] == 0) else {
                let stuck: Vec<&str> = (0..pass_count)
                    .filter(|&id| !scheduled[id])
                    .map(|id| self.passes[id].name())
                    .collect();
                baker_bail!("baker::RenderGraph",
                    "Cycle detected in graph '{}' between passes {:?}", self.name, stuck);
            };
            scheduled[next] = true;
            order.push(next);
            for &dependent in &dependents[next] {
                pending[dependent] -= 1;
            }
        }

        crate::baker_trace!("baker::RenderGraph", "Graph '{}' order: {:?}",
            self.name, order.iter().map(|&id| self.passes[id].name()).collect::<Vec<_>>());

        Ok(self.order.insert(order).as_slice())
    }

    /// Pass names in compiled order (None if not compiled)
    pub fn execution_order(&self) -> Option<Vec<&str>> {
        self.order.as_ref()
            .map(|order| order.iter().map(|&id| self.passes[id].name()).collect())
    }

    /// Record every pass into `cmd`, compiling first if needed
    ///
    /// Each pass is wrapped in a render pass on its output targets, with
    /// a full viewport, and receives its input textures.
    pub fn execute(&mut self, cmd: &mut dyn CommandList) -> Result<()> {
        if self.order.is_none() {
            self.compile()?;
        }
        let order = self.order.clone().unwrap_or_default();

        for pass_id in order {
            let desc = self.render_pass_desc(pass_id);
            let inputs: Vec<Arc<dyn Texture>> = self.passes[pass_id].inputs().iter()
                .map(|&id| Arc::clone(self.targets[id].texture()))
                .collect();

            cmd.begin_render_pass(&desc)?;
            if let Some((width, height)) = desc.extent() {
                cmd.set_viewport(Viewport::full(width, height))?;
            }
            self.passes[pass_id].action_mut().execute(cmd, &inputs)?;
            cmd.end_render_pass()?;
        }
        Ok(())
    }

    fn render_pass_desc(&self, pass_id: usize) -> RenderPassDesc {
        let mut desc = RenderPassDesc::default();
        for &id in self.passes[pass_id].outputs() {
            let target = &self.targets[id];
            match *target.ops() {
                TargetOps::Color { clear_color, load_op } => {
                    desc.color = Some(ColorAttachment {
                        texture: Arc::clone(target.texture()),
                        load_op,
                        clear_color,
                    });
                }
                TargetOps::Depth { depth_clear, load_op } => {
                    desc.depth = Some(DepthAttachment {
                        texture: Arc::clone(target.texture()),
                        load_op,
                        clear_depth: depth_clear,
                    });
                }
            }
        }
        desc
    }

    fn target_id(&self, name: &str) -> Result<usize> {
        match self.target_ids.get(name) {
            Some(&id) => Ok(id),
            None => baker_bail!("baker::RenderGraph",
                "Unknown target '{}' in graph '{}'", name, self.name),
        }
    }
}

#[cfg(test)]
#[path = "render_graph_tests.rs"]
mod tests;
