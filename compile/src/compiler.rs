use crate::internal::*;

/// Entry point of the node translation pass.
///
/// Holds the operator register; build one with
/// [`neural_engine()`](crate::neural_engine) and insert extra extractors in
/// `op_register` before use if needed.
#[derive(Clone, Debug, Default)]
pub struct Compiler {
    pub op_register: OpRegister,
}

impl Compiler {
    /// Run the extractor registered for the operator's type.
    pub fn set_attr(&self, op: &mut Operator, node: &SourceNode) -> NeResult<()> {
        let extractor = self
            .op_register
            .get(&op.op_type)
            .with_context(|| format!("Operator type {} is not registered", op.op_type))?;
        debug!("Extracting attributes of {} from {} node", op, node.framework());
        extractor(op, node).with_context(|| format!("Extracting attributes of {op}"))?;
        for (name, value) in &op.attr {
            trace!("{op}: {name}={value}");
        }
        Ok(())
    }

    /// Build the operator for a framework node.
    ///
    /// Input tensors are resolved by the caller, in the node's input order.
    /// Outputs are named after the node's outputs.
    pub fn operator_for(
        &self,
        node: &SourceNode,
        inputs: impl IntoIterator<Item = Arc<Tensor>>,
    ) -> NeResult<Operator> {
        let mut op = match node {
            SourceNode::Tensorflow(n) => {
                let output = Tensor::new(format!("{}:0", n.name)).with_source_op(&n.name);
                Operator::new(n.name.clone(), n.op.clone()).with_outputs(tvec!(Arc::new(output)))
            }
            SourceNode::OnnxRuntime(n) => {
                // unnamed ONNX nodes are known by their first output
                let name = if !n.name.is_empty() {
                    n.name.clone()
                } else if let Some(output) = n.output.first().filter(|o| !o.is_empty()) {
                    output.clone()
                } else {
                    bail!("{} node has neither a name nor an output", n.op_type)
                };
                let outputs: TVec<Arc<Tensor>> = n
                    .output
                    .iter()
                    .filter(|o| !o.is_empty())
                    .map(|o| Arc::new(Tensor::new(o.clone()).with_source_op(&name)))
                    .collect();
                Operator::new(name, n.op_type.clone()).with_outputs(outputs)
            }
            SourceNode::Unsupported(framework) => {
                bail!("No frontend for {} nodes", framework)
            }
        };
        op.input_tensors = inputs.into_iter().collect();
        trace!(
            "Operator {} with inputs {:?}",
            op,
            op.input_tensors.iter().map(|t| t.to_string()).collect::<Vec<_>>()
        );
        self.set_attr(&mut op, node)?;
        Ok(op)
    }
}
