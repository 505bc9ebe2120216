//! Softmax attribute extraction.
//!
//! TensorFlow carries the axis as a constant second input (folded into the
//! input tensor's data by the frontend), ONNX as the node's first attribute.
//! The compiled operator always ends up with the data tensor as its only
//! input and, unless it is the last one, the axis in `attr["axis"]`.

use crate::internal::*;

/// The last axis. Never written as an attribute: consumers apply it when
/// `axis` is absent.
pub const DEFAULT_AXIS: i64 = -1;

pub fn softmax(op: &mut Operator, node: &SourceNode) -> NeResult<()> {
    let axis = match node {
        SourceNode::Tensorflow(_) => {
            let axis = const_axis(&op.input_tensors).unwrap_or_else(|| {
                trace!("{op}: no constant axis input, falling back to {DEFAULT_AXIS}");
                DEFAULT_AXIS
            });
            // fresh Arc: the compiled graph must not share the tensor with the source graph
            if let Some(data) = op.input_tensors.first().map(|t| Tensor::clone(t)) {
                op.input_tensors = tvec!(Arc::new(data));
            } else {
                trace!("{op}: no data input, inputs left empty");
            }
            axis
        }
        SourceNode::OnnxRuntime(node) => node
            .expect_first_attr()
            .and_then(|a| a.get_int())
            .with_context(|| format!("Reading softmax axis of {op}"))?,
        SourceNode::Unsupported(framework) => {
            trace!("{op}: nothing to extract from a {framework} node");
            return Ok(());
        }
    };
    trace!("{op}: axis {axis}");
    if axis != DEFAULT_AXIS {
        op.attr.insert("axis".to_string(), Attr::Int(axis));
    }
    Ok(())
}

/// First element of the second input's constant data, if it is an integer.
fn const_axis(inputs: &[Arc<Tensor>]) -> Option<i64> {
    inputs.get(1)?.data.as_ref()?.first_as_i64()
}

#[cfg(test)]
mod test {
    use super::*;
    use nengine_onnx::pb::AttributeProto;
    use nengine_onnx::pb_helpers;
    use nengine_tensorflow::tfpb;

    fn tf_softmax() -> nengine_tensorflow::NodeDef {
        tfpb::node().name("prob").op("Softmax").input("logits").input("axis")
    }

    fn logits() -> Arc<Tensor> {
        Arc::new(Tensor::new("logits:0").with_shape(&[-1, 10]).with_dest_op("prob"))
    }

    fn axis(data: impl Into<TensorData>) -> Arc<Tensor> {
        Arc::new(Tensor::new("axis:0").with_data(data))
    }

    fn op_with(inputs: TVec<Arc<Tensor>>) -> Operator {
        Operator::new("prob".into(), "Softmax".into()).with_inputs(inputs)
    }

    #[test]
    fn tf_axis_from_const_input() {
        let data = logits();
        let mut op = op_with(tvec!(data.clone(), axis(vec![2i32])));
        softmax(&mut op, &SourceNode::Tensorflow(&tf_softmax())).unwrap();
        assert_eq!(op.attr.get("axis"), Some(&Attr::Int(2)));
        assert_eq!(op.input_tensors.len(), 1);
        assert!(!Arc::ptr_eq(&op.input_tensors[0], &data));
        assert_eq!(*op.input_tensors[0], *data);
    }

    #[test]
    fn tf_without_axis_input() {
        let data = logits();
        let mut op = op_with(tvec!(data.clone()));
        softmax(&mut op, &SourceNode::Tensorflow(&tf_softmax())).unwrap();
        assert!(op.attr.get("axis").is_none());
        assert_eq!(op.input_tensors.len(), 1);
        assert!(!Arc::ptr_eq(&op.input_tensors[0], &data));
        assert_eq!(*op.input_tensors[0], *data);
    }

    #[test]
    fn tf_empty_axis_data() {
        let mut op = op_with(tvec!(logits(), axis(Vec::<i32>::new())));
        softmax(&mut op, &SourceNode::Tensorflow(&tf_softmax())).unwrap();
        assert!(op.attr.is_empty());
        assert_eq!(op.input_tensors.len(), 1);
        assert_eq!(op.input_tensors[0].name, "logits:0");
    }

    #[test]
    fn tf_axis_input_without_data() {
        let mut op = op_with(tvec!(logits(), Arc::new(Tensor::new("axis:0"))));
        softmax(&mut op, &SourceNode::Tensorflow(&tf_softmax())).unwrap();
        assert!(op.attr.is_empty());
        assert_eq!(op.input_tensors.len(), 1);
    }

    #[test]
    fn tf_float_axis_is_ignored() {
        let mut op = op_with(tvec!(logits(), axis(vec![1.0f32])));
        softmax(&mut op, &SourceNode::Tensorflow(&tf_softmax())).unwrap();
        assert!(op.attr.is_empty());
        assert_eq!(op.input_tensors.len(), 1);
    }

    #[test]
    fn tf_last_axis_is_not_written() {
        let mut op = op_with(tvec!(logits(), axis(vec![-1i64])));
        softmax(&mut op, &SourceNode::Tensorflow(&tf_softmax())).unwrap();
        assert!(op.attr.is_empty());
    }

    #[test]
    fn tf_without_any_input() {
        let mut op = op_with(tvec!());
        softmax(&mut op, &SourceNode::Tensorflow(&tf_softmax())).unwrap();
        assert!(op.input_tensors.is_empty());
        assert!(op.attr.get("axis").is_none());
    }

    #[test]
    fn tf_rerun_keeps_previous_axis() {
        let node = tf_softmax();
        let mut op = op_with(tvec!(logits(), axis(vec![1i32])));
        softmax(&mut op, &SourceNode::Tensorflow(&node)).unwrap();
        let first = op.input_tensors[0].clone();
        softmax(&mut op, &SourceNode::Tensorflow(&node)).unwrap();
        assert_eq!(op.input_tensors.len(), 1);
        assert!(!Arc::ptr_eq(&op.input_tensors[0], &first));
        assert_eq!(op.attr.get("axis"), Some(&Attr::Int(1)));
    }

    #[test]
    fn onnx_axis_from_first_attribute() {
        let node = pb_helpers::node()
            .name("prob")
            .op_type("Softmax")
            .input("logits")
            .attr(AttributeProto::int("axis", 1));
        let data = logits();
        let mut op = op_with(tvec!(data.clone()));
        softmax(&mut op, &SourceNode::OnnxRuntime(&node)).unwrap();
        assert_eq!(op.attr.get("axis"), Some(&Attr::Int(1)));
        assert!(Arc::ptr_eq(&op.input_tensors[0], &data));
    }

    #[test]
    fn onnx_last_axis_is_not_written() {
        let node = pb_helpers::node().op_type("Softmax").attr(AttributeProto::int("axis", -1));
        let mut op = op_with(tvec!(logits()));
        softmax(&mut op, &SourceNode::OnnxRuntime(&node)).unwrap();
        assert!(op.attr.is_empty());
    }

    #[test]
    fn onnx_without_attribute() {
        let node = pb_helpers::node().name("prob").op_type("Softmax");
        let mut op = op_with(tvec!(logits()));
        let err = softmax(&mut op, &SourceNode::OnnxRuntime(&node)).unwrap_err();
        assert!(format!("{err:?}").contains("has no attribute"));
        assert!(op.attr.is_empty());
    }

    #[test]
    fn other_framework_is_noop() {
        let mut op = op_with(tvec!(logits(), axis(vec![2i32])));
        let before = op.clone();
        softmax(&mut op, &SourceNode::unsupported("pytorch")).unwrap();
        assert_eq!(op, before);
        assert_eq!(op.input_tensors.len(), 2);
    }
}
