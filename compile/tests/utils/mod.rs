#![allow(dead_code)]
use nengine_compile::prelude::*;
use nengine_tensorflow::tensor_for_const;
use nengine_tensorflow::tfpb::tensorflow::{DataType, TensorProto};

pub fn setup_test_logger() {
    let _ = env_logger::Builder::from_env("NENGINE_LOG").try_init();
}

/// The tensor a TensorFlow `Const` node holding `data` folds into.
pub fn tf_axis_const(name: &str, data: TensorData) -> Tensor {
    let node = tfpb::node()
        .name(name)
        .op("Const")
        .attr("dtype", DataType::try_from(data.datum_type()).unwrap())
        .attr("value", TensorProto::try_from(&data).unwrap());
    tensor_for_const(&node).unwrap()
}

pub fn logits() -> Arc<Tensor> {
    Arc::new(Tensor::new("logits:0").with_shape(&[1, 128, 30522]).with_dtype(DatumType::F32))
}
