include!("prost/onnx.rs");
