//! # ONNX frontend types
//!
//! `NodeProto` and `AttributeProto` as the ONNX Runtime frontend of the
//! neural engine compiler reads them, with builders and typed accessors.

pub mod pb;
pub mod pb_helpers;

pub use pb::NodeProto;

pub use nengine_data;
