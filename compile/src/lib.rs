//! # Neural engine compile
//!
//! Translates framework nodes into compiler operators. Each operator type
//! has an attribute extractor, looked up by type name in an [`OpRegister`],
//! which fills the operator's attributes from the source node and
//! normalizes its inputs.
//!
//! ```
//! use nengine_compile::prelude::*;
//!
//! let compiler = neural_engine();
//! let node = pb_helpers::node()
//!     .name("prob")
//!     .op_type("Softmax")
//!     .input("logits")
//!     .output("prob")
//!     .attr(AttributeProto::int("axis", 1));
//! let logits = Arc::new(Tensor::new("logits"));
//! let op = compiler.operator_for(&SourceNode::OnnxRuntime(&node), tvec!(logits)).unwrap();
//! assert_eq!(op.attr.get("axis"), Some(&Attr::Int(1)));
//! ```

#[macro_use]
extern crate derive_new;
#[allow(unused_imports)]
#[macro_use]
extern crate log;

pub mod attr;
pub mod compiler;
pub mod framework;
pub mod ops;

pub use compiler::Compiler;
pub use ops::OpRegister;

pub use nengine_data;
pub use nengine_onnx;
pub use nengine_tensorflow;

/// A compiler with every known operator registered.
pub fn neural_engine() -> Compiler {
    let mut ops = OpRegister::default();
    ops::register_all_ops(&mut ops);
    Compiler { op_register: ops }
}

pub mod prelude {
    pub use crate::attr::Attr;
    pub use crate::framework::{Framework, SourceNode};
    pub use crate::neural_engine;
    pub use crate::ops::Operator;
    pub use crate::Compiler;
    pub use nengine_data::prelude::*;
    pub use nengine_onnx::pb::AttributeProto;
    pub use nengine_onnx::pb_helpers;
    pub use nengine_tensorflow::tfpb;
    pub use std::sync::Arc;
}

pub mod internal {
    pub use crate::attr::Attr;
    pub use crate::framework::{Framework, SourceNode};
    pub use crate::ops::{AttrExtractor, OpRegister, Operator};
    pub use nengine_data::internal::*;
}
