//! # TensorFlow frontend types
//!
//! GraphDef node descriptions as the TensorFlow frontend of the neural
//! engine compiler reads them: prost message types, builder helpers,
//! attribute accessors and constant tensor decoding.
//!
//! ```
//! use nengine_tensorflow::tfpb;
//!
//! let softmax = tfpb::node().name("prob").op("Softmax").input("logits");
//! assert_eq!(softmax.input.len(), 1);
//! ```

#[allow(unused_imports)]
#[macro_use]
extern crate log;

pub mod tensor;
pub mod tfpb;

pub use tensor::tensor_for_const;
pub use tfpb::tensorflow::NodeDef;

pub use nengine_data;
