use std::collections::BTreeMap;
use std::fmt;

use crate::internal::*;

pub mod nn;

/// Fills an operator's attributes from its source node.
///
/// Extractors mutate the operator in place: they may write attributes and
/// rewrite the input list.
pub type AttrExtractor = fn(&mut Operator, &SourceNode) -> NeResult<()>;

#[derive(Clone, Default)]
pub struct OpRegister(pub HashMap<String, AttrExtractor>);

impl OpRegister {
    pub fn insert(&mut self, s: &'static str, extractor: AttrExtractor) {
        self.0.insert(s.into(), extractor);
    }

    pub fn get(&self, op_type: &str) -> Option<AttrExtractor> {
        self.0.get(op_type).copied()
    }

    pub fn op_types(&self) -> Vec<&str> {
        let mut types: Vec<&str> = self.0.keys().map(|s| &**s).collect();
        types.sort();
        types
    }
}

impl fmt::Debug for OpRegister {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_tuple("OpRegister").field(&self.op_types()).finish()
    }
}

pub fn register_all_ops(reg: &mut OpRegister) {
    nn::register_all_ops(reg);
}

/// A node of the compiled graph.
///
/// Input tensors are shared with the graph that produced them until an
/// extractor decides otherwise.
#[derive(Clone, Debug, Default, PartialEq, new)]
pub struct Operator {
    pub name: String,
    pub op_type: String,
    #[new(default)]
    pub input_tensors: TVec<Arc<Tensor>>,
    #[new(default)]
    pub output_tensors: TVec<Arc<Tensor>>,
    #[new(default)]
    pub attr: BTreeMap<String, Attr>,
}

impl Operator {
    pub fn with_inputs(mut self, inputs: impl IntoIterator<Item = Arc<Tensor>>) -> Operator {
        self.input_tensors = inputs.into_iter().collect();
        self
    }

    pub fn with_outputs(mut self, outputs: impl IntoIterator<Item = Arc<Tensor>>) -> Operator {
        self.output_tensors = outputs.into_iter().collect();
        self
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.op_type)
    }
}
