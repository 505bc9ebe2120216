use crate::pb::attribute_proto::AttributeType;
use crate::pb::*;
use nengine_data::internal::*;

use std::fmt::{self, Display};

impl Display for AttributeType {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(match self {
            AttributeType::Int => "int",
            AttributeType::Float => "float",
            AttributeType::Tensor => "tensor",
            AttributeType::String => "string",
            AttributeType::Ints => "list of ints",
            AttributeType::Floats => "list of floats",
            AttributeType::Tensors => "list of tensors",
            AttributeType::Strings => "list of strings",
            AttributeType::Graph => "graph",
            AttributeType::Graphs => "graphs",
            _ => "<undefined>",
        })
    }
}

pub fn node() -> NodeProto {
    NodeProto {
        input: vec![],
        output: vec![],
        name: String::new(),
        op_type: String::new(),
        domain: String::new(),
        attribute: vec![],
        doc_string: String::new(),
    }
}

impl NodeProto {
    pub fn name<S: ToString>(mut self, n: S) -> NodeProto {
        self.name = n.to_string();
        self
    }
    pub fn op_type<S: ToString>(mut self, n: S) -> NodeProto {
        self.op_type = n.to_string();
        self
    }
    pub fn input<S: ToString>(mut self, n: S) -> NodeProto {
        self.input.push(n.to_string());
        self
    }
    pub fn output<S: ToString>(mut self, n: S) -> NodeProto {
        self.output.push(n.to_string());
        self
    }
    pub fn attr(mut self, a: AttributeProto) -> NodeProto {
        self.attribute.push(a);
        self
    }
}

fn attribute(name: &str, attr_type: AttributeType) -> AttributeProto {
    AttributeProto {
        name: name.to_string(),
        ref_attr_name: String::new(),
        doc_string: String::new(),
        r#type: attr_type.into(),
        f: 0.0,
        i: 0,
        s: vec![],
        floats: vec![],
        ints: vec![],
        strings: vec![],
    }
}

impl AttributeProto {
    pub fn int(name: &str, i: i64) -> AttributeProto {
        AttributeProto { i, ..attribute(name, AttributeType::Int) }
    }

    pub fn float(name: &str, f: f32) -> AttributeProto {
        AttributeProto { f, ..attribute(name, AttributeType::Float) }
    }

    pub fn attr_type(&self) -> NeResult<AttributeType> {
        AttributeType::from_i32(self.r#type)
            .ok_or_else(|| format_err!("Attribute {} has invalid type {}", self.name, self.r#type))
    }

    /// The `i` field, checking the discriminator.
    ///
    /// `UNDEFINED` is accepted: IR 0.0.1 producers never set the type.
    pub fn get_int(&self) -> NeResult<i64> {
        match self.attr_type()? {
            AttributeType::Int | AttributeType::Undefined => Ok(self.i),
            other => bail!("Attribute {} is a {}, expected int", self.name, other),
        }
    }
}

impl NodeProto {
    pub fn expect_first_attr(&self) -> NeResult<&AttributeProto> {
        self.attribute.first().ok_or_else(|| {
            format_err!("Node {} ({}) has no attribute", self.name, self.op_type)
        })
    }
}
