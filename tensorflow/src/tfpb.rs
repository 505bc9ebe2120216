pub mod tensorflow {
    include!("prost/tensorflow.rs");
}

use self::tensorflow::attr_value::Value;
use self::tensorflow::{AttrValue, DataType, NodeDef, TensorProto};

use nengine_data::internal::*;

pub fn node() -> NodeDef {
    NodeDef {
        name: String::new(),
        op: String::new(),
        input: vec![],
        device: String::new(),
        attr: HashMap::new(),
    }
}

impl NodeDef {
    pub fn name<S: ToString>(mut self, n: S) -> NodeDef {
        self.name = n.to_string();
        self
    }
    pub fn op<S: ToString>(mut self, n: S) -> NodeDef {
        self.op = n.to_string();
        self
    }
    pub fn input<S: ToString>(mut self, n: S) -> NodeDef {
        self.input.push(n.to_string());
        self
    }
    pub fn attr<S: ToString, V: Into<AttrValue>>(mut self, n: S, v: V) -> NodeDef {
        self.attr.insert(n.to_string(), v.into());
        self
    }
}

impl NodeDef {
    pub fn get_attr_datum_type(&self, name: &str) -> NeResult<DatumType> {
        self.get_attr_opt_datum_type(name)?.ok_or_else(|| {
            format_err!("Node {} ({}) expected datum_type attribute '{}'", self.name, self.op, name)
        })
    }

    pub fn get_attr_opt_datum_type(&self, name: &str) -> NeResult<Option<DatumType>> {
        if let Some(Value::Type(v)) = self.attr.get(name).and_then(|a| a.value.as_ref()) {
            let dt = DataType::from_i32(*v)
                .ok_or_else(|| format_err!("Node {} has invalid DataType {}", self.name, v))?;
            return Ok(Some(dt.try_into()?));
        }
        Ok(None)
    }

    pub fn get_attr_tensor(&self, name: &str) -> NeResult<TensorData> {
        self.get_attr_opt_tensor(name)?.ok_or_else(|| {
            format_err!("Node {} ({}) expected tensor attribute '{}'", self.name, self.op, name)
        })
    }

    pub fn get_attr_opt_tensor(&self, name: &str) -> NeResult<Option<TensorData>> {
        if let Some(Value::Tensor(t)) = self.attr.get(name).and_then(|a| a.value.as_ref()) {
            let data = TensorData::try_from(t).with_context(|| {
                format!("Decoding tensor attribute '{}' of node {}", name, self.name)
            })?;
            return Ok(Some(data));
        }
        Ok(None)
    }
}

impl From<DataType> for AttrValue {
    fn from(t: DataType) -> AttrValue {
        AttrValue { value: Some(Value::Type(t.into())) }
    }
}

impl From<TensorProto> for AttrValue {
    fn from(t: TensorProto) -> AttrValue {
        AttrValue { value: Some(Value::Tensor(t)) }
    }
}
