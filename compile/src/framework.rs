use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

use nengine_onnx::NodeProto;
use nengine_tensorflow::NodeDef;

/// The model-description ecosystem a node comes from.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Framework {
    Tensorflow,
    OnnxRuntime,
    Other(String),
}

impl Framework {
    pub fn as_str(&self) -> &str {
        match self {
            Framework::Tensorflow => "tensorflow",
            Framework::OnnxRuntime => "onnxruntime",
            Framework::Other(s) => s,
        }
    }
}

impl FromStr for Framework {
    type Err = Infallible;
    fn from_str(s: &str) -> Result<Framework, Infallible> {
        Ok(Framework::from(s))
    }
}

impl From<&str> for Framework {
    fn from(s: &str) -> Framework {
        match s {
            "tensorflow" => Framework::Tensorflow,
            "onnxruntime" => Framework::OnnxRuntime,
            other => Framework::Other(other.to_string()),
        }
    }
}

impl fmt::Display for Framework {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A framework node, as read by attribute extractors.
///
/// Nodes from frameworks without a frontend are carried as `Unsupported`:
/// extractors leave the operator alone for them.
#[derive(Clone, Debug)]
pub enum SourceNode<'a> {
    Tensorflow(&'a NodeDef),
    OnnxRuntime(&'a NodeProto),
    Unsupported(Framework),
}

impl SourceNode<'_> {
    pub fn unsupported(framework: &str) -> SourceNode<'static> {
        SourceNode::Unsupported(Framework::from(framework))
    }

    pub fn framework(&self) -> Framework {
        match self {
            SourceNode::Tensorflow(_) => Framework::Tensorflow,
            SourceNode::OnnxRuntime(_) => Framework::OnnxRuntime,
            SourceNode::Unsupported(fw) => fw.clone(),
        }
    }
}
