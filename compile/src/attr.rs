use std::fmt;

/// Value of an operator attribute.
#[derive(Clone, Debug, PartialEq)]
pub enum Attr {
    Int(i64),
}

impl fmt::Display for Attr {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Attr::Int(i) => write!(f, "{i}"),
        }
    }
}

impl From<i64> for Attr {
    fn from(i: i64) -> Attr {
        Attr::Int(i)
    }
}
