use std::fmt;

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Ord, PartialOrd)]
pub enum DatumType {
    Bool,
    U8,
    I8,
    I32,
    I64,
    F32,
    F64,
}

impl fmt::Display for DatumType {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        // the compiled graph spells datum types the numpy way
        f.write_str(match self {
            DatumType::Bool => "bool",
            DatumType::U8 => "uint8",
            DatumType::I8 => "int8",
            DatumType::I32 => "int32",
            DatumType::I64 => "int64",
            DatumType::F32 => "fp32",
            DatumType::F64 => "fp64",
        })
    }
}

/// Element types a [`TensorData`](crate::tensor::TensorData) can hold.
pub trait Datum: Clone + fmt::Debug + PartialEq + Send + Sync + 'static {
    fn datum_type() -> DatumType;
}

macro_rules! datum {
    ($t:ty, $v:ident) => {
        impl Datum for $t {
            fn datum_type() -> DatumType {
                DatumType::$v
            }
        }
    };
}

datum!(bool, Bool);
datum!(u8, U8);
datum!(i8, I8);
datum!(i32, I32);
datum!(i64, I64);
datum!(f32, F32);
datum!(f64, F64);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numpy_spelling() {
        assert_eq!(DatumType::F32.to_string(), "fp32");
        assert_eq!(i64::datum_type().to_string(), "int64");
    }
}
