//! `Tensor`, the compile-time description of a value flowing between operators.
use crate::datum::{Datum, DatumType};
use crate::TVec;
use ndarray::prelude::*;
use std::fmt;

/// Constant content of a tensor, folded at compile time.
#[derive(Clone, Debug, PartialEq)]
pub enum TensorData {
    Bool(ArrayD<bool>),
    U8(ArrayD<u8>),
    I8(ArrayD<i8>),
    I32(ArrayD<i32>),
    I64(ArrayD<i64>),
    F32(ArrayD<f32>),
    F64(ArrayD<f64>),
}

macro_rules! dispatch_data {
    ($data:expr, $a:ident => $e:expr) => {
        match $data {
            TensorData::Bool($a) => $e,
            TensorData::U8($a) => $e,
            TensorData::I8($a) => $e,
            TensorData::I32($a) => $e,
            TensorData::I64($a) => $e,
            TensorData::F32($a) => $e,
            TensorData::F64($a) => $e,
        }
    };
}

impl TensorData {
    pub fn datum_type(&self) -> DatumType {
        match self {
            TensorData::Bool(_) => bool::datum_type(),
            TensorData::U8(_) => u8::datum_type(),
            TensorData::I8(_) => i8::datum_type(),
            TensorData::I32(_) => i32::datum_type(),
            TensorData::I64(_) => i64::datum_type(),
            TensorData::F32(_) => f32::datum_type(),
            TensorData::F64(_) => f64::datum_type(),
        }
    }

    pub fn shape(&self) -> &[usize] {
        dispatch_data!(self, a => a.shape())
    }

    pub fn len(&self) -> usize {
        dispatch_data!(self, a => a.len())
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// First element in logical order, widened to i64.
    ///
    /// None if the content is empty or not integer typed.
    pub fn first_as_i64(&self) -> Option<i64> {
        match self {
            TensorData::U8(a) => a.iter().next().map(|&x| x as i64),
            TensorData::I8(a) => a.iter().next().map(|&x| x as i64),
            TensorData::I32(a) => a.iter().next().map(|&x| x as i64),
            TensorData::I64(a) => a.iter().next().copied(),
            TensorData::Bool(_) | TensorData::F32(_) | TensorData::F64(_) => None,
        }
    }
}

macro_rules! from_array {
    ($t:ty, $v:ident) => {
        impl From<ArrayD<$t>> for TensorData {
            fn from(a: ArrayD<$t>) -> TensorData {
                TensorData::$v(a)
            }
        }

        impl From<Vec<$t>> for TensorData {
            fn from(v: Vec<$t>) -> TensorData {
                TensorData::$v(Array1::from(v).into_dyn())
            }
        }

        impl From<$t> for TensorData {
            fn from(x: $t) -> TensorData {
                TensorData::$v(arr0(x).into_dyn())
            }
        }
    };
}

from_array!(bool, Bool);
from_array!(u8, U8);
from_array!(i8, I8);
from_array!(i32, I32);
from_array!(i64, I64);
from_array!(f32, F32);
from_array!(f64, F64);

/// A named value in the compiled graph.
///
/// Operators hold tensors through `Arc`, so a graph can share one tensor
/// between its producer and its consumers. `Clone` is a deep copy: the clone
/// owns its own shape, data and op lists.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Tensor {
    pub name: String,
    /// Names of the operators producing this tensor.
    pub source_op: TVec<String>,
    /// Names of the operators consuming this tensor.
    pub dest_op: TVec<String>,
    /// Dimensions, -1 standing for an unknown one.
    pub shape: Option<TVec<i64>>,
    pub data: Option<TensorData>,
    pub dtype: Option<DatumType>,
}

impl Tensor {
    pub fn new(name: impl Into<String>) -> Tensor {
        Tensor { name: name.into(), ..Tensor::default() }
    }

    pub fn with_shape(mut self, shape: &[i64]) -> Tensor {
        self.shape = Some(shape.iter().copied().collect());
        self
    }

    pub fn with_dtype(mut self, dtype: DatumType) -> Tensor {
        self.dtype = Some(dtype);
        self
    }

    /// Attach constant content. Shape and datum type are taken from the
    /// content when they are not already known.
    pub fn with_data(mut self, data: impl Into<TensorData>) -> Tensor {
        let data = data.into();
        if self.shape.is_none() {
            self.shape = Some(data.shape().iter().map(|&d| d as i64).collect());
        }
        if self.dtype.is_none() {
            self.dtype = Some(data.datum_type());
        }
        self.data = Some(data);
        self
    }

    pub fn with_source_op(mut self, op: impl Into<String>) -> Tensor {
        self.source_op.push(op.into());
        self
    }

    pub fn with_dest_op(mut self, op: impl Into<String>) -> Tensor {
        self.dest_op.push(op.into());
        self
    }

    pub fn is_const(&self) -> bool {
        self.data.is_some()
    }
}

impl fmt::Display for Tensor {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.name)?;
        if let Some(dt) = self.dtype {
            write!(f, " {dt}")?;
        }
        if let Some(shape) = &self.shape {
            write!(f, " {shape:?}")?;
        }
        if self.is_const() {
            write!(f, " (const)")?;
        }
        Ok(())
    }
}
