//! Data containers shared by the neural engine compile frontends.
//!
//! A [`Tensor`](crate::tensor::Tensor) here is a compile-time description of a
//! value flowing between operators: a name, an optional shape, an optional
//! datum type and, for constants, the folded content.

#[macro_use]
mod macros;

/// A Smallvec instantiation with 4 embeddable values.
///
/// Used for operator inputs and outputs, and for tensor dimensions.
pub type TVec<T> = smallvec::SmallVec<[T; 4]>;

pub type NeResult<T> = anyhow::Result<T>;
pub type NeError = anyhow::Error;

pub mod prelude {
    pub use crate::datum::{Datum, DatumType};
    pub use crate::tensor::{Tensor, TensorData};
    pub use crate::tvec;
    pub use crate::TVec;
    pub use crate::{NeError, NeResult};
}

pub mod internal {
    pub use crate::prelude::*;
    pub use anyhow::{anyhow, bail, ensure, format_err, Context as NeContext};
    pub use ndarray as ne_ndarray;
    pub use std::collections::HashMap;
    pub use std::sync::Arc;
}

pub use anyhow;

mod datum;
mod tensor;
