//! Core value types: axes and named coordinate values.

mod axis;
mod named_values;

pub use axis::{Axis, linspace};
pub use named_values::NamedValues;
