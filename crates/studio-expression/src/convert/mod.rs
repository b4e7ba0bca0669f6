//! Conversion between the complex and the simplified form.
//!
//! [`to_complex`] is total. [`to_simple`] is only defined on expressions
//! accepted by [`is_simple`](crate::is_simple), and returns
//! [`ConversionError::NotSimple`](crate::ConversionError::NotSimple) otherwise.
//! For every simple `e`, `to_complex(&to_simple(&e)?)` is equivalent to `e`.

pub mod to_complex;
pub mod to_simple;

pub use to_complex::{to_complex, to_complex_json, value_to_complex};
pub use to_simple::{to_simple, to_simple_json};
