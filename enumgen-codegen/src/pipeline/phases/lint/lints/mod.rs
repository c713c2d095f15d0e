//! Built-in lints.

mod duplicate_value;
mod wide_value;

pub use duplicate_value::DuplicateValueLint;
pub use wide_value::WideValueLint;
