//! Core operations.
//!
//! This module contains the business logic for enumgen commands,
//! separated from CLI argument parsing and output rendering.

pub mod check;
pub mod generate;
pub mod lookup;

pub use check::check;
pub use generate::generate;
pub use lookup::lookup;
