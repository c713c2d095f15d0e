//! Core utilities and types for the enumgen binding generator.
//!
//! This crate provides the atomic file emitter and small helpers shared
//! by the spec, codegen and CLI crates.

mod file;
mod license;
mod utils;

// File operations
pub use file::{File, StagedFile, WriteResult};
pub use license::LicenseHeader;
// String utilities
pub use utils::{java_string_literal, qualified_name};
