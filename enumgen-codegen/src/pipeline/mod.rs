//! Generation pipeline for one enum spec.
//!
//! This module provides a [`Pipeline`] orchestrator that takes a validated
//! [`EnumSpec`](enumgen_spec::EnumSpec) to a published Java source file.
//! The pipeline provides:
//!
//! - Explicit phase boundaries (lint, render, emit)
//! - Plugin hooks for extensibility (before/after each phase, on failure)
//! - Unified diagnostics collection
//! - A [`Stage`] tracking how far a generation got
//!
//! # Example
//!
//! ```ignore
//! use enumgen_codegen::pipeline::Pipeline;
//!
//! let mut registry = BindingRegistry::new();
//! let ctx = Pipeline::new().run(spec, output, options, &mut registry)?;
//!
//! for diag in ctx.warnings() {
//!     eprintln!("{}", diag);
//! }
//! ```

mod context;
mod diagnostic;
mod phase;
pub mod phases;
mod plugin;
mod runner;

pub use context::{GenerationContext, Stage};
pub use diagnostic::{Diagnostic, Severity};
pub use phase::Phase;
pub use plugin::{Plugin, TracingPlugin};
pub use runner::Pipeline;
