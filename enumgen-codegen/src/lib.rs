//! Java enum generation for RoboVM bindings.
//!
//! This crate turns a validated [`EnumSpec`](enumgen_spec::EnumSpec) into
//! Java source and publishes it.
//!
//! # Module Organization
//!
//! - [`builder`] - Indentation-aware code building (CodeBuilder, Indent)
//! - [`template`] - Marker-based skeleton rendering (TemplateEngine, SectionSchema)
//! - [`generator`] - Plain and error-domain generators
//! - [`registry`] - Caller-owned wrapper binding registry
//! - [`pipeline`] - Lint, render and emit phases with plugin hooks

pub mod builder;
pub mod generator;
pub mod pipeline;
pub mod registry;
pub mod template;

pub use generator::{GenerateOptions, Generator};
pub use pipeline::{GenerationContext, Pipeline, Stage};
pub use registry::{BindingRegistry, RegistryError, WrapperBinding};
pub use template::{RenderError, TemplateEngine};
