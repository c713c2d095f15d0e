//! State carried through one generation.

use std::{fmt, path::PathBuf};

use enumgen_core::WriteResult;
use enumgen_spec::EnumSpec;

use super::diagnostic::{Diagnostic, Severity};
use crate::{
    generator::GenerateOptions,
    registry::{BindingRegistry, WrapperBinding},
};

/// Where a generation currently is.
///
/// Moves forward only: `Validated -> Rendering -> Rendered -> Emitted`, or
/// to `Failed` from any of the first three.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Stage {
    /// Spec validated, nothing rendered yet
    Validated,
    Rendering,
    /// Output exists in memory only
    Rendered,
    /// Output published at the destination
    Emitted,
    Failed(String),
}

impl Stage {
    pub fn is_failed(&self) -> bool {
        matches!(self, Stage::Failed(_))
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Stage::Validated => write!(f, "validated"),
            Stage::Rendering => write!(f, "rendering"),
            Stage::Rendered => write!(f, "rendered"),
            Stage::Emitted => write!(f, "emitted"),
            Stage::Failed(reason) => write!(f, "failed: {}", reason),
        }
    }
}

/// Context passed through all pipeline phases.
#[derive(Debug)]
pub struct GenerationContext<'r> {
    pub spec: EnumSpec,
    pub options: GenerateOptions,
    /// Destination file
    pub output: PathBuf,
    /// Caller-owned registry receiving wrapper bindings on emission
    pub registry: &'r mut BindingRegistry,
    pub stage: Stage,
    /// Rendered source (set by the render phase)
    pub rendered: Option<String>,
    /// Whether the existing output file served as the skeleton
    pub merged: bool,
    /// Bindings to register once emitted
    pub bindings: Vec<WrapperBinding>,
    /// Set by the emit phase unless this is a dry run
    pub write_result: Option<WriteResult>,
    pub diagnostics: Vec<Diagnostic>,
}

impl<'r> GenerationContext<'r> {
    pub fn new(
        spec: EnumSpec,
        output: impl Into<PathBuf>,
        options: GenerateOptions,
        registry: &'r mut BindingRegistry,
    ) -> Self {
        Self {
            spec,
            options,
            output: output.into(),
            registry,
            stage: Stage::Validated,
            rendered: None,
            merged: false,
            bindings: Vec::new(),
            write_result: None,
            diagnostics: Vec::new(),
        }
    }

    pub fn has_errors(&self) -> bool {
        self.diagnostics.iter().any(|d| d.severity.is_error())
    }

    pub fn has_warnings(&self) -> bool {
        self.diagnostics.iter().any(|d| d.severity.is_warning())
    }

    pub fn error_count(&self) -> usize {
        self.diagnostics
            .iter()
            .filter(|d| d.severity.is_error())
            .count()
    }

    pub fn warnings(&self) -> impl Iterator<Item = &Diagnostic> {
        self.diagnostics
            .iter()
            .filter(|d| matches!(d.severity, Severity::Warning))
    }
}
