//! Lint trait for enum specs.

use enumgen_spec::EnumSpec;

use crate::pipeline::Diagnostic;

/// Information about a lint.
#[derive(Debug, Clone)]
pub struct LintInfo {
    pub name: &'static str,
    pub description: &'static str,
}

/// A check over a validated spec that reports diagnostics instead of
/// failing.
pub trait Lint: Send + Sync {
    /// The name of this lint (e.g., "duplicate-value").
    fn name(&self) -> &'static str;

    fn description(&self) -> &'static str;

    /// Check the spec and add any diagnostics.
    fn check(&self, spec: &EnumSpec, diagnostics: &mut Vec<Diagnostic>);

    fn info(&self) -> LintInfo {
        LintInfo {
            name: self.name(),
            description: self.description(),
        }
    }
}
