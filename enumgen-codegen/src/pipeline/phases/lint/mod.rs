//! Lint phase - reports suspicious but valid specs.

mod lint;
pub mod lints;

use enumgen_spec::EnumSpec;
use eyre::{Result, bail};
pub use lint::{Lint, LintInfo};
pub use lints::{DuplicateValueLint, WideValueLint};

use crate::pipeline::{Diagnostic, GenerationContext, Phase};

/// Phase that runs configurable lints over the spec.
pub struct LintPhase {
    lints: Vec<Box<dyn Lint>>,
}

impl LintPhase {
    /// Create a lint phase with the default lints.
    pub fn new() -> Self {
        Self {
            lints: vec![Box::new(DuplicateValueLint), Box::new(WideValueLint)],
        }
    }

    /// Create a lint phase with no lints.
    pub fn empty() -> Self {
        Self { lints: Vec::new() }
    }

    pub fn with_lint(mut self, lint: impl Lint + 'static) -> Self {
        self.lints.push(Box::new(lint));
        self
    }

    pub fn lint_info(&self) -> Vec<LintInfo> {
        self.lints.iter().map(|l| l.info()).collect()
    }

    /// Run every lint against `spec`.
    pub fn check(&self, spec: &EnumSpec) -> Vec<Diagnostic> {
        let mut diagnostics = Vec::new();
        for lint in &self.lints {
            lint.check(spec, &mut diagnostics);
        }
        diagnostics
    }
}

impl Default for LintPhase {
    fn default() -> Self {
        Self::new()
    }
}

impl Phase for LintPhase {
    fn name(&self) -> &'static str {
        "lint"
    }

    fn run(&self, ctx: &mut GenerationContext<'_>) -> Result<()> {
        let diagnostics = self.check(&ctx.spec);
        for diagnostic in &diagnostics {
            tracing::debug!(enum_name = ctx.spec.name(), "{}", diagnostic);
        }
        ctx.diagnostics.extend(diagnostics);

        // Warnings never stop generation
        if ctx.has_errors() {
            bail!("lint failed with {} error(s)", ctx.error_count());
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use enumgen_spec::parse_str;

    use super::*;
    use crate::{generator::GenerateOptions, registry::BindingRegistry};

    const ALIAS: &str = r#"
        name = "Alias"

        [[constants]]
        name = "A"
        value = 1

        [[constants]]
        name = "B"
        value = 1
    "#;

    #[test]
    fn test_warnings_allowed() {
        let mut registry = BindingRegistry::new();
        let mut ctx = GenerationContext::new(
            parse_str(ALIAS).unwrap(),
            "Alias.java",
            GenerateOptions::default(),
            &mut registry,
        );

        assert!(LintPhase::new().run(&mut ctx).is_ok());
        assert!(ctx.has_warnings());
        assert!(!ctx.has_errors());
    }

    #[test]
    fn test_with_errors() {
        struct AlwaysErrorLint;
        impl Lint for AlwaysErrorLint {
            fn name(&self) -> &'static str {
                "always-error"
            }
            fn description(&self) -> &'static str {
                "Always produces an error"
            }
            fn check(&self, _spec: &EnumSpec, diagnostics: &mut Vec<Diagnostic>) {
                diagnostics.push(Diagnostic::error("lint", "forced error"));
            }
        }

        let mut registry = BindingRegistry::new();
        let mut ctx = GenerationContext::new(
            parse_str(ALIAS).unwrap(),
            "Alias.java",
            GenerateOptions::default(),
            &mut registry,
        );

        let phase = LintPhase::empty().with_lint(AlwaysErrorLint);
        assert!(phase.run(&mut ctx).is_err());
        assert!(ctx.has_errors());
    }

    #[test]
    fn test_lint_info() {
        let names: Vec<_> = LintPhase::new()
            .lint_info()
            .into_iter()
            .map(|i| i.name)
            .collect();
        assert_eq!(names, vec!["duplicate-value", "wide-value"]);
    }
}
