//! Lint for constants sharing a value.

use enumgen_spec::EnumSpec;

use super::super::Lint;
use crate::pipeline::Diagnostic;

/// Warns about constants that can never be returned by a lookup.
pub struct DuplicateValueLint;

impl Lint for DuplicateValueLint {
    fn name(&self) -> &'static str {
        "duplicate-value"
    }

    fn description(&self) -> &'static str {
        "Detect constants that alias an earlier constant's value"
    }

    fn check(&self, spec: &EnumSpec, diagnostics: &mut Vec<Diagnostic>) {
        for shadowed in spec.shadowed() {
            diagnostics.push(
                Diagnostic::warning(
                    "lint",
                    format!(
                        "constant '{}' has the same value ({}) as '{}'; valueOf({}) always returns '{}'",
                        shadowed.constant.name,
                        shadowed.constant.value,
                        shadowed.first.name,
                        shadowed.constant.value,
                        shadowed.first.name,
                    ),
                )
                .from_lint(self.name())
                .at(format!("constants.{}", shadowed.constant.name)),
            );
        }
    }
}
