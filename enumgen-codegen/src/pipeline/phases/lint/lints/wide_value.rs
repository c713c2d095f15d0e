//! Lint for values wider than 32 bits.

use enumgen_spec::EnumSpec;

use super::super::Lint;
use crate::pipeline::Diagnostic;

/// Warns about values a 32-bit native enum cannot hold.
pub struct WideValueLint;

impl Lint for WideValueLint {
    fn name(&self) -> &'static str {
        "wide-value"
    }

    fn description(&self) -> &'static str {
        "Detect values outside the 32-bit signed range"
    }

    fn check(&self, spec: &EnumSpec, diagnostics: &mut Vec<Diagnostic>) {
        for constant in spec.constants() {
            if i32::try_from(constant.value).is_err() {
                diagnostics.push(
                    Diagnostic::warning(
                        "lint",
                        format!(
                            "value {} of '{}' does not fit in 32 bits; it needs a machine-sized marshaler on 32-bit targets",
                            constant.value, constant.name
                        ),
                    )
                    .from_lint(self.name())
                    .at(format!("constants.{}", constant.name)),
                );
            }
        }
    }
}
