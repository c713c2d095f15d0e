//! Check operation - spec validation and lints.

use enumgen_codegen::{
    GenerateOptions, Generator,
    pipeline::{Severity, phases::LintPhase},
};
use enumgen_spec::SpecFile;
use eyre::{Context, Result};

use crate::reports::CheckReport;

/// Execute the check operation.
///
/// The spec is already valid at this point; this runs the lints and makes
/// sure the spec renders into its built-in skeleton.
pub fn check(file: &SpecFile) -> Result<CheckReport> {
    let spec = file.spec();
    let diagnostics = LintPhase::new().check(spec);

    let options = GenerateOptions::default();
    Generator::new(spec, &options)
        .preview()
        .wrap_err("Render check failed")?;

    let mut errors = Vec::new();
    let mut warnings = Vec::new();
    for diag in diagnostics {
        match diag.severity {
            Severity::Error => errors.push(diag),
            Severity::Warning => warnings.push(diag),
        }
    }

    Ok(CheckReport {
        spec_path: file.path().to_path_buf(),
        enum_name: spec.qualified_name(),
        variant: spec.variant().as_str(),
        lookup: spec.resolved_lookup().as_str(),
        constant_count: spec.constants().len(),
        errors,
        warnings,
    })
}
