//! Check command report data structures.

use std::path::PathBuf;

use enumgen_codegen::pipeline::Diagnostic;
use serde::Serialize;

use super::output::{Output, Report};

/// Report data from spec validation.
#[derive(Debug, Serialize)]
pub struct CheckReport {
    /// Path to the spec file.
    pub spec_path: PathBuf,
    /// Fully qualified enum name.
    pub enum_name: String,
    pub variant: &'static str,
    /// Resolved lookup strategy.
    pub lookup: &'static str,
    pub constant_count: usize,
    pub errors: Vec<Diagnostic>,
    pub warnings: Vec<Diagnostic>,
}

impl CheckReport {
    /// Whether the check passed (no errors).
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }
}

impl Report for CheckReport {
    fn render(&self, out: &mut dyn Output) {
        for error in &self.errors {
            out.error(&error.to_string());
        }

        for warning in &self.warnings {
            out.warning(&warning.to_string());
        }

        if !self.warnings.is_empty() || !self.errors.is_empty() {
            out.newline();
        }

        if self.is_valid() {
            out.preformatted(&format!("✓ {} is valid", self.spec_path.display()));
            out.key_value("  enum", &self.enum_name);
            out.key_value("  variant", self.variant);
            out.key_value("  constants", &self.constant_count.to_string());
            out.key_value("  lookup", self.lookup);
        }
    }
}
