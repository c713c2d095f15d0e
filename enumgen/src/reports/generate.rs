//! Generate command report data structures.

use std::path::PathBuf;

use enumgen_codegen::WrapperBinding;
use serde::Serialize;

use super::output::{Output, Report};

/// Report data from generating one enum.
#[derive(Debug, Serialize)]
pub struct GenerateReport {
    /// Fully qualified enum name.
    pub enum_name: String,
    pub variant: &'static str,
    /// Resolved lookup strategy.
    pub lookup: &'static str,
    pub constant_count: usize,
    /// Destination file.
    pub output: PathBuf,
    /// Whether the existing destination served as the skeleton.
    pub merged: bool,
    /// Wrapper bindings declared by the generated type.
    pub bindings: Vec<WrapperBinding>,
    /// Lint warnings.
    pub warnings: Vec<String>,
    pub result: GenerationResult,
}

/// Outcome at the destination.
#[derive(Debug, Serialize)]
#[serde(rename_all = "lowercase", tag = "status")]
pub enum GenerationResult {
    /// File was published.
    Written,
    /// Destination already held the rendered content.
    Unchanged,
    /// Dry run; nothing was written.
    Preview { content: String },
}

impl Report for GenerateReport {
    fn render(&self, out: &mut dyn Output) {
        for warning in &self.warnings {
            out.warning(warning);
        }

        let path = self.output.display().to_string();
        match &self.result {
            GenerationResult::Preview { content } => {
                out.divider(&path);
                out.preformatted(content.trim_end_matches('\n'));
                return;
            }
            GenerationResult::Written => {
                out.key_value("Generated", &self.enum_name);
                out.added_item(&path);
            }
            GenerationResult::Unchanged => {
                out.key_value("Unchanged", &self.enum_name);
                out.list_item(&path);
            }
        }

        let mode = if self.merged { "merged" } else { "fresh" };
        out.preformatted(&format!(
            "  {} enum, {} constant{}, {} lookup ({})",
            self.variant,
            self.constant_count,
            if self.constant_count == 1 { "" } else { "s" },
            self.lookup,
            mode,
        ));
        for binding in &self.bindings {
            out.list_item(&format!("binds {} to {}", binding.wrapper, binding.base));
        }
    }
}
