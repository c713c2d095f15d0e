use enumgen_spec::Variant;
use thiserror::Error;

use super::Section;

/// Why a skeleton could not be rendered.
///
/// A render error always means nothing is emitted.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RenderError {
    #[error("mandatory section '{section}' has no value")]
    Unresolved { section: Section },

    #[error("skeleton has no placeholder for mandatory section '{section}'")]
    MissingPlaceholder { section: Section },

    #[error("section '{section}' is not part of the {schema} skeleton")]
    UnknownSection {
        section: Section,
        schema: &'static str,
    },

    #[error("marker /*<{section}>*/ opened on line {line} is never closed")]
    Unterminated { section: Section, line: usize },

    #[error("existing file is a {found} enum, not {expected}; regenerate it fresh to switch")]
    VariantMismatch { expected: Variant, found: Variant },
}
