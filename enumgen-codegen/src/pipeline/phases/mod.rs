//! Built-in pipeline phases.

mod emit;
pub mod lint;
mod render;

pub use emit::EmitPhase;
pub use lint::{Lint, LintInfo, LintPhase};
pub use render::RenderPhase;
