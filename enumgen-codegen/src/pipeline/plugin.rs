//! Pipeline plugin trait for extensibility.

use eyre::Result;

use super::GenerationContext;

/// A plugin that can hook into the generation pipeline.
///
/// Plugins receive callbacks around each phase and may abort the run by
/// returning an error.
pub trait Plugin: Send + Sync {
    /// The name of this plugin (for debugging and logging).
    fn name(&self) -> &'static str;

    /// Called before a phase runs.
    ///
    /// # Errors
    ///
    /// Return an error to abort the pipeline.
    #[allow(unused_variables)]
    fn on_before_phase(&self, phase: &str, ctx: &mut GenerationContext<'_>) -> Result<()> {
        Ok(())
    }

    /// Called after a phase completes successfully.
    ///
    /// # Errors
    ///
    /// Return an error to abort the pipeline.
    #[allow(unused_variables)]
    fn on_after_phase(&self, phase: &str, ctx: &mut GenerationContext<'_>) -> Result<()> {
        Ok(())
    }

    /// Called once when a phase or hook fails, after the stage is set to
    /// `Failed`.
    #[allow(unused_variables)]
    fn on_failure(&self, phase: &str, ctx: &GenerationContext<'_>) {}
}

/// Logs phase boundaries through `tracing`.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingPlugin;

impl Plugin for TracingPlugin {
    fn name(&self) -> &'static str {
        "tracing"
    }

    fn on_before_phase(&self, phase: &str, ctx: &mut GenerationContext<'_>) -> Result<()> {
        tracing::debug!(phase, enum_name = ctx.spec.name(), stage = %ctx.stage, "phase start");
        Ok(())
    }

    fn on_after_phase(&self, phase: &str, ctx: &mut GenerationContext<'_>) -> Result<()> {
        tracing::debug!(phase, enum_name = ctx.spec.name(), stage = %ctx.stage, "phase done");
        Ok(())
    }

    fn on_failure(&self, phase: &str, ctx: &GenerationContext<'_>) {
        tracing::warn!(phase, enum_name = ctx.spec.name(), stage = %ctx.stage, "phase failed");
    }
}
