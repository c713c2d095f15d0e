//! Emit phase - publishes the rendered source.

use enumgen_core::File;
use eyre::{Result, eyre};

use crate::pipeline::{GenerationContext, Phase, Stage};

/// Phase that writes the rendered source atomically and registers the
/// generated wrapper bindings.
pub struct EmitPhase;

impl Phase for EmitPhase {
    fn name(&self) -> &'static str {
        "emit"
    }

    fn run(&self, ctx: &mut GenerationContext<'_>) -> Result<()> {
        let rendered = ctx
            .rendered
            .as_ref()
            .ok_or_else(|| eyre!("nothing rendered for '{}'", ctx.spec.name()))?;

        if ctx.options.dry_run {
            tracing::info!(path = %ctx.output.display(), "dry run, not writing");
            return Ok(());
        }

        let result = File::new(ctx.output.clone(), rendered.as_str()).write()?;

        for binding in &ctx.bindings {
            ctx.registry.register(binding.clone())?;
        }

        tracing::info!(
            enum_name = ctx.spec.name(),
            path = %ctx.output.display(),
            result = ?result,
            "emitted"
        );
        ctx.write_result = Some(result);
        ctx.stage = Stage::Emitted;

        Ok(())
    }
}
