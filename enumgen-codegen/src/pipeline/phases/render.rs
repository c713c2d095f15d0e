//! Render phase - fills the skeleton in memory.

use std::{io, path::Path};

use eyre::{Context, Result};

use crate::{
    generator::Generator,
    pipeline::{GenerationContext, Phase, Stage},
};

/// Phase that renders the output source without touching the destination.
///
/// Unless the run is `fresh`, an existing non-blank output file is used as
/// the skeleton so hand-written code outside the markers survives.
pub struct RenderPhase;

impl Phase for RenderPhase {
    fn name(&self) -> &'static str {
        "render"
    }

    fn run(&self, ctx: &mut GenerationContext<'_>) -> Result<()> {
        ctx.stage = Stage::Rendering;

        let existing = if ctx.options.fresh {
            None
        } else {
            read_existing(&ctx.output)
        };

        let generator = Generator::new(&ctx.spec, &ctx.options);
        tracing::debug!(
            enum_name = ctx.spec.name(),
            lookup = ctx.spec.resolved_lookup().as_str(),
            merged = existing.is_some(),
            "rendering"
        );

        let rendered = generator
            .render(existing.as_deref())
            .wrap_err_with(|| format!("failed to render '{}'", ctx.spec.name()))?;

        let bindings = generator.bindings();
        for binding in &bindings {
            ctx.registry.ensure_free(binding)?;
        }

        ctx.merged = existing.is_some();
        ctx.bindings = bindings;
        ctx.rendered = Some(rendered);
        ctx.stage = Stage::Rendered;

        Ok(())
    }
}

/// The current destination content, if it can serve as a skeleton.
fn read_existing(path: &Path) -> Option<String> {
    match std::fs::read_to_string(path) {
        Ok(content) if !content.trim().is_empty() => Some(content),
        Ok(_) => None,
        Err(e) if e.kind() == io::ErrorKind::NotFound => None,
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "ignoring unreadable output file");
            None
        }
    }
}
