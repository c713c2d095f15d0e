//! Pipeline orchestrator.

use std::path::PathBuf;

use enumgen_spec::EnumSpec;
use eyre::Result;

use super::{
    GenerationContext, Phase, Plugin, Stage,
    phases::{EmitPhase, LintPhase, RenderPhase},
};
use crate::{generator::GenerateOptions, registry::BindingRegistry};

/// The generation pipeline orchestrator.
///
/// Runs the lint, render and emit phases in order, calling plugin hooks
/// before and after each phase. Nothing
/// reaches the destination before the emit phase, so a failure in an
/// earlier phase or hook leaves it untouched.
///
/// # Example
///
/// ```ignore
/// let mut registry = BindingRegistry::new();
/// let pipeline = Pipeline::new().plugin(TracingPlugin);
///
/// let ctx = pipeline.run(spec, "Color.java", GenerateOptions::default(), &mut registry)?;
/// assert_eq!(ctx.stage, Stage::Emitted);
/// ```
pub struct Pipeline {
    plugins: Vec<Box<dyn Plugin>>,
}

impl Pipeline {
    pub fn new() -> Self {
        Self {
            plugins: Vec::new(),
        }
    }

    /// Add a plugin to receive phase lifecycle hooks.
    pub fn plugin(mut self, plugin: impl Plugin + 'static) -> Self {
        self.plugins.push(Box::new(plugin));
        self
    }

    /// Run the pipeline for one spec.
    ///
    /// # Errors
    ///
    /// Returns the first error raised by a phase or a plugin hook.
    pub fn run<'r>(
        &self,
        spec: EnumSpec,
        output: impl Into<PathBuf>,
        options: GenerateOptions,
        registry: &'r mut BindingRegistry,
    ) -> Result<GenerationContext<'r>> {
        let mut ctx = GenerationContext::new(spec, output, options, registry);

        let phases: Vec<Box<dyn Phase>> = vec![
            Box::new(LintPhase::new()),
            Box::new(RenderPhase),
            Box::new(EmitPhase),
        ];

        for phase in &phases {
            if let Err(err) = self.run_phase(phase.as_ref(), &mut ctx) {
                ctx.stage = Stage::Failed(format!("{:#}", err));
                for plugin in &self.plugins {
                    plugin.on_failure(phase.name(), &ctx);
                }
                return Err(err);
            }
        }

        Ok(ctx)
    }

    /// Render without emitting: lint and render only, never touching the
    /// destination or the registry.
    pub fn render(&self, spec: EnumSpec, output: impl Into<PathBuf>) -> Result<String> {
        let mut registry = BindingRegistry::new();
        let options = GenerateOptions {
            dry_run: true,
            fresh: true,
            ..Default::default()
        };
        let ctx = self.run(spec, output, options, &mut registry)?;
        Ok(ctx.rendered.unwrap_or_default())
    }

    fn run_phase(&self, phase: &dyn Phase, ctx: &mut GenerationContext<'_>) -> Result<()> {
        let phase_name = phase.name();

        for plugin in &self.plugins {
            plugin.on_before_phase(phase_name, ctx)?;
        }

        phase.run(ctx)?;

        for plugin in &self.plugins {
            plugin.on_after_phase(phase_name, ctx)?;
        }

        Ok(())
    }
}

impl Default for Pipeline {
    fn default() -> Self {
        Self::new()
    }
}
