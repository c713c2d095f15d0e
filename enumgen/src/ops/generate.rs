//! Generate operation - runs the pipeline for one spec.

use std::path::Path;

use enumgen_codegen::{
    BindingRegistry, GenerateOptions, Pipeline, Stage, pipeline::TracingPlugin,
};
use enumgen_core::WriteResult;
use enumgen_spec::EnumSpec;
use eyre::Result;

use crate::reports::{GenerateReport, GenerationResult};

/// Execute the generate operation.
///
/// Bindings of the generated enum are added to `registry` once the file is
/// published.
pub fn generate(
    spec: EnumSpec,
    output: &Path,
    options: GenerateOptions,
    registry: &mut BindingRegistry,
) -> Result<GenerateReport> {
    let pipeline = Pipeline::new().plugin(TracingPlugin);
    let ctx = pipeline.run(spec, output, options, registry)?;

    let warnings = ctx.warnings().map(|d| d.to_string()).collect();

    let result = match (&ctx.stage, ctx.write_result) {
        (Stage::Emitted, Some(WriteResult::Unchanged)) => GenerationResult::Unchanged,
        (Stage::Emitted, _) => GenerationResult::Written,
        _ => GenerationResult::Preview {
            content: ctx.rendered.clone().unwrap_or_default(),
        },
    };

    Ok(GenerateReport {
        enum_name: ctx.spec.qualified_name(),
        variant: ctx.spec.variant().as_str(),
        lookup: ctx.spec.resolved_lookup().as_str(),
        constant_count: ctx.spec.constants().len(),
        output: output.to_path_buf(),
        merged: ctx.merged,
        bindings: ctx.bindings.clone(),
        warnings,
        result,
    })
}
