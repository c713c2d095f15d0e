//! Section text shared by all generator variants.

use enumgen_spec::{Availability, Constant, EnumSpec};
use indexmap::IndexSet;

use crate::{
    builder::CodeBuilder,
    template::{RenderContext, Section},
};

/// Wildcard imports every generated enum starts with
pub const DEFAULT_IMPORTS: &[&str] = &[
    "java.io.*",
    "java.nio.*",
    "java.util.*",
    "org.robovm.objc.*",
    "org.robovm.objc.annotation.*",
    "org.robovm.objc.block.*",
    "org.robovm.rt.*",
    "org.robovm.rt.annotation.*",
    "org.robovm.rt.bro.*",
    "org.robovm.rt.bro.annotation.*",
    "org.robovm.rt.bro.ptr.*",
];

/// Sections every variant fills the same way.
pub(crate) fn common_sections(spec: &EnumSpec, extra_imports: &[&str]) -> RenderContext {
    let free_text = spec.free_text();
    let mut ctx = RenderContext::new()
        .with(Section::Imports, imports(spec, extra_imports))
        .with(Section::Name, spec.name())
        .with(Section::Values, values(spec.constants()))
        .with(Section::Bind, body_text(free_text.bind.as_deref()))
        .with(Section::Methods, body_text(free_text.methods.as_deref()));

    if let Some(javadoc) = javadoc(spec) {
        ctx.insert(Section::Javadoc, javadoc);
    }
    if let Some(annotations) = annotations(spec) {
        ctx.insert(Section::Annotations, annotations);
    }
    ctx
}

fn imports(spec: &EnumSpec, extra: &[&str]) -> String {
    let imports: IndexSet<&str> = DEFAULT_IMPORTS
        .iter()
        .chain(extra)
        .copied()
        .chain(spec.imports().iter().map(String::as_str))
        .collect();

    let mut out = String::from("\n");
    for import in imports {
        out.push_str("import ");
        out.push_str(import);
        out.push_str(";\n");
    }
    out
}

/// `@Marshaler` first, then the spec's annotations, duplicates dropped.
fn annotations(spec: &EnumSpec) -> Option<String> {
    let marshaler = spec.marshaler().map(|m| format!("@Marshaler({}.class)", m));
    let annotations: IndexSet<&str> = marshaler
        .as_deref()
        .into_iter()
        .chain(spec.annotations().iter().map(String::as_str))
        .collect();

    if annotations.is_empty() {
        return None;
    }
    Some(annotations.into_iter().collect::<Vec<_>>().join(" "))
}

fn javadoc(spec: &EnumSpec) -> Option<String> {
    let free_text = spec.free_text().javadoc.as_deref();
    if free_text.is_none() && spec.availability().is_empty() {
        return None;
    }

    let mut builder = CodeBuilder::java();
    builder.push_blank();
    match free_text {
        Some(text) if spec.availability().is_empty() => {
            builder.push_text(text);
        }
        // Availability tags join the free text in a single doc block
        text => {
            let doc = text.map(comment_body).unwrap_or_default();
            push_availability(&mut builder, &doc, spec.availability());
        }
    }
    Some(builder.build())
}

/// Lines of a doc comment without the `/**`, `*/` and leading `*` markers.
///
/// Text that is not a doc comment is returned line by line.
fn comment_body(text: &str) -> Vec<&str> {
    let text = text.trim();
    let inner = text
        .strip_prefix("/**")
        .and_then(|t| t.strip_suffix("*/"))
        .unwrap_or(text);

    let lines: Vec<&str> = inner
        .lines()
        .map(|line| {
            let line = line.trim_start();
            match line.strip_prefix('*') {
                Some(rest) => rest.strip_prefix(' ').unwrap_or(rest),
                None => line,
            }
            .trim_end()
        })
        .collect();

    let start = lines.iter().position(|l| !l.is_empty()).unwrap_or(lines.len());
    let end = lines.iter().rposition(|l| !l.is_empty()).map_or(start, |i| i + 1);
    lines[start..end].to_vec()
}

/// Constant declarations, one per line, in declaration order.
pub(crate) fn values(constants: &[Constant]) -> String {
    let mut builder = CodeBuilder::java().at_level(1);
    builder.push_blank();

    for (i, constant) in constants.iter().enumerate() {
        let doc: Vec<&str> = constant
            .doc
            .as_deref()
            .map(|d| d.trim().lines().collect())
            .unwrap_or_default();
        push_availability(&mut builder, &doc, &constant.availability);

        let terminator = if i + 1 == constants.len() { ';' } else { ',' };
        builder.push_line(&format!(
            "{}({}L){}",
            constant.name, constant.value, terminator
        ));
    }

    builder.push_raw("    ");
    builder.build()
}

/// Doc block with availability tags, followed by `@Deprecated` when needed.
fn push_availability(builder: &mut CodeBuilder, doc: &[&str], availability: &Availability) {
    let mut lines: Vec<String> = doc.iter().map(|l| l.to_string()).collect();
    if let Some(since) = &availability.since {
        lines.push(format!("@since Available in iOS {} and later.", since));
    }
    if let Some(deprecated) = &availability.deprecated {
        lines.push(format!("@deprecated Deprecated in iOS {}.", deprecated));
    }

    builder.push_javadoc(&lines);
    if availability.deprecated.is_some() {
        builder.push_line("@Deprecated");
    }
}

/// Free text placed inside the enum body.
///
/// Absent text keeps the empty shape of the skeleton section.
pub(crate) fn body_text(text: Option<&str>) -> String {
    let mut builder = CodeBuilder::java().at_level(1);
    builder.push_blank();
    if let Some(text) = text {
        builder.push_text(text);
    }
    builder.push_raw("    ");
    builder.build()
}
