//! Body of the generated `find(long)` lookup.
//!
//! `valueOf` and `NSErrorWrap.getErrorCode` both call `find`; they differ
//! only in what they do with `null`.

use enumgen_spec::{EnumSpec, LookupStrategy};

use crate::builder::CodeBuilder;

/// Render the lookup section for the spec's resolved strategy.
pub(crate) fn lookup_section(spec: &EnumSpec) -> String {
    let name = spec.name();
    let builder = CodeBuilder::java().at_level(1).blank();

    let builder = match spec.resolved_lookup() {
        LookupStrategy::Indexed => indexed(builder, name),
        _ => linear(builder, name),
    };

    builder.raw("    ").build()
}

fn linear(builder: CodeBuilder, name: &str) -> CodeBuilder {
    builder
        .line(&format!("private static {} find(long n) {{", name))
        .indent()
        .block_with_close(&format!("for ({} v : values()) {{", name), "}", |b| {
            b.block_with_close("if (v.n == n) {", "}", |b| b.line("return v;"))
        })
        .line("return null;")
        .dedent()
        .line("}")
}

/// Filled in declaration order with `putIfAbsent`, so a shared value keeps
/// mapping to the first constant.
fn indexed(builder: CodeBuilder, name: &str) -> CodeBuilder {
    builder
        .line(&format!(
            "private static final Map<Long, {}> BY_VALUE = new HashMap<>();",
            name
        ))
        .block_with_close("static {", "}", |b| {
            b.block_with_close(&format!("for ({} v : values()) {{", name), "}", |b| {
                b.line("BY_VALUE.putIfAbsent(v.n, v);")
            })
        })
        .blank()
        .block_with_close(&format!("private static {} find(long n) {{", name), "}", |b| {
            b.line("return BY_VALUE.get(n);")
        })
}
