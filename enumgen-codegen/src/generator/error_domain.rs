use enumgen_core::java_string_literal;
use enumgen_spec::{EnumSpec, Variant};

use super::{
    EnumGenerator,
    lookup::lookup_section,
    sections::{body_text, common_sections},
};
use crate::{
    builder::CodeBuilder,
    registry::WrapperBinding,
    template::{ERROR_DOMAIN_SKELETON, RenderContext, Section},
};

/// Nested wrapper type declared by the error-domain skeleton
pub const WRAPPER_NAME: &str = "NSErrorWrap";

/// Native type the wrapper extends
pub const WRAPPER_BASE: &str = "NSError";

const FOUNDATION_IMPORT: &str = "org.robovm.apple.foundation.*";

/// Error-code enum with an `NSErrorWrap` wrapper whose `getErrorCode`
/// returns `null` for unknown codes.
#[derive(Debug, Clone, Copy, Default)]
pub struct ErrorDomainGenerator;

impl EnumGenerator for ErrorDomainGenerator {
    fn variant(&self) -> Variant {
        Variant::ErrorDomain
    }

    fn signature(&self) -> &'static str {
        "implements NSErrorCode"
    }

    fn skeleton(&self) -> &'static str {
        ERROR_DOMAIN_SKELETON
    }

    fn sections(&self, spec: &EnumSpec) -> RenderContext {
        let free_text = spec.free_text();
        common_sections(spec, &[FOUNDATION_IMPORT])
            .with(Section::Constants, constants(spec))
            .with(Section::Members, body_text(free_text.members.as_deref()))
            .with(Section::Lookup, lookup_section(spec))
    }

    fn bindings(&self, spec: &EnumSpec) -> Vec<WrapperBinding> {
        vec![WrapperBinding::new(
            format!("{}.{}", spec.qualified_name(), WRAPPER_NAME),
            WRAPPER_BASE,
        )]
    }
}

/// `getClassDomain()` followed by any extra constants text.
fn constants(spec: &EnumSpec) -> String {
    // Validation guarantees the domain for this variant
    let domain = spec.error_domain_class_name().unwrap_or_default();

    let mut builder = CodeBuilder::java().at_level(1);
    builder
        .push_blank()
        .push_line("public static String getClassDomain() {")
        .push_indent()
        .push_line(&format!("return {};", java_string_literal(domain)))
        .push_dedent()
        .push_line("}");
    if let Some(extra) = spec.free_text().constants_extra.as_deref() {
        builder.push_text(extra);
    }
    builder.push_raw("    ");
    builder.build()
}
