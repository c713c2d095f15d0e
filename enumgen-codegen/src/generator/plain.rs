use enumgen_spec::{EnumSpec, Variant};

use super::{
    EnumGenerator,
    lookup::lookup_section,
    sections::{body_text, common_sections},
};
use crate::template::{PLAIN_SKELETON, RenderContext, Section};

/// Valued enum whose `valueOf` throws on unknown values.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlainGenerator;

impl EnumGenerator for PlainGenerator {
    fn variant(&self) -> Variant {
        Variant::Plain
    }

    fn signature(&self) -> &'static str {
        "implements ValuedEnum"
    }

    fn skeleton(&self) -> &'static str {
        PLAIN_SKELETON
    }

    fn sections(&self, spec: &EnumSpec) -> RenderContext {
        common_sections(spec, &[])
            .with(
                Section::Constants,
                body_text(spec.free_text().constants_extra.as_deref()),
            )
            .with(Section::Lookup, lookup_section(spec))
    }
}
