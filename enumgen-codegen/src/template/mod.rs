//! Section-marker template engine.
//!
//! Skeletons delimit replaceable regions with `/*<key>*/ ... /*</key>*/`.
//! Rendering keeps the markers and swaps their bodies, so a rendered file
//! is itself a valid skeleton for the next run.
//!
//! # Example
//!
//! ```
//! use enumgen_codegen::template::{RenderContext, Section, TemplateEngine};
//! use enumgen_spec::Variant;
//!
//! let engine = TemplateEngine::for_variant(Variant::Plain);
//! let ctx = RenderContext::new()
//!     .with(Section::Name, "Color")
//!     .with(Section::Values, "RED(1L);")
//!     .with(Section::Lookup, "");
//!
//! let out = engine
//!     .render("enum /*<name>*//*</name>*/ { /*<values>*//*</values>*/ /*<lookup>*//*</lookup>*/ }", &ctx)
//!     .unwrap();
//! assert!(out.starts_with("enum /*<name>*/Color/*</name>*/"));
//! ```

mod context;
mod error;
mod section;
mod skeleton;

pub use context::RenderContext;
pub use error::RenderError;
pub use section::{Requirement, Section, SectionSchema};
pub use skeleton::{ERROR_DOMAIN_SKELETON, PLAIN_SKELETON, Segment, Skeleton};

use enumgen_spec::Variant;

/// Renders skeletons against a fixed section schema.
#[derive(Debug, Clone, Copy)]
pub struct TemplateEngine {
    schema: &'static SectionSchema,
}

impl TemplateEngine {
    pub fn new(schema: &'static SectionSchema) -> Self {
        Self { schema }
    }

    pub fn for_variant(variant: Variant) -> Self {
        Self::new(SectionSchema::for_variant(variant))
    }

    pub fn schema(&self) -> &'static SectionSchema {
        self.schema
    }

    /// Parse a skeleton with this engine's schema.
    pub fn parse(&self, src: &str) -> Result<Skeleton, RenderError> {
        Skeleton::parse(src, self.schema)
    }

    /// Parse and render a skeleton in one step.
    pub fn render(&self, src: &str, ctx: &RenderContext) -> Result<String, RenderError> {
        let skeleton = self.parse(src)?;
        self.render_skeleton(&skeleton, ctx)
    }

    /// Render a parsed skeleton.
    ///
    /// Every placeholder of a section gets the same text. Optional sections
    /// missing from `ctx` render empty.
    pub fn render_skeleton(
        &self,
        skeleton: &Skeleton,
        ctx: &RenderContext,
    ) -> Result<String, RenderError> {
        self.check(skeleton, ctx)?;

        let mut out = String::new();
        for segment in skeleton.segments() {
            match segment {
                Segment::Text(text) => out.push_str(text),
                Segment::Slot(section) => {
                    out.push_str(&section.open_marker());
                    out.push_str(ctx.get(*section).unwrap_or_default());
                    out.push_str(&section.close_marker());
                }
                Segment::Package => {
                    if !ctx.package().is_empty() {
                        out.push_str("package ");
                        out.push_str(ctx.package());
                        out.push_str(";\n");
                    }
                }
                Segment::License => {
                    if let Some(license) = ctx.license() {
                        out.push_str(license);
                        out.push('\n');
                    }
                }
            }
        }
        Ok(out)
    }

    fn check(&self, skeleton: &Skeleton, ctx: &RenderContext) -> Result<(), RenderError> {
        if let Some(section) = ctx.sections().find(|s| !self.schema.contains(*s)) {
            return Err(RenderError::UnknownSection {
                section,
                schema: self.schema.name(),
            });
        }

        for section in self.schema.mandatory() {
            if !ctx.contains(section) {
                return Err(RenderError::Unresolved { section });
            }
            if !skeleton.has_slot(section) {
                return Err(RenderError::MissingPlaceholder { section });
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SKELETON: &str = "__LICENSE__
package org.robovm.foo;

/*<annotations>*//*</annotations>*/
public enum /*<name>*/TheName/*</name>*/ {
    /*<values>*/
    /*</values>*/
    static /*<name>*/TheName/*</name>*/ first() { return values()[0]; }
    /*<lookup>*//*</lookup>*/
}
";

    fn full_context() -> RenderContext {
        let mut ctx = RenderContext::new()
            .with(Section::Name, "Color")
            .with(Section::Values, "\n    RED(1L);\n    ")
            .with(Section::Lookup, "");
        ctx.set_package("org.robovm.bar");
        ctx
    }

    fn plain() -> TemplateEngine {
        TemplateEngine::for_variant(Variant::Plain)
    }

    #[test]
    fn test_render() {
        let out = plain().render(SKELETON, &full_context()).unwrap();
        insta::assert_snapshot!(out, @r"
        package org.robovm.bar;

        /*<annotations>*//*</annotations>*/
        public enum /*<name>*/Color/*</name>*/ {
            /*<values>*/
            RED(1L);
            /*</values>*/
            static /*<name>*/Color/*</name>*/ first() { return values()[0]; }
            /*<lookup>*//*</lookup>*/
        }
        ");
    }

    #[test]
    fn test_render_is_idempotent_on_output() {
        let engine = plain();
        let first = engine.render(SKELETON, &full_context()).unwrap();
        let second = engine.render(&first, &full_context()).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_license_replaces_directive() {
        let mut ctx = full_context();
        ctx.set_license(Some("/*\n * MIT\n */".into()));
        let out = plain().render(SKELETON, &ctx).unwrap();
        assert!(out.starts_with("/*\n * MIT\n */\npackage org.robovm.bar;\n"));
    }

    #[test]
    fn test_empty_package_drops_line() {
        let mut ctx = full_context();
        ctx.set_package("");
        let out = plain().render(SKELETON, &ctx).unwrap();
        assert!(!out.contains("package "));
        assert!(out.starts_with("\n/*<annotations>*/"));
    }

    #[test]
    fn test_unresolved_mandatory_section() {
        let mut ctx = full_context();
        ctx.remove(Section::Name);
        let err = plain().render(SKELETON, &ctx).unwrap_err();
        assert_eq!(
            err,
            RenderError::Unresolved {
                section: Section::Name
            }
        );
    }

    #[test]
    fn test_missing_placeholder() {
        let skeleton = SKELETON.replace("/*<lookup>*//*</lookup>*/", "");
        let err = plain().render(&skeleton, &full_context()).unwrap_err();
        assert_eq!(
            err,
            RenderError::MissingPlaceholder {
                section: Section::Lookup
            }
        );
    }

    #[test]
    fn test_unknown_section_for_schema() {
        let ctx = full_context().with(Section::Members, "int x;");
        let err = plain().render(SKELETON, &ctx).unwrap_err();
        assert!(matches!(
            err,
            RenderError::UnknownSection {
                section: Section::Members,
                schema: "plain"
            }
        ));
    }

    #[test]
    fn test_malformed_skeleton() {
        let skeleton = SKELETON.replace("/*</values>*/", "");
        let err = plain().render(&skeleton, &full_context()).unwrap_err();
        assert!(matches!(err, RenderError::Unterminated { section: Section::Values, .. }));
    }

    #[test]
    fn test_optional_sections_render_empty() {
        let out = plain().render(SKELETON, &full_context()).unwrap();
        assert!(out.contains("/*<annotations>*//*</annotations>*/"));
    }
}
