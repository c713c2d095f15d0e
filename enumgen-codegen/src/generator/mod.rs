//! Java enum generators.
//!
//! Each [`EnumGenerator`] owns a skeleton and fills the sections of its
//! schema from an [`EnumSpec`]. [`Generator`] pairs a spec with its
//! generator and the per-run [`GenerateOptions`].

mod error_domain;
mod lookup;
mod plain;
mod sections;

use enumgen_core::LicenseHeader;
use enumgen_spec::{EnumSpec, Variant};
pub use error_domain::{ErrorDomainGenerator, WRAPPER_BASE, WRAPPER_NAME};
pub use plain::PlainGenerator;
pub use sections::DEFAULT_IMPORTS;

use crate::{
    registry::WrapperBinding,
    template::{RenderContext, RenderError, TemplateEngine},
};

/// Per-run generation settings.
#[derive(Debug, Clone, Default)]
pub struct GenerateOptions {
    /// Header replacing the `__LICENSE__` line
    pub license: Option<LicenseHeader>,
    /// Ignore an existing output file and start from the built-in skeleton
    pub fresh: bool,
    /// Render only; never touch the destination
    pub dry_run: bool,
}

/// Fills the sections of one skeleton variant.
pub trait EnumGenerator: Send + Sync {
    fn variant(&self) -> Variant;

    /// Type declaration text that identifies a file generated from this
    /// variant's skeleton.
    fn signature(&self) -> &'static str;

    /// Built-in skeleton source
    fn skeleton(&self) -> &'static str;

    /// Section values for `spec`.
    fn sections(&self, spec: &EnumSpec) -> RenderContext;

    /// Wrapper bindings the generated type declares.
    #[allow(unused_variables)]
    fn bindings(&self, spec: &EnumSpec) -> Vec<WrapperBinding> {
        Vec::new()
    }

    fn engine(&self) -> TemplateEngine {
        TemplateEngine::for_variant(self.variant())
    }
}

/// The generator for a variant.
pub fn generator_for(variant: Variant) -> &'static dyn EnumGenerator {
    match variant {
        Variant::Plain => &PlainGenerator,
        Variant::ErrorDomain => &ErrorDomainGenerator,
    }
}

/// The variant a previously generated source was rendered from.
pub fn detect_variant(source: &str) -> Option<Variant> {
    [Variant::ErrorDomain, Variant::Plain]
        .into_iter()
        .find(|v| source.contains(generator_for(*v).signature()))
}

/// A spec bound to its generator.
pub struct Generator<'a> {
    spec: &'a EnumSpec,
    options: &'a GenerateOptions,
    inner: &'static dyn EnumGenerator,
}

impl<'a> Generator<'a> {
    pub fn new(spec: &'a EnumSpec, options: &'a GenerateOptions) -> Self {
        Self {
            spec,
            options,
            inner: generator_for(spec.variant()),
        }
    }

    pub fn spec(&self) -> &'a EnumSpec {
        self.spec
    }

    pub fn options(&self) -> &'a GenerateOptions {
        self.options
    }

    /// Full render context, including package and license.
    pub fn context(&self) -> RenderContext {
        let mut ctx = self.inner.sections(self.spec);
        ctx.set_package(self.spec.package());
        ctx.set_license(
            self.options
                .license
                .as_ref()
                .map(|l| l.as_str().to_string()),
        );
        ctx
    }

    /// Render into `existing` when given, else into the built-in skeleton.
    ///
    /// An existing file generated from the other variant is rejected, since
    /// its hand-kept regions belong to a different shape.
    pub fn render(&self, existing: Option<&str>) -> Result<String, RenderError> {
        let expected = self.inner.variant();
        if let Some(found) = existing.and_then(detect_variant).filter(|v| *v != expected) {
            return Err(RenderError::VariantMismatch { expected, found });
        }

        let skeleton = existing.unwrap_or(self.inner.skeleton());
        self.inner.engine().render(skeleton, &self.context())
    }

    /// Render into the built-in skeleton.
    pub fn preview(&self) -> Result<String, RenderError> {
        self.render(None)
    }

    pub fn bindings(&self) -> Vec<WrapperBinding> {
        self.inner.bindings(self.spec)
    }
}
