//! Validated enum spec data model.

use std::{fmt, str::FromStr};

use enumgen_core::qualified_name;
use indexmap::IndexSet;
use serde::Deserialize;

use crate::{Error, Result};

/// Number of constants from which `auto` switches to an indexed lookup
pub const INDEXED_LOOKUP_THRESHOLD: usize = 32;

/// Which generated shape to emit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Variant {
    /// Valued enum with a hard-failing `valueOf`
    #[default]
    Plain,
    /// Error-code enum with a bound `NSErrorWrap` wrapper type
    #[serde(alias = "nserror")]
    ErrorDomain,
}

impl Variant {
    pub fn as_str(&self) -> &'static str {
        match self {
            Variant::Plain => "plain",
            Variant::ErrorDomain => "error-domain",
        }
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How the generated code maps a value back to a variant.
///
/// Every strategy returns the first declared constant when several share a
/// value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LookupStrategy {
    /// Pick by constant count
    #[default]
    Auto,
    /// Scan `values()` in declaration order
    Linear,
    /// Static hash map filled in declaration order
    Indexed,
}

impl LookupStrategy {
    /// Resolve `Auto` for an enum with `count` constants.
    pub fn resolve(self, count: usize) -> LookupStrategy {
        match self {
            LookupStrategy::Auto if count >= INDEXED_LOOKUP_THRESHOLD => LookupStrategy::Indexed,
            LookupStrategy::Auto => LookupStrategy::Linear,
            other => other,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            LookupStrategy::Auto => "auto",
            LookupStrategy::Linear => "linear",
            LookupStrategy::Indexed => "indexed",
        }
    }
}

impl fmt::Display for LookupStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LookupStrategy {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "auto" => Ok(LookupStrategy::Auto),
            "linear" => Ok(LookupStrategy::Linear),
            "indexed" => Ok(LookupStrategy::Indexed),
            other => Err(format!(
                "unknown lookup strategy '{}' (expected auto, linear or indexed)",
                other
            )),
        }
    }
}

/// Platform availability of an enum or a constant
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Availability {
    /// First OS version that has it
    pub since: Option<String>,
    /// OS version that deprecated it
    pub deprecated: Option<String>,
}

impl Availability {
    pub fn is_empty(&self) -> bool {
        self.since.is_none() && self.deprecated.is_none()
    }
}

/// One named native value
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Constant {
    pub name: String,
    pub value: i64,
    pub doc: Option<String>,
    pub availability: Availability,
}

/// Raw text blocks copied into the matching template sections
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FreeText {
    pub javadoc: Option<String>,
    pub bind: Option<String>,
    pub members: Option<String>,
    pub methods: Option<String>,
    pub constants_extra: Option<String>,
}

/// A validated enum spec.
///
/// Only obtainable through validation (see [`crate::parse_str`]), and
/// read-only afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnumSpec {
    pub(crate) name: String,
    pub(crate) package: String,
    pub(crate) constants: Vec<Constant>,
    pub(crate) imports: IndexSet<String>,
    pub(crate) annotations: Vec<String>,
    pub(crate) free_text: FreeText,
    pub(crate) variant: Variant,
    pub(crate) error_domain_class_name: Option<String>,
    pub(crate) marshaler: Option<String>,
    pub(crate) availability: Availability,
    pub(crate) lookup: LookupStrategy,
}

impl EnumSpec {
    /// Simple type name of the generated enum
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Target package (may be empty)
    pub fn package(&self) -> &str {
        &self.package
    }

    /// Fully qualified name of the generated enum (e.g., "org.foo.Color")
    pub fn qualified_name(&self) -> String {
        qualified_name(&self.package, &self.name)
    }

    /// Constants in declaration order
    pub fn constants(&self) -> &[Constant] {
        &self.constants
    }

    /// Imports requested by the spec, in first-seen order
    pub fn imports(&self) -> &IndexSet<String> {
        &self.imports
    }

    /// Annotations requested by the spec, in declaration order
    pub fn annotations(&self) -> &[String] {
        &self.annotations
    }

    pub fn free_text(&self) -> &FreeText {
        &self.free_text
    }

    pub fn variant(&self) -> Variant {
        self.variant
    }

    /// Native error domain name (always present for error-domain enums)
    pub fn error_domain_class_name(&self) -> Option<&str> {
        self.error_domain_class_name.as_deref()
    }

    pub fn marshaler(&self) -> Option<&str> {
        self.marshaler.as_deref()
    }

    pub fn availability(&self) -> &Availability {
        &self.availability
    }

    /// Lookup strategy as configured (may be `Auto`)
    pub fn lookup(&self) -> LookupStrategy {
        self.lookup
    }

    /// Lookup strategy with `Auto` resolved against the constant count
    pub fn resolved_lookup(&self) -> LookupStrategy {
        self.lookup.resolve(self.constants.len())
    }

    /// Look up a constant by name
    pub fn constant(&self, name: &str) -> Option<&Constant> {
        self.constants.iter().find(|c| c.name == name)
    }
}

impl FromStr for EnumSpec {
    type Err = Box<Error>;

    fn from_str(s: &str) -> Result<Self> {
        crate::parse_str(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_resolve() {
        assert_eq!(LookupStrategy::Auto.resolve(3), LookupStrategy::Linear);
        assert_eq!(
            LookupStrategy::Auto.resolve(INDEXED_LOOKUP_THRESHOLD),
            LookupStrategy::Indexed
        );
        assert_eq!(LookupStrategy::Linear.resolve(500), LookupStrategy::Linear);
        assert_eq!(LookupStrategy::Indexed.resolve(1), LookupStrategy::Indexed);
    }

    #[test]
    fn test_lookup_from_str() {
        assert_eq!("indexed".parse(), Ok(LookupStrategy::Indexed));
        assert!("hashed".parse::<LookupStrategy>().is_err());
    }

    #[test]
    fn test_variant_display() {
        assert_eq!(Variant::Plain.to_string(), "plain");
        assert_eq!(Variant::ErrorDomain.to_string(), "error-domain");
    }

    #[test]
    fn test_qualified_name() {
        let spec: EnumSpec = r#"
            name = "Color"
            package = "org.robovm.foo"

            [[constants]]
            name = "RED"
            value = 1
        "#
        .parse()
        .unwrap();

        assert_eq!(spec.qualified_name(), "org.robovm.foo.Color");
        assert_eq!(spec.constant("RED").map(|c| c.value), Some(1));
    }
}
