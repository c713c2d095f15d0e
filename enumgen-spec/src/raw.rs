//! Unvalidated enum spec as deserialized from TOML.

use std::collections::HashMap;

use indexmap::IndexSet;
use miette::SourceSpan;
use serde::Deserialize;
use toml::Spanned;

use crate::{
    Availability, Constant, EnumSpec, FreeText, LookupStrategy, Result, Variant,
    validate::{ParseContext, is_reserved_member},
    value::{RawValue, ValueError},
};

/// Either a free-text block or a list of entries
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum TextOrList {
    Text(String),
    List(Vec<String>),
}

impl Default for TextOrList {
    fn default() -> Self {
        TextOrList::List(Vec::new())
    }
}

/// A constant entry before validation
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RawConstant {
    pub name: Spanned<String>,
    pub value: Spanned<RawValue>,
    pub doc: Option<String>,
    pub since: Option<String>,
    pub deprecated: Option<String>,
}

/// An enum spec exactly as written in the input file.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RawEnumSpec {
    pub name: Spanned<String>,
    #[serde(default, alias = "namespace")]
    pub package: String,
    #[serde(default)]
    pub variant: Option<Spanned<Variant>>,
    #[serde(default, alias = "errorDomainClassName")]
    pub error_domain_class_name: Option<Spanned<String>>,
    #[serde(default)]
    pub lookup: LookupStrategy,
    pub marshaler: Option<String>,
    pub since: Option<String>,
    pub deprecated: Option<String>,
    #[serde(default)]
    pub imports: TextOrList,
    #[serde(default)]
    pub annotations: TextOrList,
    pub javadoc: Option<String>,
    pub bind: Option<String>,
    pub methods: Option<Spanned<String>>,
    pub members: Option<Spanned<String>>,
    #[serde(alias = "constantsExtra")]
    pub constants_extra: Option<String>,
    #[serde(default)]
    pub constants: Vec<RawConstant>,
}

/// Command-line values applied on top of the spec file before validation
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub package: Option<String>,
    pub lookup: Option<LookupStrategy>,
}

impl RawEnumSpec {
    /// Apply overrides; the result still has to be validated.
    pub fn with_overrides(mut self, overrides: &Overrides) -> Self {
        if let Some(package) = &overrides.package {
            self.package = package.clone();
        }
        if let Some(lookup) = overrides.lookup {
            self.lookup = lookup;
        }
        self
    }

    /// Validate and convert into an [`EnumSpec`].
    ///
    /// Nothing downstream of this call ever sees an invalid spec.
    pub fn validate(self, ctx: &ParseContext) -> Result<EnumSpec> {
        let source = ctx.source_context();
        let name = self.name.get_ref().clone();
        let name_span = span_of(self.name.span());

        ctx.validate_name(&name, "enum", Some(name_span))?;
        ctx.validate_package(&self.package)?;

        if self.constants.is_empty() {
            return Err(source.empty_constants_error(&name, Some(name_span)));
        }

        let constants = validate_constants(self.constants, &ctx.push("constants"))?;

        let variant = self.variant.as_ref().map(|v| *v.get_ref()).unwrap_or_default();
        let variant_span = self.variant.as_ref().map(|v| span_of(v.span()));

        let error_domain_class_name = match (variant, self.error_domain_class_name) {
            (Variant::ErrorDomain, Some(domain)) if !domain.get_ref().trim().is_empty() => {
                Some(domain.into_inner().trim().to_string())
            }
            (Variant::ErrorDomain, _) => {
                return Err(source.missing_error_domain_error(&name, variant_span));
            }
            (Variant::Plain, Some(domain)) => {
                return Err(source.unexpected_field_error(
                    "error_domain_class_name",
                    variant.as_str(),
                    Some(span_of(domain.span())),
                ));
            }
            (Variant::Plain, None) => None,
        };

        if let (Variant::Plain, Some(members)) = (variant, &self.members) {
            return Err(source.unexpected_field_error(
                "members",
                variant.as_str(),
                Some(span_of(members.span())),
            ));
        }

        Ok(EnumSpec {
            name,
            package: self.package,
            constants,
            imports: collect_imports(self.imports),
            annotations: collect_annotations(self.annotations),
            free_text: FreeText {
                javadoc: non_blank(self.javadoc),
                bind: non_blank(self.bind),
                members: non_blank(self.members.map(Spanned::into_inner)),
                methods: non_blank(self.methods.map(Spanned::into_inner)),
                constants_extra: non_blank(self.constants_extra),
            },
            variant,
            error_domain_class_name,
            marshaler: non_blank(self.marshaler),
            availability: Availability {
                since: non_blank(self.since),
                deprecated: non_blank(self.deprecated),
            },
            lookup: self.lookup,
        })
    }
}

fn validate_constants(raw: Vec<RawConstant>, ctx: &ParseContext) -> Result<Vec<Constant>> {
    let source = ctx.source_context();
    let mut seen: HashMap<String, SourceSpan> = HashMap::new();
    let mut constants = Vec::with_capacity(raw.len());

    for entry in raw {
        let name = entry.name.get_ref().clone();
        let name_span = span_of(entry.name.span());

        ctx.validate_name(&name, "constant", Some(name_span))?;
        if is_reserved_member(&name) {
            return Err(source.invalid_identifier_error(
                &name,
                ctx.context_for("constant"),
                "name clashes with a member of the generated enum",
                Some(name_span),
            ));
        }

        if let Some(first_span) = seen.get(&name) {
            return Err(source.duplicate_constant_error(&name, *first_span, name_span));
        }
        seen.insert(name.clone(), name_span);

        let value_span = span_of(entry.value.span());
        let value = match entry.value.get_ref().to_i64() {
            Ok(v) => v,
            Err(ValueError::NonNumeric) => {
                return Err(source.non_numeric_value_error(
                    &name,
                    entry.value.get_ref().to_string(),
                    value_span,
                ));
            }
            Err(ValueError::OutOfRange) => {
                return Err(source.value_out_of_range_error(
                    &name,
                    entry.value.get_ref().to_string(),
                    value_span,
                ));
            }
        };

        constants.push(Constant {
            name,
            value,
            doc: non_blank(entry.doc),
            availability: Availability {
                since: non_blank(entry.since),
                deprecated: non_blank(entry.deprecated),
            },
        });
    }

    Ok(constants)
}

/// Accepts `["java.util.*"]` as well as `"import java.util.*;\n..."`
fn collect_imports(imports: TextOrList) -> IndexSet<String> {
    let entries: Vec<String> = match imports {
        TextOrList::List(list) => list,
        TextOrList::Text(text) => text.lines().map(str::to_string).collect(),
    };

    entries
        .iter()
        .map(|line| {
            let line = line.trim();
            let line = line.strip_prefix("import ").unwrap_or(line);
            line.trim_end_matches(';').trim().to_string()
        })
        .filter(|line| !line.is_empty())
        .collect()
}

fn collect_annotations(annotations: TextOrList) -> Vec<String> {
    let entries = match annotations {
        TextOrList::List(list) => list,
        TextOrList::Text(text) => vec![text],
    };
    entries
        .into_iter()
        .map(|a| a.trim().to_string())
        .filter(|a| !a.is_empty())
        .collect()
}

fn non_blank(text: Option<String>) -> Option<String> {
    text.filter(|t| !t.trim().is_empty())
}

fn span_of(range: std::ops::Range<usize>) -> SourceSpan {
    (range.start, range.end - range.start).into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collect_imports_from_list() {
        let imports = collect_imports(TextOrList::List(vec![
            "java.util.*".into(),
            "import org.robovm.rt.bro.*;".into(),
            "java.util.*".into(),
            "  ".into(),
        ]));
        let imports: Vec<&str> = imports.iter().map(String::as_str).collect();
        assert_eq!(imports, vec!["java.util.*", "org.robovm.rt.bro.*"]);
    }

    #[test]
    fn test_collect_imports_from_text() {
        let imports = collect_imports(TextOrList::Text(
            "import java.io.*;\n\nimport java.nio.*;\n".into(),
        ));
        let imports: Vec<&str> = imports.iter().map(String::as_str).collect();
        assert_eq!(imports, vec!["java.io.*", "java.nio.*"]);
    }

    #[test]
    fn test_collect_annotations_text_is_one_entry() {
        let annotations = collect_annotations(TextOrList::Text("@Library(\"a b\")".into()));
        assert_eq!(annotations, vec!["@Library(\"a b\")".to_string()]);
    }

    #[test]
    fn test_overrides() {
        let raw: RawEnumSpec = toml::from_str(
            r#"
            name = "Color"
            package = "org.old"

            [[constants]]
            name = "RED"
            value = 1
            "#,
        )
        .unwrap();

        let raw = raw.with_overrides(&Overrides {
            package: Some("org.new".into()),
            lookup: Some(LookupStrategy::Indexed),
        });

        assert_eq!(raw.package, "org.new");
        assert_eq!(raw.lookup, LookupStrategy::Indexed);
    }
}
