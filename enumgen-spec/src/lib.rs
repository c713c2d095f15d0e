// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

mod error;
mod file;
pub mod lookup;
mod raw;
mod spec;
mod validate;
mod value;

use std::path::Path;

pub use error::{Error, Result, SourceContext};
pub use file::SpecFile;
pub use lookup::LookupFailure;
pub use raw::{Overrides, RawConstant, RawEnumSpec, TextOrList};
pub use spec::*;
pub use validate::ParseContext;
pub use value::{RawValue, ValueError};

/// Parse and validate an enum spec file
pub fn parse_file(path: impl AsRef<Path>) -> Result<EnumSpec> {
    let path = path.as_ref();
    let content = file::read(path)?;
    parse_str_with_filename(&content, &path.display().to_string())
}

/// Parse an enum spec from a string (uses "enum.toml" as default filename)
pub fn parse_str(content: &str) -> Result<EnumSpec> {
    parse_str_with_filename(content, "enum.toml")
}

/// Parse an enum spec from a string with a custom filename for error reporting
pub fn parse_str_with_filename(content: &str, filename: &str) -> Result<EnumSpec> {
    parse_str_with_overrides(content, filename, &Overrides::default())
}

/// Parse an enum spec, applying overrides before validation
pub fn parse_str_with_overrides(
    content: &str,
    filename: &str,
    overrides: &Overrides,
) -> Result<EnumSpec> {
    let ctx = ParseContext::new(content, filename);
    let raw: RawEnumSpec =
        toml::from_str(content).map_err(|e| ctx.source_context().parse_error(e))?;
    raw.with_overrides(overrides).validate(&ctx)
}

/// Best-effort read of the `name` key, for labelling errors of specs that
/// do not validate.
pub fn peek_name(content: &str) -> Option<String> {
    let table: toml::Table = toml::from_str(content).ok()?;
    table.get("name")?.as_str().map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_peek_name() {
        assert_eq!(peek_name("name = \"Color\"\nbogus = 1"), Some("Color".into()));
        assert_eq!(peek_name("name = 3"), None);
        assert_eq!(peek_name("not toml ["), None);
    }

    #[test]
    fn test_parse_error_has_span() {
        let err = parse_str("name = ").unwrap_err();
        assert!(matches!(*err, Error::Parse { span: Some(_), .. }));
    }

    #[test]
    fn test_unknown_field_rejected() {
        let err = parse_str(
            "name = \"Color\"\ncolour = true\n\n[[constants]]\nname = \"RED\"\nvalue = 1\n",
        )
        .unwrap_err();
        assert!(matches!(*err, Error::Parse { .. }));
    }
}
