//! Validation context and utilities for enum spec parsing.

use std::sync::Arc;

use miette::SourceSpan;

use crate::{Result, error::SourceContext};

/// Parsing and validation context that carries source information.
///
/// This struct encapsulates the source content, filename, and current path
/// through the spec, making it easier to pass validation context through
/// nested checks.
///
/// # Example
///
/// ```ignore
/// let ctx = ParseContext::new(src, "Color.toml");
/// ctx.validate_name("Color", "enum", None)?;
///
/// let nested = ctx.push("constants");
/// nested.validate_name("RED", "constant", None)?;
/// ```
#[derive(Debug, Clone)]
pub struct ParseContext<'a> {
    /// Source context for error reporting (shared across nested contexts)
    source: Arc<SourceContext>,
    /// Path segments for nested validation (e.g., ["constants"])
    path: Vec<&'a str>,
}

impl<'a> ParseContext<'a> {
    /// Create a new parse context with the given source and filename.
    pub fn new(src: &str, filename: &str) -> Self {
        Self {
            source: Arc::new(SourceContext::new(src, filename)),
            path: Vec::new(),
        }
    }

    /// Get the source content.
    pub fn src(&self) -> &str {
        self.source.src()
    }

    /// Get the filename.
    pub fn filename(&self) -> &str {
        self.source.filename()
    }

    /// Get the source context for error creation.
    pub fn source_context(&self) -> &SourceContext {
        &self.source
    }

    /// Push a path segment and return a new context.
    pub fn push(&self, segment: &'a str) -> Self {
        let mut new_path = self.path.clone();
        new_path.push(segment);
        Self {
            source: Arc::clone(&self.source),
            path: new_path,
        }
    }

    /// Get the current path as a dot-separated string.
    pub fn path_string(&self) -> String {
        self.path.join(".")
    }

    /// Get a context description for error messages.
    ///
    /// For example: "constant in 'constants'" or just "enum" if no path.
    pub fn context_for(&self, kind: &str) -> String {
        if self.path.is_empty() {
            kind.to_string()
        } else {
            format!("{} in '{}'", kind, self.path_string())
        }
    }

    /// Find the span of a name in the source.
    pub fn find_span(&self, name: &str) -> Option<SourceSpan> {
        find_name_span(self.source.src(), name)
    }

    /// Validate that a name is a usable Java identifier.
    ///
    /// `span` is used when the caller knows where the name was declared;
    /// otherwise the name is searched for in the source.
    pub fn validate_name(&self, name: &str, kind: &str, span: Option<SourceSpan>) -> Result<()> {
        let span = span.or_else(|| self.find_span(name));

        if is_java_keyword(name) {
            return Err(self
                .source
                .reserved_keyword_error(name, self.context_for(kind), span));
        }

        if let Some(reason) = validate_identifier(name) {
            return Err(self.source.invalid_identifier_error(
                name,
                self.context_for(kind),
                reason,
                span,
            ));
        }

        Ok(())
    }

    /// Validate a dotted package name. An empty package is allowed.
    pub fn validate_package(&self, package: &str) -> Result<()> {
        if package.is_empty() {
            return Ok(());
        }

        let span = self.find_span(package);
        for segment in package.split('.') {
            if is_java_keyword(segment) {
                return Err(self.source.invalid_package_error(
                    package,
                    format!("segment '{}' is a Java reserved keyword", segment),
                    span,
                ));
            }
            if let Some(reason) = validate_identifier(segment) {
                return Err(self.source.invalid_package_error(
                    package,
                    format!("segment '{}': {}", segment, reason),
                    span,
                ));
            }
        }

        Ok(())
    }
}

/// Java reserved keywords and literals that cannot be used as identifiers
/// Source: https://docs.oracle.com/javase/specs/jls/se17/html/jls-3.html#jls-3.9
pub(crate) const JAVA_KEYWORDS: &[&str] = &[
    "abstract", "assert", "boolean", "break", "byte", "case", "catch", "char", "class", "const",
    "continue", "default", "do", "double", "else", "enum", "extends", "final", "finally", "float",
    "for", "goto", "if", "implements", "import", "instanceof", "int", "interface", "long",
    "native", "new", "package", "private", "protected", "public", "return", "short", "static",
    "strictfp", "super", "switch", "synchronized", "this", "throw", "throws", "transient", "try",
    "void", "volatile", "while", "_",
    // Literals
    "true", "false", "null",
];

/// Names of members the generated enum declares itself
pub(crate) const RESERVED_MEMBERS: &[&str] = &["n", "BY_VALUE", "NSErrorWrap"];

/// Check if a name is a Java reserved keyword
pub(crate) fn is_java_keyword(name: &str) -> bool {
    JAVA_KEYWORDS.contains(&name)
}

/// Check if a name clashes with a member of the generated enum
pub(crate) fn is_reserved_member(name: &str) -> bool {
    RESERVED_MEMBERS.contains(&name)
}

/// Find the span of a name in the TOML source
/// Searches for the quoted string first, then for the bare name
pub(crate) fn find_name_span(src: &str, name: &str) -> Option<SourceSpan> {
    if name.is_empty() {
        return None;
    }

    for quote in ['"', '\''] {
        let pattern = format!("{quote}{name}{quote}");
        if let Some(pos) = src.find(&pattern) {
            // +1 to skip the opening quote
            return Some(SourceSpan::from((pos + 1, name.len())));
        }
    }

    src.find(name)
        .map(|pos| SourceSpan::from((pos, name.len())))
}

/// Validate that a name is a valid Java identifier
/// Returns None if valid, Some(reason) if invalid
pub(crate) fn validate_identifier(name: &str) -> Option<&'static str> {
    let mut chars = name.chars();

    match chars.next() {
        None => return Some("name cannot be empty"),
        Some(c) if c.is_alphabetic() || c == '_' || c == '$' => {}
        Some(_) => return Some("name must start with a letter, '_' or '$'"),
    }

    if chars.any(|c| !(c.is_alphanumeric() || c == '_' || c == '$')) {
        return Some("name must contain only letters, digits, '_' and '$'");
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_identifiers() {
        assert!(validate_identifier("Color").is_none());
        assert!(validate_identifier("NOT_FOUND").is_none());
        assert!(validate_identifier("_private").is_none());
        assert!(validate_identifier("$proxy").is_none());
        assert!(validate_identifier("Value2").is_none());
    }

    #[test]
    fn test_invalid_identifiers() {
        assert!(validate_identifier("").is_some());
        assert!(validate_identifier("2xx").is_some());
        assert!(validate_identifier("not-found").is_some());
        assert!(validate_identifier("has space").is_some());
    }

    #[test]
    fn test_java_keywords() {
        assert!(is_java_keyword("class"));
        assert!(is_java_keyword("default"));
        assert!(is_java_keyword("null"));
        assert!(!is_java_keyword("Default"));
        assert!(!is_java_keyword("value"));
    }

    #[test]
    fn test_reserved_members() {
        assert!(is_reserved_member("n"));
        assert!(is_reserved_member("NSErrorWrap"));
        assert!(!is_reserved_member("N"));
    }

    #[test]
    fn test_find_name_span_prefers_quoted() {
        let src = "name = \"RED\"\n# RED comment";
        let span = find_name_span(src, "RED").unwrap();
        assert_eq!(span.offset(), 8);
        assert_eq!(span.len(), 3);
    }

    #[test]
    fn test_context_for_nested() {
        let ctx = ParseContext::new("", "Color.toml");
        assert_eq!(ctx.context_for("enum"), "enum");
        assert_eq!(ctx.push("constants").context_for("constant"), "constant in 'constants'");
    }

    #[test]
    fn test_validate_package() {
        let ctx = ParseContext::new("package = \"org.robovm.apple\"", "Color.toml");
        assert!(ctx.validate_package("").is_ok());
        assert!(ctx.validate_package("org.robovm.apple").is_ok());
        assert!(ctx.validate_package("org..apple").is_err());
        assert!(ctx.validate_package("org.class.apple").is_err());
    }
}
