use std::path::PathBuf;

use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

/// Result type for enum spec operations (boxed to reduce size on stack)
pub type Result<T> = std::result::Result<T, Box<Error>>;

/// Source context for error reporting.
///
/// Encapsulates the source content and filename, reducing parameter passing
/// in error factory functions.
///
/// # Example
///
/// ```ignore
/// let ctx = SourceContext::new(content, "Color.toml");
/// ctx.empty_constants_error("Color", span);
/// ```
#[derive(Debug, Clone)]
pub struct SourceContext {
    src: String,
    filename: String,
}

impl SourceContext {
    /// Create a new source context.
    pub fn new(src: impl Into<String>, filename: impl Into<String>) -> Self {
        Self {
            src: src.into(),
            filename: filename.into(),
        }
    }

    /// Get the source content.
    pub fn src(&self) -> &str {
        &self.src
    }

    /// Get the filename.
    pub fn filename(&self) -> &str {
        &self.filename
    }

    /// Create a NamedSource for miette error reporting.
    pub fn named_source(&self) -> NamedSource<String> {
        NamedSource::new(&self.filename, self.src.clone())
    }

    /// Create a parse error from a toml error.
    pub fn parse_error(&self, source: toml::de::Error) -> Box<Error> {
        let span = source.span().map(SourceSpan::from);
        Box::new(Error::Parse {
            src: self.named_source(),
            span,
            source,
        })
    }

    /// Create an empty constants error.
    pub fn empty_constants_error(
        &self,
        name: impl Into<String>,
        span: Option<SourceSpan>,
    ) -> Box<Error> {
        Box::new(Error::EmptyConstants {
            src: self.named_source(),
            span,
            name: name.into(),
        })
    }

    /// Create a duplicate constant name error.
    pub fn duplicate_constant_error(
        &self,
        name: impl Into<String>,
        first_span: impl Into<SourceSpan>,
        second_span: impl Into<SourceSpan>,
    ) -> Box<Error> {
        Box::new(Error::DuplicateConstant {
            src: self.named_source(),
            first_span: first_span.into(),
            second_span: second_span.into(),
            name: name.into(),
        })
    }

    /// Create a missing error domain error.
    pub fn missing_error_domain_error(
        &self,
        name: impl Into<String>,
        span: Option<SourceSpan>,
    ) -> Box<Error> {
        Box::new(Error::MissingErrorDomain {
            src: self.named_source(),
            span,
            name: name.into(),
        })
    }

    /// Create a non-numeric value error.
    pub fn non_numeric_value_error(
        &self,
        constant: impl Into<String>,
        value: impl Into<String>,
        span: impl Into<SourceSpan>,
    ) -> Box<Error> {
        Box::new(Error::NonNumericValue {
            src: self.named_source(),
            span: span.into(),
            constant: constant.into(),
            value: value.into(),
        })
    }

    /// Create a value out of range error.
    pub fn value_out_of_range_error(
        &self,
        constant: impl Into<String>,
        value: impl Into<String>,
        span: impl Into<SourceSpan>,
    ) -> Box<Error> {
        Box::new(Error::ValueOutOfRange {
            src: self.named_source(),
            span: span.into(),
            constant: constant.into(),
            value: value.into(),
        })
    }

    /// Create a reserved keyword error.
    pub fn reserved_keyword_error(
        &self,
        name: impl Into<String>,
        context: impl Into<String>,
        span: Option<SourceSpan>,
    ) -> Box<Error> {
        Box::new(Error::ReservedKeyword {
            src: self.named_source(),
            span,
            name: name.into(),
            context: context.into(),
        })
    }

    /// Create an invalid identifier error.
    pub fn invalid_identifier_error(
        &self,
        name: impl Into<String>,
        context: impl Into<String>,
        reason: impl Into<String>,
        span: Option<SourceSpan>,
    ) -> Box<Error> {
        Box::new(Error::InvalidIdentifier {
            src: self.named_source(),
            span,
            name: name.into(),
            context: context.into(),
            reason: reason.into(),
        })
    }

    /// Create an invalid package error.
    pub fn invalid_package_error(
        &self,
        package: impl Into<String>,
        reason: impl Into<String>,
        span: Option<SourceSpan>,
    ) -> Box<Error> {
        Box::new(Error::InvalidPackage {
            src: self.named_source(),
            span,
            package: package.into(),
            reason: reason.into(),
        })
    }

    /// Create an error for a field the chosen variant does not accept.
    pub fn unexpected_field_error(
        &self,
        field: &'static str,
        variant: impl Into<String>,
        span: Option<SourceSpan>,
    ) -> Box<Error> {
        Box::new(Error::UnexpectedField {
            src: self.named_source(),
            span,
            field,
            variant: variant.into(),
        })
    }
}

#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("failed to read '{path}'")]
    #[diagnostic(code(enumgen::io))]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse enum spec")]
    #[diagnostic(code(enumgen::parse_error))]
    Parse {
        #[source_code]
        src: NamedSource<String>,
        #[label("parse error here")]
        span: Option<SourceSpan>,
        #[source]
        source: toml::de::Error,
    },

    #[error("enum '{name}' declares no constants")]
    #[diagnostic(
        code(enumgen::empty_constants),
        help("add at least one [[constants]] entry with a name and a value")
    )]
    EmptyConstants {
        #[source_code]
        src: NamedSource<String>,
        #[label("enum without variants")]
        span: Option<SourceSpan>,
        name: String,
    },

    #[error("duplicate constant name '{name}'")]
    #[diagnostic(
        code(enumgen::duplicate_constant),
        help("constant names are case-sensitive and must be unique; duplicate values are fine")
    )]
    DuplicateConstant {
        #[source_code]
        src: NamedSource<String>,
        #[label("first declared here")]
        first_span: SourceSpan,
        #[label("declared again here")]
        second_span: SourceSpan,
        name: String,
    },

    #[error("error-domain enum '{name}' has no error_domain_class_name")]
    #[diagnostic(
        code(enumgen::missing_error_domain),
        help("set error_domain_class_name to the native error domain, e.g. \"NSURLErrorDomain\"")
    )]
    MissingErrorDomain {
        #[source_code]
        src: NamedSource<String>,
        #[label("error-domain variant declared here")]
        span: Option<SourceSpan>,
        name: String,
    },

    #[error("constant '{constant}' has a non-numeric value {value}")]
    #[diagnostic(
        code(enumgen::non_numeric_value),
        help("use an integer, or a string such as \"0x1F\", \"-5\" or \"1_000\"")
    )]
    NonNumericValue {
        #[source_code]
        src: NamedSource<String>,
        #[label("not a 64-bit integer")]
        span: SourceSpan,
        constant: String,
        value: String,
    },

    #[error("value {value} of constant '{constant}' does not fit a 64-bit signed integer")]
    #[diagnostic(code(enumgen::value_out_of_range))]
    ValueOutOfRange {
        #[source_code]
        src: NamedSource<String>,
        #[label("out of range")]
        span: SourceSpan,
        constant: String,
        value: String,
    },

    #[error("'{name}' is a Java reserved keyword")]
    #[diagnostic(help("rename the {context} '{name}', e.g. '{name}_' or 'Value{name}'"))]
    ReservedKeyword {
        #[source_code]
        src: NamedSource<String>,
        #[label("reserved keyword used here")]
        span: Option<SourceSpan>,
        name: String,
        context: String,
    },

    #[error("invalid {context} name '{name}'")]
    #[diagnostic(help(
        "{reason}. Use only letters, digits, '_' and '$', starting with a letter, '_' or '$'."
    ))]
    InvalidIdentifier {
        #[source_code]
        src: NamedSource<String>,
        #[label("invalid identifier")]
        span: Option<SourceSpan>,
        name: String,
        context: String,
        reason: String,
    },

    #[error("invalid package '{package}'")]
    #[diagnostic(help("{reason}"))]
    InvalidPackage {
        #[source_code]
        src: NamedSource<String>,
        #[label("invalid package")]
        span: Option<SourceSpan>,
        package: String,
        reason: String,
    },

    #[error("'{field}' is not allowed for {variant} enums")]
    #[diagnostic(
        code(enumgen::unexpected_field),
        help("remove '{field}' or set variant = \"error-domain\"")
    )]
    UnexpectedField {
        #[source_code]
        src: NamedSource<String>,
        #[label("not used by this variant")]
        span: Option<SourceSpan>,
        field: &'static str,
        variant: String,
    },
}
