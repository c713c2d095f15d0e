//! License header rendering for generated sources.

use std::path::Path;

use eyre::{Context, Result};

/// A license block comment placed at the top of generated files.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LicenseHeader {
    comment: String,
}

impl LicenseHeader {
    /// Build a header from raw license text.
    ///
    /// Every line is prefixed with ` * ` and the whole text is wrapped in a
    /// `/* ... */` block comment.
    pub fn from_text(text: &str) -> Self {
        let mut comment = String::from("/*\n");
        for line in text.trim_end().lines() {
            let line = line.trim_end();
            if line.is_empty() {
                comment.push_str(" *\n");
            } else {
                comment.push_str(" * ");
                comment.push_str(line);
                comment.push('\n');
            }
        }
        comment.push_str(" */");
        Self { comment }
    }

    /// Read license text from a file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .wrap_err_with(|| format!("failed to read license '{}'", path.display()))?;
        Ok(Self::from_text(&text))
    }

    /// The rendered block comment, without a trailing newline.
    pub fn as_str(&self) -> &str {
        &self.comment
    }
}
