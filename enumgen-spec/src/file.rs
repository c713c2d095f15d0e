use std::path::{Path, PathBuf};

use crate::{EnumSpec, Overrides, Result, parse_str_with_overrides};

/// An enum spec file with both raw content and the validated spec.
#[derive(Debug)]
pub struct SpecFile {
    path: PathBuf,
    content: String,
    spec: EnumSpec,
}

impl SpecFile {
    /// Open and validate a spec file.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        Self::open_with(path, &Overrides::default())
    }

    /// Open a spec file, applying command-line overrides before validation.
    pub fn open_with(path: impl AsRef<Path>, overrides: &Overrides) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let content = read(&path)?;
        let filename = path.display().to_string();
        let spec = parse_str_with_overrides(&content, &filename, overrides)?;

        Ok(Self {
            path,
            content,
            spec,
        })
    }

    /// Get the file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Get the raw content.
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Get the validated spec.
    pub fn spec(&self) -> &EnumSpec {
        &self.spec
    }

    pub fn into_spec(self) -> EnumSpec {
        self.spec
    }
}

pub(crate) fn read(path: &Path) -> Result<String> {
    std::fs::read_to_string(path).map_err(|e| {
        Box::new(crate::Error::Io {
            path: path.to_path_buf(),
            source: e,
        })
    })
}
