use std::{
    fs::Permissions,
    io::{ErrorKind, Write},
    path::{Path, PathBuf},
};

use eyre::{Context, Result};
use tempfile::NamedTempFile;

/// Result of a write operation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteResult {
    /// File was published
    Written,
    /// Destination already held identical content
    Unchanged,
}

/// A fully rendered file waiting to be published
pub struct File {
    path: PathBuf,
    content: String,
}

impl File {
    /// Create a new file with the given path and content
    pub fn new(path: impl Into<PathBuf>, content: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            content: content.into(),
        }
    }

    /// Get the file path
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Get the file content
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Check if the file exists
    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    /// Publish the file atomically.
    ///
    /// Skips the write when the destination already holds the same bytes.
    pub fn write(&self) -> Result<WriteResult> {
        if let Ok(existing) = std::fs::read(&self.path) {
            if existing == self.content.as_bytes() {
                tracing::debug!(path = %self.path.display(), "destination unchanged");
                return Ok(WriteResult::Unchanged);
            }
        }

        let mut staged = StagedFile::create(&self.path)?;
        staged.write_all(self.content.as_bytes())?;
        staged.publish()?;
        Ok(WriteResult::Written)
    }
}

/// A temporary file next to its destination.
///
/// The temporary file is removed when the guard is dropped without calling
/// [`StagedFile::publish`], so an abandoned write never leaves anything at
/// the destination path.
pub struct StagedFile {
    target: PathBuf,
    temp: NamedTempFile,
}

impl StagedFile {
    /// Create a temporary file in the destination's directory.
    pub fn create(target: impl Into<PathBuf>) -> Result<Self> {
        let target = target.into();
        let dir = parent_dir(&target);
        std::fs::create_dir_all(dir)
            .wrap_err_with(|| format!("failed to create directory '{}'", dir.display()))?;

        let temp = tempfile::Builder::new()
            .prefix(".enumgen-")
            .suffix(".tmp")
            .tempfile_in(dir)
            .wrap_err_with(|| format!("failed to stage '{}'", target.display()))?;

        Ok(Self { target, temp })
    }

    /// Path of the temporary file.
    pub fn temp_path(&self) -> &Path {
        self.temp.path()
    }

    /// Append bytes to the staged content.
    pub fn write_all(&mut self, bytes: &[u8]) -> Result<()> {
        self.temp
            .write_all(bytes)
            .wrap_err_with(|| format!("failed to write '{}'", self.temp.path().display()))
    }

    /// Flush, sync and rename the temporary file over the destination.
    ///
    /// The published file keeps the destination's permissions when it
    /// already exists and gets `0o644` on Unix otherwise.
    pub fn publish(self) -> Result<()> {
        let Self { target, mut temp } = self;
        temp.flush()?;
        if let Some(permissions) = target_permissions(&target)? {
            temp.as_file()
                .set_permissions(permissions)
                .wrap_err_with(|| format!("failed to set permissions on '{}'", target.display()))?;
        }
        temp.as_file()
            .sync_all()
            .wrap_err_with(|| format!("failed to sync '{}'", temp.path().display()))?;
        temp.persist(&target)
            .map_err(|e| e.error)
            .wrap_err_with(|| format!("failed to publish '{}'", target.display()))?;
        tracing::debug!(path = %target.display(), "published");
        Ok(())
    }
}

fn target_permissions(target: &Path) -> Result<Option<Permissions>> {
    match std::fs::metadata(target) {
        Ok(metadata) => Ok(Some(metadata.permissions())),
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(new_file_permissions()),
        Err(e) => Err(e).wrap_err_with(|| format!("failed to stat '{}'", target.display())),
    }
}

#[cfg(unix)]
fn new_file_permissions() -> Option<Permissions> {
    use std::os::unix::fs::PermissionsExt;

    Some(Permissions::from_mode(0o644))
}

#[cfg(not(unix))]
fn new_file_permissions() -> Option<Permissions> {
    None
}

fn parent_dir(path: &Path) -> &Path {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    }
}
