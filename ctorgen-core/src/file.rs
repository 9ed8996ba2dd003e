use std::path::{Path, PathBuf};

use eyre::{Context, Result};

/// Trait for types that render into a generated source file
pub trait GeneratedFile {
    /// Render the file content
    fn render(&self) -> String;

    /// Render the file and bind it to the path it should be written to
    fn to_file(&self, path: impl Into<PathBuf>) -> File
    where
        Self: Sized,
    {
        File::new(path, self.render())
    }
}

/// The parent directory must already exist.
fn write_file(path: &Path, content: &str) -> Result<()> {
    std::fs::write(path, content)
        .wrap_err_with(|| format!("failed to write '{}'", path.display()))?;
    Ok(())
}

/// How a rendered file compares to what is currently on disk
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Freshness {
    /// On-disk content is byte-identical
    Current,
    /// File exists with different content
    Stale,
    /// File does not exist
    Missing,
}

/// A rendered file bound to its output path
#[derive(Debug, Clone)]
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

    /// Write the file, replacing any previous content.
    ///
    /// The write is not atomic: a failure midway may leave a truncated file.
    pub fn write(&self) -> Result<()> {
        write_file(&self.path, &self.content)
    }

    /// Compare the rendered content with the file on disk
    pub fn freshness(&self) -> Result<Freshness> {
        if !self.exists() {
            return Ok(Freshness::Missing);
        }
        let existing = std::fs::read(&self.path)
            .wrap_err_with(|| format!("failed to read '{}'", self.path.display()))?;
        if existing == self.content.as_bytes() {
            Ok(Freshness::Current)
        } else {
            Ok(Freshness::Stale)
        }
    }
}
