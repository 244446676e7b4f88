//! Output directory holding the generated project cards.
//!
//! Each accepted repository becomes `<name>.md`. Files are written whole via a
//! temporary file in the same directory, so an interrupted run never leaves a
//! truncated card behind.

mod error;
mod processed;

pub use error::StoreError;
pub use processed::ProcessedSet;

use processed::{source_line_pattern, source_repository};
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// Directory of generated project cards.
#[derive(Debug, Clone)]
pub struct ProjectStore {
    dir: PathBuf,
}

impl ProjectStore {
    /// Creates a store rooted at `dir`. The directory is created lazily.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Returns the output directory.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Creates the output directory if it doesn't exist.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::IoError`] if the directory can't be created.
    pub fn ensure_dir(&self) -> Result<(), StoreError> {
        std::fs::create_dir_all(&self.dir).map_err(|e| self.io_error(&self.dir, e))
    }

    /// Path of the card for repository `name`.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::InvalidName`] if `name` isn't a plain file stem.
    pub fn path_for(&self, name: &str) -> Result<PathBuf, StoreError> {
        let valid = !name.is_empty()
            && name != "."
            && name != ".."
            && !name.contains(['/', '\\']);
        if !valid {
            return Err(StoreError::InvalidName {
                name: name.to_string(),
            });
        }
        Ok(self.dir.join(format!("{name}.md")))
    }

    /// Returns true if a card for `name` already exists.
    #[must_use]
    pub fn exists(&self, name: &str) -> bool {
        self.path_for(name).is_ok_and(|path| path.exists())
    }

    /// Rebuilds the set of repositories that already have a card.
    ///
    /// Every `*.md` file is parsed for its `Source:` line; files without one
    /// are ignored. Unreadable files are logged and skipped.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the directory can't be created or listed.
    pub fn scan_processed(&self, owner: &str) -> Result<ProcessedSet, StoreError> {
        self.ensure_dir()?;
        let pattern = source_line_pattern(owner)?;
        let mut processed = ProcessedSet::default();

        let entries = std::fs::read_dir(&self.dir).map_err(|e| self.io_error(&self.dir, e))?;
        for entry in entries {
            let path = entry.map_err(|e| self.io_error(&self.dir, e))?.path();
            if !path.is_file() || path.extension().and_then(|ext| ext.to_str()) != Some("md") {
                continue;
            }

            let content = match std::fs::read_to_string(&path) {
                Ok(content) => content,
                Err(e) => {
                    warn!(path = %path.display(), error = %e, "Failed to read project file");
                    continue;
                }
            };

            match source_repository(&pattern, &content) {
                Some(name) => {
                    debug!(repo = %name, "Found existing project");
                    processed.insert(name);
                }
                None => debug!(path = %path.display(), "No source link in project file"),
            }
        }

        info!(count = processed.len(), "Found existing projects");
        Ok(processed)
    }

    /// Writes the card for `name`, replacing any existing file atomically.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the name is invalid or the write fails.
    pub fn write(&self, name: &str, content: &str) -> Result<PathBuf, StoreError> {
        let path = self.path_for(name)?;
        self.ensure_dir()?;

        let mut file =
            tempfile::NamedTempFile::new_in(&self.dir).map_err(|e| self.io_error(&self.dir, e))?;
        file.write_all(content.as_bytes())
            .map_err(|e| self.io_error(file.path(), e))?;
        file.persist(&path)
            .map_err(|e| self.io_error(&path, e.error))?;

        info!(path = %path.display(), "Created project file");
        Ok(path)
    }

    fn io_error(&self, path: &Path, source: std::io::Error) -> StoreError {
        StoreError::IoError {
            path: path.display().to_string(),
            source,
        }
    }
}
