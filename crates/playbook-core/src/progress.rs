//! Persisted checklist progress.
//!
//! One JSON file holds the whole checked-task set as a sorted array of task
//! ids (the canonical shape; a map of booleans is not accepted). Saves are
//! whole-file overwrites through a temp-file-then-rename so a crash mid-write
//! never leaves a torn state file. Loads never fail: absent, unreadable, or
//! malformed state degrades to the empty set with a warning.

use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::CoreError;

/// Handle to the progress state file.
#[derive(Debug, Clone)]
pub struct ProgressStore {
    path: PathBuf,
}

impl ProgressStore {
    #[must_use]
    pub const fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Default location under the platform data directory.
    pub fn default_path() -> Result<PathBuf, CoreError> {
        let base = dirs::data_dir().ok_or(CoreError::NoStateDir)?;
        Ok(base.join("playbook").join("progress.json"))
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the checked-task set. Never fails.
    #[must_use]
    pub fn load(&self) -> BTreeSet<String> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => return BTreeSet::new(),
            Err(err) => {
                tracing::warn!(
                    path = %self.path.display(),
                    "could not read progress state, starting empty: {err}"
                );
                return BTreeSet::new();
            }
        };

        match serde_json::from_str::<BTreeSet<String>>(&raw) {
            Ok(set) => set,
            Err(err) => {
                tracing::warn!(
                    path = %self.path.display(),
                    "malformed progress state, starting empty: {err}"
                );
                BTreeSet::new()
            }
        }
    }

    /// Overwrite the state file with the full set. Last write wins.
    pub fn save(&self, checked: &BTreeSet<String>) -> Result<(), CoreError> {
        let write_err = |source| CoreError::WriteState {
            path: self.path.clone(),
            source,
        };

        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(write_err)?;
        }

        // serde_json can only fail here on a non-string key map; a string set
        // always serializes.
        let encoded = serde_json::to_string_pretty(checked)
            .map_err(|e| write_err(std::io::Error::other(e)))?;

        let tmp = self.path.with_extension("tmp");
        fs::write(&tmp, encoded.as_bytes()).map_err(write_err)?;
        fs::rename(&tmp, &self.path).map_err(write_err)?;
        Ok(())
    }

    /// Delete the state file; missing file is fine.
    pub fn reset(&self) -> Result<(), CoreError> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(source) => Err(CoreError::WriteState {
                path: self.path.clone(),
                source,
            }),
        }
    }
}
