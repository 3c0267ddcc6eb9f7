//! Store abstraction for Ideapod's on-disk state.
//!
//! All state is user-scoped and lives under a single root directory
//! (`~/.ideapod` unless `IDEAPOD_HOME` overrides it). Documents sit in
//! `<root>/data/`, one JSON file per key.

use crate::core::error::IdeapodError;
use std::path::{Path, PathBuf};

/// Environment override for the state root. Tests point this at tempdirs.
pub const HOME_ENV: &str = "IDEAPOD_HOME";

/// Store handle representing an Ideapod state workspace.
#[derive(Debug, Clone)]
pub struct Store {
    /// Absolute path to the store root directory
    pub root: PathBuf,
}

impl Store {
    pub fn at(root: impl Into<PathBuf>) -> Store {
        Store { root: root.into() }
    }

    /// Where documents live. Created on first write, not on open.
    pub fn data_dir(&self) -> PathBuf {
        self.root.join("data")
    }

    pub fn doc_path(&self, doc: &str) -> PathBuf {
        self.data_dir().join(doc)
    }
}

/// Resolve the state root: `IDEAPOD_HOME` wins, else `$HOME/.ideapod`.
pub fn resolve_store_root() -> Result<PathBuf, IdeapodError> {
    if let Ok(dir) = std::env::var(HOME_ENV) {
        if !dir.is_empty() {
            return Ok(PathBuf::from(dir));
        }
    }
    let home = std::env::var("HOME")
        .map_err(|_| IdeapodError::PathError("cannot resolve home directory; set IDEAPOD_HOME".to_string()))?;
    Ok(Path::new(&home).join(".ideapod"))
}
