//! Local persistence for recipes, memory, events, and the audit log.
//!
//! Everything lives under the storage root:
//!
//! ```text
//! <root>/
//!   recipes/       # one markdown file per saved recipe
//!   memory.json    # adaptive memory record
//!   events.json    # scheduled events, carried between runs
//!   audit.jsonl    # append-only audit entries
//! ```

mod audit;
mod events;
mod memory;
mod recipes;

use std::{fs, io, path::PathBuf};

/// Errors that can occur during storage operations.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("recipe not found: {0}")]
    RecipeNotFound(String),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = core::result::Result<T, StorageError>;

/// Local file-based storage rooted at one directory.
pub struct Storage {
    root: PathBuf,
}

impl Storage {
    /// Creates a new storage instance rooted at the given directory.
    ///
    /// The root and its recipes directory are created if missing.
    pub fn new(root: impl Into<PathBuf>) -> Result<Self> {
        let root = root.into();
        fs::create_dir_all(root.join("recipes"))?;
        Ok(Self { root })
    }

    /// Returns the default storage root: `~/.sous/`.
    pub fn default_root() -> Option<PathBuf> {
        dirs::home_dir().map(|h| h.join(".sous"))
    }

    /// The full path a recipe filename maps to.
    pub fn recipe_path(&self, filename: &str) -> PathBuf {
        self.root.join("recipes").join(filename)
    }

    fn memory_path(&self) -> PathBuf {
        self.root.join("memory.json")
    }

    fn events_path(&self) -> PathBuf {
        self.root.join("events.json")
    }

    fn audit_path(&self) -> PathBuf {
        self.root.join("audit.jsonl")
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    use tempfile::TempDir;

    pub(crate) fn test_storage() -> (TempDir, Storage) {
        let dir = TempDir::new().unwrap();
        let storage = Storage::new(dir.path().join("sous")).unwrap();
        (dir, storage)
    }

    #[test]
    fn new_creates_the_recipes_directory() {
        let (_dir, storage) = test_storage();
        assert!(storage.recipe_path("x.md").parent().unwrap().is_dir());
    }
}
