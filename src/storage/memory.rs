//! Memory record persistence: load-merge-save with an atomic rewrite.
//!
//! The whole record is rewritten on every mutation via a temp file and
//! rename in the same directory, so a crash mid-write never leaves a
//! truncated record. The load-merge-save cycle itself is not guarded
//! against concurrent writers; this is a single-user store.

use std::fs;

use log::warn;

use crate::model::MemoryRecord;

use super::{Result, Storage};

impl Storage {
    /// Loads the memory record.
    ///
    /// A missing or unparseable backing file yields the all-empty
    /// default — memory corruption is never an error to the caller.
    pub fn load_memory(&self) -> MemoryRecord {
        let Ok(json) = fs::read_to_string(self.memory_path()) else {
            return MemoryRecord::default();
        };
        serde_json::from_str(&json).unwrap_or_else(|e| {
            warn!("memory record unreadable, starting empty: {e}");
            MemoryRecord::default()
        })
    }

    /// Rewrites the whole memory record atomically.
    pub fn save_memory(&self, record: &MemoryRecord) -> Result<()> {
        let json = serde_json::to_string_pretty(record)?;
        let tmp = self.memory_path().with_extension("json.tmp");
        fs::write(&tmp, json)?;
        fs::rename(&tmp, self.memory_path())?;
        Ok(())
    }

    /// Records a cooked meal: front of history, deduplicated, capped.
    pub fn record_meal_cooked(&self, title: &str) -> Result<()> {
        let mut record = self.load_memory();
        record.record_meal(title);
        self.save_memory(&record)
    }

    /// Records disliked ingredients; returns how many were newly
    /// learned.
    pub fn record_dislikes<I, S>(&self, items: I) -> Result<usize>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut record = self.load_memory();
        let learned = record.record_dislikes(items);
        self.save_memory(&record)?;
        Ok(learned)
    }
}
