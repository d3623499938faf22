//! Audit log storage: append and load audit entries.
//!
//! One JSON entry per line. Each append writes the whole line in a
//! single call so concurrent writers can't interleave partial entries.

use std::{fs, io};

// Traits must be in scope for `.lines()` on BufReader and `.write_all()` on File.
use io::{BufRead, Write};

use crate::model::AuditEntry;

use super::{Result, Storage};

impl Storage {
    /// Appends one audit entry. The log is append-only; entries are
    /// never edited or removed.
    pub fn append_audit(&self, entry: &AuditEntry) -> Result<()> {
        let mut file = fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(self.audit_path())?;
        let mut line = serde_json::to_string(entry)?;
        line.push('\n');
        file.write_all(line.as_bytes())?;
        Ok(())
    }

    /// Loads all audit entries, oldest first.
    pub fn load_audit(&self) -> Result<Vec<AuditEntry>> {
        let path = self.audit_path();
        if !path.exists() {
            return Ok(Vec::new());
        }
        let file = fs::File::open(path)?;
        let reader = io::BufReader::new(file);
        let mut entries = Vec::new();
        for line in reader.lines() {
            let line = line?;
            if !line.is_empty() {
                entries.push(serde_json::from_str(&line)?);
            }
        }
        Ok(entries)
    }
}
