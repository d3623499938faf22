//! Scheduled-event persistence: session state carried between runs.

use std::{fs, io};

use crate::model::ScheduledEvent;

use super::{Result, Storage};

impl Storage {
    /// Loads the scheduled-event list. Missing file means no events.
    pub fn load_events(&self) -> Result<Vec<ScheduledEvent>> {
        match fs::read_to_string(self.events_path()) {
            Ok(json) => Ok(serde_json::from_str(&json)?),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(Vec::new()),
            Err(e) => Err(e.into()),
        }
    }

    /// Rewrites the scheduled-event list.
    pub fn save_events(&self, events: &[ScheduledEvent]) -> Result<()> {
        let json = serde_json::to_string_pretty(events)?;
        fs::write(self.events_path(), json)?;
        Ok(())
    }
}
