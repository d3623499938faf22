//! Two-phase recipe deletion: propose (read-only) then confirm
//! (destructive). Nothing mutates until the user confirms.

use std::collections::BTreeMap;

use log::warn;

use crate::model::{AuditEntry, AuditStatus};
use crate::recipe;
use crate::session::Session;
use crate::storage::Storage;

/// The read-only first phase: what confirming would do.
#[derive(Debug)]
pub struct Proposal {
    pub filename: String,
    pub title: String,
    /// Ingredients extracted from the recipe body, offered as the
    /// default dislike list.
    pub default_dislikes: Vec<String>,
}

/// The results of a confirmed deletion. Partial failure is expected:
/// each field reports independently.
pub struct Deletion {
    pub file_result: String,
    pub events_removed: usize,
    pub dislikes_learned: usize,
}

/// Phase one. Reads the recipe and derives the defaults; touches
/// nothing on disk.
pub fn propose(storage: &Storage, filename: &str) -> Result<Proposal, String> {
    let content = storage
        .read_recipe(filename)
        .map_err(|e| e.to_string())?;
    let title = filename.trim_end_matches(".md").to_string();
    let default_dislikes = recipe::extract_ingredients(&content);
    Ok(Proposal {
        filename: filename.to_string(),
        title,
        default_dislikes,
    })
}

/// Phase two. Records dislikes, deletes the file, and removes every
/// scheduled event whose title matches the recipe.
pub fn confirm(
    storage: &Storage,
    session: &mut Session,
    filename: &str,
    title: &str,
    dislikes: &[String],
) -> Deletion {
    let dislikes_learned = match storage.record_dislikes(dislikes.iter().map(String::as_str)) {
        Ok(n) => n,
        Err(e) => {
            warn!("could not persist dislikes: {e}");
            0
        }
    };

    let (file_status, file_result) = match storage.delete_recipe(filename) {
        Ok(()) => (
            AuditStatus::Success,
            format!("File '{filename}' deleted successfully."),
        ),
        Err(_) => (
            AuditStatus::Failure,
            format!("File '{filename}' not found."),
        ),
    };
    audit(
        storage,
        "DELETE_FILE",
        BTreeMap::from([("filename".to_string(), filename.to_string())]),
        file_status,
        &file_result,
    );

    let wanted = normalize(title);
    let before = session.events.len();
    session
        .events
        .retain(|event| !normalize(&event.title).contains(&wanted));
    let events_removed = before - session.events.len();

    let schedule_status = if events_removed > 0 {
        AuditStatus::Success
    } else {
        AuditStatus::Info
    };
    audit(
        storage,
        "DELETE_SCHEDULE",
        BTreeMap::from([("title".to_string(), title.to_string())]),
        schedule_status,
        &format!("{events_removed} scheduled event(s) removed for recipe '{title}'."),
    );

    Deletion {
        file_result,
        events_removed,
        dislikes_learned,
    }
}

/// Matching is forgiving: case, surrounding whitespace, and the
/// underscore-for-space filename convention are all ignored.
fn normalize(s: &str) -> String {
    s.to_lowercase().trim().replace('_', " ")
}

fn audit(
    storage: &Storage,
    action: &str,
    params: BTreeMap<String, String>,
    status: AuditStatus,
    result: &str,
) {
    let entry = AuditEntry::new(action, params, status, result);
    if let Err(e) = storage.append_audit(&entry) {
        warn!("could not write audit entry: {e}");
    }
}
