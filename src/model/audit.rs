//! Audit entries: the append-only record of action attempts.

use std::collections::BTreeMap;

use jiff::Timestamp;
use serde::{Deserialize, Serialize};

/// One action attempt, serialized as one line of JSONL.
///
/// Append-only; never edited or removed. Every executed action —
/// successful, denied, or errored — produces exactly one entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuditEntry {
    pub at: Timestamp,
    pub action: String,
    pub params: BTreeMap<String, String>,
    pub status: AuditStatus,
    pub result: String,
}

/// Outcome classification for an audit entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum AuditStatus {
    Success,
    Failure,
    Denied,
    /// Neutral outcomes: unknown actions, zero-effect sweeps.
    Info,
}

impl AuditEntry {
    /// Build an entry stamped with the current instant.
    pub fn new(
        action: impl Into<String>,
        params: BTreeMap<String, String>,
        status: AuditStatus,
        result: impl Into<String>,
    ) -> Self {
        Self {
            at: Timestamp::now(),
            action: action.into(),
            params,
            status,
            result: result.into(),
        }
    }
}
