//! Core data model for sous.
//!
//! These types represent the conceptual architecture: typed actions,
//! scheduled events, the adaptive memory record, audit entries, and
//! run reports.

mod action;
mod audit;
mod event;
mod memory;
mod report;

pub use action::{Action, MissingParam};
pub use audit::{AuditEntry, AuditStatus};
pub use event::{EventKind, ScheduledEvent};
pub use memory::MemoryRecord;
pub use report::{ActionOutcome, ActionReport, RunReport};
