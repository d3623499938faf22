//! Action execution: mapping typed actions to local side effects.
//!
//! Every attempt — success, denial, validation failure, or internal
//! error — yields an `ActionReport` and exactly one audit entry.
//! Nothing escapes the per-action boundary: one bad action cannot
//! abort the rest of the plan.

use std::collections::BTreeMap;

use jiff::civil::Time;
use log::warn;

use crate::clock;
use crate::model::{
    Action, ActionOutcome, ActionReport, AuditEntry, AuditStatus, EventKind, ScheduledEvent,
};
use crate::recipe;
use crate::session::Session;
use crate::storage::Storage;

/// Fixed denial message for gated scheduling actions.
pub const SCHEDULING_DENIED: &str =
    "Scheduling denied: run with --authorize to permit scheduling actions.";

/// Boilerplate stripped from reminder messages to derive a display
/// title that matches the recipe name.
const REMINDER_PREFIX: &str = "Check on ";
const REMINDER_SUFFIX: &str = "! This meal is ready.";

/// Executes actions against storage and a session.
pub struct Executor<'a> {
    storage: &'a Storage,
    now: Time,
}

impl<'a> Executor<'a> {
    /// `now` anchors relative time expressions for this run.
    pub fn new(storage: &'a Storage, now: Time) -> Self {
        Self { storage, now }
    }

    /// Execute one action, audit the attempt, and report.
    pub fn execute(&self, session: &mut Session, action: &Action) -> ActionReport {
        let (outcome, message) = match action {
            Action::SaveRecipe { filename, content } => self.save_recipe(filename, content),
            Action::AddCalendarEvent {
                title,
                time,
                duration,
            } => self.add_calendar_event(session, title, time, duration),
            Action::AddReminder { time, message } => self.add_reminder(session, time, message),
            Action::Unknown { name, .. } => {
                (ActionOutcome::Unknown, format!("Unknown action '{name}'."))
            }
        };

        self.audit(action.name(), action.params(), outcome, &message);
        ActionReport {
            action: action.name().to_string(),
            outcome,
            message,
        }
    }

    /// Report an action that never reached execution (for example a
    /// known name with missing parameters). Still audited once.
    pub fn reject(
        &self,
        name: &str,
        params: BTreeMap<String, String>,
        reason: &str,
    ) -> ActionReport {
        self.audit(name, params, ActionOutcome::Failed, reason);
        ActionReport {
            action: name.to_string(),
            outcome: ActionOutcome::Failed,
            message: reason.to_string(),
        }
    }

    /// Saving is not authorization-gated; it is a local write the user
    /// already asked for by cooking.
    fn save_recipe(&self, filename: &str, content: &str) -> (ActionOutcome, String) {
        let clean = recipe::sanitize_filename(filename);
        match self.storage.save_recipe(&clean, content) {
            Ok(_) => {
                // The history keeps the pre-sanitized title.
                if let Err(e) = self.storage.record_meal_cooked(filename) {
                    warn!("recipe saved but meal history update failed: {e}");
                }
                (
                    ActionOutcome::Success,
                    format!("Recipe saved successfully to '{clean}'."),
                )
            }
            Err(e) => (
                ActionOutcome::Failed,
                format!(
                    "File I/O error: could not save recipe: {e} (attempted path: {})",
                    self.storage.recipe_path(&clean).display()
                ),
            ),
        }
    }

    fn add_calendar_event(
        &self,
        session: &mut Session,
        title: &str,
        time: &str,
        duration: &str,
    ) -> (ActionOutcome, String) {
        if !session.authorized {
            return (ActionOutcome::Denied, SCHEDULING_DENIED.to_string());
        }

        let lower = duration.to_lowercase();
        if !["hour", "minute", "min", "hrs"]
            .iter()
            .any(|unit| lower.contains(unit))
        {
            return (
                ActionOutcome::Failed,
                format!("Validation failed: duration '{duration}' is missing time units."),
            );
        }

        let start = clock::resolve(time, self.now);
        let message = format!("Event added: '{title}' starting at {start}, lasting {duration}.");
        session.events.push(ScheduledEvent {
            kind: EventKind::CalendarEvent,
            title: title.to_string(),
            start,
            duration: Some(clock::duration_to_hours(duration)),
            description: message.clone(),
        });
        (ActionOutcome::Success, message)
    }

    fn add_reminder(
        &self,
        session: &mut Session,
        time: &str,
        message: &str,
    ) -> (ActionOutcome, String) {
        if !session.authorized {
            return (ActionOutcome::Denied, SCHEDULING_DENIED.to_string());
        }

        let start = clock::resolve(time, self.now);
        let title = message
            .replace(REMINDER_PREFIX, "")
            .replace(REMINDER_SUFFIX, "")
            .trim()
            .to_string();
        let result = format!("Reminder set: '{message}' at {start}.");
        session.events.push(ScheduledEvent {
            kind: EventKind::Reminder,
            title,
            start,
            duration: None,
            description: message.to_string(),
        });
        (ActionOutcome::Success, result)
    }

    fn audit(
        &self,
        action: &str,
        params: BTreeMap<String, String>,
        outcome: ActionOutcome,
        message: &str,
    ) {
        let status = match outcome {
            ActionOutcome::Success => AuditStatus::Success,
            ActionOutcome::Failed => AuditStatus::Failure,
            ActionOutcome::Denied => AuditStatus::Denied,
            ActionOutcome::Unknown => AuditStatus::Info,
        };
        let entry = AuditEntry::new(action, params, status, message);
        // The audit trail is best-effort: a full disk must not turn a
        // completed side effect into a reported failure.
        if let Err(e) = self.storage.append_audit(&entry) {
            warn!("could not write audit entry: {e}");
        }
    }
}
