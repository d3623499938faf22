//! Scheduled events: simulated reminders and calendar bookings.

use serde::{Deserialize, Serialize};

/// What kind of scheduled event this is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum EventKind {
    Reminder,
    CalendarEvent,
}

/// A record of a simulated reminder or calendar booking.
///
/// `start` is always a resolved `HH:MM` 24-hour clock string — never
/// free text. Unresolvable input times hit the clock module's
/// end-of-day fallback before an event is ever constructed.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduledEvent {
    pub kind: EventKind,

    /// Display name, derived from the recipe title or reminder message.
    pub title: String,

    /// Canonical start time, `HH:MM`, 24-hour clock.
    pub start: String,

    /// Duration in hours. Only calendar events carry one; absent or
    /// unparseable duration text parses to 0.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration: Option<f64>,

    /// Human-readable summary used for display and logging.
    pub description: String,
}
