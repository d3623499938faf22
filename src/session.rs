//! Session context: mutable state owned by the caller and threaded
//! through every operation. No ambient globals.

use crate::model::ScheduledEvent;

/// One user session's state: the authorization toggle plus the
/// scheduled events recorded so far.
#[derive(Debug, Default)]
pub struct Session {
    /// User-controlled authorization flag. When false, scheduling
    /// actions are denied (and still audited) rather than executed.
    pub authorized: bool,

    /// Simulated reminders and calendar bookings.
    pub events: Vec<ScheduledEvent>,
}

impl Session {
    pub fn new(authorized: bool, events: Vec<ScheduledEvent>) -> Self {
        Self { authorized, events }
    }
}
