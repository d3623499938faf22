//! Output formatting for CLI display.

use crate::clock;
use crate::model::{
    ActionOutcome, ActionReport, AuditEntry, AuditStatus, EventKind, MemoryRecord, RunReport,
    ScheduledEvent,
};

/// Format a full cook run: recipe body first, then one line per action.
pub(super) fn format_run_report(report: &RunReport) -> String {
    let mut out = String::new();
    out.push_str(&report.recipe);
    if !report.actions.is_empty() {
        out.push_str("\n\nActions:\n");
        for action in &report.actions {
            out.push_str(&format_action(action));
            out.push('\n');
        }
    }
    out
}

pub(super) fn format_action(report: &ActionReport) -> String {
    format!(
        "  [{}] {}: {}",
        format_outcome(report.outcome),
        report.action,
        report.message
    )
}

pub(super) fn format_outcome(outcome: ActionOutcome) -> &'static str {
    match outcome {
        ActionOutcome::Success => "ok",
        ActionOutcome::Denied => "denied",
        ActionOutcome::Failed => "failed",
        ActionOutcome::Unknown => "unknown",
    }
}

/// Format the schedule sorted by start time, one event per line.
pub(super) fn format_schedule(events: &[ScheduledEvent]) -> String {
    if events.is_empty() {
        return "No scheduled events.".to_string();
    }

    let mut sorted: Vec<&ScheduledEvent> = events.iter().collect();
    sorted.sort_by(|a, b| {
        clock::time_to_float(&a.start)
            .total_cmp(&clock::time_to_float(&b.start))
    });

    let mut out = String::new();
    for event in sorted {
        let kind = match event.kind {
            EventKind::Reminder => "reminder",
            EventKind::CalendarEvent => "event",
        };
        let end = clock::time_to_float(&event.start) + event.duration.unwrap_or(0.0);
        out.push_str(&format!(
            "  {}-{} [{kind}] {}\n",
            event.start,
            format_clock(end),
            event.title
        ));
    }
    out.trim_end().to_string()
}

/// Render fractional hours as `HH:MM`, clamped to the end of the day.
fn format_clock(hours: f64) -> String {
    let total_minutes = (hours * 60.0).round() as i64;
    let total_minutes = total_minutes.clamp(0, 23 * 60 + 59);
    format!("{:02}:{:02}", total_minutes / 60, total_minutes % 60)
}

pub(super) fn format_audit(entries: &[AuditEntry]) -> String {
    if entries.is_empty() {
        return "No audit entries.".to_string();
    }

    let mut out = String::new();
    for entry in entries {
        let status = match entry.status {
            AuditStatus::Success => "success",
            AuditStatus::Failure => "failure",
            AuditStatus::Denied => "denied",
            AuditStatus::Info => "info",
        };
        out.push_str(&format!(
            "  {} [{status}] {}: {}\n",
            entry.at.strftime("%Y-%m-%d %H:%M:%S"),
            entry.action,
            entry.result
        ));
    }
    out.trim_end().to_string()
}

pub(super) fn format_memory(memory: &MemoryRecord) -> String {
    let mut out = String::new();
    out.push_str("Recent meals:\n");
    if memory.history.is_empty() {
        out.push_str("  (none)\n");
    }
    for title in &memory.history {
        out.push_str(&format!("  {title}\n"));
    }
    out.push_str("Disliked ingredients:\n");
    if memory.disliked_ingredients.is_empty() {
        out.push_str("  (none)\n");
    }
    for item in &memory.disliked_ingredients {
        out.push_str(&format!("  {item}\n"));
    }
    out.trim_end().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn event(start: &str, duration: Option<f64>, title: &str) -> ScheduledEvent {
        ScheduledEvent {
            kind: EventKind::CalendarEvent,
            title: title.to_string(),
            start: start.to_string(),
            duration,
            description: String::new(),
        }
    }

    #[test]
    fn schedule_is_sorted_by_start_time() {
        let events = vec![
            event("19:00", Some(1.0), "Dinner"),
            event("09:30", Some(0.5), "Prep"),
        ];

        let rendered = format_schedule(&events);
        let prep = rendered.find("Prep").unwrap();
        let dinner = rendered.find("Dinner").unwrap();
        assert!(prep < dinner);
    }

    #[test]
    fn schedule_end_times_add_the_duration() {
        let rendered = format_schedule(&[event("18:30", Some(0.75), "Bake")]);
        assert!(rendered.contains("18:30-19:15"));
    }

    #[test]
    fn missing_duration_renders_a_zero_length_slot() {
        let rendered = format_schedule(&[event("12:00", None, "Check")]);
        assert!(rendered.contains("12:00-12:00"));
    }

    #[test]
    fn clock_clamps_to_end_of_day() {
        assert_eq!(format_clock(25.5), "23:59");
        assert_eq!(format_clock(6.25), "06:15");
    }

    #[test]
    fn empty_memory_renders_placeholders() {
        let rendered = format_memory(&MemoryRecord::default());
        assert!(rendered.contains("(none)"));
    }
}
