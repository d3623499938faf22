//! Natural-language time resolution.
//!
//! The model emits times as free text ("6:30 PM", "5 minutes plus 40
//! minutes from now"). Scheduled events only ever store a canonical
//! `HH:MM` 24-hour clock string, and resolution never fails: input that
//! matches no known shape resolves to the end-of-day fallback. The
//! executor must never fail solely because of unparseable time text.

use std::sync::LazyLock;

use jiff::Span;
use jiff::civil::Time;
use regex::Regex;

/// Where unresolvable time expressions land.
pub const FALLBACK: &str = "23:59";

static TWELVE_HOUR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\d{1,2}):?(\d{2})?\s*(am|pm)").unwrap());
static TWENTY_FOUR_HOUR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\d{1,2}):(\d{2})").unwrap());
static SEGMENT: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"plus|and").unwrap());
static HOURS: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(\d+)\s*(?:hour|hr)").unwrap());
static MINUTES: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(\d+)\s*(?:minute|min)").unwrap());
static DURATION_HOURS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\d*\.?\d*)\s*(?:hour|hr)").unwrap());

/// Resolve a time expression into a canonical `HH:MM` string.
///
/// Three forms, tried in order: a 12-hour absolute ("6:30 PM"), a
/// 24-hour absolute ("18:30"), and a relative expression ("5 minutes
/// plus 40 minutes from now") whose segments, split on "plus"/"and",
/// each contribute hour and minute increments added to `now` with
/// wrap-around at midnight. Anything else resolves to [`FALLBACK`].
pub fn resolve(expression: &str, now: Time) -> String {
    let expr = expression.to_lowercase().replace('.', "");
    let expr = expr.trim();

    // A 12-hour match wins over everything else.
    if let Some(caps) = TWELVE_HOUR.captures(expr) {
        let hour: i64 = caps[1].parse().unwrap_or(0);
        let minute: i64 = caps.get(2).map_or(0, |m| m.as_str().parse().unwrap_or(0));
        if (1..=12).contains(&hour) && (0..60).contains(&minute) {
            let hour = match (&caps[3], hour) {
                ("am", 12) => 0,
                ("pm", h) if h < 12 => h + 12,
                (_, h) => h,
            };
            return format!("{hour:02}:{minute:02}");
        }
        return FALLBACK.to_string();
    }

    if let Some(caps) = TWENTY_FOUR_HOUR.captures(expr) {
        let hour: i64 = caps[1].parse().unwrap_or(0);
        let minute: i64 = caps[2].parse().unwrap_or(0);
        if (0..24).contains(&hour) && (0..60).contains(&minute) {
            return format!("{hour:02}:{minute:02}");
        }
        return FALLBACK.to_string();
    }

    // Relative expressions: a compound of increments added to `now`.
    if expr.contains("now") || expr.contains("from") {
        let mut total_minutes: i64 = 0;
        for segment in SEGMENT.split(expr) {
            for caps in HOURS.captures_iter(segment) {
                total_minutes += caps[1].parse::<i64>().unwrap_or(0) * 60;
            }
            for caps in MINUTES.captures_iter(segment) {
                total_minutes += caps[1].parse::<i64>().unwrap_or(0);
            }
        }
        // Wrapping makes anything beyond a day redundant.
        let target = now.wrapping_add(Span::new().minutes(total_minutes % (24 * 60)));
        return format!("{:02}:{:02}", target.hour(), target.minute());
    }

    FALLBACK.to_string()
}

/// Convert a canonical `HH:MM` string to fractional hours for display
/// ordering ("18:30" → 18.5). Non-matching input yields 0.0.
pub fn time_to_float(time: &str) -> f64 {
    TWENTY_FOUR_HOUR.captures(time).map_or(0.0, |caps| {
        let hour: f64 = caps[1].parse().unwrap_or(0.0);
        let minute: f64 = caps[2].parse().unwrap_or(0.0);
        hour + minute / 60.0
    })
}

/// Convert a free-text duration ("1.5 hours", "40 minutes") to hours.
///
/// An hour unit with no numeral counts as 1; unrecognized text is 0.0.
pub fn duration_to_hours(duration: &str) -> f64 {
    let duration = duration.to_lowercase();

    if let Some(caps) = DURATION_HOURS.captures(&duration) {
        let numeral = &caps[1];
        if numeral.is_empty() || numeral == "." {
            return 1.0;
        }
        return numeral.parse().unwrap_or(1.0);
    }

    if let Some(caps) = MINUTES.captures(&duration) {
        return caps[1].parse::<f64>().unwrap_or(0.0) / 60.0;
    }

    0.0
}

#[cfg(test)]
mod tests {
    use super::*;

    use jiff::civil::time;

    fn noon() -> Time {
        time(12, 0, 0, 0)
    }

    #[test]
    fn twelve_hour_conversions() {
        assert_eq!(resolve("12:00am", noon()), "00:00");
        assert_eq!(resolve("12:00pm", noon()), "12:00");
        assert_eq!(resolve("6:30 PM", noon()), "18:30");
        assert_eq!(resolve("6:30 A.M.", noon()), "06:30");
        assert_eq!(resolve("9pm", noon()), "21:00");
    }

    #[test]
    fn twelve_hour_wins_over_twenty_four_hour() {
        // Both forms could match; am/pm takes precedence.
        assert_eq!(resolve("6:30 pm", noon()), "18:30");
    }

    #[test]
    fn twenty_four_hour_form() {
        assert_eq!(resolve("18:30", noon()), "18:30");
        assert_eq!(resolve("08:05", noon()), "08:05");
        assert_eq!(resolve("0:00", noon()), "00:00");
    }

    #[test]
    fn relative_compound_increments() {
        assert_eq!(resolve("5 minutes plus 40 minutes from now", noon()), "12:45");
        assert_eq!(resolve("1 hour and 30 minutes from now", noon()), "13:30");
        assert_eq!(resolve("2 hrs from now", noon()), "14:00");
        assert_eq!(resolve("now", noon()), "12:00");
    }

    #[test]
    fn relative_wraps_across_midnight() {
        assert_eq!(resolve("30 minutes from now", time(23, 45, 0, 0)), "00:15");
        assert_eq!(resolve("2 hours from now", time(23, 0, 0, 0)), "01:00");
    }

    #[test]
    fn unparseable_input_hits_fallback() {
        assert_eq!(resolve("", noon()), FALLBACK);
        assert_eq!(resolve("whenever the bread rises", noon()), FALLBACK);
        assert_eq!(resolve("99:99", noon()), FALLBACK);
    }

    #[test]
    fn resolved_times_are_always_in_range() {
        let inputs = [
            "12:00am", "11:59pm", "0:00", "23:59", "90 minutes from now", "garbage", "45pm",
        ];
        for input in inputs {
            let resolved = resolve(input, noon());
            let hours = time_to_float(&resolved);
            assert!((0.0..24.0).contains(&hours), "{input} resolved to {resolved}");
        }
    }

    #[test]
    fn time_to_float_conversions() {
        assert!((time_to_float("18:30") - 18.5).abs() < f64::EPSILON);
        assert!((time_to_float("00:00")).abs() < f64::EPSILON);
        assert!((time_to_float("not a time")).abs() < f64::EPSILON);
    }

    #[test]
    fn duration_to_hours_conversions() {
        assert!((duration_to_hours("1.5 hours") - 1.5).abs() < f64::EPSILON);
        assert!((duration_to_hours("40 minutes") - 40.0 / 60.0).abs() < f64::EPSILON);
        assert!((duration_to_hours("2 hrs") - 2.0).abs() < f64::EPSILON);
        assert!((duration_to_hours("an hour") - 1.0).abs() < f64::EPSILON);
        assert!(duration_to_hours("").abs() < f64::EPSILON);
        assert!(duration_to_hours("a pinch").abs() < f64::EPSILON);
    }
}
