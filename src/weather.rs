//! Mock weather lookup.
//!
//! Stands in for a real weather API: a short descriptive string keyed
//! off the hour of day, consumed verbatim by the prompt builder.

/// Simulated current conditions for the given hour (0–23).
pub fn report(hour: i8) -> &'static str {
    if (6..10).contains(&hour) {
        "The current weather in Your Area is 55°F (13°C) and cloudy. \
         Perfect for a warm breakfast."
    } else if (10..16).contains(&hour) {
        "The current weather in Your Area is 88°F (31°C) and sunny. \
         Highly recommend a COOL, NO-COOK meal."
    } else {
        "The current weather in Your Area is 68°F (20°C) and clear. \
         Good for a comforting dinner."
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dayparts_map_to_distinct_reports() {
        assert!(report(7).contains("warm breakfast"));
        assert!(report(12).contains("NO-COOK"));
        assert!(report(20).contains("comforting dinner"));
        assert!(report(0).contains("comforting dinner"));
    }
}
