//! The adaptive memory record: meal history and disliked ingredients.

use serde::{Deserialize, Serialize};

/// Durable adaptive-learning state, used to bias future prompts.
///
/// The serialized shape (`history`, `disliked_ingredients`) is the wire
/// contract with the backing file. Both fields default to empty so a
/// missing or partial record never surfaces as an error.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MemoryRecord {
    /// Recipe titles, most-recent-first, deduplicated, capped.
    pub history: Vec<String>,

    /// Lowercase ingredient names, insertion order preserved, no
    /// duplicates.
    pub disliked_ingredients: Vec<String>,
}

impl MemoryRecord {
    /// How many meals the history retains.
    pub const HISTORY_CAP: usize = 10;

    /// Move `title` to the front of the history, dropping any existing
    /// occurrence, and truncate to the cap.
    pub fn record_meal(&mut self, title: &str) {
        self.history.retain(|t| t != title);
        self.history.insert(0, title.to_string());
        self.history.truncate(Self::HISTORY_CAP);
    }

    /// Fold items into the disliked list: trimmed, lowercased,
    /// order-preserving dedup. Returns how many were newly learned so
    /// the caller can report "already knew" vs "learned N new".
    pub fn record_dislikes<I, S>(&mut self, items: I) -> usize
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut learned = 0;
        for item in items {
            let item = item.as_ref().trim().to_lowercase();
            if !item.is_empty() && !self.disliked_ingredients.contains(&item) {
                self.disliked_ingredients.push(item);
                learned += 1;
            }
        }
        learned
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_meal_moves_repeats_to_front() {
        let mut record = MemoryRecord::default();
        record.record_meal("Soup");
        record.record_meal("Stew");
        record.record_meal("Soup");

        assert_eq!(record.history, vec!["Soup", "Stew"]);
    }

    #[test]
    fn record_meal_caps_history() {
        let mut record = MemoryRecord::default();
        for i in 0..11 {
            record.record_meal(&format!("Meal {i}"));
        }

        assert_eq!(record.history.len(), MemoryRecord::HISTORY_CAP);
        assert_eq!(record.history[0], "Meal 10");
        assert!(!record.history.contains(&"Meal 0".to_string()));
    }

    #[test]
    fn record_dislikes_trims_lowercases_and_dedups() {
        let mut record = MemoryRecord::default();
        let learned = record.record_dislikes(["Onion", "onion ", " Garlic"]);

        assert_eq!(learned, 2);
        assert_eq!(record.disliked_ingredients, vec!["onion", "garlic"]);
    }

    #[test]
    fn record_dislikes_reports_zero_when_all_known() {
        let mut record = MemoryRecord::default();
        record.record_dislikes(["onion"]);

        assert_eq!(record.record_dislikes(["Onion", ""]), 0);
        assert_eq!(record.disliked_ingredients, vec!["onion"]);
    }

    #[test]
    fn missing_fields_deserialize_to_empty() {
        let record: MemoryRecord = serde_json::from_str("{}").unwrap();
        assert!(record.history.is_empty());
        assert!(record.disliked_ingredients.is_empty());
    }
}
