//! Typed actions: the contract between parsed model output and local
//! side effects.
//!
//! Each known action kind carries its required fields; anything the
//! parser captured under an unrecognized name is preserved in `Unknown`
//! rather than dropped, so the executor and audit trail still see it.

use std::collections::BTreeMap;

use crate::plan::ParsedAction;

/// One requested side effect, classified from a parsed action line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Persist the recipe body under the recipes directory.
    SaveRecipe { filename: String, content: String },

    /// Record a simulated calendar booking.
    AddCalendarEvent {
        title: String,
        time: String,
        duration: String,
    },

    /// Record a simulated reminder.
    AddReminder { time: String, message: String },

    /// An action name the executor doesn't know. Raw parameters kept
    /// for forward compatibility.
    Unknown {
        name: String,
        params: BTreeMap<String, String>,
    },
}

/// A known action name arrived without one of its required parameters.
#[derive(Debug, Clone, thiserror::Error)]
#[error("invalid parameters for {action}: missing '{param}'")]
pub struct MissingParam {
    pub action: String,
    pub param: String,
}

impl Action {
    /// Classify a parsed action into a typed variant.
    ///
    /// Unrecognized names become [`Action::Unknown`]; a recognized name
    /// missing a required parameter is an error the executor reports as
    /// a failed action, never a panic.
    pub fn classify(parsed: &ParsedAction) -> Result<Self, MissingParam> {
        let take = |param: &str| {
            parsed.params.get(param).cloned().ok_or_else(|| MissingParam {
                action: parsed.name.clone(),
                param: param.to_string(),
            })
        };

        match parsed.name.as_str() {
            "SAVE_RECIPE" => Ok(Self::SaveRecipe {
                filename: take("filename")?,
                content: take("content")?,
            }),
            "ADD_CALENDAR_EVENT" => Ok(Self::AddCalendarEvent {
                title: take("title")?,
                time: take("time")?,
                duration: take("duration")?,
            }),
            "ADD_REMINDER" => Ok(Self::AddReminder {
                time: take("time")?,
                message: take("message")?,
            }),
            _ => Ok(Self::Unknown {
                name: parsed.name.clone(),
                params: parsed.params.clone(),
            }),
        }
    }

    /// The wire name of this action, as used in audit entries.
    pub fn name(&self) -> &str {
        match self {
            Self::SaveRecipe { .. } => "SAVE_RECIPE",
            Self::AddCalendarEvent { .. } => "ADD_CALENDAR_EVENT",
            Self::AddReminder { .. } => "ADD_REMINDER",
            Self::Unknown { name, .. } => name,
        }
    }

    /// The parameters actually used, for audit logging.
    pub fn params(&self) -> BTreeMap<String, String> {
        match self {
            Self::SaveRecipe { filename, content } => BTreeMap::from([
                ("filename".to_string(), filename.clone()),
                ("content".to_string(), content.clone()),
            ]),
            Self::AddCalendarEvent {
                title,
                time,
                duration,
            } => BTreeMap::from([
                ("title".to_string(), title.clone()),
                ("time".to_string(), time.clone()),
                ("duration".to_string(), duration.clone()),
            ]),
            Self::AddReminder { time, message } => BTreeMap::from([
                ("time".to_string(), time.clone()),
                ("message".to_string(), message.clone()),
            ]),
            Self::Unknown { params, .. } => params.clone(),
        }
    }
}
