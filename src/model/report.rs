//! Run reports: the structured outcome of one orchestration cycle.

/// How executing one action turned out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionOutcome {
    /// The side effect happened.
    Success,
    /// The authorization gate was closed; nothing happened.
    Denied,
    /// Validation or execution failed; nothing happened.
    Failed,
    /// The action name was not recognized; nothing happened.
    Unknown,
}

/// One attempted action with its outcome and human-readable message.
#[derive(Debug, Clone)]
pub struct ActionReport {
    pub action: String,
    pub outcome: ActionOutcome,
    pub message: String,
}

/// The outcome of one full orchestration cycle: the recipe plus every
/// attempted action, in the order executed.
#[derive(Debug, Clone)]
pub struct RunReport {
    pub title: String,
    pub recipe: String,
    pub actions: Vec<ActionReport>,
}
