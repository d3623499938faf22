//! The cook pipeline: one user request in, one recipe (or learned
//! preference) out.
//!
//! Dislike statements short-circuit before any model call. Everything
//! else goes through prompt assembly, a retried model call, response
//! splitting, and per-action execution.

use std::collections::BTreeMap;
use std::sync::LazyLock;

use jiff::Zoned;
use log::{info, warn};
use regex::Regex;

use crate::execute::Executor;
use crate::model::{Action, AuditEntry, AuditStatus, RunReport};
use crate::plan::{self, ParsedAction};
use crate::prompt;
use crate::provider::{Provider, RetryPolicy};
use crate::recipe;
use crate::session::Session;
use crate::storage::Storage;
use crate::weather;

/// Placeholder the model is told to use before it knows the dish name.
const DISH_PLACEHOLDER: &str = "<DISH NAME>";

/// Marker separating recipe markdown from the action block.
const ACTIONS_MARKER: &str = "[ACTIONS]";

/// Sampling temperature for recipe generation.
const CREATIVITY: f64 = 0.8;

/// Matches dislike statements like "I don't like mushrooms" or
/// "avoid cilantro and onions".
static DISLIKE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(?:i\s+don'?t\s+(?:like|want)|i\s+hate|avoid|no|exclude)\s+(.+)").unwrap()
});

/// Splits an enumerated ingredient list into individual items.
static DISLIKE_SPLIT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r",\s*|\s+and\s+|\s+").unwrap());

/// What a cook run produced.
#[derive(Debug)]
pub enum Outcome {
    /// The request was a dislike statement; no recipe was generated.
    Preference { message: String },
    /// A full generate-and-execute run.
    Recipe(RunReport),
}

/// Run the full pipeline for one user request.
pub fn run(
    storage: &Storage,
    session: &mut Session,
    provider: &dyn Provider,
    retry: &RetryPolicy,
    input: &str,
) -> Result<Outcome, String> {
    if let Some(items) = dislike_items(input) {
        return Ok(Outcome::Preference {
            message: learn_dislikes(storage, &items),
        });
    }

    let memory = storage.load_memory();
    let now = Zoned::now();
    let weather = weather::report(now.time().hour());
    let full_prompt = prompt::build(input, &memory, weather);

    let response = match retry.generate(provider, &full_prompt, CREATIVITY) {
        Ok(text) => text,
        Err(e) => {
            let entry = AuditEntry::new(
                "LLM_CALL",
                BTreeMap::new(),
                AuditStatus::Failure,
                &e.to_string(),
            );
            if let Err(audit_err) = storage.append_audit(&entry) {
                warn!("could not write audit entry: {audit_err}");
            }
            return Err(format!("could not generate a recipe: {e}"));
        }
    };

    let (recipe_md, action_block) = split_response(&response);
    let title = recipe::extract_title(recipe_md);
    info!("generated recipe '{title}'");

    let executor = Executor::new(storage, now.time());
    let mut actions = Vec::new();
    for parsed in plan::parse(action_block) {
        let parsed = substitute(parsed, &title, recipe_md);
        let report = match Action::classify(&parsed) {
            Ok(action) => executor.execute(session, &action),
            Err(e) => executor.reject(&parsed.name, parsed.params, &e.to_string()),
        };
        actions.push(report);
    }

    Ok(Outcome::Recipe(RunReport {
        title,
        recipe: recipe_md.to_string(),
        actions,
    }))
}

/// Returns the dislike items when the input is a preference statement.
fn dislike_items(input: &str) -> Option<Vec<String>> {
    let caps = DISLIKE.captures(input)?;
    let tail = caps.get(1).map_or("", |m| m.as_str());
    let items: Vec<String> = DISLIKE_SPLIT
        .split(tail)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect();
    if items.is_empty() { None } else { Some(items) }
}

fn learn_dislikes(storage: &Storage, items: &[String]) -> String {
    let learned = match storage.record_dislikes(items.iter().map(String::as_str)) {
        Ok(n) => n,
        Err(e) => {
            warn!("could not persist dislikes: {e}");
            0
        }
    };

    if learned > 0 {
        let entry = AuditEntry::new(
            "PREFERENCE_LEARNED",
            BTreeMap::from([("items".to_string(), items.join(", "))]),
            AuditStatus::Success,
            &format!("{learned} new disliked ingredient(s)"),
        );
        if let Err(e) = storage.append_audit(&entry) {
            warn!("could not write audit entry: {e}");
        }
        format!(
            "Understood! I've added {} to your list of disliked foods.",
            items.join(", ")
        )
    } else {
        "I already knew about those foods, chef. Anything else I can help with?".to_string()
    }
}

/// Split a model response at the actions marker. A missing marker
/// means no actions; the whole response is the recipe.
fn split_response(response: &str) -> (&str, &str) {
    match response.split_once(ACTIONS_MARKER) {
        Some((recipe_md, block)) => (recipe_md.trim(), block.trim()),
        None => (response.trim(), ""),
    }
}

/// Fill in what the model could not know when writing the action
/// block: the final dish title and the recipe body.
fn substitute(mut parsed: ParsedAction, title: &str, recipe_md: &str) -> ParsedAction {
    if parsed.name == "SAVE_RECIPE" {
        parsed
            .params
            .insert("filename".to_string(), title.to_string());
        parsed
            .params
            .insert("content".to_string(), recipe_md.to_string());
    }
    for key in ["title", "message"] {
        if let Some(value) = parsed.params.get_mut(key) {
            *value = value.replace(DISH_PLACEHOLDER, title);
        }
    }
    parsed
}
