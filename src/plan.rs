//! The action-block grammar: parsing the model's structured plan.
//!
//! This is the brittlest boundary in the system, so the whole grammar
//! lives here. The block is zero or more lines of
//! `ACTION_<n>: NAME(key='value', key2='value2')`. Lines that don't
//! match are ignored (the model is free to ramble around them), and the
//! `ACTION_<n>` numbering carries no meaning: gaps and reordering are
//! accepted as-is, in source order.
//!
//! Values are single-quoted, double-quoted, or an unquoted run up to the
//! next comma; one surrounding quote layer is stripped. Nested
//! parentheses and escaped commas are not supported — a known
//! limitation of the grammar, not something to paper over.

use std::collections::BTreeMap;
use std::sync::LazyLock;

use regex::Regex;

static ACTION_LINE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"ACTION_\d+:\s*([A-Z_]+)\((.*)\)").unwrap());
static PARAM: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"(\w+)\s*=\s*(".*?"|'.*?'|[^,]+)"#).unwrap());

/// One action line as captured from the block: a name and raw
/// string-valued parameters, unconverted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedAction {
    pub name: String,
    pub params: BTreeMap<String, String>,
}

/// Extract the sequence of actions from an action block.
///
/// Produces an empty sequence, never an error, when the block is empty
/// or malformed.
pub fn parse(block: &str) -> Vec<ParsedAction> {
    ACTION_LINE
        .captures_iter(block)
        .map(|line| {
            let mut params = BTreeMap::new();
            for pair in PARAM.captures_iter(&line[2]) {
                params.insert(pair[1].to_string(), strip_quotes(&pair[2]).to_string());
            }
            ParsedAction {
                name: line[1].to_string(),
                params,
            }
        })
        .collect()
}

/// Strip one layer of matching surrounding quotes, if present.
fn strip_quotes(value: &str) -> &str {
    let value = value.trim();
    for quote in ['\'', '"'] {
        if value.len() >= 2 && value.starts_with(quote) && value.ends_with(quote) {
            return &value[1..value.len() - 1];
        }
    }
    value
}
