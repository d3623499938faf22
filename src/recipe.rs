//! Recipe-template extraction.
//!
//! The prompt instructs the model to fill a fixed markdown template, and
//! extraction is regex-bound to that exact shape: the `Recipe Name:`
//! heading line and the literal `### **Ingredients:**` section. A recipe
//! that drifts from the template yields the fallback title or an empty
//! ingredient list — there is deliberately no looser fallback parse.

use std::sync::LazyLock;

use regex::Regex;

/// Title used when no recipe heading is found.
pub const UNTITLED: &str = "Untitled Recipe";

/// Characters stripped from titles and filenames.
const ILLEGAL: &[char] = &['<', '>', ':', '"', '/', '\\', '|', '?', '*', '\'', '`'];

static TITLE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?im)^##.*?Recipe Name:\s*(.+)$").unwrap());
static INGREDIENTS_SECTION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)### \*\*Ingredients:\*\*.*?\n\n(.*?)\n\n###").unwrap());
static BULLET: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^\*\s*(.+?)(?:,\s*\d+.*)?$").unwrap());

/// Extract and sanitize the recipe title from a markdown body.
///
/// Falls back to [`UNTITLED`] when the heading is absent or sanitizes
/// to nothing.
pub fn extract_title(markdown: &str) -> String {
    let raw = TITLE
        .captures(markdown)
        .map_or(UNTITLED, |caps| caps.get(1).map_or(UNTITLED, |m| m.as_str()));

    let title = sanitize_title(raw);
    if title.is_empty() {
        UNTITLED.to_string()
    } else {
        title
    }
}

/// Extract the ingredient names from a recipe's markdown body.
///
/// Looks for the section between the literal `### **Ingredients:**`
/// heading and the next `###` heading, then takes each bullet line's
/// leading text up to an optional trailing `, <quantity>` clause,
/// trimmed and lowercased. Returns an empty list when the section is
/// not in that exact shape.
pub fn extract_ingredients(markdown: &str) -> Vec<String> {
    let Some(section) = INGREDIENTS_SECTION.captures(markdown) else {
        return Vec::new();
    };

    BULLET
        .captures_iter(&section[1])
        .filter_map(|caps| {
            let name = caps[1].split(',').next().unwrap_or("").trim().to_lowercase();
            (!name.is_empty()).then_some(name)
        })
        .collect()
}

/// Strip filesystem-hostile characters and markdown emphasis artifacts.
pub fn sanitize_title(raw: &str) -> String {
    raw.chars()
        .filter(|c| !ILLEGAL.contains(c))
        .collect::<String>()
        .replace("__", "")
        .trim()
        .to_string()
}

/// Turn a title into a recipe filename: sanitized, spaces as
/// underscores, `.md` appended.
pub fn sanitize_filename(title: &str) -> String {
    format!("{}.md", sanitize_title(title).replace(' ', "_"))
}

#[cfg(test)]
mod tests {
    use super::*;

    const RECIPE: &str = "## **Recipe Name: Egg Fried Rice**\n\n\
        * **Servings:** 1\n\
        * **Total Time:** 15 minutes\n\n\
        ### **Ingredients:**\n\n\
        * Leftover rice, 2 cups\n\
        * Eggs, 2 large\n\
        * Soy Sauce\n\n\
        ### **Instructions (Remy's Simple Steps):**\n\n\
        1. Heat the pan.\n";

    #[test]
    fn extracts_title_from_heading() {
        assert_eq!(extract_title(RECIPE), "Egg Fried Rice");
    }

    #[test]
    fn extracts_title_with_placeholder_brackets_and_markers() {
        // The model sometimes leaves template artifacts in the heading.
        let markdown = "## Recipe Name: <Egg Fried Rice>**\nbody";
        assert_eq!(extract_title(markdown), "Egg Fried Rice");
    }

    #[test]
    fn missing_heading_falls_back_to_untitled() {
        assert_eq!(extract_title("just some text"), UNTITLED);
        assert_eq!(extract_title("## **Recipe Name: **\n"), UNTITLED);
    }

    #[test]
    fn extracts_ingredient_names_without_quantities() {
        assert_eq!(
            extract_ingredients(RECIPE),
            vec!["leftover rice", "eggs", "soy sauce"]
        );
    }

    #[test]
    fn non_template_markdown_yields_no_ingredients() {
        assert!(extract_ingredients("### Ingredients\n* Eggs\n").is_empty());
        assert!(extract_ingredients("").is_empty());
    }

    #[test]
    fn non_numeric_quantity_clause_is_dropped_too() {
        let markdown = "### **Ingredients:**\n\n* Butter, a knob\n\n### Next\n";
        assert_eq!(extract_ingredients(markdown), vec!["butter"]);
    }

    #[test]
    fn sanitize_strips_illegal_characters() {
        assert_eq!(sanitize_title("**Egg: Fried/Rice?**"), "Egg FriedRice");
        assert_eq!(sanitize_title("  Soup  "), "Soup");
    }

    #[test]
    fn sanitize_filename_replaces_spaces() {
        assert_eq!(sanitize_filename("Egg Fried Rice"), "Egg_Fried_Rice.md");
    }
}
