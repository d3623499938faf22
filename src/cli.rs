//! CLI interface for Sous.
//!
//! Non-interactive by design: arguments in, text out. The only
//! two-step flow is recipe deletion, which previews first and
//! mutates only under `--confirm`.

mod format;

use clap::{Parser, Subcommand};

use crate::config::Config;
use crate::cook;
use crate::delete;
use crate::provider::{Gemini, RetryPolicy};
use crate::session::Session;
use crate::storage::Storage;

use format::{format_audit, format_memory, format_run_report, format_schedule};

/// Sous — a recipe assistant for the command line.
#[derive(Debug, Parser)]
#[command(name = "sous", after_long_help = WORKFLOW_HELP)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

const WORKFLOW_HELP: &str = r#"Workflow: an evening meal
  1. export GEMINI_API_KEY=...
  2. sous cook --authorize "something quick with rice and eggs"
     → prints the recipe, saves it, and schedules a check-on reminder
  3. sous schedule
  4. sous recipe delete Egg_Fried_Rice
     → previews the deletion, including which ingredients to mark disliked
  5. sous recipe delete Egg_Fried_Rice --confirm

Memory:
  sous dislike mushrooms cilantro
  sous memory"#;

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Generate a recipe and execute its action plan.
    ///
    /// Scheduling actions are denied unless `--authorize` is given
    /// (or standing authorization is configured).
    Cook {
        /// Permit scheduling actions for this run.
        #[arg(long)]
        authorize: bool,

        /// What to cook, in plain language.
        request: String,
    },

    /// Mark ingredients as disliked without generating anything.
    Dislike {
        /// Ingredients to avoid from now on.
        #[arg(required = true)]
        items: Vec<String>,
    },

    /// Show remembered meals and disliked ingredients.
    Memory,

    /// Manage saved recipes.
    Recipe {
        #[command(subcommand)]
        command: RecipeCommand,
    },

    /// Show scheduled reminders and calendar events.
    Schedule,

    /// Show the audit log of executed actions.
    Log,
}

#[derive(Debug, Subcommand)]
pub enum RecipeCommand {
    /// List saved recipes.
    List,

    /// Print a saved recipe.
    Show {
        /// Recipe name (`.md` optional).
        name: String,
    },

    /// Delete a saved recipe and its scheduled events.
    ///
    /// Without `--confirm` this only previews what would happen.
    Delete {
        /// Recipe name (`.md` optional).
        name: String,

        /// Actually delete; the default is a dry-run preview.
        #[arg(long)]
        confirm: bool,

        /// Comma-separated ingredients to mark disliked instead of
        /// the recipe's own ingredient list.
        #[arg(long)]
        dislikes: Option<String>,
    },
}

/// Run the CLI, returning an error message on failure.
pub fn run(config: &Config, storage: &Storage) -> Result<(), String> {
    let cli = Cli::parse();

    match cli.command {
        Command::Cook { authorize, request } => cmd_cook(config, storage, authorize, &request),
        Command::Dislike { items } => cmd_dislike(storage, &items),
        Command::Memory => {
            println!("{}", format_memory(&storage.load_memory()));
            Ok(())
        }
        Command::Recipe { command } => match command {
            RecipeCommand::List => cmd_recipe_list(storage),
            RecipeCommand::Show { name } => cmd_recipe_show(storage, &name),
            RecipeCommand::Delete {
                name,
                confirm,
                dislikes,
            } => cmd_recipe_delete(storage, &name, confirm, dislikes.as_deref()),
        },
        Command::Schedule => {
            let events = storage.load_events().map_err(|e| e.to_string())?;
            println!("{}", format_schedule(&events));
            Ok(())
        }
        Command::Log => {
            let entries = storage.load_audit().map_err(|e| e.to_string())?;
            println!("{}", format_audit(&entries));
            Ok(())
        }
    }
}

fn cmd_cook(
    config: &Config,
    storage: &Storage,
    authorize: bool,
    request: &str,
) -> Result<(), String> {
    let api_key = Config::api_key()?;
    let provider = Gemini::new(&config.model, api_key).map_err(|e| e.to_string())?;

    let events = storage.load_events().map_err(|e| e.to_string())?;
    let mut session = Session::new(authorize || config.authorize, events);

    let outcome = cook::run(
        storage,
        &mut session,
        &provider,
        &RetryPolicy::default(),
        request,
    )?;

    match outcome {
        cook::Outcome::Preference { message } => println!("{message}"),
        cook::Outcome::Recipe(report) => {
            println!("{}", format_run_report(&report));
            storage
                .save_events(&session.events)
                .map_err(|e| e.to_string())?;
        }
    }
    Ok(())
}

fn cmd_dislike(storage: &Storage, items: &[String]) -> Result<(), String> {
    let learned = storage
        .record_dislikes(items.iter().map(String::as_str))
        .map_err(|e| e.to_string())?;
    if learned > 0 {
        println!(
            "Understood! I've added {} to your list of disliked foods.",
            items.join(", ")
        );
    } else {
        println!("I already knew about those foods, chef. Anything else I can help with?");
    }
    Ok(())
}

fn cmd_recipe_list(storage: &Storage) -> Result<(), String> {
    let names = storage.list_recipes().map_err(|e| e.to_string())?;
    if names.is_empty() {
        println!("No saved recipes.");
    }
    for name in names {
        println!("{name}");
    }
    Ok(())
}

fn cmd_recipe_show(storage: &Storage, name: &str) -> Result<(), String> {
    let filename = canonical_filename(name);
    let content = storage.read_recipe(&filename).map_err(|e| e.to_string())?;
    println!("{content}");
    Ok(())
}

fn cmd_recipe_delete(
    storage: &Storage,
    name: &str,
    confirm: bool,
    dislikes: Option<&str>,
) -> Result<(), String> {
    let filename = canonical_filename(name);
    let proposal = delete::propose(storage, &filename)?;

    if !confirm {
        println!("Would delete '{}'.", proposal.filename);
        println!("Scheduled events matching '{}' would be removed.", proposal.title);
        if proposal.default_dislikes.is_empty() {
            println!("No ingredients found to mark as disliked.");
        } else {
            println!(
                "Ingredients to mark as disliked: {} (override with --dislikes).",
                proposal.default_dislikes.join(", ")
            );
        }
        println!("Re-run with --confirm to proceed.");
        return Ok(());
    }

    let dislikes: Vec<String> = match dislikes {
        Some(raw) => raw
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .collect(),
        None => proposal.default_dislikes.clone(),
    };

    let events = storage.load_events().map_err(|e| e.to_string())?;
    let mut session = Session::new(false, events);
    let deletion = delete::confirm(storage, &mut session, &filename, &proposal.title, &dislikes);
    storage
        .save_events(&session.events)
        .map_err(|e| e.to_string())?;

    println!("{}", deletion.file_result);
    println!(
        "{} scheduled event(s) removed for recipe '{}'.",
        deletion.events_removed, proposal.title
    );
    println!("{} new disliked ingredient(s) recorded.", deletion.dislikes_learned);
    Ok(())
}

/// Accept recipe names with or without the `.md` extension.
fn canonical_filename(name: &str) -> String {
    if name.ends_with(".md") {
        name.to_string()
    } else {
        format!("{name}.md")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn canonical_filename_appends_extension_once() {
        assert_eq!(canonical_filename("Soup"), "Soup.md");
        assert_eq!(canonical_filename("Soup.md"), "Soup.md");
    }

    #[test]
    fn cli_parses_cook_with_authorize() {
        let cli = Cli::try_parse_from(["sous", "cook", "--authorize", "rice"]).unwrap();
        let Command::Cook { authorize, request } = cli.command else {
            panic!("expected cook");
        };
        assert!(authorize);
        assert_eq!(request, "rice");
    }

    #[test]
    fn cli_requires_at_least_one_dislike_item() {
        assert!(Cli::try_parse_from(["sous", "dislike"]).is_err());
        assert!(Cli::try_parse_from(["sous", "dislike", "okra"]).is_ok());
    }

    #[test]
    fn cli_parses_delete_preview_and_confirm() {
        let cli = Cli::try_parse_from([
            "sous", "recipe", "delete", "Soup", "--confirm", "--dislikes", "a, b",
        ])
        .unwrap();
        let Command::Recipe {
            command:
                RecipeCommand::Delete {
                    name,
                    confirm,
                    dislikes,
                },
        } = cli.command
        else {
            panic!("expected recipe delete");
        };
        assert_eq!(name, "Soup");
        assert!(confirm);
        assert_eq!(dislikes.as_deref(), Some("a, b"));
    }
}
