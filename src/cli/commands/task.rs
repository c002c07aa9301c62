//! Local task list commands.

use colored::Colorize;

use crate::cli::args::{OutputFormat, TaskCommands};
use crate::error::PomoError;
use crate::output::{format_tasks, to_json};
use crate::tasks::TaskStore;

/// Execute task subcommands against the local list.
///
/// # Errors
///
/// Returns an error if the task file cannot be read or written, or if
/// the targeted task does not exist.
pub fn task(cmd: TaskCommands, format: OutputFormat) -> Result<String, PomoError> {
    let store = TaskStore::new()?;

    match cmd {
        TaskCommands::Add { text } => add_task(&store, &text, format),
        TaskCommands::List => format_tasks(&store.list()?, format),
        TaskCommands::Toggle { id } => toggle_task(&store, id, format),
        TaskCommands::Delete { id } => delete_task(&store, id, format),
    }
}

fn add_task(store: &TaskStore, text: &str, format: OutputFormat) -> Result<String, PomoError> {
    let Some(added) = store.add(text)? else {
        // Whitespace-only input is ignored, not an error
        return Ok(match format {
            OutputFormat::Json => "null".to_string(),
            OutputFormat::Pretty => "Nothing to add.".to_string(),
        });
    };

    match format {
        OutputFormat::Json => to_json(&added),
        OutputFormat::Pretty => Ok(format!(
            "{} {}  {}",
            "Added".green(),
            added.text,
            format!("#{}", added.id).dimmed()
        )),
    }
}

fn toggle_task(store: &TaskStore, id: u64, format: OutputFormat) -> Result<String, PomoError> {
    let updated = store.toggle(id)?;

    match format {
        OutputFormat::Json => to_json(&updated),
        OutputFormat::Pretty => {
            let state = if updated.completed { "done" } else { "open" };
            Ok(format!("Marked {} as {state}", updated.text))
        }
    }
}

fn delete_task(store: &TaskStore, id: u64, format: OutputFormat) -> Result<String, PomoError> {
    let removed = store.delete(id)?;

    match format {
        OutputFormat::Json => to_json(&removed),
        OutputFormat::Pretty => Ok(format!("{} {}", "Deleted".red(), removed.text)),
    }
}
