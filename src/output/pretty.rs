//! Pretty (human-readable) output formatting for pomo.

use colored::Colorize;

use crate::tasks::Task;

/// Format local tasks as a colored list.
#[must_use]
pub fn format_tasks_pretty(tasks: &[Task]) -> String {
    if tasks.is_empty() {
        return "No tasks yet.\n\nAdd one with: pomo task add \"...\"".to_string();
    }

    let mut output = Vec::new();

    for task in tasks {
        let icon = if task.completed {
            "[x]".green().to_string()
        } else {
            "[ ]".to_string()
        };
        let text = if task.completed {
            task.text.dimmed().strikethrough().to_string()
        } else {
            task.text.clone()
        };
        let id = format!("#{}", task.id).dimmed();

        output.push(format!("{icon} {text}  {id}"));
    }

    output.push(String::new());
    output.push(format!(
        "{} task(s), {} done",
        tasks.len(),
        tasks.iter().filter(|t| t.completed).count()
    ));

    output.join("\n")
}
