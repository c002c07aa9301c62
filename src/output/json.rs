//! JSON output formatting for pomo.

use serde::Serialize;
use serde_json::json;

use crate::error::PomoError;
use crate::tasks::Task;

/// Format local tasks as JSON
///
/// # Errors
///
/// Returns `PomoError::Parse` if JSON serialization fails.
pub fn format_tasks_json(tasks: &[Task]) -> Result<String, PomoError> {
    let output = json!({
        "count": tasks.len(),
        "items": tasks
    });
    Ok(serde_json::to_string_pretty(&output)?)
}

/// Generic JSON formatter for any serializable type
///
/// # Errors
///
/// Returns `PomoError::Parse` if JSON serialization fails.
pub fn to_json<T: Serialize>(value: &T) -> Result<String, PomoError> {
    Ok(serde_json::to_string_pretty(value)?)
}
