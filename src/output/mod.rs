//! Output formatting for pomo.
//!
//! This module provides formatters for displaying tasks and API data in
//! various formats.

mod json;
mod pretty;

use serde_json::Value;

use crate::cli::args::OutputFormat;
use crate::error::PomoError;
use crate::tasks::Task;

pub use json::*;
pub use pretty::*;

/// Format local tasks based on output format
///
/// # Errors
///
/// Returns `PomoError::Parse` if JSON serialization fails.
pub fn format_tasks(tasks: &[Task], format: OutputFormat) -> Result<String, PomoError> {
    match format {
        OutputFormat::Pretty => Ok(format_tasks_pretty(tasks)),
        OutputFormat::Json => format_tasks_json(tasks),
    }
}

/// Format an opaque API response value based on output format.
///
/// A void success renders as a short confirmation in pretty mode and as
/// JSON `null` in json mode.
///
/// # Errors
///
/// Returns `PomoError::Parse` if JSON serialization fails.
pub fn format_value(value: Option<&Value>, format: OutputFormat) -> Result<String, PomoError> {
    match value {
        Some(v) => to_json(v),
        None => Ok(match format {
            OutputFormat::Pretty => "OK".to_string(),
            OutputFormat::Json => "null".to_string(),
        }),
    }
}
