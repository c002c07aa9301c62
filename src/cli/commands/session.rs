//! Pomodoro session commands.

use serde_json::{json, Value};

use crate::api::ApiClient;
use crate::cli::args::{OutputFormat, SessionCommands};
use crate::config::Config;
use crate::error::PomoError;
use crate::output::format_value;

/// Execute pomodoro session subcommands.
///
/// # Errors
///
/// Returns an error if the settings JSON is malformed or the request
/// fails.
pub fn session(
    client: &ApiClient,
    config: &Config,
    cmd: SessionCommands,
    format: OutputFormat,
) -> Result<String, PomoError> {
    let response = match cmd {
        SessionCommands::Start { settings } => {
            let payload = match settings {
                Some(raw) => serde_json::from_str(&raw).map_err(PomoError::Parse)?,
                None => default_session_settings(config),
            };
            client.start_session(&payload)?
        }
        SessionCommands::End { id } => client.end_session(&id)?,
        SessionCommands::List => client.list_sessions()?,
    };

    format_value(response.as_ref(), format)
}

/// Session payload derived from the current timer settings.
fn default_session_settings(config: &Config) -> Value {
    json!({
        "work": config.timer.work_minutes,
        "short": config.timer.short_break_minutes,
        "long": config.timer.long_break_minutes,
    })
}
