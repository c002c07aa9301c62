//! Remote task-record commands.

use serde_json::Value;

use crate::api::ApiClient;
use crate::cli::args::{OutputFormat, RemoteCommands};
use crate::error::PomoError;
use crate::output::format_value;

/// Execute remote task-record subcommands.
///
/// Record bodies are opaque server-defined JSON and are passed through
/// unchanged.
///
/// # Errors
///
/// Returns an error if the JSON body is malformed or the request fails.
pub fn remote(
    client: &ApiClient,
    cmd: RemoteCommands,
    format: OutputFormat,
) -> Result<String, PomoError> {
    let response = match cmd {
        RemoteCommands::List => client.list_tasks()?,
        RemoteCommands::Create { json } => client.create_task(&parse_record(&json)?)?,
        RemoteCommands::Update { id, json } => client.update_task(&id, &parse_record(&json)?)?,
        RemoteCommands::Delete { id } => client.delete_task(&id)?,
    };

    format_value(response.as_ref(), format)
}

fn parse_record(json: &str) -> Result<Value, PomoError> {
    serde_json::from_str(json).map_err(PomoError::Parse)
}
