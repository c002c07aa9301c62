//! Statistics command implementation.

use crate::api::ApiClient;
use crate::cli::args::{OutputFormat, StatsCommands};
use crate::error::PomoError;
use crate::output::format_value;

/// Execute stats subcommands.
///
/// The statistics shape is owned by the server; responses are rendered
/// as JSON in both output modes.
///
/// # Errors
///
/// Returns an error if the request fails.
pub fn stats(
    client: &ApiClient,
    cmd: StatsCommands,
    format: OutputFormat,
) -> Result<String, PomoError> {
    let response = match cmd {
        StatsCommands::Show => client.user_stats()?,
        StatsCommands::Daily => client.daily_stats()?,
        StatsCommands::Weekly => client.weekly_stats()?,
    };

    format_value(response.as_ref(), format)
}
