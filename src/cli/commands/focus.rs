//! Focus session and blocked-site commands.

use crate::api::ApiClient;
use crate::cli::args::{FocusCommands, OutputFormat, SitesCommands};
use crate::error::PomoError;
use crate::output::format_value;

/// Execute focus subcommands.
///
/// # Errors
///
/// Returns an error if the request fails.
pub fn focus(
    client: &ApiClient,
    cmd: FocusCommands,
    format: OutputFormat,
) -> Result<String, PomoError> {
    let response = match cmd {
        FocusCommands::Start { goals } => client.start_focus(&goals)?,
        FocusCommands::End { id } => client.end_focus(&id)?,
        FocusCommands::Sites(args) => match args.command {
            SitesCommands::List => client.blocked_sites()?,
            SitesCommands::Add { site } => client.add_blocked_site(&site)?,
            SitesCommands::Remove { site } => client.remove_blocked_site(&site)?,
        },
    };

    format_value(response.as_ref(), format)
}
