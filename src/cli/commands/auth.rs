//! Auth command implementation.

use colored::Colorize;

use crate::api::ApiClient;
use crate::cli::args::{AuthCommands, OutputFormat};
use crate::error::PomoError;
use crate::output::{format_value, to_json};

/// Execute auth subcommands.
///
/// # Errors
///
/// Returns an error if the request fails or the session file cannot be
/// updated.
pub fn auth(
    client: &mut ApiClient,
    cmd: AuthCommands,
    format: OutputFormat,
) -> Result<String, PomoError> {
    match cmd {
        AuthCommands::Register {
            username,
            email,
            password,
        } => {
            let response = client.register(&username, &email, &password)?;
            match format {
                OutputFormat::Json => format_value(response.as_ref(), format),
                OutputFormat::Pretty => Ok(format!(
                    "{} Account '{username}' created. Log in with 'pomo auth login'.",
                    "✓".green()
                )),
            }
        }

        AuthCommands::Login { login_id, password } => {
            let response = client.login(&login_id, &password)?;
            match format {
                OutputFormat::Json => to_json(&response),
                OutputFormat::Pretty => {
                    Ok(format!("{} Logged in as {}", "✓".green(), response.username))
                }
            }
        }

        AuthCommands::Logout => {
            client.logout()?;
            match format {
                OutputFormat::Json => Ok("null".to_string()),
                OutputFormat::Pretty => Ok("Logged out.".to_string()),
            }
        }

        AuthCommands::Status => {
            let credentials = client.credentials()?;
            match format {
                OutputFormat::Json => to_json(&credentials),
                OutputFormat::Pretty => Ok(credentials.map_or_else(
                    || "Not logged in.".to_string(),
                    |c| format!("Logged in as {}", c.username.bold()),
                )),
            }
        }
    }
}
