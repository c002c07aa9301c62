//! Settings command implementation.

use colored::Colorize;

use crate::cli::args::{OutputFormat, SettingsCommands};
use crate::config::Config;
use crate::core::format_mmss;
use crate::error::PomoError;
use crate::output::to_json;

/// Execute settings subcommands.
///
/// # Errors
///
/// Returns an error if the config file cannot be read or written.
pub fn settings(cmd: SettingsCommands, format: OutputFormat) -> Result<String, PomoError> {
    match cmd {
        SettingsCommands::Show => show(format),
        SettingsCommands::Set { work, short, long } => set(work, short, long, format),
    }
}

fn show(format: OutputFormat) -> Result<String, PomoError> {
    let config = Config::load()?;

    match format {
        OutputFormat::Json => to_json(&config.timer),
        OutputFormat::Pretty => {
            let timer = &config.timer;
            let mut output = Vec::new();

            output.push("Timer settings".bold().to_string());
            output.push(format!(
                "  Work:        {:>2} min  ({})",
                timer.work_minutes,
                format_mmss(timer.work_minutes * 60)
            ));
            output.push(format!(
                "  Short break: {:>2} min  ({})",
                timer.short_break_minutes,
                format_mmss(timer.short_break_minutes * 60)
            ));
            output.push(format!(
                "  Long break:  {:>2} min  ({})",
                timer.long_break_minutes,
                format_mmss(timer.long_break_minutes * 60)
            ));
            output.push(format!(
                "  Long break every {} work intervals",
                timer.pomodoros_until_long_break
            ));

            Ok(output.join("\n"))
        }
    }
}

fn set(
    work: Option<u32>,
    short: Option<u32>,
    long: Option<u32>,
    format: OutputFormat,
) -> Result<String, PomoError> {
    let mut config = Config::load()?;

    if let Some(minutes) = work {
        config.timer.work_minutes = minutes;
    }
    if let Some(minutes) = short {
        config.timer.short_break_minutes = minutes;
    }
    if let Some(minutes) = long {
        config.timer.long_break_minutes = minutes;
    }

    // Out-of-range values are clamped, not rejected
    config.timer.sanitize();
    config.save()?;

    match format {
        OutputFormat::Json => to_json(&config.timer),
        OutputFormat::Pretty => Ok(format!(
            "{} work {}m / short {}m / long {}m\nA running timer picks this up on reset or reload ('o').",
            "Saved:".green(),
            config.timer.work_minutes,
            config.timer.short_break_minutes,
            config.timer.long_break_minutes
        )),
    }
}
