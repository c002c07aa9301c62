//! Timer command implementation.

use std::io::Write;
use std::time::Duration;

use colored::Colorize;

use crate::config::Config;
use crate::core::{Notifier, PomodoroTimer, TerminalNotifier};
use crate::error::PomoError;
use crate::tui;

/// Execute the timer command.
///
/// By default this opens the interactive interface; `--inline` runs a
/// plain countdown on the current terminal instead, flowing through the
/// interval cycle until interrupted.
///
/// # Errors
///
/// Returns an error if the configuration cannot be loaded or the
/// terminal cannot be driven.
pub fn timer(config: &Config, inline: bool) -> Result<String, PomoError> {
    if inline {
        run_inline(config);
    } else {
        tui::run(config)?;
    }
    Ok(String::new())
}

/// Plain single-line countdown. Runs until the process is interrupted.
fn run_inline(config: &Config) {
    let mut timer = PomodoroTimer::new(&config.timer);
    let mut notifier = TerminalNotifier::new(config.general.notifications);

    timer.start();

    loop {
        print!("\r{}  {}   ", timer.mode().label().bold(), timer.display());
        let _ = std::io::stdout().flush();

        std::thread::sleep(Duration::from_secs(1));

        if let Some(transition) = timer.tick() {
            notifier.notify(transition);
            // Inline mode has no input, so flow straight into the next
            // interval rather than waiting for a start.
            timer.start();
        }
    }
}
