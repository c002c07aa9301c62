//! Interval-transition notifications.
//!
//! The timer core emits [`Transition`](crate::core::Transition) values;
//! how they reach the user is up to a [`Notifier`] implementation, so the
//! state machine itself never touches a terminal.

use std::io::Write;

use colored::Colorize;

use crate::core::timer::Transition;

/// Receives interval transitions and presents them to the user.
#[cfg_attr(test, mockall::automock)]
pub trait Notifier {
    /// Present a single transition.
    fn notify(&mut self, transition: Transition);
}

/// Prints transitions to the terminal, optionally ringing the bell.
pub struct TerminalNotifier {
    bell: bool,
}

impl TerminalNotifier {
    /// Create a notifier. `bell` controls the audible alert.
    #[must_use]
    pub const fn new(bell: bool) -> Self {
        Self { bell }
    }
}

impl Notifier for TerminalNotifier {
    fn notify(&mut self, transition: Transition) {
        let line = match transition {
            Transition::LongBreak => transition.message().green().bold(),
            Transition::ShortBreak => transition.message().cyan().bold(),
            Transition::BackToWork => transition.message().yellow().bold(),
        };
        println!("\n{line}");

        if self.bell {
            print!("\x07");
            let _ = std::io::stdout().flush();
        }
    }
}

/// Rings the terminal bell without printing, for use inside the TUI
/// where the status line already shows the message.
pub struct BellNotifier {
    enabled: bool,
}

impl BellNotifier {
    /// Create a bell notifier. Silent when `enabled` is false.
    #[must_use]
    pub const fn new(enabled: bool) -> Self {
        Self { enabled }
    }
}

impl Notifier for BellNotifier {
    fn notify(&mut self, _transition: Transition) {
        if self.enabled {
            print!("\x07");
            let _ = std::io::stdout().flush();
        }
    }
}
