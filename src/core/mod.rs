//! Core timer logic, independent of any presentation mechanism.

pub mod notify;
pub mod timer;

pub use notify::{BellNotifier, Notifier, TerminalNotifier};
pub use timer::{format_mmss, Mode, PomodoroTimer, Transition};
