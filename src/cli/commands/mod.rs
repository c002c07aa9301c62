//! Command implementations for pomo.
//!
//! This module contains the implementation of all CLI commands.

mod auth;
mod completions;
mod focus;
mod remote;
mod session;
mod settings;
mod stats;
mod task;
mod timer;

pub use auth::auth;
pub use completions::completions;
pub use focus::focus;
pub use remote::remote;
pub use session::session;
pub use settings::settings;
pub use stats::stats;
pub use task::task;
pub use timer::timer;
