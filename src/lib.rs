//! pomo - A Pomodoro timer and task tracker for the terminal
//!
//! This crate provides an interval timer implementing the Pomodoro
//! technique, a local task list, and a client for the companion sync API.

#![deny(unsafe_code)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod api;
pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod output;
pub mod tasks;
pub mod tui;

pub use api::ApiClient;
pub use cli::args::{Cli, Commands, OutputFormat};
pub use error::PomoError;
