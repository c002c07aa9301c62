//! Client for the pomo sync API.
//!
//! A single authenticated-request primitive plus thin per-domain façades
//! (auth, task records, pomodoro sessions, focus sessions, stats) that map
//! operations to HTTP verbs and paths and unwrap JSON responses.

pub mod client;
pub mod credentials;
pub mod types;

pub use client::ApiClient;
pub use credentials::{Credentials, SessionStore};
pub use types::LoginResponse;
