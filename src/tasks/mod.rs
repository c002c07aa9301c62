//! Local task list.
//!
//! Tasks live in `~/.pomo/tasks.json` and are read, modified, and written
//! back as a whole collection on every mutation.

mod store;

pub use store::{Task, TaskStore};
