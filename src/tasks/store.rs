//! Task list storage.
//!
//! The whole collection is rewritten on every mutation; there is no
//! partial update. Display order is insertion order.

use std::path::PathBuf;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::config::Paths;
use crate::error::PomoError;

/// A single task.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    /// Stable identifier, never reused within a task file.
    pub id: u64,
    /// Task text. Always non-empty and trimmed.
    pub text: String,
    /// Whether the task is done.
    pub completed: bool,
    /// When the task was added.
    pub created_at: DateTime<Utc>,
}

/// On-disk shape of the task file.
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct TaskFile {
    /// Next id to hand out. Monotonic so deleted ids are never reused.
    next_id: u64,
    tasks: Vec<Task>,
}

impl Default for TaskFile {
    fn default() -> Self {
        Self {
            next_id: 1,
            tasks: Vec::new(),
        }
    }
}

/// Storage for the local task list.
pub struct TaskStore {
    path: PathBuf,
}

impl TaskStore {
    /// Create a store at the default location.
    ///
    /// # Errors
    ///
    /// Returns an error if the data directory cannot be created.
    pub fn new() -> Result<Self, PomoError> {
        let paths = Paths::new()?;
        paths.ensure_dirs()?;
        Ok(Self::at_path(paths.tasks_file))
    }

    /// Create a store backed by a specific file (useful for testing).
    #[must_use]
    pub const fn at_path(path: PathBuf) -> Self {
        Self { path }
    }

    /// All tasks in display (insertion) order.
    ///
    /// # Errors
    ///
    /// Returns an error if the task file cannot be read or parsed.
    pub fn list(&self) -> Result<Vec<Task>, PomoError> {
        Ok(self.load()?.tasks)
    }

    /// Append a new task with the trimmed text.
    ///
    /// Empty or whitespace-only input is a no-op and returns `None`.
    ///
    /// # Errors
    ///
    /// Returns an error if the task file cannot be read or written.
    pub fn add(&self, text: &str) -> Result<Option<Task>, PomoError> {
        let text = text.trim();
        if text.is_empty() {
            return Ok(None);
        }

        let mut file = self.load()?;
        let task = Task {
            id: file.next_id,
            text: text.to_string(),
            completed: false,
            created_at: Utc::now(),
        };
        file.next_id += 1;
        file.tasks.push(task.clone());
        self.save(&file)?;

        Ok(Some(task))
    }

    /// Flip the `completed` flag of the task with the given id.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if no task has that id, or a storage error.
    pub fn toggle(&self, id: u64) -> Result<Task, PomoError> {
        let mut file = self.load()?;

        let task = file
            .tasks
            .iter_mut()
            .find(|t| t.id == id)
            .ok_or_else(|| PomoError::NotFound(format!("No task with id {id}")))?;
        task.completed = !task.completed;
        let updated = task.clone();

        self.save(&file)?;
        Ok(updated)
    }

    /// Remove the task with the given id, preserving the order of the rest.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if no task has that id, or a storage error.
    pub fn delete(&self, id: u64) -> Result<Task, PomoError> {
        let mut file = self.load()?;

        let index = file
            .tasks
            .iter()
            .position(|t| t.id == id)
            .ok_or_else(|| PomoError::NotFound(format!("No task with id {id}")))?;
        let removed = file.tasks.remove(index);

        self.save(&file)?;
        Ok(removed)
    }

    /// Read the whole collection. A missing file yields an empty list.
    fn load(&self) -> Result<TaskFile, PomoError> {
        if !self.path.exists() {
            return Ok(TaskFile::default());
        }

        let contents = std::fs::read_to_string(&self.path).map_err(|e| {
            PomoError::Storage(format!(
                "Failed to read task file {}: {e}",
                self.path.display()
            ))
        })?;

        serde_json::from_str(&contents).map_err(|e| {
            PomoError::Storage(format!(
                "Failed to parse task file {}: {e}",
                self.path.display()
            ))
        })
    }

    /// Write the whole collection back.
    fn save(&self, file: &TaskFile) -> Result<(), PomoError> {
        let contents = serde_json::to_string_pretty(file)?;

        std::fs::write(&self.path, contents).map_err(|e| {
            PomoError::Storage(format!(
                "Failed to write task file {}: {e}",
                self.path.display()
            ))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn create_test_store(dir: &TempDir) -> TaskStore {
        TaskStore::at_path(dir.path().join("tasks.json"))
    }

    #[test]
    fn test_list_empty_when_file_missing() {
        let dir = TempDir::new().unwrap();
        let store = create_test_store(&dir);

        assert!(store.list().unwrap().is_empty());
    }

    #[test]
    fn test_add_appends_in_order() {
        let dir = TempDir::new().unwrap();
        let store = create_test_store(&dir);

        store.add("first").unwrap();
        store.add("second").unwrap();

        let tasks = store.list().unwrap();
        assert_eq!(tasks.len(), 2);
        assert_eq!(tasks[0].text, "first");
        assert_eq!(tasks[1].text, "second");
        assert!(!tasks[1].completed);
    }

    #[test]
    fn test_add_trims_text() {
        let dir = TempDir::new().unwrap();
        let store = create_test_store(&dir);

        let task = store.add("  buy milk  ").unwrap().unwrap();

        assert_eq!(task.text, "buy milk");
    }

    #[test]
    fn test_add_rejects_empty_input() {
        let dir = TempDir::new().unwrap();
        let store = create_test_store(&dir);

        assert!(store.add("").unwrap().is_none());
        assert!(store.add("   \t ").unwrap().is_none());
        assert!(store.list().unwrap().is_empty());
    }

    #[test]
    fn test_toggle_flips_only_target() {
        let dir = TempDir::new().unwrap();
        let store = create_test_store(&dir);

        store.add("a").unwrap();
        let b = store.add("b").unwrap().unwrap();

        store.toggle(b.id).unwrap();

        let tasks = store.list().unwrap();
        assert!(!tasks[0].completed);
        assert!(tasks[1].completed);

        // Toggling again flips back
        store.toggle(b.id).unwrap();
        let tasks = store.list().unwrap();
        assert!(!tasks[1].completed);
    }

    #[test]
    fn test_toggle_missing_id() {
        let dir = TempDir::new().unwrap();
        let store = create_test_store(&dir);

        assert!(matches!(store.toggle(42), Err(PomoError::NotFound(_))));
    }

    #[test]
    fn test_delete_preserves_relative_order() {
        let dir = TempDir::new().unwrap();
        let store = create_test_store(&dir);

        store.add("a").unwrap();
        let b = store.add("b").unwrap().unwrap();
        store.add("c").unwrap();

        store.delete(b.id).unwrap();

        let tasks = store.list().unwrap();
        assert_eq!(tasks.len(), 2);
        assert_eq!(tasks[0].text, "a");
        assert_eq!(tasks[1].text, "c");
    }

    #[test]
    fn test_delete_missing_id() {
        let dir = TempDir::new().unwrap();
        let store = create_test_store(&dir);

        assert!(matches!(store.delete(7), Err(PomoError::NotFound(_))));
    }

    #[test]
    fn test_ids_are_never_reused() {
        let dir = TempDir::new().unwrap();
        let store = create_test_store(&dir);

        let a = store.add("a").unwrap().unwrap();
        store.delete(a.id).unwrap();
        let b = store.add("b").unwrap().unwrap();

        assert!(b.id > a.id);
    }

    #[test]
    fn test_collection_persists_across_store_instances() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("tasks.json");

        TaskStore::at_path(path.clone()).add("persisted").unwrap();

        let tasks = TaskStore::at_path(path).list().unwrap();
        assert_eq!(tasks.len(), 1);
        assert_eq!(tasks[0].text, "persisted");
    }
}
