//! Application state for the TUI.

use crate::config::Config;
use crate::core::{BellNotifier, Notifier, PomodoroTimer};
use crate::error::PomoError;
use crate::tasks::{Task, TaskStore};

/// Application state.
pub struct App {
    /// Current configuration.
    pub config: Config,
    /// The interval state machine.
    pub timer: PomodoroTimer,
    /// Task storage.
    store: TaskStore,
    /// Current task list, in display order.
    pub tasks: Vec<Task>,
    /// Currently selected task index.
    pub selected: usize,
    /// Text being typed for a new task, when in input mode.
    pub input: Option<String>,
    /// Status message to display.
    pub status: Option<String>,
    /// Transition sink (bell, etc.).
    notifier: Box<dyn Notifier>,
}

impl App {
    /// Create a new app instance with default storage and notifier.
    ///
    /// # Errors
    ///
    /// Returns an error if storage cannot be opened.
    pub fn new(config: Config) -> Result<Self, PomoError> {
        let store = TaskStore::new()?;
        let notifier = Box::new(BellNotifier::new(config.general.notifications));
        Self::with_parts(config, store, notifier)
    }

    /// Create an app from explicit parts (useful for testing).
    ///
    /// # Errors
    ///
    /// Returns an error if the task list cannot be read.
    pub fn with_parts(
        config: Config,
        store: TaskStore,
        notifier: Box<dyn Notifier>,
    ) -> Result<Self, PomoError> {
        let tasks = store.list()?;
        let timer = PomodoroTimer::new(&config.timer);

        Ok(Self {
            config,
            timer,
            store,
            tasks,
            selected: 0,
            input: None,
            status: Some("Press space to start".to_string()),
            notifier,
        })
    }

    /// Advance the timer by one second and surface any transition.
    pub fn on_tick(&mut self) {
        if let Some(transition) = self.timer.tick() {
            self.notifier.notify(transition);
            self.status = Some(format!(
                "{} Press space to start.",
                transition.message()
            ));
        }
    }

    /// Start or pause the countdown.
    pub fn toggle_timer(&mut self) {
        if self.timer.is_running() {
            self.timer.pause();
            self.status = Some("Paused".to_string());
        } else {
            self.timer.start();
            self.status = Some(format!("{} started", self.timer.mode().label()));
        }
    }

    /// Reset to the start of a work interval.
    pub fn reset_timer(&mut self) {
        self.timer.reset();
        self.status = Some("Timer reset".to_string());
    }

    /// Reload settings from disk and restart the cycle with them.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file cannot be read.
    pub fn reload_settings(&mut self) -> Result<(), PomoError> {
        let config = Config::load()?;
        self.timer.apply_settings(&config.timer);
        self.config = config;
        self.status = Some("Settings reloaded, cycle restarted".to_string());
        Ok(())
    }

    /// Refresh the task list from storage.
    ///
    /// # Errors
    ///
    /// Returns an error if the task file cannot be read.
    pub fn refresh(&mut self) -> Result<(), PomoError> {
        self.tasks = self.store.list()?;

        // Adjust selection if it's out of bounds
        if !self.tasks.is_empty() && self.selected >= self.tasks.len() {
            self.selected = self.tasks.len() - 1;
        }

        Ok(())
    }

    /// Get the currently selected task.
    #[must_use]
    pub fn selected_task(&self) -> Option<&Task> {
        self.tasks.get(self.selected)
    }

    /// Move selection up.
    pub fn select_previous(&mut self) {
        if self.selected > 0 {
            self.selected -= 1;
        }
    }

    /// Move selection down.
    pub fn select_next(&mut self) {
        if !self.tasks.is_empty() && self.selected < self.tasks.len() - 1 {
            self.selected += 1;
        }
    }

    /// Toggle the selected task's completed flag.
    ///
    /// # Errors
    ///
    /// Returns an error if the operation fails.
    pub fn toggle_selected(&mut self) -> Result<(), PomoError> {
        if let Some(task) = self.selected_task() {
            let id = task.id;
            let updated = self.store.toggle(id)?;
            self.status = Some(format!(
                "{}: {}",
                if updated.completed { "Done" } else { "Reopened" },
                updated.text
            ));
            self.refresh()?;
        }
        Ok(())
    }

    /// Delete the selected task.
    ///
    /// # Errors
    ///
    /// Returns an error if the operation fails.
    pub fn delete_selected(&mut self) -> Result<(), PomoError> {
        if let Some(task) = self.selected_task() {
            let id = task.id;
            let removed = self.store.delete(id)?;
            self.status = Some(format!("Deleted: {}", removed.text));
            self.refresh()?;
        }
        Ok(())
    }

    /// Enter input mode for a new task.
    pub fn begin_input(&mut self) {
        self.input = Some(String::new());
    }

    /// Append a character to the input buffer.
    pub fn input_char(&mut self, c: char) {
        if let Some(input) = &mut self.input {
            input.push(c);
        }
    }

    /// Remove the last character from the input buffer.
    pub fn input_backspace(&mut self) {
        if let Some(input) = &mut self.input {
            input.pop();
        }
    }

    /// Leave input mode without adding a task.
    pub fn cancel_input(&mut self) {
        self.input = None;
    }

    /// Add the typed task and leave input mode.
    ///
    /// Whitespace-only input adds nothing.
    ///
    /// # Errors
    ///
    /// Returns an error if the task cannot be persisted.
    pub fn commit_input(&mut self) -> Result<(), PomoError> {
        if let Some(text) = self.input.take() {
            if let Some(added) = self.store.add(&text)? {
                self.status = Some(format!("Added: {}", added.text));
                self.refresh()?;
                self.selected = self.tasks.len().saturating_sub(1);
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::notify::MockNotifier;
    use crate::core::{Mode, Transition};
    use tempfile::TempDir;

    fn test_app(dir: &TempDir, notifier: Box<dyn Notifier>) -> App {
        let mut config = Config::default();
        config.timer.work_minutes = 1;
        config.timer.short_break_minutes = 1;
        config.timer.long_break_minutes = 1;

        let store = TaskStore::at_path(dir.path().join("tasks.json"));
        App::with_parts(config, store, notifier).unwrap()
    }

    fn quiet_notifier() -> Box<MockNotifier> {
        let mut notifier = MockNotifier::new();
        notifier.expect_notify().return_const(());
        Box::new(notifier)
    }

    #[test]
    fn test_transition_reaches_notifier() {
        let mut notifier = Box::new(MockNotifier::new());
        notifier
            .expect_notify()
            .withf(|t| *t == Transition::ShortBreak)
            .times(1)
            .return_const(());

        let dir = TempDir::new().unwrap();
        let mut app = test_app(&dir, notifier);

        app.toggle_timer();
        // 60 ticks run the minute down, the 61st completes the interval
        for _ in 0..61 {
            app.on_tick();
        }

        assert_eq!(app.timer.mode(), Mode::Short);
        assert!(!app.timer.is_running());
    }

    #[test]
    fn test_toggle_timer_starts_and_pauses() {
        let dir = TempDir::new().unwrap();
        let mut app = test_app(&dir, quiet_notifier());

        app.toggle_timer();
        assert!(app.timer.is_running());

        app.toggle_timer();
        assert!(!app.timer.is_running());
    }

    #[test]
    fn test_input_mode_round_trip() {
        let dir = TempDir::new().unwrap();
        let mut app = test_app(&dir, quiet_notifier());

        app.begin_input();
        for c in "read".chars() {
            app.input_char(c);
        }
        app.input_backspace();
        app.input_char('d');
        app.commit_input().unwrap();

        assert_eq!(app.tasks.len(), 1);
        assert_eq!(app.tasks[0].text, "read");
        assert!(app.input.is_none());
    }

    #[test]
    fn test_commit_whitespace_input_adds_nothing() {
        let dir = TempDir::new().unwrap();
        let mut app = test_app(&dir, quiet_notifier());

        app.begin_input();
        app.input_char(' ');
        app.commit_input().unwrap();

        assert!(app.tasks.is_empty());
    }

    #[test]
    fn test_toggle_and_delete_selected() {
        let dir = TempDir::new().unwrap();
        let mut app = test_app(&dir, quiet_notifier());

        app.begin_input();
        app.input_char('a');
        app.commit_input().unwrap();
        app.begin_input();
        app.input_char('b');
        app.commit_input().unwrap();

        app.selected = 0;
        app.toggle_selected().unwrap();
        assert!(app.tasks[0].completed);
        assert!(!app.tasks[1].completed);

        app.delete_selected().unwrap();
        assert_eq!(app.tasks.len(), 1);
        assert_eq!(app.tasks[0].text, "b");
    }

    #[test]
    fn test_selection_clamped_after_delete() {
        let dir = TempDir::new().unwrap();
        let mut app = test_app(&dir, quiet_notifier());

        app.begin_input();
        app.input_char('a');
        app.commit_input().unwrap();
        app.begin_input();
        app.input_char('b');
        app.commit_input().unwrap();

        app.selected = 1;
        app.delete_selected().unwrap();

        assert_eq!(app.selected, 0);
    }
}
