//! Event handling for the TUI.

use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEventKind, KeyModifiers};

use crate::error::PomoError;
use crate::tui::app::App;

/// Action to take after handling an event.
pub enum Action {
    /// Quit the application.
    Quit,
    /// Start or pause the countdown.
    ToggleTimer,
    /// Reset to the start of a work interval.
    ResetTimer,
    /// Reload settings from disk and restart the cycle.
    ReloadSettings,
    /// Toggle the selected task.
    ToggleTask,
    /// Delete the selected task.
    DeleteTask,
    /// Commit the task being typed.
    CommitInput,
}

/// Handle terminal events, waiting at most `timeout`.
///
/// Returns an action to take, or None if no action is needed.
///
/// # Errors
///
/// Returns an error if event polling fails.
pub fn handle_events(app: &mut App, timeout: Duration) -> Result<Option<Action>, PomoError> {
    if !event::poll(timeout).map_err(|e| PomoError::Config(format!("Event poll failed: {e}")))? {
        return Ok(None);
    }

    let Event::Key(key) =
        event::read().map_err(|e| PomoError::Config(format!("Event read failed: {e}")))?
    else {
        return Ok(None);
    };

    if key.kind != KeyEventKind::Press {
        return Ok(None);
    }

    // Handle Ctrl+C
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Ok(Some(Action::Quit));
    }

    // Input mode captures everything except Enter and Esc
    if app.input.is_some() {
        match key.code {
            KeyCode::Enter => return Ok(Some(Action::CommitInput)),
            KeyCode::Esc => app.cancel_input(),
            KeyCode::Backspace => app.input_backspace(),
            KeyCode::Char(c) => app.input_char(c),
            _ => {}
        }
        return Ok(None);
    }

    match key.code {
        // Quit
        KeyCode::Char('q') | KeyCode::Esc => return Ok(Some(Action::Quit)),

        // Timer control
        KeyCode::Char(' ') => return Ok(Some(Action::ToggleTimer)),
        KeyCode::Char('r') => return Ok(Some(Action::ResetTimer)),
        KeyCode::Char('o') => return Ok(Some(Action::ReloadSettings)),

        // Navigation - vim style
        KeyCode::Char('j') | KeyCode::Down => app.select_next(),
        KeyCode::Char('k') | KeyCode::Up => app.select_previous(),

        // Task actions
        KeyCode::Char('c') => return Ok(Some(Action::ToggleTask)),
        KeyCode::Char('x') => return Ok(Some(Action::DeleteTask)),
        KeyCode::Char('a') => app.begin_input(),

        // Help
        KeyCode::Char('?') => {
            app.status = Some(
                "space:start/pause | r:reset | o:reload settings | j/k:nav | c:toggle | x:delete | a:add | q:quit"
                    .to_string(),
            );
        }

        _ => {}
    }

    Ok(None)
}
