//! Terminal User Interface (TUI) for pomo.
//!
//! The interactive timer: countdown display, task list, and keyboard
//! control. Built with ratatui and crossterm.

mod app;
mod event;
mod ui;

pub use app::App;

use std::io;
use std::time::{Duration, Instant};

use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::prelude::*;

use crate::config::Config;
use crate::error::PomoError;

/// Run the TUI application.
///
/// # Errors
///
/// Returns an error if the TUI fails to initialize or run.
pub fn run(config: &Config) -> Result<(), PomoError> {
    // Setup terminal
    enable_raw_mode().map_err(|e| PomoError::Config(format!("Failed to enable raw mode: {e}")))?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)
        .map_err(|e| PomoError::Config(format!("Failed to setup terminal: {e}")))?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)
        .map_err(|e| PomoError::Config(format!("Failed to create terminal: {e}")))?;

    // Create app state and run main loop
    let mut app = App::new(config.clone())?;
    let result = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode().ok();
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )
    .ok();
    terminal.show_cursor().ok();

    result
}

/// Run the main application loop.
///
/// This loop is the only tick source: the timer advances here, once per
/// second, no matter how often start is pressed. Input is polled in the
/// gaps between ticks.
fn run_app<B: Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<(), PomoError> {
    let tick_rate = Duration::from_secs(1);
    let mut last_tick = Instant::now();

    loop {
        // Draw UI
        terminal
            .draw(|frame| ui::render(frame, app))
            .map_err(|e| PomoError::Config(format!("Failed to draw: {e}")))?;

        // Handle events until the next tick is due
        let timeout = tick_rate.saturating_sub(last_tick.elapsed());
        if let Some(action) = event::handle_events(app, timeout)? {
            match action {
                event::Action::Quit => break,
                event::Action::ToggleTimer => app.toggle_timer(),
                event::Action::ResetTimer => app.reset_timer(),
                event::Action::ReloadSettings => app.reload_settings()?,
                event::Action::ToggleTask => app.toggle_selected()?,
                event::Action::DeleteTask => app.delete_selected()?,
                event::Action::CommitInput => app.commit_input()?,
            }
        }

        if last_tick.elapsed() >= tick_rate {
            app.on_tick();
            last_tick = Instant::now();
        }
    }

    Ok(())
}
