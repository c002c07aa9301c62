//! UI rendering for the TUI.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, List, ListItem, ListState, Paragraph},
    Frame,
};

use crate::core::Mode;
use crate::tui::app::App;

/// Render the application UI.
pub fn render(frame: &mut Frame<'_>, app: &App) {
    // Create layout: timer, progress, task list, status bar
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4), // Timer
            Constraint::Length(1), // Progress
            Constraint::Min(0),    // Task list
            Constraint::Length(1), // Status bar
        ])
        .split(frame.area());

    render_timer(frame, app, chunks[0]);
    render_progress(frame, app, chunks[1]);
    render_tasks(frame, app, chunks[2]);
    render_status_bar(frame, app, chunks[3]);
}

const fn mode_color(mode: Mode) -> Color {
    match mode {
        Mode::Work => Color::Red,
        Mode::Short => Color::Cyan,
        Mode::Long => Color::Green,
    }
}

/// Render the countdown and mode label.
fn render_timer(frame: &mut Frame<'_>, app: &App, area: Rect) {
    let color = mode_color(app.timer.mode());

    let state = if app.timer.is_running() {
        "▶"
    } else {
        "⏸"
    };
    let title = format!(
        " {} {}  ·  cycle {} ",
        state,
        app.timer.mode().label(),
        app.timer.cycle_count()
    );

    let clock = Paragraph::new(Line::from(Span::styled(
        app.timer.display(),
        Style::default().fg(color).add_modifier(Modifier::BOLD),
    )))
    .alignment(Alignment::Center)
    .block(
        Block::default()
            .borders(Borders::ALL)
            .title(title)
            .border_style(Style::default().fg(color)),
    );

    frame.render_widget(clock, area);
}

/// Render the interval progress gauge.
fn render_progress(frame: &mut Frame<'_>, app: &App, area: Rect) {
    let gauge = Gauge::default()
        .gauge_style(Style::default().fg(mode_color(app.timer.mode())))
        .ratio(app.timer.progress().clamp(0.0, 1.0))
        .label("");

    frame.render_widget(gauge, area);
}

/// Render the task list.
fn render_tasks(frame: &mut Frame<'_>, app: &App, area: Rect) {
    let items: Vec<ListItem<'_>> = app
        .tasks
        .iter()
        .enumerate()
        .map(|(i, task)| {
            let is_selected = i == app.selected;

            let status_icon = if task.completed { "[x]" } else { "[ ]" };

            let spans = vec![
                Span::styled(
                    format!("{status_icon} "),
                    Style::default().fg(if task.completed {
                        Color::Green
                    } else {
                        Color::White
                    }),
                ),
                Span::styled(
                    &task.text,
                    if task.completed {
                        Style::default()
                            .fg(Color::DarkGray)
                            .add_modifier(Modifier::CROSSED_OUT)
                    } else {
                        Style::default().add_modifier(if is_selected {
                            Modifier::BOLD
                        } else {
                            Modifier::empty()
                        })
                    },
                ),
            ];

            let style = if is_selected {
                Style::default().bg(Color::DarkGray)
            } else {
                Style::default()
            };

            ListItem::new(Line::from(spans)).style(style)
        })
        .collect();

    let title = format!(" Tasks ({}) ", app.tasks.len());
    let list = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(title)
                .border_style(Style::default().fg(Color::White)),
        )
        .highlight_style(Style::default().bg(Color::DarkGray));

    // Create list state for scrolling
    let mut state = ListState::default();
    state.select(Some(app.selected));

    frame.render_stateful_widget(list, area, &mut state);
}

/// Render the status bar, or the input line while typing a task.
fn render_status_bar(frame: &mut Frame<'_>, app: &App, area: Rect) {
    if let Some(input) = &app.input {
        let line = Line::from(vec![
            Span::styled("New task: ", Style::default().fg(Color::Yellow)),
            Span::raw(input.as_str()),
            Span::styled("▏", Style::default().fg(Color::Yellow)),
        ]);
        frame.render_widget(Paragraph::new(line), area);
        return;
    }

    let status_text = app
        .status
        .as_deref()
        .unwrap_or("space:start/pause | r:reset | j/k:nav | a:add | ?:help | q:quit");

    let status = Paragraph::new(status_text).style(Style::default().fg(Color::DarkGray));

    frame.render_widget(status, area);
}
