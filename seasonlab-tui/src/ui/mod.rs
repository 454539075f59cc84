//! Top-level UI layout — sidebar, main panel, status bar.

pub mod charts_panel;
pub mod entries_panel;
pub mod sidebar;
pub mod status_bar;

use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::widgets::{Block, Borders};
use ratatui::Frame;

use crate::app::{AppState, ViewMode};
use crate::theme;

/// Draw the entire UI.
pub fn draw(f: &mut Frame, app: &AppState) {
    // Split: main area + 1-line status bar.
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(3), Constraint::Length(1)])
        .split(f.area());

    // Split: sidebar | active view.
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(26), Constraint::Min(20)])
        .split(rows[0]);

    let sidebar_block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme::panel_border(false))
        .title(" Select ")
        .title_style(theme::panel_title(false));
    let sidebar_inner = sidebar_block.inner(cols[0]);
    f.render_widget(sidebar_block, cols[0]);
    sidebar::render(f, sidebar_inner, app);

    let main_block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme::panel_border(true))
        .title(format!(" {} ", app.mode.label()))
        .title_style(theme::panel_title(true));
    let main_inner = main_block.inner(cols[1]);
    f.render_widget(main_block, cols[1]);

    match app.mode {
        ViewMode::EntrySection => entries_panel::render(f, main_inner, app),
        _ => charts_panel::render(f, main_inner, app),
    }

    status_bar::render(f, rows[1], app);
}
