//! Sidebar — mode selector plus pair/month lists.

use ratatui::layout::Rect;
use ratatui::style::Modifier;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use crate::app::{AppState, ViewMode};
use crate::theme;
use seasonlab_core::domain::{CurrencyPair, Month};

pub fn render(f: &mut Frame, area: Rect, app: &AppState) {
    let mut lines: Vec<Line> = Vec::new();

    lines.push(Line::from(Span::styled("Mode", theme::muted())));
    for mode in ViewMode::ALL {
        let marker = if mode == app.mode { "▸" } else { " " };
        let style = if mode == app.mode {
            theme::accent().add_modifier(Modifier::BOLD)
        } else {
            theme::neutral()
        };
        lines.push(Line::from(Span::styled(
            format!("{marker} [{}] {}", mode.index() + 1, mode.label()),
            style,
        )));
    }

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled("Pair", theme::muted())));
    let pair_active = matches!(
        app.mode,
        ViewMode::DailySeasonality | ViewMode::EntrySection
    );
    for (i, pair) in CurrencyPair::ALL.iter().enumerate() {
        let selected = i == app.pair_idx;
        let style = if selected && pair_active {
            theme::accent().add_modifier(Modifier::REVERSED)
        } else if selected {
            theme::accent()
        } else {
            theme::muted()
        };
        lines.push(Line::from(Span::styled(format!("  {pair}"), style)));
    }

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled("Month", theme::muted())));
    let month_active = matches!(app.mode, ViewMode::ViewByMonth | ViewMode::EntrySection);
    for (i, month) in Month::ALL.iter().enumerate() {
        let selected = i == app.month_idx;
        let style = if selected && month_active {
            theme::accent().add_modifier(Modifier::REVERSED)
        } else if selected {
            theme::accent()
        } else {
            theme::muted()
        };
        lines.push(Line::from(Span::styled(format!("  {month}"), style)));
    }

    f.render_widget(Paragraph::new(lines), area);
}
