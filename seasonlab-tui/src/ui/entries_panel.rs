//! Entry Section panel — the filtered TP/SL table.

use ratatui::layout::Rect;
use ratatui::style::Modifier;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use crate::app::AppState;
use crate::theme;
use seasonlab_core::domain::EntryTable;

pub fn render(f: &mut Frame, area: Rect, app: &AppState) {
    let mut lines: Vec<Line> = Vec::new();

    // Active predicates
    let pair_tag = if app.filter_by_pair {
        format!("pair={}", app.selected_pair())
    } else {
        "pair=all".into()
    };
    let month_tag = if app.filter_by_month {
        format!("month={}", app.selected_month())
    } else {
        "month=all".into()
    };
    lines.push(Line::from(vec![
        Span::styled(format!("{pair_tag}  {month_tag}"), theme::neutral()),
        Span::styled("   [p]air filter  [m]onth filter  [r]eload", theme::muted()),
    ]));
    lines.push(Line::from(""));

    let cols = EntryTable::columns();
    lines.push(Line::from(Span::styled(
        format!(
            "{:<12} {:<8} {:<16} {:<16} {:<10}",
            cols[0], cols[1], cols[2], cols[3], cols[4]
        ),
        theme::muted().add_modifier(Modifier::BOLD),
    )));

    if app.entries.is_empty() {
        lines.push(Line::from(Span::styled(
            "(no entries match)",
            theme::warning(),
        )));
    }

    // Leave room for the header lines above.
    let visible = (area.height as usize).saturating_sub(lines.len());
    for entry in app.entries.entries.iter().skip(app.table_scroll).take(visible) {
        lines.push(Line::from(Span::styled(
            format!(
                "{:<12} {:<8} {:<16} {:<16} {:<10}",
                entry.date.to_string(),
                entry.pair,
                entry.prob_up,
                entry.prob_down,
                entry.entry_type
            ),
            theme::accent(),
        )));
    }

    f.render_widget(Paragraph::new(lines), area);
}
