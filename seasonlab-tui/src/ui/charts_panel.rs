//! Chart panel — resolution status for every chart in the active view.
//!
//! Terminals don't render PNGs, so the panel reports what the original
//! dashboard would have drawn: which charts resolved, from where, at
//! what size — and a warning row for each missing one.

use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use crate::app::{AppState, ChartOutcome};
use crate::theme;

pub fn render(f: &mut Frame, area: Rect, app: &AppState) {
    let mut lines: Vec<Line> = Vec::new();

    lines.push(Line::from(vec![
        Span::styled(format!("{:<22}", "Chart"), theme::muted()),
        Span::styled(format!("{:>10}", "Size"), theme::muted()),
        Span::styled(format!("  {:<12}", "Dimensions"), theme::muted()),
        Span::styled("Origin", theme::muted()),
    ]));
    lines.push(Line::from(Span::styled(
        "─".repeat(area.width as usize),
        theme::muted(),
    )));

    for row in &app.charts {
        match &row.outcome {
            ChartOutcome::Found {
                origin,
                width,
                height,
                size,
            } => {
                lines.push(Line::from(vec![
                    Span::styled(format!("{:<22}", row.label), theme::accent()),
                    Span::styled(format!("{:>10}", format_size(*size)), theme::neutral()),
                    Span::styled(format!("  {:<12}", format!("{width}x{height}")), theme::neutral()),
                    Span::styled(origin.label(), theme::positive()),
                ]));
            }
            ChartOutcome::Missing { remote_url } => {
                lines.push(Line::from(vec![
                    Span::styled(format!("{:<22}", row.label), theme::warning()),
                    Span::styled(format!("{:>10}", "—"), theme::warning()),
                    Span::styled("  image not found: ", theme::warning()),
                    Span::styled(remote_url.as_str(), theme::muted()),
                ]));
            }
        }
    }

    f.render_widget(Paragraph::new(lines), area);
}

fn format_size(bytes: usize) -> String {
    if bytes < 1024 {
        format!("{bytes} B")
    } else if bytes < 1024 * 1024 {
        format!("{:.1} KB", bytes as f64 / 1024.0)
    } else {
        format!("{:.1} MB", bytes as f64 / (1024.0 * 1024.0))
    }
}
