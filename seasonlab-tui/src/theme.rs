//! Neon-on-dark style tokens for the dashboard.

use ratatui::style::{Color, Modifier, Style};

pub fn accent() -> Style {
    Style::default().fg(Color::Rgb(0, 255, 255))
}

pub fn positive() -> Style {
    Style::default().fg(Color::Rgb(0, 255, 128))
}

pub fn negative() -> Style {
    Style::default().fg(Color::Rgb(255, 20, 147))
}

pub fn warning() -> Style {
    Style::default().fg(Color::Rgb(255, 140, 0))
}

pub fn neutral() -> Style {
    Style::default().fg(Color::Rgb(147, 112, 219))
}

pub fn muted() -> Style {
    Style::default().fg(Color::Rgb(100, 149, 237))
}

pub fn panel_border(active: bool) -> Style {
    if active {
        accent()
    } else {
        muted()
    }
}

pub fn panel_title(active: bool) -> Style {
    panel_border(active).add_modifier(Modifier::BOLD)
}
