//! Key dispatch — thin glue from key events to state changes.
//!
//! Any change to the selection re-runs the active view synchronously.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind};

use crate::app::{AppState, ViewMode};
use seasonlab_core::domain::{CurrencyPair, Month};

pub fn handle_key(app: &mut AppState, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }

    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => {
            app.running = false;
        }

        // Mode selection, as in the original sidebar.
        KeyCode::Char(c @ '1'..='4') => {
            let idx = c as usize - '1' as usize;
            if let Some(mode) = ViewMode::from_index(idx) {
                if mode != app.mode {
                    app.mode = mode;
                    app.refresh();
                }
            }
        }
        KeyCode::Tab => {
            app.mode = app.mode.next();
            app.refresh();
        }
        KeyCode::BackTab => {
            app.mode = app.mode.prev();
            app.refresh();
        }

        // Primary selection for the mode: pairs for daily/entry views,
        // months for view-by-month.
        KeyCode::Char('j') | KeyCode::Down => move_selection(app, 1),
        KeyCode::Char('k') | KeyCode::Up => move_selection(app, -1),

        // Secondary month selection (daily view walks months with h/l).
        KeyCode::Char('l') | KeyCode::Right => move_month(app, 1),
        KeyCode::Char('h') | KeyCode::Left => move_month(app, -1),

        // Entry Section: predicate toggles and table scrolling.
        KeyCode::Char('p') if app.mode == ViewMode::EntrySection => {
            app.filter_by_pair = !app.filter_by_pair;
            app.refresh();
        }
        KeyCode::Char('m') if app.mode == ViewMode::EntrySection => {
            app.filter_by_month = !app.filter_by_month;
            app.refresh();
        }
        KeyCode::PageDown => {
            let max = app.entries.len().saturating_sub(1);
            app.table_scroll = (app.table_scroll + 10).min(max);
        }
        KeyCode::PageUp => {
            app.table_scroll = app.table_scroll.saturating_sub(10);
        }

        // Manual reload.
        KeyCode::Char('r') => app.refresh(),

        _ => {}
    }
}

fn move_selection(app: &mut AppState, delta: i32) {
    match app.mode {
        ViewMode::ViewByMonth => move_month(app, delta),
        ViewMode::MonthlySeasonality => {
            // Overview shows every pair at once; nothing to select.
        }
        ViewMode::DailySeasonality | ViewMode::EntrySection => {
            app.pair_idx = step(app.pair_idx, delta, CurrencyPair::ALL.len());
            app.refresh();
        }
    }
}

fn move_month(app: &mut AppState, delta: i32) {
    let before = app.month_idx;
    app.month_idx = step(app.month_idx, delta, Month::ALL.len());
    if app.month_idx != before
        && matches!(app.mode, ViewMode::ViewByMonth | ViewMode::EntrySection)
    {
        app.refresh();
    }
}

fn step(idx: usize, delta: i32, len: usize) -> usize {
    let len = len as i32;
    ((idx as i32 + delta).rem_euclid(len)) as usize
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn step_wraps_both_directions() {
        assert_eq!(step(0, -1, 8), 7);
        assert_eq!(step(7, 1, 8), 0);
        assert_eq!(step(3, 1, 8), 4);
    }
}
