//! Event handling for the dashboard.

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyModifiers};
use std::time::Duration;

use crate::app::{App, Tab};

/// Handle keyboard events.
pub fn handle_key_event(app: &mut App, key: KeyEvent) {
    // Global shortcuts
    match key.code {
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.should_quit = true;
            return;
        }
        KeyCode::Char('q') => {
            app.should_quit = true;
            return;
        }
        // Tab navigation
        KeyCode::Tab | KeyCode::Right => {
            app.next_tab();
            return;
        }
        KeyCode::BackTab | KeyCode::Left => {
            app.previous_tab();
            return;
        }
        KeyCode::Char('1') => {
            app.goto_tab(1);
            return;
        }
        KeyCode::Char('2') => {
            app.goto_tab(2);
            return;
        }
        KeyCode::Char('3') => {
            app.goto_tab(3);
            return;
        }
        KeyCode::Char('4') => {
            app.goto_tab(4);
            return;
        }
        _ => {}
    }

    match app.current_tab {
        Tab::Daily => handle_daily_tab_keys(app, key),
        Tab::Seasons => handle_seasons_tab_keys(app, key),
        Tab::Monthly => handle_monthly_tab_keys(app, key),
        Tab::Decompose => {}
    }
}

/// The date-range control lives on the Daily tab; it is the only view
/// that reacts to it.
fn handle_daily_tab_keys(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('[') => app.shift_start(-1),
        KeyCode::Char(']') => app.shift_start(1),
        KeyCode::Char('{') => app.shift_end(-1),
        KeyCode::Char('}') => app.shift_end(1),
        KeyCode::Char(',') => app.shift_start(-7),
        KeyCode::Char('.') => app.shift_start(7),
        KeyCode::Char('<') => app.shift_end(-7),
        KeyCode::Char('>') => app.shift_end(7),
        KeyCode::Char('r') => app.reset_range(),
        _ => {}
    }
}

fn handle_seasons_tab_keys(app: &mut App, key: KeyEvent) {
    if key.code == KeyCode::Char('o') {
        app.toggle_season_order();
    }
}

fn handle_monthly_tab_keys(app: &mut App, key: KeyEvent) {
    if key.code == KeyCode::Char('y') {
        app.cycle_monthly_view();
    }
}

/// Poll for events with a timeout.
pub fn poll_event(timeout: Duration) -> std::io::Result<Option<Event>> {
    if event::poll(timeout)? {
        Ok(Some(event::read()?))
    } else {
        Ok(None)
    }
}
