use std::time::Instant;

use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::app::App;

/// Handles a key while the lyrics pane has focus
pub fn handle_lyrics_key(app: &mut App, key: KeyEvent) {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

    match key.code {
        KeyCode::Char('z') if ctrl => {
            if app.lyrics.undo() {
                app.scheduler.disarm();
            }
        }
        KeyCode::Char('y') if ctrl => {
            if app.lyrics.redo() {
                app.scheduler.disarm();
            }
        }
        _ if is_line_break(&key) => handle_line_break(app, key),
        _ => {
            if app.lyrics.input(key) {
                app.lyrics.commit();
                app.lyrics_edited(Instant::now());
            }
        }
    }
}

fn is_line_break(key: &KeyEvent) -> bool {
    match key.code {
        KeyCode::Enter => true,
        KeyCode::Char('m') => key.modifiers.contains(KeyModifiers::CONTROL),
        _ => false,
    }
}

/// A line break commits the edit, then may suggest for the line just left.
fn handle_line_break(app: &mut App, key: KeyEvent) {
    let finished_line = app.lyrics.caret_line();
    if !app.lyrics.input(key) {
        return;
    }
    app.lyrics.commit();

    let now = Instant::now();
    app.lyrics_edited(now);
    let decision = app.scheduler.on_enter(&finished_line, now);
    app.apply_decision(decision);
}

/// Inserts pasted text as a single edit
pub fn handle_lyrics_paste(app: &mut App, text: &str) {
    if app.lyrics.insert_str(text) {
        app.lyrics.commit();
        app.lyrics_edited(Instant::now());
    }
}

#[cfg(test)]
#[path = "editor_events_tests.rs"]
mod editor_events_tests;
