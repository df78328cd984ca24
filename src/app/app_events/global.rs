use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::super::app_state::App;
use crate::clipboard::clipboard_events::copy_latest_suggestion;
use crate::settings::WILDNESS_STEP;

fn handle_help_keys(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Esc | KeyCode::F(1) | KeyCode::Char('q') => app.help.close(),
        KeyCode::Char('j') | KeyCode::Down => app.help.scroll.scroll_down(1),
        KeyCode::Char('k') | KeyCode::Up => app.help.scroll.scroll_up(1),
        KeyCode::PageDown => app.help.scroll.page_down(),
        KeyCode::PageUp => app.help.scroll.page_up(),
        KeyCode::Char('g') | KeyCode::Home => app.help.scroll.jump_to_top(),
        KeyCode::Char('G') | KeyCode::End => app.help.scroll.jump_to_bottom(),
        _ => {}
    }
}

/// Keys that work regardless of focus; returns true when consumed
pub fn handle_global_keys(app: &mut App, key: KeyEvent) -> bool {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    let alt = key.modifiers.contains(KeyModifiers::ALT);

    if ctrl && matches!(key.code, KeyCode::Char('c') | KeyCode::Char('q')) {
        app.quit();
        return true;
    }

    if app.help.visible {
        handle_help_keys(app, key);
        return true;
    }

    match key.code {
        KeyCode::F(1) => app.help.toggle(),
        KeyCode::F(2) => app.toggle_settings_panel(),
        KeyCode::F(5) => app.suggest_now(),
        KeyCode::F(12) => app.toggle_prompt_preview(),
        KeyCode::Char('g') if ctrl => app.suggest_now(),
        KeyCode::Char('t') if ctrl => app.toggle_auto_suggest(),
        KeyCode::Char('l') if ctrl => app.clear_suggestions(),
        KeyCode::Char('k') if ctrl => {
            copy_latest_suggestion(app);
        }
        KeyCode::Up if alt => app.adjust_wildness(WILDNESS_STEP),
        KeyCode::Down if alt => app.adjust_wildness(-WILDNESS_STEP),
        KeyCode::Tab => app.cycle_focus(true),
        KeyCode::BackTab => app.cycle_focus(false),
        KeyCode::Esc => return app.notification.dismiss(),
        _ => return false,
    }
    true
}
