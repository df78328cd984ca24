use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::output_state::OutputState;

/// Scroll keys for the read-only suggestion pane
pub fn handle_output_key(output: &mut OutputState, key: KeyEvent) {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    match key.code {
        KeyCode::Char('j') | KeyCode::Down => output.scroll_down(1),
        KeyCode::Char('k') | KeyCode::Up => output.scroll_up(1),
        KeyCode::Char('d') if ctrl => output.page_down(),
        KeyCode::Char('u') if ctrl => output.page_up(),
        KeyCode::PageDown => output.page_down(),
        KeyCode::PageUp => output.page_up(),
        KeyCode::Char('g') | KeyCode::Home => output.jump_to_top(),
        KeyCode::Char('G') | KeyCode::End => output.jump_to_bottom(),
        _ => {}
    }
}
