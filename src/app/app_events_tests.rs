use ratatui::crossterm::event::{KeyCode, KeyModifiers};

use super::*;
use crate::ai::AiResponse;
use crate::test_utils::test_helpers::{
    app_with_channels, key, key_with_mods, take_request, test_app, type_text,
};

fn ctrl(c: char) -> KeyEvent {
    key_with_mods(KeyCode::Char(c), KeyModifiers::CONTROL)
}

#[test]
fn test_ctrl_c_and_ctrl_q_quit() {
    let mut app = test_app();
    app.handle_key_event(ctrl('c'));
    assert!(app.should_quit());

    let mut app = test_app();
    app.handle_key_event(ctrl('q'));
    assert!(app.should_quit());
}

#[test]
fn test_typing_goes_to_focused_lyrics() {
    let mut app = test_app();
    type_text(&mut app, "hello");
    assert_eq!(app.lyrics.text(), "hello");
}

#[test]
fn test_ctrl_g_and_f5_suggest_now() {
    let (mut app, rx, tx) = app_with_channels("silver moonlight");
    app.handle_key_event(ctrl('g'));
    let (_, id) = take_request(&rx);
    tx.send(AiResponse::Complete {
        text: "ok".to_string(),
        request_id: id,
    })
    .unwrap();
    app.poll_ai();

    app.handle_key_event(key(KeyCode::F(5)));
    let (_, second) = take_request(&rx);
    assert_eq!(second, id + 1);
}

#[test]
fn test_enter_suggests_for_finished_line() {
    let (mut app, rx, _tx) = app_with_channels("");
    type_text(&mut app, "under the neon rain\n");

    let (prompt, _) = take_request(&rx);
    assert!(prompt.contains("\"under the neon rain\""));
    assert_eq!(app.lyrics.text(), "under the neon rain\n");
}

#[test]
fn test_enter_on_empty_line_sends_nothing() {
    let (mut app, rx, _tx) = app_with_channels("");
    type_text(&mut app, "\n");
    assert!(rx.try_recv().is_err());
}

#[test]
fn test_tab_cycles_focus_and_routes_keys() {
    let mut app = test_app();
    app.handle_key_event(key(KeyCode::Tab));
    assert_eq!(app.focus, Focus::Instruction);

    type_text(&mut app, "darker");
    assert_eq!(app.settings.freeform, "darker");
    assert_eq!(app.lyrics.text(), "");

    app.handle_key_event(key(KeyCode::BackTab));
    assert_eq!(app.focus, Focus::Lyrics);
}

#[test]
fn test_enter_in_instruction_is_ignored() {
    let mut app = test_app();
    app.set_focus(Focus::Instruction);
    type_text(&mut app, "a\nb");
    assert_eq!(app.settings.freeform, "ab");
}

#[test]
fn test_alt_arrows_change_wildness() {
    let mut app = test_app();
    app.handle_key_event(key_with_mods(KeyCode::Up, KeyModifiers::ALT));
    assert_eq!(app.settings.wildness, 0.8);
    app.handle_key_event(key_with_mods(KeyCode::Down, KeyModifiers::ALT));
    app.handle_key_event(key_with_mods(KeyCode::Down, KeyModifiers::ALT));
    assert_eq!(app.settings.wildness, 0.6);
}

#[test]
fn test_ctrl_t_toggles_auto() {
    let mut app = test_app();
    app.handle_key_event(ctrl('t'));
    assert!(!app.settings.auto_suggest);
    assert!(!app.scheduler.auto_enabled());
}

#[test]
fn test_ctrl_l_clears_suggestions() {
    let mut app = test_app();
    app.output.append("x");
    app.handle_key_event(ctrl('l'));
    assert!(app.output.log.is_empty());
}

#[test]
fn test_function_keys_toggle_panels() {
    let mut app = test_app();
    app.handle_key_event(key(KeyCode::F(2)));
    assert!(!app.settings.show_settings);
    app.handle_key_event(key(KeyCode::F(12)));
    assert!(app.settings.show_prompt_preview);
}

#[test]
fn test_help_overlay_captures_keys() {
    let mut app = test_app();
    app.handle_key_event(key(KeyCode::F(1)));
    assert!(app.help.visible);

    type_text(&mut app, "abc");
    assert_eq!(app.lyrics.text(), "");

    app.handle_key_event(key(KeyCode::Esc));
    assert!(!app.help.visible);
}

#[test]
fn test_esc_dismisses_notification() {
    let mut app = test_app();
    app.notification.show_error("boom");
    app.handle_key_event(key(KeyCode::Esc));
    assert!(app.notification.current().is_none());
}

#[test]
fn test_suggestion_pane_scroll_keys() {
    let mut app = test_app();
    app.set_focus(Focus::Suggestions);
    app.output.append("x");
    app.handle_key_event(key(KeyCode::Char('g')));
    assert!(!app.output.follow_newest);
    assert_eq!(app.lyrics.text(), "");
}

#[test]
fn test_paste_into_lyrics_is_one_edit() {
    let mut app = test_app();
    app.handle_paste_event("first line\r\nsecond line");
    assert_eq!(app.lyrics.text(), "first line\nsecond line");
    assert_eq!(app.lyrics.history().len(), 2);

    app.handle_key_event(ctrl('z'));
    assert_eq!(app.lyrics.text(), "");
}

#[test]
fn test_paste_into_instruction_syncs_settings() {
    let mut app = test_app();
    app.set_focus(Focus::Instruction);
    app.handle_paste_event("in French");
    assert_eq!(app.settings.freeform, "in French");
}
