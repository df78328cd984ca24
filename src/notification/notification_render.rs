use ratatui::{
    Frame,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use super::notification_state::NotificationState;
use crate::widgets::popup;

const MARGIN: u16 = 2;

/// Draws the current notification over the top-right corner
///
/// Call after the main UI so it ends up on top. Messages wider than the
/// frame are cut with an ellipsis.
pub fn render_notification(frame: &mut Frame, notification: &mut NotificationState) {
    notification.clear_if_expired();
    let Some(notif) = notification.current() else {
        return;
    };
    let colors = notif.notification_type.colors();

    let frame_area = frame.area();
    let max_text = frame_area.width.saturating_sub(MARGIN * 2 + 4) as usize;
    if max_text < 3 || frame_area.height < 3 + MARGIN {
        return;
    }

    let message = truncate(&notif.message, max_text);
    let width = message.chars().count() as u16 + 4;
    let area = Rect {
        x: frame_area.width.saturating_sub(width + MARGIN),
        y: frame_area.y + 1,
        width,
        height: 3,
    };

    popup::clear_area(frame, area);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(colors.border).bg(colors.bg))
        .style(Style::default().bg(colors.bg));
    let text = Line::from(Span::styled(
        format!(" {} ", message),
        Style::default().fg(colors.fg).bg(colors.bg),
    ));

    frame.render_widget(Paragraph::new(text).block(block), area);
}

fn truncate(message: &str, max: usize) -> String {
    let first_line = message.lines().next().unwrap_or("");
    if first_line.chars().count() <= max && !message.contains('\n') {
        return first_line.to_string();
    }
    let kept: String = first_line.chars().take(max.saturating_sub(1)).collect();
    format!("{}…", kept)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn render(state: &mut NotificationState, width: u16, height: u16) -> String {
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        terminal
            .draw(|f| render_notification(f, state))
            .unwrap();
        terminal.backend().to_string()
    }

    #[test]
    fn test_renders_in_top_right() {
        let mut state = NotificationState::new();
        state.show("Copied suggestion");
        let screen = render(&mut state, 60, 10);

        let row = screen.lines().nth(2).unwrap();
        assert!(row.contains("Copied suggestion"));
        assert!(row.find("Copied").unwrap() > 30);
    }

    #[test]
    fn test_nothing_without_notification() {
        let mut state = NotificationState::new();
        let screen = render(&mut state, 40, 6);
        assert!(screen.chars().all(|c| c == ' ' || c == '\n' || c == '"'));
    }

    #[test]
    fn test_long_message_is_truncated() {
        let mut state = NotificationState::new();
        state.show_error(&"x".repeat(200));
        let screen = render(&mut state, 40, 6);
        assert!(screen.contains('…'));
    }

    #[test]
    fn test_truncate_keeps_first_line() {
        assert_eq!(truncate("short", 10), "short");
        assert_eq!(truncate("line one\nline two", 20), "line one…");
        assert_eq!(truncate("abcdefgh", 5), "abcd…");
    }
}
