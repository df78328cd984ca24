use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use super::help_content::{HELP_FOOTER, HELP_SECTIONS};
use crate::app::App;
use crate::theme;
use crate::widgets::{popup, scrollbar};

const KEY_COLUMN: usize = 18;

fn help_lines() -> Vec<Line<'static>> {
    let mut lines = Vec::new();
    for (i, section) in HELP_SECTIONS.iter().enumerate() {
        if i > 0 {
            lines.push(Line::from(""));
        }
        lines.push(Line::from(Span::styled(
            format!("  ── {} ──", section.title),
            theme::help::SECTION_HEADER,
        )));
        for (key, desc) in section.entries {
            lines.push(Line::from(vec![
                Span::styled(format!("  {:<width$}", key, width = KEY_COLUMN), theme::help::KEY),
                Span::styled(*desc, Style::default().fg(theme::help::DESCRIPTION)),
            ]));
        }
    }
    lines
}

/// Draws the overlay; returns its area, or None if the terminal is too small
pub fn render_popup(app: &mut App, frame: &mut Frame) -> Option<Rect> {
    let frame_area = frame.area();
    if frame_area.width < 40 || frame_area.height < 10 {
        return None;
    }

    let width = 72.min(frame_area.width.saturating_sub(4));
    let height = 28.min(frame_area.height.saturating_sub(2));
    let area = popup::centered_popup(frame_area, width, height);
    popup::clear_area(frame, area);

    let block = Block::default()
        .borders(Borders::ALL)
        .title(Span::styled(" Keyboard Shortcuts ", theme::help::TITLE))
        .border_style(Style::default().fg(theme::help::BORDER))
        .style(Style::default().bg(theme::help::BACKGROUND));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let [content_area, footer_area] =
        Layout::vertical([Constraint::Min(1), Constraint::Length(1)]).areas(inner);

    let lines = help_lines();
    let total = lines.len();
    app.help.scroll.update_bounds(total, content_area.height);

    frame.render_widget(
        Paragraph::new(lines).scroll((app.help.scroll.offset, 0)),
        content_area,
    );
    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(
            HELP_FOOTER,
            Style::default().fg(theme::help::FOOTER),
        )))
        .centered(),
        footer_area,
    );

    let scrollbar_area = Rect {
        y: area.y + 1,
        height: area.height.saturating_sub(2),
        ..area
    };
    scrollbar::render_vertical_scrollbar(
        frame,
        scrollbar_area,
        total,
        content_area.height as usize,
        app.help.scroll.offset as usize,
        theme::help::SCROLLBAR,
        theme::help::BORDER,
    );

    Some(area)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::test_helpers::test_app;
    use ratatui::{Terminal, backend::TestBackend};

    #[test]
    fn test_popup_lists_sections() {
        let mut app = test_app();
        app.help.visible = true;
        let mut terminal = Terminal::new(TestBackend::new(90, 40)).unwrap();
        terminal
            .draw(|f| {
                render_popup(&mut app, f);
            })
            .unwrap();
        let screen = terminal.backend().to_string();

        assert!(screen.contains("Keyboard Shortcuts"));
        assert!(screen.contains("SUGGESTIONS"));
        assert!(screen.contains("Suggest now"));
    }

    #[test]
    fn test_too_small_terminal_skips_popup() {
        let mut app = test_app();
        let mut terminal = Terminal::new(TestBackend::new(30, 8)).unwrap();
        let mut drawn = Some(Rect::default());
        terminal
            .draw(|f| drawn = render_popup(&mut app, f))
            .unwrap();
        assert!(drawn.is_none());
    }

    #[test]
    fn test_scroll_is_bounded_by_content() {
        let mut app = test_app();
        let mut terminal = Terminal::new(TestBackend::new(60, 12)).unwrap();
        terminal
            .draw(|f| {
                render_popup(&mut app, f);
            })
            .unwrap();
        assert_eq!(
            app.help.scroll.max_offset as usize,
            help_lines().len() - app.help.scroll.viewport_height as usize
        );
    }
}
