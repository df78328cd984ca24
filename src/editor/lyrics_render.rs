use ratatui::{
    Frame,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders},
};

use crate::app::{App, Focus};
use crate::theme;

pub fn render_lyrics(app: &mut App, frame: &mut Frame, area: Rect) {
    let focused = app.focus == Focus::Lyrics;
    let border_color = if focused {
        theme::lyrics::BORDER_FOCUSED
    } else {
        theme::lyrics::BORDER_UNFOCUSED
    };

    let history = app.lyrics.history();
    let undo_mark = if history.can_undo() { "‹" } else { " " };
    let redo_mark = if history.can_redo() { "›" } else { " " };
    let undo_hint = format!(
        " {}{}/{}{} ",
        undo_mark,
        history.index() + 1,
        history.len(),
        redo_mark
    );

    let block = Block::default()
        .borders(Borders::ALL)
        .title(Line::from(Span::styled(
            " Lyrics ",
            Style::default().fg(border_color),
        )))
        .title_bottom(
            Line::from(Span::styled(
                undo_hint,
                Style::default().fg(theme::lyrics::UNDO_HINT),
            ))
            .right_aligned(),
        )
        .border_style(Style::default().fg(border_color));

    let textarea = &mut app.lyrics.textarea;
    textarea.set_block(block);
    textarea.set_cursor_style(if focused {
        theme::lyrics::CURSOR
    } else {
        Style::default()
    });

    frame.render_widget(&*textarea, area);
}
