use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};

use super::output_state::OutputState;
use super::suggestion_log::DELIMITER;
use super::wrap::wrap_text;
use crate::theme;
use crate::widgets::scrollbar::render_vertical_scrollbar;

const EMPTY_HINT: &str = "Suggestions appear here. Pause after a word, press Enter, or Ctrl+G.";

/// Render the suggestion pane, scrolling to the newest block when an append
/// is pending.
pub fn render_output(
    frame: &mut Frame,
    area: Rect,
    output: &mut OutputState,
    focused: bool,
    loading: bool,
) {
    let border_color = if focused {
        theme::output::BORDER_FOCUSED
    } else {
        theme::output::BORDER_UNFOCUSED
    };

    let mut title = vec![Span::styled(
        format!(" Suggestions ({}) ", output.log.len()),
        Style::default().fg(border_color),
    )];
    if loading {
        title.push(Span::styled(
            "… ",
            Style::default().fg(theme::header::LOADING),
        ));
    }

    let block = Block::default()
        .borders(Borders::ALL)
        .title(Line::from(title))
        .border_style(Style::default().fg(border_color));

    let viewport_height = area.height.saturating_sub(2);
    let viewport_width = area.width.saturating_sub(2) as usize;

    if output.log.is_empty() {
        let hint = Paragraph::new(Line::from(Span::styled(
            EMPTY_HINT,
            Style::default()
                .fg(theme::output::EMPTY_HINT)
                .add_modifier(Modifier::ITALIC),
        )))
        .wrap(Wrap { trim: true })
        .block(block);
        frame.render_widget(hint, area);
        return;
    }

    let wrapped = wrap_text(output.log.text(), viewport_width);
    output.scroll.update_bounds(wrapped.len(), viewport_height);
    if output.follow_newest {
        output.scroll.jump_to_bottom();
    }

    let lines: Vec<Line> = wrapped
        .into_iter()
        .map(|line| {
            let color = if line == DELIMITER {
                theme::output::DELIMITER
            } else {
                theme::output::TEXT
            };
            Line::from(Span::styled(line, Style::default().fg(color)))
        })
        .collect();
    let total = lines.len();

    let content = Paragraph::new(lines)
        .block(block)
        .scroll((output.scroll.offset, 0));
    frame.render_widget(content, area);

    render_vertical_scrollbar(
        frame,
        area,
        total,
        viewport_height as usize,
        output.scroll.offset as usize,
        theme::output::SCROLLBAR,
        theme::output::BORDER_UNFOCUSED,
    );
}
