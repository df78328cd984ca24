use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Style},
    widgets::{Scrollbar, ScrollbarOrientation, ScrollbarState},
};

/// Draws a vertical scrollbar on the right border of `area`
///
/// Nothing is drawn when the content fits in the viewport.
pub fn render_vertical_scrollbar(
    frame: &mut Frame,
    area: Rect,
    total_lines: usize,
    viewport: usize,
    offset: usize,
    thumb: Color,
    track: Color,
) {
    if total_lines <= viewport || viewport == 0 {
        return;
    }

    // Ratatui's max position is content_length - 1; passing max_scroll + 1
    // lets the thumb reach the bottom at max scroll.
    let max_scroll = total_lines - viewport;
    let mut state = ScrollbarState::new(max_scroll + 1)
        .position(offset.min(max_scroll))
        .viewport_content_length(viewport);

    let scrollbar = Scrollbar::new(ScrollbarOrientation::VerticalRight)
        .begin_symbol(None)
        .end_symbol(None)
        .thumb_style(Style::default().fg(thumb))
        .track_style(Style::default().fg(track));

    frame.render_stateful_widget(scrollbar, area, &mut state);
}
