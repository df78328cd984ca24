use ratatui::{
    Frame,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::app::{App, Focus};
use crate::theme;

fn context_hints(app: &App) -> &'static [(&'static str, &'static str)] {
    if app.help.visible {
        return &[("Esc", "Close help"), ("↑/↓", "Scroll")];
    }
    match app.focus {
        Focus::Lyrics => &[
            ("F1", "Help"),
            ("Ctrl+G", "Suggest"),
            ("Ctrl+Z/Y", "Undo/Redo"),
            ("Ctrl+T", "Auto"),
            ("Tab", "Focus"),
            ("Ctrl+Q", "Quit"),
        ],
        Focus::Instruction => &[
            ("F1", "Help"),
            ("Alt+↑/↓", "Wildness"),
            ("Tab", "Focus"),
            ("Ctrl+Q", "Quit"),
        ],
        Focus::Suggestions => &[
            ("F1", "Help"),
            ("↑/↓", "Scroll"),
            ("Ctrl+K", "Copy latest"),
            ("Ctrl+L", "Clear"),
            ("Tab", "Focus"),
            ("Ctrl+Q", "Quit"),
        ],
    }
}

fn build_spans(hints: &[(&'static str, &'static str)]) -> Vec<Span<'static>> {
    let key_style = Style::default().fg(theme::help_line::KEY);
    let desc_style = Style::default().fg(theme::help_line::DESCRIPTION);
    let sep_style = Style::default().fg(theme::help_line::SEPARATOR);

    let mut spans = vec![Span::raw(" ")];
    for (i, (key, desc)) in hints.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(" \u{2022} ", sep_style));
        }
        spans.push(Span::styled(*key, key_style));
        spans.push(Span::raw(" "));
        spans.push(Span::styled(*desc, desc_style));
    }
    spans
}

pub fn render_line(app: &App, frame: &mut Frame, area: Rect) {
    let line = Line::from(build_spans(context_hints(app)));
    frame.render_widget(Paragraph::new(line), area);
}
