use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};

use crate::app::{App, Focus};
use crate::theme;

const GAUGE_CELLS: usize = 10;
pub const PANEL_HEIGHT: u16 = 5;

fn wildness_gauge(wildness: f64) -> (String, String) {
    let filled = ((wildness * GAUGE_CELLS as f64).round() as usize).min(GAUGE_CELLS);
    ("▰".repeat(filled), "▱".repeat(GAUGE_CELLS - filled))
}

/// Instruction editor, wildness, auto flag and the last error
pub fn render_settings(app: &mut App, frame: &mut Frame, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Settings (F2) ")
        .border_style(Style::default().fg(theme::settings::BORDER));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let [instruction_row, status_row, error_row] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Length(1),
    ])
    .areas(inner);

    let focused = app.focus == Focus::Instruction;
    let label_color = if focused {
        theme::settings::INSTRUCTION_FOCUSED
    } else {
        theme::settings::INSTRUCTION_UNFOCUSED
    };
    let [label_area, editor_area] =
        Layout::horizontal([Constraint::Length(13), Constraint::Min(1)]).areas(instruction_row);
    frame.render_widget(
        Paragraph::new(Span::styled(
            " Instruction ",
            Style::default().fg(label_color).add_modifier(Modifier::BOLD),
        )),
        label_area,
    );
    app.instruction.set_cursor_style(if focused {
        Style::default().add_modifier(Modifier::REVERSED)
    } else {
        Style::default()
    });
    frame.render_widget(&app.instruction, editor_area);

    let (filled, empty) = wildness_gauge(app.settings.wildness);
    let label = Style::default().fg(theme::settings::LABEL);
    let auto = if app.settings.auto_suggest { "on" } else { "off" };
    let status = Line::from(vec![
        Span::styled(" Wildness    ", label),
        Span::styled(filled, Style::default().fg(theme::settings::GAUGE_FILLED)),
        Span::styled(empty, Style::default().fg(theme::settings::GAUGE_EMPTY)),
        Span::styled(format!(" {:.1}", app.settings.wildness), theme::settings::VALUE),
        Span::styled("   Auto-suggest ", label),
        Span::styled(auto, theme::settings::VALUE),
    ]);
    frame.render_widget(Paragraph::new(status), status_row);

    let error = match &app.ai.error {
        Some(message) => Line::from(vec![
            Span::styled(" Last error  ", label),
            Span::styled(
                message.lines().next().unwrap_or_default().to_string(),
                Style::default().fg(theme::settings::ERROR),
            ),
        ]),
        None => Line::from(vec![
            Span::styled(" Last error  ", label),
            Span::styled("none", label),
        ]),
    };
    frame.render_widget(Paragraph::new(error), error_row);
}

/// Shows the prompt the current basis would be sent with
pub fn render_prompt_preview(app: &App, frame: &mut Frame, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Prompt preview (F12) ")
        .border_style(Style::default().fg(theme::settings::PREVIEW_BORDER));
    let text: Vec<Line> = app
        .prompt_preview()
        .lines()
        .map(|line| {
            Line::from(Span::styled(
                line.to_string(),
                Style::default().fg(theme::settings::PREVIEW_TEXT),
            ))
        })
        .collect();
    frame.render_widget(
        Paragraph::new(text).block(block).wrap(Wrap { trim: false }),
        area,
    );
}
