use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
};

use super::app_state::{App, Focus};
use crate::editor::lyrics_render::render_lyrics;
use crate::notification::render_notification;
use crate::output::output_render::render_output;
use crate::settings::settings_render::{PANEL_HEIGHT, render_prompt_preview, render_settings};
use crate::theme;

/// Side-by-side panes from this width on, stacked below it
const SIDE_BY_SIDE_MIN_WIDTH: u16 = 100;
const PREVIEW_HEIGHT: u16 = 10;

impl App {
    pub fn render(&mut self, frame: &mut Frame) {
        let mut constraints = vec![Constraint::Length(1)];
        if self.settings.show_settings {
            constraints.push(Constraint::Length(PANEL_HEIGHT));
        }
        if self.settings.show_prompt_preview {
            constraints.push(Constraint::Length(PREVIEW_HEIGHT));
        }
        constraints.push(Constraint::Min(4));
        constraints.push(Constraint::Length(1));

        let areas = Layout::vertical(constraints).split(frame.area());
        let mut next = 0;
        let mut take = || {
            let area = areas[next];
            next += 1;
            area
        };

        let header_area = take();
        let settings_area = self.settings.show_settings.then(&mut take);
        let preview_area = self.settings.show_prompt_preview.then(&mut take);
        let main_area = take();
        let help_area = take();

        self.render_header(frame, header_area);
        if let Some(area) = settings_area {
            render_settings(self, frame, area);
        }
        if let Some(area) = preview_area {
            render_prompt_preview(self, frame, area);
        }

        let [lyrics_area, output_area] = split_main(main_area);
        render_lyrics(self, frame, lyrics_area);
        render_output(
            frame,
            output_area,
            &mut self.output,
            self.focus == Focus::Suggestions,
            self.ai.loading,
        );

        crate::help::help_line_render::render_line(self, frame, help_area);

        if self.help.visible {
            crate::help::help_popup_render::render_popup(self, frame);
        }

        render_notification(frame, &mut self.notification);
    }

    fn render_header(&self, frame: &mut Frame, area: Rect) {
        let label = Style::default().fg(theme::header::LABEL);
        let value = Style::default().fg(theme::header::VALUE);

        let mut spans = vec![
            Span::styled(" renki ", theme::header::TITLE),
            Span::styled(" auto ", label),
            if self.settings.auto_suggest {
                Span::styled("on", Style::default().fg(theme::header::AUTO_ON))
            } else {
                Span::styled("off", Style::default().fg(theme::header::AUTO_OFF))
            },
            Span::styled("  wildness ", label),
            Span::styled(format!("{:.1}", self.settings.wildness), value),
            Span::styled("  via ", label),
            Span::styled(self.ai.provider_name.clone(), value),
        ];

        if self.ai.loading {
            spans.push(Span::styled(
                "  ⟳ suggesting…",
                Style::default().fg(theme::header::LOADING),
            ));
        } else if self.ai.error.is_some() {
            spans.push(Span::styled(
                "  ✗ last request failed",
                Style::default().fg(theme::header::ERROR),
            ));
        }

        frame.render_widget(Paragraph::new(Line::from(spans)), area);
    }
}

fn split_main(area: Rect) -> [Rect; 2] {
    let halves = [Constraint::Percentage(50), Constraint::Percentage(50)];
    if area.width >= SIDE_BY_SIDE_MIN_WIDTH {
        Layout::horizontal(halves).areas(area)
    } else {
        Layout::vertical(halves).areas(area)
    }
}

#[cfg(test)]
#[path = "app_render_tests.rs"]
mod app_render_tests;
