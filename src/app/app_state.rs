use std::time::Instant;

use ratatui::style::Style;
use tui_textarea::TextArea;

use crate::ai::prompt::{build_prompt, preview_prompt};
use crate::ai::{AiState, AsyncAiProvider, RequestOutcome};
use crate::config::ai_types::AiProviderType;
use crate::config::{ClipboardBackend, Config};
use crate::editor::LyricsState;
use crate::help::HelpPopupState;
use crate::notification::NotificationState;
use crate::output::OutputState;
use crate::settings::Settings;
use crate::suggest::{Decision, SchedulerConfig, SuggestScheduler, SuggestTrigger};
use crate::theme;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Lyrics,
    Instruction,
    Suggestions,
}

pub struct App {
    pub lyrics: LyricsState,
    /// Freeform instruction editor; mirrored into `settings.freeform`
    pub instruction: TextArea<'static>,
    pub output: OutputState,
    pub scheduler: SuggestScheduler,
    pub ai: AiState,
    pub settings: Settings,
    pub focus: Focus,
    pub help: HelpPopupState,
    pub notification: NotificationState,
    pub clipboard_backend: ClipboardBackend,
    pub should_quit: bool,
}

impl App {
    pub fn new(config: &Config, settings: Settings, initial_lyrics: &str) -> Self {
        let (configured, provider_name) = match AsyncAiProvider::from_config(&config.ai) {
            Ok(provider) => (true, provider.provider_name()),
            Err(e) => {
                log::warn!("Suggestion provider unavailable: {}", e);
                let name = match config.ai.provider {
                    AiProviderType::Proxy => "Proxy",
                    AiProviderType::OpenAi => "OpenAI",
                };
                (false, name)
            }
        };

        let scheduler = SuggestScheduler::new(
            SchedulerConfig::from(&config.suggest),
            settings.auto_suggest,
        );

        Self {
            lyrics: LyricsState::new(initial_lyrics, config.suggest.history_limit()),
            instruction: build_instruction(&settings.freeform),
            output: OutputState::new(),
            scheduler,
            ai: AiState::new(configured, provider_name.to_string()),
            settings,
            focus: Focus::Lyrics,
            help: HelpPopupState::new(),
            notification: NotificationState::new(),
            clipboard_backend: config.clipboard.backend,
            should_quit: false,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn quit(&mut self) {
        self.ai.cancel_in_flight_request();
        self.should_quit = true;
    }

    /// Re-arms the pause timer after a lyrics edit
    pub fn lyrics_edited(&mut self, now: Instant) {
        let line = self.lyrics.caret_line();
        self.scheduler.on_edit(&line, now);
    }

    /// Fires the pause timer once it is due
    pub fn tick(&mut self, now: Instant) {
        if !self.scheduler.is_due(now) {
            return;
        }
        let line = self.lyrics.caret_line();
        let decision = self.scheduler.fire_pause(&line, now);
        self.apply_decision(decision);
    }

    pub fn apply_decision(&mut self, decision: Decision) {
        match decision {
            Decision::Request(trigger) => {
                self.dispatch(trigger);
            }
            Decision::Skip(reason) => {
                log::debug!("Automatic suggestion skipped: {:?}", reason);
            }
        }
    }

    /// Manual "suggest now" for the selection or caret line
    pub fn suggest_now(&mut self) {
        let basis = self.lyrics.basis();
        match self.scheduler.on_manual(&basis) {
            Ok(trigger) => {
                self.dispatch(trigger);
            }
            Err(e) => {
                self.notification.show_warning(&e.to_string());
            }
        }
    }

    /// Sends the prompt for `trigger` to the worker
    ///
    /// Returns false when no worker is listening; the scheduler is released
    /// and the failure shown.
    pub fn dispatch(&mut self, trigger: SuggestTrigger) -> bool {
        let prompt = build_prompt(&trigger.basis, &self.settings.freeform);
        log::info!(
            "Requesting suggestions ({}) for {:?}",
            trigger.reason,
            trigger.basis
        );

        if self.ai.send_request(prompt, self.settings.wildness) {
            return true;
        }

        self.scheduler.on_request_complete();
        let message = format!(
            "[{}] Suggestion backend unavailable; check the [ai] section of config.toml",
            self.ai.provider_name
        );
        self.ai.set_error(message.clone());
        self.notification.show_error(&message);
        false
    }

    /// Drains worker responses and applies the current one
    pub fn poll_ai(&mut self) {
        for outcome in crate::ai::ai_events::poll_response_channel(&mut self.ai) {
            self.apply_outcome(outcome);
        }
    }

    pub fn apply_outcome(&mut self, outcome: RequestOutcome) {
        match outcome {
            RequestOutcome::Suggestion(text) => {
                self.output.append(&text);
            }
            RequestOutcome::Failed(message) => {
                log::error!("Suggestion request failed: {}", message);
                self.notification.show_error(&message);
            }
            RequestOutcome::Cancelled => {}
        }
        self.scheduler.on_request_complete();
    }

    /// Moves focus; leaving the lyrics pane cancels a pending pause timer
    pub fn set_focus(&mut self, focus: Focus) {
        if self.focus == Focus::Lyrics && focus != Focus::Lyrics {
            self.scheduler.on_blur();
        }
        self.focus = focus;
    }

    pub fn cycle_focus(&mut self, forward: bool) {
        let order: &[Focus] = if self.settings.show_settings {
            &[Focus::Lyrics, Focus::Instruction, Focus::Suggestions]
        } else {
            &[Focus::Lyrics, Focus::Suggestions]
        };
        let current = order.iter().position(|f| *f == self.focus).unwrap_or(0);
        let next = if forward {
            (current + 1) % order.len()
        } else {
            (current + order.len() - 1) % order.len()
        };
        self.set_focus(order[next]);
    }

    pub fn toggle_auto_suggest(&mut self) {
        let enabled = !self.settings.auto_suggest;
        self.settings.auto_suggest = enabled;
        self.scheduler.set_auto_enabled(enabled);
        self.notification.show(if enabled {
            "Automatic suggestions on"
        } else {
            "Automatic suggestions off"
        });
    }

    pub fn adjust_wildness(&mut self, delta: f64) {
        let value = self.settings.adjust_wildness(delta);
        self.notification.show(&format!("Wildness {:.1}", value));
    }

    pub fn clear_suggestions(&mut self) {
        self.output.clear();
        self.notification.show("Suggestions cleared");
    }

    pub fn toggle_settings_panel(&mut self) {
        self.settings.show_settings = !self.settings.show_settings;
        if !self.settings.show_settings && self.focus == Focus::Instruction {
            self.set_focus(Focus::Lyrics);
        }
    }

    pub fn toggle_prompt_preview(&mut self) {
        self.settings.show_prompt_preview = !self.settings.show_prompt_preview;
    }

    /// Copies the instruction editor's text into the settings
    pub fn sync_freeform(&mut self) {
        self.settings.freeform = self.instruction.lines().join("\n");
    }

    /// Prompt the current selection or caret line would produce
    pub fn prompt_preview(&self) -> String {
        preview_prompt(&self.lyrics.basis(), &self.settings.freeform)
    }
}

fn build_instruction(freeform: &str) -> TextArea<'static> {
    let mut textarea = TextArea::new(freeform.split('\n').map(str::to_string).collect());
    textarea.set_cursor_line_style(Style::default());
    textarea.set_placeholder_text("e.g. answer in Finnish, keep a melancholic tone");
    textarea.set_placeholder_style(Style::default().fg(theme::palette::TEXT_DIM));
    textarea.move_cursor(tui_textarea::CursorMove::Bottom);
    textarea.move_cursor(tui_textarea::CursorMove::End);
    textarea
}

#[cfg(test)]
#[path = "app_state_tests.rs"]
mod app_state_tests;
