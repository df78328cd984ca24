use std::io;
use std::time::{Duration, Instant};

use ratatui::crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use super::app_state::{App, Focus};
use crate::editor::editor_events;
use crate::output::output_events;

mod global;

const EVENT_POLL_TIMEOUT: Duration = Duration::from_millis(100);

impl App {
    /// One loop iteration: fire a due pause timer, apply worker responses,
    /// then wait up to 100 ms for terminal input.
    pub fn handle_events(&mut self) -> io::Result<()> {
        self.tick(Instant::now());
        self.poll_ai();

        if event::poll(EVENT_POLL_TIMEOUT)? {
            match event::read()? {
                Event::Key(key_event) if key_event.kind == KeyEventKind::Press => {
                    self.handle_key_event(key_event);
                }
                Event::Paste(text) => {
                    self.handle_paste_event(&text);
                }
                _ => {}
            }
        }
        Ok(())
    }

    pub fn handle_paste_event(&mut self, text: &str) {
        if self.help.visible {
            return;
        }
        match self.focus {
            Focus::Lyrics => editor_events::handle_lyrics_paste(self, text),
            Focus::Instruction => {
                if self.instruction.insert_str(text.replace("\r\n", "\n")) {
                    self.sync_freeform();
                }
            }
            Focus::Suggestions => {}
        }
    }

    pub fn handle_key_event(&mut self, key: KeyEvent) {
        if global::handle_global_keys(self, key) {
            return;
        }

        match self.focus {
            Focus::Lyrics => editor_events::handle_lyrics_key(self, key),
            Focus::Instruction => self.handle_instruction_key(key),
            Focus::Suggestions => output_events::handle_output_key(&mut self.output, key),
        }
    }

    fn handle_instruction_key(&mut self, key: KeyEvent) {
        // Instruction stays on one line
        if key.code == KeyCode::Enter
            || (key.code == KeyCode::Char('m') && key.modifiers.contains(KeyModifiers::CONTROL))
        {
            return;
        }
        if self.instruction.input(key) {
            self.sync_freeform();
        }
    }
}

#[cfg(test)]
#[path = "app_events_tests.rs"]
mod app_events_tests;
