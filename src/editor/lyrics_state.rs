use ratatui::style::Style;
use ratatui::crossterm::event::KeyEvent;
use tui_textarea::{CursorMove, TextArea};

use super::extract::{self, Basis, CursorSelection};
use crate::history::EditHistory;
use crate::theme;

/// The lyrics buffer and its undo/redo history.
///
/// The textarea's own undo stack is disabled; every user edit is committed to
/// [`EditHistory`] instead so restores never count as edits.
pub struct LyricsState {
    pub textarea: TextArea<'static>,
    history: EditHistory,
}

impl LyricsState {
    pub fn new(initial: &str, history_limit: Option<usize>) -> Self {
        let initial = initial.replace("\r\n", "\n");
        Self {
            textarea: build_textarea(&initial),
            history: EditHistory::with_initial(initial, history_limit),
        }
    }

    /// Full buffer contents, lines joined with `\n`.
    pub fn text(&self) -> String {
        self.textarea.lines().join("\n")
    }

    pub fn caret_offset(&self) -> usize {
        let (row, col) = self.textarea.cursor();
        extract::offset_at(self.textarea.lines(), row, col)
    }

    pub fn selection(&self) -> CursorSelection {
        let lines = self.textarea.lines();
        match self.textarea.selection_range() {
            Some(((start_row, start_col), (end_row, end_col))) => CursorSelection::new(
                extract::offset_at(lines, start_row, start_col),
                extract::offset_at(lines, end_row, end_col),
            ),
            None => CursorSelection::caret(self.caret_offset()),
        }
    }

    /// The line under the caret, ignoring any selection.
    pub fn caret_line(&self) -> String {
        let (row, _) = self.textarea.cursor();
        self.textarea.lines().get(row).cloned().unwrap_or_default()
    }

    /// Trimmed basis text for a manual request.
    pub fn basis(&self) -> String {
        let text = self.text();
        let basis: Basis<'_> = extract::extract_basis(&text, self.selection());
        basis.trimmed().to_string()
    }

    /// Forwards a key to the textarea; true when the buffer changed.
    pub fn input(&mut self, key: KeyEvent) -> bool {
        self.textarea.input(key)
    }

    pub fn insert_str(&mut self, text: &str) -> bool {
        self.textarea.insert_str(text.replace("\r\n", "\n"))
    }

    /// Records the current buffer as a new history snapshot.
    pub fn commit(&mut self) {
        let text = self.text();
        if text != self.history.current() {
            self.history.commit(text);
        }
    }

    pub fn undo(&mut self) -> bool {
        match self.history.undo().map(str::to_string) {
            Some(text) => {
                self.restore(&text);
                true
            }
            None => false,
        }
    }

    pub fn redo(&mut self) -> bool {
        match self.history.redo().map(str::to_string) {
            Some(text) => {
                self.restore(&text);
                true
            }
            None => false,
        }
    }

    pub fn history(&self) -> &EditHistory {
        &self.history
    }

    /// Replaces the buffer without touching history, keeping the caret as
    /// close to where it was as the new text allows.
    fn restore(&mut self, text: &str) {
        let (row, col) = self.textarea.cursor();
        let block = self.textarea.block().cloned();
        self.textarea = build_textarea(text);
        if let Some(block) = block {
            self.textarea.set_block(block);
        }
        let row = u16::try_from(row).unwrap_or(u16::MAX);
        let col = u16::try_from(col).unwrap_or(u16::MAX);
        self.textarea.move_cursor(CursorMove::Jump(row, col));
    }
}

fn build_textarea(text: &str) -> TextArea<'static> {
    let mut textarea = TextArea::new(text.split('\n').map(str::to_string).collect());
    textarea.set_max_histories(0);
    textarea.set_cursor_line_style(Style::default());
    textarea.set_placeholder_text("Write your lyrics here...");
    textarea.set_placeholder_style(Style::default().fg(theme::palette::TEXT_DIM));
    textarea.set_selection_style(Style::default().bg(theme::palette::SELECTION_BG));
    textarea
}

#[cfg(test)]
#[path = "lyrics_state_tests.rs"]
mod lyrics_state_tests;
