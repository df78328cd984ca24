//! Basis extraction
//!
//! Resolves the text a suggestion request is about: the selected span when
//! there is a selection, otherwise the whole line under the caret.

/// A byte range into the lyrics buffer; `start == end` is a bare caret.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CursorSelection {
    pub start: usize,
    pub end: usize,
}

impl CursorSelection {
    /// Builds a selection, swapping the ends if needed so `start <= end`.
    pub fn new(a: usize, b: usize) -> Self {
        Self {
            start: a.min(b),
            end: a.max(b),
        }
    }

    pub fn caret(offset: usize) -> Self {
        Self {
            start: offset,
            end: offset,
        }
    }

    pub fn is_caret(&self) -> bool {
        self.start == self.end
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BasisMode {
    Selection,
    CurrentLine,
}

/// The raw (untrimmed) basis text together with how it was found.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Basis<'a> {
    pub mode: BasisMode,
    pub text: &'a str,
}

impl<'a> Basis<'a> {
    /// Trimmed form used for prompts and duplicate signatures.
    pub fn trimmed(&self) -> &'a str {
        self.text.trim()
    }
}

/// Selection text if there is one, else the caret line.
pub fn extract_basis(buffer: &str, selection: CursorSelection) -> Basis<'_> {
    if selection.is_caret() {
        return Basis {
            mode: BasisMode::CurrentLine,
            text: line_at(buffer, selection.end),
        };
    }

    let start = floor_char_boundary(buffer, selection.start);
    let end = floor_char_boundary(buffer, selection.end);
    Basis {
        mode: BasisMode::Selection,
        text: &buffer[start..end],
    }
}

/// The line containing `caret`, without its newline.
///
/// A caret sitting right after a `\n` belongs to the following line.
pub fn line_at(buffer: &str, caret: usize) -> &str {
    let caret = floor_char_boundary(buffer, caret);
    let start = buffer[..caret].rfind('\n').map_or(0, |i| i + 1);
    let end = buffer[caret..]
        .find('\n')
        .map_or(buffer.len(), |i| caret + i);
    &buffer[start..end]
}

/// Last whitespace-delimited word, if any.
pub fn last_word(text: &str) -> Option<&str> {
    text.split_whitespace().next_back()
}

pub fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}

/// Converts a `(row, column)` cursor, column counted in chars, into a byte
/// offset into `lines.join("\n")`.
pub fn offset_at(lines: &[String], row: usize, col: usize) -> usize {
    let row = row.min(lines.len().saturating_sub(1));
    let before: usize = lines[..row].iter().map(|l| l.len() + 1).sum();
    let in_line = lines.get(row).map_or(0, |line| {
        line.char_indices()
            .nth(col)
            .map_or(line.len(), |(byte, _)| byte)
    });
    before + in_line
}

fn floor_char_boundary(text: &str, offset: usize) -> usize {
    let mut offset = offset.min(text.len());
    while !text.is_char_boundary(offset) {
        offset -= 1;
    }
    offset
}

#[cfg(test)]
#[path = "extract_tests.rs"]
mod extract_tests;
