//! Lyrics pane: the editable buffer, basis extraction and key handling

pub mod editor_events;
pub mod extract;
pub mod lyrics_render;
mod lyrics_state;

pub use extract::{Basis, BasisMode, CursorSelection, extract_basis, last_word, line_at, word_count};
pub use lyrics_state::LyricsState;
