//! Suggestion output pane
//!
//! An append-only log of suggestion blocks, each preceded by a fixed
//! delimiter line, plus the scroll state that keeps the newest block in view.

pub mod output_events;
pub mod output_render;
mod output_state;
mod suggestion_log;
mod wrap;

pub use output_state::OutputState;
pub use suggestion_log::{DELIMITER, SuggestionLog};
pub use wrap::wrap_text;
