//! Clipboard support
//!
//! The system clipboard goes through arboard. OSC 52 covers remote
//! terminals (SSH, tmux). Auto tries the system clipboard first.

mod backend;
pub mod clipboard_events;
mod osc52;
mod system;

pub use backend::{ClipboardError, copy_to_clipboard};
pub use osc52::encode_osc52;
