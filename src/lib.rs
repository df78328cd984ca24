//! renki library - Terminal lyric-writing assistant
//!
//! This library exposes the core functionality of renki for testing purposes.

pub mod ai;
pub mod app;
pub mod clipboard;
pub mod config;
pub mod editor;
pub mod error;
pub mod help;
pub mod history;
pub mod notification;
pub mod output;
pub mod proxy;
pub mod scroll;
pub mod settings;
pub mod suggest;
#[cfg(test)]
pub mod test_utils;
pub mod theme;
pub mod widgets;

// Re-export commonly used types for convenience
pub use app::{App, Focus};
pub use config::Config;
