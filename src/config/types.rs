// Configuration type definitions

use serde::Deserialize;

use super::ai_types::AiConfig;
use crate::history::DEFAULT_HISTORY_LIMIT;

/// Clipboard backend selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ClipboardBackend {
    #[default]
    Auto,
    System,
    Osc52,
}

/// Clipboard configuration section
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ClipboardConfig {
    #[serde(default)]
    pub backend: ClipboardBackend,
}

fn default_auto_suggest() -> bool {
    true
}

fn default_pause_ms() -> u64 {
    2300
}

fn default_enter_window_secs() -> u64 {
    60
}

fn default_min_word_len() -> usize {
    4
}

fn default_history_limit() -> usize {
    DEFAULT_HISTORY_LIMIT
}

/// Automatic suggestion timing
#[derive(Debug, Clone, Deserialize)]
pub struct SuggestConfig {
    /// Initial auto-suggest state when no saved settings exist
    #[serde(default = "default_auto_suggest")]
    pub auto_suggest: bool,
    /// Typing pause before an automatic request
    #[serde(default = "default_pause_ms")]
    pub pause_ms: u64,
    /// Enter on a line that was just covered by a pause request stays quiet
    /// for this long
    #[serde(default = "default_enter_window_secs")]
    pub enter_window_secs: u64,
    /// Minimum length of the caret line's last word to arm the pause timer
    #[serde(default = "default_min_word_len")]
    pub min_word_len: usize,
    /// Undo snapshots kept, 0 = unbounded
    #[serde(default = "default_history_limit")]
    pub history_limit: usize,
}

impl Default for SuggestConfig {
    fn default() -> Self {
        SuggestConfig {
            auto_suggest: default_auto_suggest(),
            pause_ms: default_pause_ms(),
            enter_window_secs: default_enter_window_secs(),
            min_word_len: default_min_word_len(),
            history_limit: default_history_limit(),
        }
    }
}

impl SuggestConfig {
    pub fn history_limit(&self) -> Option<usize> {
        (self.history_limit > 0).then_some(self.history_limit)
    }
}

fn default_listen() -> String {
    "127.0.0.1:8787".to_string()
}

/// `renki serve` settings
#[derive(Debug, Clone, Deserialize)]
pub struct ProxyConfig {
    #[serde(default = "default_listen")]
    pub listen: String,
}

impl Default for ProxyConfig {
    fn default() -> Self {
        ProxyConfig {
            listen: default_listen(),
        }
    }
}

/// Root configuration structure
#[derive(Debug, Clone, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub clipboard: ClipboardConfig,
    #[serde(default)]
    pub suggest: SuggestConfig,
    #[serde(default)]
    pub ai: AiConfig,
    #[serde(default)]
    pub proxy: ProxyConfig,
}

#[cfg(test)]
#[path = "types_tests.rs"]
mod types_tests;
