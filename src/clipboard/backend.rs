use thiserror::Error;

use super::{osc52, system};
use crate::config::ClipboardBackend;

#[derive(Debug, Error)]
pub enum ClipboardError {
    #[error("System clipboard unavailable")]
    SystemUnavailable,
    #[error("Failed to write to clipboard: {0}")]
    Write(String),
}

pub fn copy_to_clipboard(text: &str, backend: ClipboardBackend) -> Result<(), ClipboardError> {
    match backend {
        ClipboardBackend::System => system::copy(text),
        ClipboardBackend::Osc52 => osc52::copy(text),
        ClipboardBackend::Auto => system::copy(text).or_else(|e| {
            #[cfg(debug_assertions)]
            log::debug!("{}, falling back to OSC 52", e);
            osc52::copy(text)
        }),
    }
}
