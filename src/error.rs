use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum RenkiError {
    #[error("Failed to read lyrics file {path}: {source}")]
    ReadLyrics {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to save settings to {path}: {source}")]
    SaveSettings {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Invalid settings: {0}")]
    InvalidSettings(String),

    #[error("Cannot listen on {addr}: {message}")]
    ProxyBind { addr: String, message: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
