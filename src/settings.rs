//! User settings persisted between sessions
//!
//! Loaded once at start from ~/.config/renki/settings.toml and written back
//! when the session ends.

pub mod settings_render;
mod settings_state;
mod settings_storage;

pub use settings_state::{DEFAULT_WILDNESS, Settings, WILDNESS_STEP};
pub use settings_storage::{
    load_settings, load_settings_from, parse_settings_toml, save_settings, save_settings_to,
    settings_path,
};
