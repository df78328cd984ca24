use std::fs;
use std::path::{Path, PathBuf};

use super::settings_state::Settings;
use crate::config::config_dir;
use crate::error::RenkiError;

const SETTINGS_FILE: &str = "settings.toml";

pub fn settings_path() -> PathBuf {
    config_dir().join(SETTINGS_FILE)
}

pub fn load_settings() -> Settings {
    load_settings_from(&settings_path())
}

/// Missing or unreadable files yield defaults
pub fn load_settings_from(path: &Path) -> Settings {
    match fs::read_to_string(path) {
        Ok(contents) => match parse_settings_toml(&contents) {
            Ok(settings) => settings,
            Err(e) => {
                log::warn!("Ignoring settings file {:?}: {}", path, e);
                Settings::default()
            }
        },
        Err(_) => {
            #[cfg(debug_assertions)]
            log::debug!("No settings at {:?}, using defaults", path);
            Settings::default()
        }
    }
}

pub fn parse_settings_toml(content: &str) -> Result<Settings, RenkiError> {
    toml::from_str::<Settings>(content)
        .map(Settings::normalized)
        .map_err(|e| RenkiError::InvalidSettings(e.to_string()))
}

pub fn save_settings(settings: &Settings) -> Result<(), RenkiError> {
    save_settings_to(settings, &settings_path())
}

pub fn save_settings_to(settings: &Settings, path: &Path) -> Result<(), RenkiError> {
    let content = toml::to_string_pretty(settings)
        .map_err(|e| RenkiError::InvalidSettings(e.to_string()))?;

    let write = || -> std::io::Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, content.as_bytes())
    };

    write().map_err(|source| RenkiError::SaveSettings {
        path: path.to_path_buf(),
        source,
    })?;

    #[cfg(debug_assertions)]
    log::debug!("Saved settings to {:?}", path);
    Ok(())
}

#[cfg(test)]
#[path = "settings_storage_tests.rs"]
mod settings_storage_tests;
