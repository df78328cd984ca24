use tempfile::TempDir;

use super::*;

#[test]
fn test_settings_path_is_in_config_dir() {
    let path = settings_path();
    assert!(path.to_string_lossy().contains(".config/renki"));
    assert!(path.to_string_lossy().ends_with("settings.toml"));
}

#[test]
fn test_parse_empty_yields_defaults() {
    assert_eq!(parse_settings_toml("").unwrap(), Settings::default());
}

#[test]
fn test_parse_partial_file() {
    let settings = parse_settings_toml("freeform = \"in French\"\nauto_suggest = false").unwrap();
    assert_eq!(settings.freeform, "in French");
    assert!(!settings.auto_suggest);
    assert_eq!(settings.wildness, 0.7);
    assert!(settings.show_settings);
    assert!(!settings.show_prompt_preview);
}

#[test]
fn test_parse_clamps_wildness() {
    let settings = parse_settings_toml("wildness = 3.5").unwrap();
    assert_eq!(settings.wildness, 1.0);
}

#[test]
fn test_parse_invalid_is_error() {
    let err = parse_settings_toml("wildness = \"hot\"").unwrap_err();
    assert!(err.to_string().starts_with("Invalid settings"));
}

#[test]
fn test_load_missing_file_yields_defaults() {
    let dir = TempDir::new().unwrap();
    let settings = load_settings_from(&dir.path().join("settings.toml"));
    assert_eq!(settings, Settings::default());
}

#[test]
fn test_load_broken_file_yields_defaults() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("settings.toml");
    fs::write(&path, "[[[").unwrap();
    assert_eq!(load_settings_from(&path), Settings::default());
}

#[test]
fn test_save_then_load_keeps_values() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("nested").join("settings.toml");
    let settings = Settings {
        freeform: "darker tone".to_string(),
        wildness: 0.3,
        auto_suggest: false,
        show_settings: false,
        show_prompt_preview: true,
    };

    save_settings_to(&settings, &path).unwrap();
    assert_eq!(load_settings_from(&path), settings);
}

#[test]
fn test_save_into_unwritable_location_fails() {
    let dir = TempDir::new().unwrap();
    let blocker = dir.path().join("file");
    fs::write(&blocker, "x").unwrap();

    let err = save_settings_to(&Settings::default(), &blocker.join("settings.toml")).unwrap_err();
    assert!(matches!(err, RenkiError::SaveSettings { .. }));
}
