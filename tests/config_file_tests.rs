//! Integration tests for loading and validating theme config files.

mod common;

use glasspath_theme::config::{validate_config_file, ConfigError, ConfigIssueKind, ThemeConfig};
use glasspath_theme::theme::{StaticPreference, ThemeState, UserTheme};
use std::fs;
use tempfile::TempDir;

#[test]
fn test_load_config_from_file() {
    common::tracing::init_tracing_from_env();
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("theme.json");
    fs::write(&path, r#"{ "initial_theme": "noir", "editor_theme": "dracula" }"#).unwrap();

    let config = ThemeConfig::from_file(&path).unwrap();
    let state = ThemeState::from_config(&config, StaticPreference::light());
    assert_eq!(state.theme(), UserTheme::Noir);
    assert_eq!(
        state.editor_theme(config.editor_theme.as_deref().unwrap_or_default()),
        "ace/theme/dracula"
    );
}

#[test]
fn test_load_or_default_missing_file() {
    let dir = TempDir::new().unwrap();
    let config = ThemeConfig::load_or_default(&dir.path().join("missing.json")).unwrap();
    assert_eq!(config, ThemeConfig::default());
}

#[test]
fn test_load_or_default_tolerates_unknown_fields() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("theme.json");
    fs::write(&path, r#"{ "initial_theme": "dawn", "accent": "teal" }"#).unwrap();

    let report = validate_config_file(&path).unwrap();
    assert!(!report.is_clean());
    assert!(report
        .issues
        .iter()
        .all(|i| i.kind == ConfigIssueKind::UnknownField));

    let config = ThemeConfig::load_or_default(&path).unwrap();
    assert_eq!(config.initial_theme.as_deref(), Some("dawn"));
}

#[test]
fn test_load_or_default_reports_broken_json() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("theme.json");
    fs::write(&path, "{ \"initial_theme\": ").unwrap();

    let err = ThemeConfig::load_or_default(&path).unwrap_err();
    assert!(
        format!("{:#}", err).contains("theme.json"),
        "error should name the file: {:#}",
        err
    );
    assert!(err.downcast_ref::<ConfigError>().is_some());
}

#[test]
fn test_validate_file_reports_unusable_theme_names() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("theme.json");
    fs::write(
        &path,
        r#"{ "initial_theme": "sepia", "dark_editor_fallback": "nonexistent" }"#,
    )
    .unwrap();

    let report = validate_config_file(&path).unwrap();
    let kinds: Vec<(&str, ConfigIssueKind)> = report
        .issues
        .iter()
        .map(|i| (i.path.as_str(), i.kind.clone()))
        .collect();
    assert_eq!(
        kinds,
        vec![
            ("initial_theme", ConfigIssueKind::UnknownTheme),
            ("dark_editor_fallback", ConfigIssueKind::UnknownEditorTheme),
        ]
    );

    // Loading still succeeds; the unusable names fall back at use
    let config = ThemeConfig::load_or_default(&path).unwrap();
    let mut state = ThemeState::from_config(&config, StaticPreference::light());
    assert_eq!(state.theme(), UserTheme::Light);
    state.set_theme("noir");
    assert_eq!(state.editor_theme("missing"), "ace/theme/nonexistent");
}
