//! Config checks beyond what serde enforces.
//!
//! Loading is lenient: unknown fields are ignored and unknown theme names
//! degrade to fallbacks at use. Validation reports those cases up front, in
//! two passes:
//!
//! - the JSON Schema generated for [`ThemeConfig`] (which forbids unknown
//!   fields) catches typos like `"inital_theme"` and wrongly typed values,
//! - the parsed config is checked against the supported themes and an
//!   [`EditorThemeRegistry`] so that `"initial_theme": "sepia"` or an editor
//!   theme the front-end does not bundle is reported instead of silently
//!   replaced.

use std::path::Path;

use serde_json::Value;

use super::{get_config_schema, ThemeConfig};
use crate::theme::{
    normalize_editor_theme, resolve_theme_class, AceThemeList, EditorThemeRegistry, UserTheme,
    EDITOR_THEME_PREFIX,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigIssueKind {
    /// The file is not JSON
    InvalidJson,
    /// Field not present in `ThemeConfig`
    UnknownField,
    /// Field present with the wrong JSON type
    TypeMismatch,
    /// `initial_theme` is not one of light, dawn, dark, noir
    UnknownTheme,
    /// Editor theme key missing from the registry
    UnknownEditorTheme,
    Other,
}

/// One problem found in a config, located by dotted field path
#[derive(Debug, Clone)]
pub struct ConfigIssue {
    /// Field the issue refers to, or "(root)"
    pub path: String,
    pub message: String,
    pub kind: ConfigIssueKind,
}

impl ConfigIssue {
    fn new(path: impl Into<String>, kind: ConfigIssueKind, message: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            message: message.into(),
            kind,
        }
    }
}

/// Everything found while validating one config
#[derive(Debug, Default)]
pub struct ValidationReport {
    pub issues: Vec<ConfigIssue>,
}

impl ValidationReport {
    pub fn is_clean(&self) -> bool {
        self.issues.is_empty()
    }

    pub fn has(&self, kind: ConfigIssueKind) -> bool {
        self.issues.iter().any(|i| i.kind == kind)
    }
}

/// Validate config JSON against the bundled Ace theme list
pub fn validate_config_json(json: &str) -> ValidationReport {
    validate_config_with_registry(json, &AceThemeList::new())
}

/// Validate config JSON, resolving editor themes through `registry`
pub fn validate_config_with_registry(
    json: &str,
    registry: &dyn EditorThemeRegistry,
) -> ValidationReport {
    let instance: Value = match serde_json::from_str(json) {
        Ok(v) => v,
        Err(e) => {
            return ValidationReport {
                issues: vec![ConfigIssue::new(
                    "(root)",
                    ConfigIssueKind::InvalidJson,
                    format!("Invalid JSON: {}", e),
                )],
            }
        }
    };

    let mut issues = schema_issues(&instance);
    // Values only get checked once their shape is right
    if let Ok(config) = serde_json::from_value::<ThemeConfig>(instance) {
        issues.extend(theme_issues(&config, registry));
    }
    ValidationReport { issues }
}

/// Validate a config file at the given path.
///
/// Returns `Err` only if the file could not be read.
pub fn validate_config_file(path: &Path) -> Result<ValidationReport, std::io::Error> {
    let contents = std::fs::read_to_string(path)?;
    Ok(validate_config_json(&contents))
}

fn schema_issues(instance: &Value) -> Vec<ConfigIssue> {
    let validator = match jsonschema::validator_for(&get_config_schema()) {
        Ok(v) => v,
        Err(e) => {
            return vec![ConfigIssue::new(
                "(root)",
                ConfigIssueKind::Other,
                format!("Internal error: config schema does not compile: {}", e),
            )]
        }
    };

    validator
        .iter_errors(instance)
        .map(|error| {
            let message = error.to_string();
            let kind = if message.contains("Additional properties are not allowed") {
                ConfigIssueKind::UnknownField
            } else if message.contains("is not of type") {
                ConfigIssueKind::TypeMismatch
            } else {
                ConfigIssueKind::Other
            };
            let pointer = error.instance_path().to_string();
            let path = match pointer.trim_start_matches('/') {
                "" => "(root)".to_string(),
                p => p.replace('/', "."),
            };
            ConfigIssue::new(path, kind, message)
        })
        .collect()
}

fn theme_issues(config: &ThemeConfig, registry: &dyn EditorThemeRegistry) -> Vec<ConfigIssue> {
    let mut issues = Vec::new();

    if let Some(initial) = config.initial_theme.as_deref() {
        if !initial.is_empty() && resolve_theme_class(initial).is_none() {
            issues.push(ConfigIssue::new(
                "initial_theme",
                ConfigIssueKind::UnknownTheme,
                format!(
                    "{:?} is not a theme (expected one of {})",
                    initial,
                    UserTheme::names().join(", ")
                ),
            ));
        }
    }

    let editor_fields = [
        ("editor_theme", &config.editor_theme),
        ("dark_editor_fallback", &config.dark_editor_fallback),
        ("light_editor_fallback", &config.light_editor_fallback),
    ];
    for (field, value) in editor_fields {
        let Some(name) = value.as_deref().filter(|n| !n.trim().is_empty()) else {
            continue;
        };
        let theme_path = normalize_editor_theme(name);
        let key = &theme_path[EDITOR_THEME_PREFIX.len()..];
        if !registry.contains(key) {
            issues.push(ConfigIssue::new(
                field,
                ConfigIssueKind::UnknownEditorTheme,
                format!("editor theme {:?} is not available", key),
            ));
        }
    }

    issues
}
