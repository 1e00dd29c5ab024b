//! Theme configuration
//!
//! The front-end ships a small JSON config that seeds the resolver:
//!
//! ```json
//! {
//!   "initial_theme": "dawn",
//!   "editor_theme": "monokai",
//!   "dark_editor_fallback": "twilight",
//!   "light_editor_fallback": "chrome"
//! }
//! ```
//!
//! Every field is optional. Values are kept as raw strings and resolved
//! defensively at use, so an empty or unknown `initial_theme` simply defers
//! to the platform preference.

mod validate;

pub use validate::*;

use std::path::{Path, PathBuf};

use anyhow::Context;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::theme::{normalize_editor_theme, EditorFallbacks};

/// Errors raised while reading a config file
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
#[schemars(deny_unknown_fields)]
pub struct ThemeConfig {
    /// Theme used while no class is applied to the UI root
    /// (light, dawn, dark or noir; empty defers to the platform preference)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub initial_theme: Option<String>,

    /// Editor theme requested by the user, e.g. "monokai" or "ace/theme/monokai"
    #[serde(skip_serializing_if = "Option::is_none")]
    pub editor_theme: Option<String>,

    /// Editor theme used when the requested one is unavailable and a dark theme is active
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dark_editor_fallback: Option<String>,

    /// Editor theme used when the requested one is unavailable and a light theme is active
    #[serde(skip_serializing_if = "Option::is_none")]
    pub light_editor_fallback: Option<String>,
}

impl ThemeConfig {
    /// Parse config from a JSON string
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load config from a JSON file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&content)
    }

    /// Load config from `path` if it exists, otherwise use defaults
    pub fn load_or_default(path: &Path) -> anyhow::Result<Self> {
        if !path.exists() {
            tracing::debug!("No theme config at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let report = validate_config_file(path)
            .with_context(|| format!("Failed to validate {}", path.display()))?;
        for issue in &report.issues {
            tracing::warn!("{}: {} ({})", path.display(), issue.message, issue.path);
        }

        Self::from_file(path).with_context(|| format!("Failed to load {}", path.display()))
    }

    /// Fallback editor themes, namespaced, with built-in defaults for unset fields
    pub fn editor_fallbacks(&self) -> EditorFallbacks {
        let defaults = EditorFallbacks::default();
        EditorFallbacks {
            dark: self
                .dark_editor_fallback
                .as_deref()
                .filter(|name| !name.trim().is_empty())
                .map(normalize_editor_theme)
                .unwrap_or(defaults.dark),
            light: self
                .light_editor_fallback
                .as_deref()
                .filter(|name| !name.trim().is_empty())
                .map(normalize_editor_theme)
                .unwrap_or(defaults.light),
        }
    }
}

/// JSON Schema for [`ThemeConfig`]; unknown fields are not allowed
pub fn get_config_schema() -> Value {
    schemars::schema_for!(ThemeConfig).to_value()
}
