//! Pure theme types (WASM-compatible, no DOM access)

use std::fmt;
use std::str::FromStr;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A visual theme the front-end knows how to render.
///
/// The unresolved state ("use the system preference") is represented as
/// `Option<UserTheme>::None` rather than a variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum UserTheme {
    Light,
    Dawn,
    Dark,
    Noir,
}

/// Fixed cycling order used by `ThemeState::toggle_theme`
pub const PALETTE_ORDER: [UserTheme; 4] = [
    UserTheme::Light,
    UserTheme::Dawn,
    UserTheme::Dark,
    UserTheme::Noir,
];

/// Themes classified as low-luminance
pub const DARK_THEMES: [UserTheme; 2] = [UserTheme::Dark, UserTheme::Noir];

impl UserTheme {
    /// The class name written to the UI root for this theme
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dawn => "dawn",
            Self::Dark => "dark",
            Self::Noir => "noir",
        }
    }

    /// Whether this theme belongs to the dark family
    pub fn is_dark(&self) -> bool {
        DARK_THEMES.contains(self)
    }

    /// The theme after this one in palette order, wrapping after the last entry
    pub fn next(&self) -> Self {
        let idx = PALETTE_ORDER
            .iter()
            .position(|t| t == self)
            .unwrap_or(PALETTE_ORDER.len() - 1);
        PALETTE_ORDER[(idx + 1) % PALETTE_ORDER.len()]
    }

    /// Get all supported theme names, in palette order
    pub fn names() -> Vec<&'static str> {
        PALETTE_ORDER.iter().map(UserTheme::as_str).collect()
    }
}

impl fmt::Display for UserTheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned by the strict `FromStr` parser.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown theme {0:?} (expected one of light, dawn, dark, noir)")]
pub struct ParseThemeError(pub String);

impl FromStr for UserTheme {
    type Err = ParseThemeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        resolve_theme_class(s).ok_or_else(|| ParseThemeError(s.to_string()))
    }
}

/// Classify a raw class name into a supported theme.
///
/// Surrounding whitespace is ignored; anything else must match a theme name
/// exactly. Returns `None` for empty or unknown input.
pub fn resolve_theme_class(value: &str) -> Option<UserTheme> {
    let sanitized = value.trim();
    PALETTE_ORDER
        .iter()
        .copied()
        .find(|t| t.as_str() == sanitized)
}

/// Whether `value` names a dark-family theme exactly (no trimming)
pub fn is_dark_class(value: &str) -> bool {
    DARK_THEMES.iter().any(|t| t.as_str() == value)
}

/// Same as [`resolve_theme_class`], for values that may be absent.
pub fn resolve_optional_theme_class(value: Option<&str>) -> Option<UserTheme> {
    value.and_then(resolve_theme_class)
}
