//! Platform color-scheme preference

use super::types::UserTheme;

/// Source of the platform's dark-mode preference.
///
/// The browser build answers this with `prefers-color-scheme`; tests and
/// native hosts plug in a fixed answer.
pub trait ColorSchemePreference {
    /// Returns true if the platform asks for a dark color scheme
    fn prefers_dark(&self) -> bool;
}

/// A preference fixed at construction time
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StaticPreference {
    pub prefers_dark: bool,
}

impl StaticPreference {
    pub fn dark() -> Self {
        Self { prefers_dark: true }
    }

    pub fn light() -> Self {
        Self {
            prefers_dark: false,
        }
    }
}

impl ColorSchemePreference for StaticPreference {
    fn prefers_dark(&self) -> bool {
        self.prefers_dark
    }
}

impl<F> ColorSchemePreference for F
where
    F: Fn() -> bool,
{
    fn prefers_dark(&self) -> bool {
        self()
    }
}

/// The theme the platform would pick: `Dark` when it prefers dark, `Light` otherwise
pub fn media_preference(preference: &dyn ColorSchemePreference) -> UserTheme {
    if preference.prefers_dark() {
        UserTheme::Dark
    } else {
        UserTheme::Light
    }
}
