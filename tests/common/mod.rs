// Common test utilities

pub mod tracing;

use glasspath_theme::theme::{StaticPreference, ThemeState};

/// A fresh state whose platform preference is fixed to dark or light
pub fn state_with_preference(prefers_dark: bool) -> ThemeState {
    self::tracing::init_tracing_from_env();
    ThemeState::new(StaticPreference { prefers_dark })
}
