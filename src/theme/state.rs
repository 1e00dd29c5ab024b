//! Active theme state owned by the application
//!
//! `ThemeState` answers which theme is active by reading the class of an
//! injected [`UiRoot`] on every query, writes applied themes back to it, and
//! tells registered listeners whenever a new theme is applied. The browser
//! build injects `<html>` as the root.

use std::fmt;

use super::editor::{editor_theme, AceThemeList, EditorFallbacks, EditorThemeRegistry};
use super::preference::{media_preference, ColorSchemePreference};
use super::root::{MemoryRoot, UiRoot};
use super::types::{resolve_optional_theme_class, resolve_theme_class, UserTheme};
use crate::config::ThemeConfig;

/// Callback invoked with every applied theme
pub type ThemeListener = Box<dyn FnMut(UserTheme)>;

pub struct ThemeState {
    root: Box<dyn UiRoot>,
    /// Statically configured theme, consulted when the root class is unresolved
    initial_theme: Option<String>,
    preference: Box<dyn ColorSchemePreference>,
    registry: Box<dyn EditorThemeRegistry>,
    editor_fallbacks: EditorFallbacks,
    /// Editor theme requested by configuration, if any
    configured_editor_theme: Option<String>,
    listeners: Vec<ThemeListener>,
}

impl ThemeState {
    /// Create an empty state (in-memory root with no class, no initial theme)
    /// using the bundled Ace theme list as editor registry.
    pub fn new(preference: impl ColorSchemePreference + 'static) -> Self {
        Self {
            root: Box::new(MemoryRoot::default()),
            initial_theme: None,
            preference: Box::new(preference),
            registry: Box::new(AceThemeList::new()),
            editor_fallbacks: EditorFallbacks::default(),
            configured_editor_theme: None,
            listeners: Vec::new(),
        }
    }

    /// Build a state from loaded configuration
    pub fn from_config(
        config: &ThemeConfig,
        preference: impl ColorSchemePreference + 'static,
    ) -> Self {
        if let Some(initial) = config.initial_theme.as_deref() {
            if !initial.is_empty() && resolve_theme_class(initial).is_none() {
                tracing::warn!(
                    "Configured initial theme {:?} is not one of {:?}, ignoring it",
                    initial,
                    UserTheme::names()
                );
            }
        }

        let mut state = Self::new(preference).with_editor_fallbacks(config.editor_fallbacks());
        state.initial_theme = config.initial_theme.clone();
        state.configured_editor_theme = config.editor_theme.clone();
        state
    }

    pub fn with_initial_theme(mut self, initial_theme: impl Into<String>) -> Self {
        self.initial_theme = Some(initial_theme.into());
        self
    }

    /// Read and write the applied class through `root`
    pub fn with_root(mut self, root: impl UiRoot + 'static) -> Self {
        self.root = Box::new(root);
        self
    }

    /// Write `root_class` to the current root without notifying listeners
    pub fn with_root_class(self, root_class: &str) -> Self {
        self.root.set_class_name(root_class);
        self
    }

    pub fn with_registry(mut self, registry: impl EditorThemeRegistry + 'static) -> Self {
        self.registry = Box::new(registry);
        self
    }

    pub fn with_editor_fallbacks(mut self, fallbacks: EditorFallbacks) -> Self {
        self.editor_fallbacks = fallbacks;
        self
    }

    /// Register a callback that receives every theme applied by
    /// [`set_theme`](Self::set_theme) or [`toggle_theme`](Self::toggle_theme)
    pub fn on_change(&mut self, listener: impl FnMut(UserTheme) + 'static) {
        self.listeners.push(Box::new(listener));
    }

    /// The raw class name currently on the UI root
    pub fn root_class(&self) -> String {
        self.root.class_name()
    }

    /// The active theme.
    ///
    /// Precedence: applied root class, then configured initial theme, then
    /// the platform preference.
    pub fn theme(&self) -> UserTheme {
        if let Some(theme) = resolve_theme_class(&self.root.class_name()) {
            return theme;
        }
        if let Some(theme) = resolve_optional_theme_class(self.initial_theme.as_deref()) {
            return theme;
        }
        self.media_preference()
    }

    /// Apply a theme by name.
    ///
    /// An empty value applies the platform preference; an unknown value
    /// applies `light`. Returns the theme that was applied.
    pub fn set_theme(&mut self, value: &str) -> UserTheme {
        let theme = if value.is_empty() {
            self.media_preference()
        } else {
            resolve_theme_class(value).unwrap_or_else(|| {
                tracing::debug!("Unknown theme {:?}, applying light", value);
                UserTheme::Light
            })
        };
        self.apply(theme);
        theme
    }

    /// Whether the active theme is dark-family
    pub fn is_dark_theme(&self) -> bool {
        self.theme().is_dark()
    }

    /// Advance to the next theme in palette order and apply it
    pub fn toggle_theme(&mut self) -> UserTheme {
        let next = self.theme().next();
        self.set_theme(next.as_str())
    }

    /// The theme the platform would pick
    pub fn media_preference(&self) -> UserTheme {
        media_preference(self.preference.as_ref())
    }

    /// Editor theme identifier for `theme_name`, falling back by the active theme
    pub fn editor_theme(&self, theme_name: &str) -> String {
        editor_theme(
            theme_name,
            self.registry.as_ref(),
            self.theme(),
            &self.editor_fallbacks,
        )
    }

    /// Editor theme for the configured request; with nothing configured this
    /// is the fallback for the active theme
    pub fn configured_editor_theme(&self) -> String {
        self.editor_theme(self.configured_editor_theme.as_deref().unwrap_or_default())
    }

    fn apply(&mut self, theme: UserTheme) {
        tracing::debug!("Applying theme {} (was {:?})", theme, self.root.class_name());
        self.root.set_class_name(theme.as_str());
        for listener in self.listeners.iter_mut() {
            listener(theme);
        }
    }
}

impl fmt::Debug for ThemeState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ThemeState")
            .field("root_class", &self.root.class_name())
            .field("initial_theme", &self.initial_theme)
            .field("prefers_dark", &self.preference.prefers_dark())
            .field("editor_fallbacks", &self.editor_fallbacks)
            .field("configured_editor_theme", &self.configured_editor_theme)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::preference::StaticPreference;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn test_empty_state_uses_media_preference() {
        assert_eq!(
            ThemeState::new(StaticPreference::dark()).theme(),
            UserTheme::Dark
        );
        assert_eq!(
            ThemeState::new(StaticPreference::light()).theme(),
            UserTheme::Light
        );
    }

    #[test]
    fn test_precedence() {
        let state = ThemeState::new(StaticPreference::dark())
            .with_initial_theme("dawn")
            .with_root_class("noir");
        assert_eq!(state.theme(), UserTheme::Noir);

        let state = ThemeState::new(StaticPreference::dark()).with_initial_theme("dawn");
        assert_eq!(state.theme(), UserTheme::Dawn);

        let state = ThemeState::new(StaticPreference::dark())
            .with_initial_theme("sepia")
            .with_root_class("some-other-class");
        assert_eq!(state.theme(), UserTheme::Dark);
    }

    #[test]
    fn test_theme_follows_external_root_changes() {
        let root = MemoryRoot::new("dawn");
        let mut state = ThemeState::new(StaticPreference::light()).with_root(root.clone());
        assert_eq!(state.theme(), UserTheme::Dawn);

        root.set_class_name("noir");
        assert_eq!(state.theme(), UserTheme::Noir);
        assert!(state.is_dark_theme());

        // Toggling starts from the class written outside the state
        assert_eq!(state.toggle_theme(), UserTheme::Light);
        assert_eq!(root.class_name(), "light");

        root.set_class_name("");
        assert_eq!(state.theme(), UserTheme::Light);
    }

    #[test]
    fn test_configured_editor_theme() {
        let config = ThemeConfig {
            editor_theme: Some("monokai".to_string()),
            ..Default::default()
        };
        let state = ThemeState::from_config(&config, StaticPreference::light());
        assert_eq!(state.configured_editor_theme(), "ace/theme/monokai");

        let mut state = ThemeState::new(StaticPreference::light());
        assert_eq!(state.configured_editor_theme(), "ace/theme/chrome");
        state.set_theme("dark");
        assert_eq!(state.configured_editor_theme(), "ace/theme/twilight");
    }

    #[test]
    fn test_set_theme_unknown_applies_light() {
        let mut state = ThemeState::new(StaticPreference::dark());
        assert_eq!(state.set_theme("bogus"), UserTheme::Light);
        assert_eq!(state.theme(), UserTheme::Light);
        assert_eq!(state.root_class(), "light");
    }

    #[test]
    fn test_set_theme_empty_applies_media_preference() {
        let mut state = ThemeState::new(StaticPreference::dark()).with_root_class("dawn");
        state.set_theme("");
        assert_eq!(state.theme(), UserTheme::Dark);
        assert_eq!(state.root_class(), "dark");
    }

    #[test]
    fn test_set_theme_trims() {
        let mut state = ThemeState::new(StaticPreference::light());
        assert_eq!(state.set_theme(" noir "), UserTheme::Noir);
        assert_eq!(state.root_class(), "noir");
    }

    #[test]
    fn test_toggle_cycles_palette() {
        let mut state = ThemeState::new(StaticPreference::light()).with_root_class("dawn");
        assert_eq!(state.toggle_theme(), UserTheme::Dark);
        assert_eq!(state.toggle_theme(), UserTheme::Noir);
        assert_eq!(state.toggle_theme(), UserTheme::Light);
        assert_eq!(state.theme(), UserTheme::Light);
    }

    #[test]
    fn test_toggle_from_unresolved_starts_after_preference() {
        let mut state = ThemeState::new(StaticPreference::dark());
        assert_eq!(state.toggle_theme(), UserTheme::Noir);
    }

    #[test]
    fn test_is_dark_theme_follows_state() {
        let mut state = ThemeState::new(StaticPreference::light());
        assert!(!state.is_dark_theme());
        state.set_theme("noir");
        assert!(state.is_dark_theme());
        state.set_theme("dawn");
        assert!(!state.is_dark_theme());
    }

    #[test]
    fn test_listeners_see_applied_themes() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let mut state = ThemeState::new(StaticPreference::dark());
        let sink = Rc::clone(&seen);
        state.on_change(move |theme| sink.borrow_mut().push(theme));

        state.set_theme("dawn");
        state.toggle_theme();
        state.set_theme("");
        state.set_theme("nope");

        assert_eq!(
            *seen.borrow(),
            vec![
                UserTheme::Dawn,
                UserTheme::Dark,
                UserTheme::Dark,
                UserTheme::Light
            ]
        );
    }

    #[test]
    fn test_editor_theme_uses_active_theme() {
        let mut state = ThemeState::new(StaticPreference::light()).with_registry(["monokai"]);
        assert_eq!(state.editor_theme("monokai"), "ace/theme/monokai");
        assert_eq!(state.editor_theme("github"), "ace/theme/chrome");
        state.set_theme("noir");
        assert_eq!(state.editor_theme("github"), "ace/theme/twilight");
    }
}
