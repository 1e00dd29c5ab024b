//! WASM browser build module
//!
//! Binds a [`ThemeState`] to the page. `<html>` is the state's root: its class
//! is read on every query and applied themes are written back to it. The
//! platform preference comes from `matchMedia`. The exported names match what
//! the front-end's scripts call (`getTheme`, `setTheme`, `toggleTheme`, ...).

pub mod document;

use wasm_bindgen::prelude::*;

use crate::config::ThemeConfig;
use crate::theme::{is_dark_class, media_preference, resolve_theme_class, ThemeState, ACE_THEMES};
use document::{DocumentRoot, MediaQueryPreference};

/// WASM-exported theme handle
#[wasm_bindgen]
pub struct WasmThemeController {
    state: ThemeState,
}

impl WasmThemeController {
    fn with_state(state: ThemeState) -> Self {
        console_error_panic_hook::set_once();

        let state = match DocumentRoot::current() {
            Some(root) => state.with_root(root),
            None => {
                tracing::warn!("No document root, theme changes will not be rendered");
                state
            }
        };
        Self { state }
    }
}

#[wasm_bindgen]
impl WasmThemeController {
    /// Create a controller with an optional statically configured initial theme
    #[wasm_bindgen(constructor)]
    pub fn new(initial_theme: Option<String>) -> Self {
        let mut state = ThemeState::new(MediaQueryPreference);
        if let Some(initial) = initial_theme {
            state = state.with_initial_theme(initial);
        }
        Self::with_state(state)
    }

    /// Create a controller from a JSON config string
    #[wasm_bindgen(js_name = fromConfig)]
    pub fn from_config(json: &str) -> Result<WasmThemeController, JsValue> {
        let config = ThemeConfig::from_json(json).map_err(|e| JsValue::from_str(&e.to_string()))?;
        Ok(Self::with_state(ThemeState::from_config(
            &config,
            MediaQueryPreference,
        )))
    }

    #[wasm_bindgen(js_name = getTheme)]
    pub fn get_theme(&self) -> String {
        self.state.theme().to_string()
    }

    /// Apply a theme; `undefined`, `null` and "" apply the platform preference
    #[wasm_bindgen(js_name = setTheme)]
    pub fn set_theme(&mut self, value: Option<String>) {
        self.state.set_theme(value.as_deref().unwrap_or_default());
    }

    #[wasm_bindgen(js_name = toggleTheme)]
    pub fn toggle_theme(&mut self) {
        self.state.toggle_theme();
    }

    /// Whether `value` (or the active theme when omitted) is dark-family.
    /// An explicit value must be an exact theme name.
    #[wasm_bindgen(js_name = isDarkTheme)]
    pub fn is_dark_theme(&self, value: Option<String>) -> bool {
        match value {
            Some(value) => is_dark_class(&value),
            None => self.state.is_dark_theme(),
        }
    }

    #[wasm_bindgen(js_name = getEditorTheme)]
    pub fn get_editor_theme(&self, theme_name: &str) -> String {
        self.state.editor_theme(theme_name)
    }

    /// Editor theme for the config's `editor_theme`, or the active theme's fallback
    #[wasm_bindgen(js_name = getConfiguredEditorTheme)]
    pub fn get_configured_editor_theme(&self) -> String {
        self.state.configured_editor_theme()
    }
}

/// Classify a raw class name; returns "" when it is not a supported theme
#[wasm_bindgen(js_name = resolveThemeClass)]
pub fn resolve_theme_class_js(value: Option<String>) -> String {
    value
        .as_deref()
        .and_then(resolve_theme_class)
        .map(|t| t.to_string())
        .unwrap_or_default()
}

/// "dark" or "light", following `prefers-color-scheme`
#[wasm_bindgen(js_name = getMediaPreference)]
pub fn get_media_preference() -> String {
    media_preference(&MediaQueryPreference).to_string()
}

/// Keys of the editor themes bundled with the front-end
#[wasm_bindgen(js_name = editorThemes)]
pub fn editor_themes() -> js_sys::Array {
    ACE_THEMES
        .iter()
        .map(|t| JsValue::from_str(t.name))
        .collect()
}
