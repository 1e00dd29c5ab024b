//! Editor (Ace) color-scheme mapping
//!
//! The embedded code editor names its themes `ace/theme/<key>`. Which keys
//! exist is answered by an [`EditorThemeRegistry`]; [`AceThemeList`] carries
//! the themes bundled with the editor widget.

use std::collections::HashMap;

use super::types::UserTheme;

/// Namespace prefix of editor theme identifiers
pub const EDITOR_THEME_PREFIX: &str = "ace/theme/";

/// Fallback editor theme while a dark-family theme is active
pub const DARK_EDITOR_FALLBACK: &str = "ace/theme/twilight";

/// Fallback editor theme while a light theme is active
pub const LIGHT_EDITOR_FALLBACK: &str = "ace/theme/chrome";

/// Read-only lookup of available editor themes
pub trait EditorThemeRegistry {
    /// Returns true if `key` (without the `ace/theme/` prefix) is available
    fn contains(&self, key: &str) -> bool;
}

/// An editor theme shipped with the editor widget
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EditorThemeInfo {
    /// Theme key, e.g. "monokai"
    pub name: &'static str,
    /// Human-readable name, e.g. "Monokai"
    pub caption: &'static str,
    pub is_dark: bool,
}

impl EditorThemeInfo {
    const fn light(name: &'static str, caption: &'static str) -> Self {
        Self {
            name,
            caption,
            is_dark: false,
        }
    }

    const fn dark(name: &'static str, caption: &'static str) -> Self {
        Self {
            name,
            caption,
            is_dark: true,
        }
    }

    /// Namespaced identifier, e.g. "ace/theme/monokai"
    pub fn theme_path(&self) -> String {
        format!("{}{}", EDITOR_THEME_PREFIX, self.name)
    }
}

/// Themes bundled with the Ace editor build used by the front-end
pub const ACE_THEMES: &[EditorThemeInfo] = &[
    EditorThemeInfo::light("chrome", "Chrome"),
    EditorThemeInfo::light("clouds", "Clouds"),
    EditorThemeInfo::light("crimson_editor", "Crimson Editor"),
    EditorThemeInfo::light("dawn", "Dawn"),
    EditorThemeInfo::light("dreamweaver", "Dreamweaver"),
    EditorThemeInfo::light("eclipse", "Eclipse"),
    EditorThemeInfo::light("github", "GitHub"),
    EditorThemeInfo::light("iplastic", "IPlastic"),
    EditorThemeInfo::light("solarized_light", "Solarized Light"),
    EditorThemeInfo::light("textmate", "TextMate"),
    EditorThemeInfo::light("tomorrow", "Tomorrow"),
    EditorThemeInfo::light("xcode", "Xcode"),
    EditorThemeInfo::light("kuroir", "Kuroir"),
    EditorThemeInfo::light("katzenmilch", "KatzenMilch"),
    EditorThemeInfo::light("sqlserver", "SQL Server"),
    EditorThemeInfo::light("cloud_editor", "CloudEditor"),
    EditorThemeInfo::dark("ambiance", "Ambiance"),
    EditorThemeInfo::dark("chaos", "Chaos"),
    EditorThemeInfo::dark("clouds_midnight", "Clouds Midnight"),
    EditorThemeInfo::dark("dracula", "Dracula"),
    EditorThemeInfo::dark("cobalt", "Cobalt"),
    EditorThemeInfo::dark("gruvbox", "Gruvbox"),
    EditorThemeInfo::dark("gob", "Green on Black"),
    EditorThemeInfo::dark("idle_fingers", "idle Fingers"),
    EditorThemeInfo::dark("kr_theme", "krTheme"),
    EditorThemeInfo::dark("merbivore", "Merbivore"),
    EditorThemeInfo::dark("merbivore_soft", "Merbivore Soft"),
    EditorThemeInfo::dark("mono_industrial", "Mono Industrial"),
    EditorThemeInfo::dark("monokai", "Monokai"),
    EditorThemeInfo::dark("nord_dark", "Nord Dark"),
    EditorThemeInfo::dark("one_dark", "One Dark"),
    EditorThemeInfo::dark("pastel_on_dark", "Pastel on dark"),
    EditorThemeInfo::dark("solarized_dark", "Solarized Dark"),
    EditorThemeInfo::dark("terminal", "Terminal"),
    EditorThemeInfo::dark("tomorrow_night", "Tomorrow Night"),
    EditorThemeInfo::dark("tomorrow_night_blue", "Tomorrow Night Blue"),
    EditorThemeInfo::dark("tomorrow_night_bright", "Tomorrow Night Bright"),
    EditorThemeInfo::dark("tomorrow_night_eighties", "Tomorrow Night 80s"),
    EditorThemeInfo::dark("twilight", "Twilight"),
    EditorThemeInfo::dark("vibrant_ink", "Vibrant Ink"),
    EditorThemeInfo::dark("github_dark", "GitHub Dark"),
    EditorThemeInfo::dark("cloud_editor_dark", "CloudEditor Dark"),
];

/// Registry backed by [`ACE_THEMES`], indexed by key
#[derive(Debug, Clone)]
pub struct AceThemeList {
    themes_by_name: HashMap<&'static str, EditorThemeInfo>,
}

impl AceThemeList {
    pub fn new() -> Self {
        Self {
            themes_by_name: ACE_THEMES.iter().map(|t| (t.name, *t)).collect(),
        }
    }

    pub fn get(&self, key: &str) -> Option<&EditorThemeInfo> {
        self.themes_by_name.get(key)
    }

    /// All bundled themes, in bundle order
    pub fn list(&self) -> &'static [EditorThemeInfo] {
        ACE_THEMES
    }
}

impl Default for AceThemeList {
    fn default() -> Self {
        Self::new()
    }
}

impl EditorThemeRegistry for AceThemeList {
    fn contains(&self, key: &str) -> bool {
        self.themes_by_name.contains_key(key)
    }
}

impl EditorThemeRegistry for [&str] {
    fn contains(&self, key: &str) -> bool {
        self.iter().any(|k| *k == key)
    }
}

impl<const N: usize> EditorThemeRegistry for [&str; N] {
    fn contains(&self, key: &str) -> bool {
        EditorThemeRegistry::contains(self.as_slice(), key)
    }
}

/// Fallback identifiers used when the requested editor theme is unavailable
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditorFallbacks {
    pub dark: String,
    pub light: String,
}

impl Default for EditorFallbacks {
    fn default() -> Self {
        Self {
            dark: DARK_EDITOR_FALLBACK.to_string(),
            light: LIGHT_EDITOR_FALLBACK.to_string(),
        }
    }
}

impl EditorFallbacks {
    pub fn for_theme(&self, current: UserTheme) -> &str {
        if current.is_dark() {
            &self.dark
        } else {
            &self.light
        }
    }
}

/// Prefix a bare key with `ace/theme/`; already namespaced names are kept
pub fn normalize_editor_theme(theme_name: &str) -> String {
    if theme_name.starts_with(EDITOR_THEME_PREFIX) {
        theme_name.to_string()
    } else {
        format!("{}{}", EDITOR_THEME_PREFIX, theme_name)
    }
}

/// Map a requested editor theme to an identifier the editor can load.
///
/// Returns the namespaced name when its key is registered; otherwise the
/// dark fallback while `current` is dark-family, the light one otherwise.
pub fn editor_theme(
    theme_name: &str,
    registry: &dyn EditorThemeRegistry,
    current: UserTheme,
    fallbacks: &EditorFallbacks,
) -> String {
    let theme_path = normalize_editor_theme(theme_name);
    let key = &theme_path[EDITOR_THEME_PREFIX.len()..];
    if registry.contains(key) {
        return theme_path;
    }

    let fallback = fallbacks.for_theme(current);
    tracing::debug!(
        "editor theme {:?} not registered, falling back to {} for {} theme",
        theme_name,
        fallback,
        current
    );
    fallback.to_string()
}
