//! Theme module - active theme selection and editor theme mapping
//!
//! This module is organized into five parts:
//!
//! - **`types`**: Pure theme types
//!   - `UserTheme` (light, dawn, dark, noir), palette order and dark set
//!   - `resolve_theme_class()` to classify a raw class name
//!
//! - **`preference`**: Platform color-scheme preference
//!   - `ColorSchemePreference` trait, `StaticPreference`
//!   - `media_preference()` mapping the preference to a theme
//!
//! - **`root`**: `UiRoot` trait for the element carrying the theme class,
//!   `MemoryRoot` for native hosts and tests
//!
//! - **`state`**: `ThemeState`, reading the root live and notifying listeners
//!   - `theme()`, `set_theme()`, `toggle_theme()`, `is_dark_theme()`
//!
//! - **`editor`**: Ace editor theme registry and fallback mapping
//!
//! # Usage
//!
//! ```ignore
//! use glasspath_theme::theme::{StaticPreference, ThemeState, UserTheme};
//!
//! let mut state = ThemeState::new(StaticPreference::dark());
//! assert_eq!(state.theme(), UserTheme::Dark);
//!
//! state.set_theme("dawn");
//! state.toggle_theme(); // dawn -> dark
//!
//! let editor = state.editor_theme("monokai"); // "ace/theme/monokai"
//! ```

mod editor;
mod preference;
mod root;
mod state;
mod types;

// Re-export all public items
pub use editor::*;
pub use preference::*;
pub use root::*;
pub use state::*;
pub use types::*;
