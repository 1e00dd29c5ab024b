//! Browser-side adapters: the `<html>` element and `prefers-color-scheme`

use web_sys::Element;

use crate::theme::{ColorSchemePreference, UiRoot};

const DARK_SCHEME_QUERY: &str = "(prefers-color-scheme: dark)";

/// Reads the platform preference through `window.matchMedia`.
///
/// A missing window or a failed query counts as "not dark".
#[derive(Debug, Clone, Copy, Default)]
pub struct MediaQueryPreference;

impl ColorSchemePreference for MediaQueryPreference {
    fn prefers_dark(&self) -> bool {
        web_sys::window()
            .and_then(|w| w.match_media(DARK_SCHEME_QUERY).ok().flatten())
            .is_some_and(|mql| mql.matches())
    }
}

/// Handle to `document.documentElement`
#[derive(Debug, Clone)]
pub struct DocumentRoot {
    element: Element,
}

impl DocumentRoot {
    /// The current document's root element, if running in a page
    pub fn current() -> Option<Self> {
        let element = web_sys::window()?.document()?.document_element()?;
        Some(Self { element })
    }
}

impl UiRoot for DocumentRoot {
    fn class_name(&self) -> String {
        self.element.class_name()
    }

    fn set_class_name(&self, class_name: &str) {
        self.element.set_class_name(class_name);
    }
}
