//! The UI root whose class name carries the applied theme

use std::cell::RefCell;
use std::rc::Rc;

/// Element whose class attribute holds the applied theme.
///
/// `ThemeState` reads it on every query, so a class written by someone else
/// (server markup, another script) is picked up immediately.
pub trait UiRoot {
    fn class_name(&self) -> String;
    fn set_class_name(&self, class_name: &str);
}

/// In-memory root for native hosts and tests.
///
/// Clones share the same class, so a test can keep a handle and change the
/// class behind the state's back.
#[derive(Debug, Clone, Default)]
pub struct MemoryRoot {
    class_name: Rc<RefCell<String>>,
}

impl MemoryRoot {
    pub fn new(class_name: impl Into<String>) -> Self {
        Self {
            class_name: Rc::new(RefCell::new(class_name.into())),
        }
    }
}

impl UiRoot for MemoryRoot {
    fn class_name(&self) -> String {
        self.class_name.borrow().clone()
    }

    fn set_class_name(&self, class_name: &str) {
        *self.class_name.borrow_mut() = class_name.to_string();
    }
}
