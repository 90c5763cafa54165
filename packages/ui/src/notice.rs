//! One-shot message carried across a navigation.
//!
//! A form that navigates away on success (registration → login) posts its
//! message here; the next page takes it when it mounts.

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use dioxus::prelude::*;

/// Shared slot for a single pending message. Clones share the slot.
#[derive(Clone, Default)]
pub struct Notice {
    slot: Rc<RefCell<Option<String>>>,
}

impl Notice {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace any pending message.
    pub fn post(&self, text: impl Into<String>) {
        *self.slot.borrow_mut() = Some(text.into());
    }

    /// Remove and return the pending message.
    pub fn take(&self) -> Option<String> {
        self.slot.borrow_mut().take()
    }
}

impl PartialEq for Notice {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.slot, &other.slot)
    }
}

impl fmt::Debug for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Notice")
            .field("pending", &self.slot.borrow().is_some())
            .finish()
    }
}

pub fn use_notice() -> Notice {
    use_context::<Notice>()
}
