//! The session context: the one bearer token shared by every page.

use std::fmt;
use std::rc::Rc;

use dioxus::prelude::*;
use store::TokenStore;

/// Handle to the stored session token.
///
/// Cheap to clone; clones share the same underlying [`TokenStore`]. Provided
/// once at the root by [`crate::AppProvider`] and read with [`use_session`].
#[derive(Clone)]
pub struct Session {
    store: Rc<dyn TokenStore>,
}

impl Session {
    pub fn new(store: impl TokenStore + 'static) -> Self {
        Self {
            store: Rc::new(store),
        }
    }

    /// The current bearer token, if logged in.
    pub fn token(&self) -> Option<String> {
        self.store.load()
    }

    pub fn is_logged_in(&self) -> bool {
        self.token().is_some()
    }

    /// Store the token returned by a successful login.
    pub fn sign_in(&self, token: &str) {
        self.store.save(token);
    }

    /// Forget the token.
    pub fn sign_out(&self) {
        self.store.clear();
    }
}

impl PartialEq for Session {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.store, &other.store)
    }
}

impl fmt::Debug for Session {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Session")
            .field("logged_in", &self.is_logged_in())
            .finish()
    }
}

/// Get the session provided by [`crate::AppProvider`].
pub fn use_session() -> Session {
    use_context::<Session>()
}
