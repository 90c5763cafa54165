//! # `localStorage` token store — browser-side persistence
//!
//! [`LocalStorageStore`] is the [`TokenStore`] used on the **web platform**.
//! It keeps the session token under a single key of `window.localStorage`
//! (the `[session] storage_key` of `site.toml`), where the login page writes
//! it and every page that needs authorization reads it.
//!
//! ## Error handling
//!
//! All trait methods silently swallow errors (returning `None` for reads,
//! doing nothing for writes). Storage can be unavailable (private browsing,
//! disabled cookies); that degrades to "logged out" rather than crashing.

use web_sys::Storage;

use crate::token::TokenStore;

/// `window.localStorage`-backed TokenStore.
#[derive(Clone, Debug)]
pub struct LocalStorageStore {
    key: String,
}

impl LocalStorageStore {
    /// Create a store reading and writing `key`.
    pub fn with_key(key: &str) -> Self {
        Self {
            key: key.to_string(),
        }
    }

    fn storage(&self) -> Option<Storage> {
        web_sys::window()?.local_storage().ok()?
    }
}

impl TokenStore for LocalStorageStore {
    fn load(&self) -> Option<String> {
        self.storage()?
            .get_item(&self.key)
            .ok()?
            .filter(|t| !t.is_empty())
    }

    fn save(&self, token: &str) {
        if let Some(storage) = self.storage() {
            let _ = storage.set_item(&self.key, token);
        }
    }

    fn clear(&self) {
        if let Some(storage) = self.storage() {
            let _ = storage.remove_item(&self.key);
        }
    }
}
