use std::sync::{Arc, Mutex};

use crate::token::TokenStore;

/// In-memory TokenStore for testing and native builds.
///
/// Clones share the same slot, so a clone handed to a view observes
/// writes made through the original.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    token: Arc<Mutex<Option<String>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store that already holds `token`.
    pub fn with_token(token: &str) -> Self {
        let store = Self::new();
        store.save(token);
        store
    }
}

impl TokenStore for MemoryStore {
    fn load(&self) -> Option<String> {
        self.token
            .lock()
            .ok()?
            .clone()
            .filter(|t| !t.is_empty())
    }

    fn save(&self, token: &str) {
        if let Ok(mut slot) = self.token.lock() {
            *slot = Some(token.to_string());
        }
    }

    fn clear(&self) {
        if let Ok(mut slot) = self.token.lock() {
            *slot = None;
        }
    }
}
