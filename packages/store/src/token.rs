//! # Session token persistence
//!
//! The web client keeps exactly one piece of durable state: the bearer token
//! handed out by the backend's `/login` endpoint. [`TokenStore`] is the seam
//! between the UI's session context and wherever that token physically lives.
//!
//! | Implementation | Used by |
//! |----------------|---------|
//! | [`crate::MemoryStore`] | tests and native builds |
//! | `LocalStorageStore` | the browser (`wasm32` + `web` feature), backed by `window.localStorage` |
//!
//! Reads and writes are single-value operations on the UI thread, so the
//! trait is synchronous and takes `&self`.

/// Storage for the single session token.
pub trait TokenStore {
    /// Return the stored token, if any. An empty stored value counts as absent.
    fn load(&self) -> Option<String>;

    /// Persist `token`, replacing any previous value.
    fn save(&self, token: &str);

    /// Remove the stored token.
    fn clear(&self);
}
