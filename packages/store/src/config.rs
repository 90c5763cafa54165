//! # Site configuration — `site.toml`
//!
//! Defines the TOML document the web package embeds at build time
//! (filename: [`SiteConfig::filename`] = `"site.toml"`). It tells the client
//! where the backend lives, how long the recipe search waits for typing to
//! settle, and which `localStorage` key holds the session token.
//!
//! ## Structure
//!
//! ```toml
//! [api]
//! base_url = "http://localhost:5000"
//!
//! [search]
//! debounce_ms = 500
//!
//! [session]
//! storage_key = "token"
//! ```
//!
//! Every section derives `Default`, so a missing or empty file is the same as
//! the default configuration.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Top-level configuration stored in `site.toml`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SiteConfig {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub search: SearchConfig,
    #[serde(default)]
    pub session: SessionConfig,
}

/// Backend location.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Base URL of the REST backend, without a trailing slash.
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

fn default_base_url() -> String {
    "http://localhost:5000".to_string()
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
        }
    }
}

/// Recipe search behaviour.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Quiet period after the last keystroke before a search is sent.
    #[serde(default = "default_debounce_ms")]
    pub debounce_ms: u64,
}

fn default_debounce_ms() -> u64 {
    500
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            debounce_ms: default_debounce_ms(),
        }
    }
}

impl SearchConfig {
    pub fn debounce(&self) -> Duration {
        Duration::from_millis(self.debounce_ms)
    }
}

/// Session token persistence.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SessionConfig {
    /// `localStorage` key holding the bearer token.
    #[serde(default = "default_storage_key")]
    pub storage_key: String,
}

fn default_storage_key() -> String {
    "token".to_string()
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            storage_key: default_storage_key(),
        }
    }
}

impl SiteConfig {
    /// Create a config pointing at the given backend.
    pub fn new(base_url: String) -> Self {
        Self {
            api: ApiConfig { base_url },
            ..Self::default()
        }
    }

    /// Builder method to set the search debounce.
    pub fn with_debounce_ms(mut self, ms: u64) -> Self {
        self.search.debounce_ms = ms;
        self
    }

    /// The well-known filename for the config file.
    pub fn filename() -> &'static str {
        "site.toml"
    }

    /// Parse from TOML string.
    pub fn from_toml(s: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(s)
    }

    /// Serialize to TOML string.
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }
}
