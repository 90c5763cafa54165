//! Root context for the application.
//!
//! [`AppProvider`] builds the values every page reads: the [`SiteConfig`],
//! the [`Session`], the [`ApiClient`] and the cross-page [`Notice`]. Pages get
//! them back with [`use_site_config`], [`use_session`](crate::use_session),
//! [`use_backend`] and [`use_notice`](crate::use_notice).

use api::ApiClient;
use dioxus::prelude::*;
use store::{SiteConfig, TokenStore};

use crate::notice::Notice;
use crate::session::Session;

/// Create a platform-appropriate token store.
///
/// - **Web** (WASM + `web` feature): `window.localStorage` under `storage_key`
/// - **Native** (tests, tooling): process memory
pub fn make_token_store(storage_key: &str) -> impl TokenStore {
    #[cfg(all(target_arch = "wasm32", feature = "web"))]
    {
        store::LocalStorageStore::with_key(storage_key)
    }
    #[cfg(not(all(target_arch = "wasm32", feature = "web")))]
    {
        let _ = storage_key;
        store::MemoryStore::new()
    }
}

/// Get the backend client.
pub fn use_backend() -> ApiClient {
    use_context::<ApiClient>()
}

pub fn use_site_config() -> SiteConfig {
    use_context::<SiteConfig>()
}

/// Provider component for config, session and backend client.
/// Wrap the router with this component.
#[component]
pub fn AppProvider(config: SiteConfig, children: Element) -> Element {
    use_context_provider(|| Session::new(make_token_store(&config.session.storage_key)));
    use_context_provider(|| ApiClient::new(&config.api.base_url));
    use_context_provider(Notice::new);
    use_context_provider(|| config);

    rsx! {
        {children}
    }
}
