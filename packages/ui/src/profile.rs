//! User profile page.
//!
//! Without a session token the page redirects to login before any request is
//! made. With one, it fetches `/perfil` once and shows the result.

use api::{ApiError, Backend, UserInfo};
use dioxus::prelude::*;

use crate::context::use_backend;
use crate::messages::{describe_error, LOADING, PROFILE_LOAD_FAILED};
use crate::session::{use_session, Session};

/// Result of loading the profile.
#[derive(Clone, Debug, PartialEq)]
pub enum ProfileOutcome {
    LoginRequired,
    Loaded(UserInfo),
    Failed(String),
}

fn profile_error(err: &ApiError) -> String {
    // Server answers are reported generically.
    if err.is_connection() {
        describe_error(err, PROFILE_LOAD_FAILED)
    } else {
        PROFILE_LOAD_FAILED.to_string()
    }
}

/// Load the current user's profile. Makes no request without a token.
pub async fn load_profile<B: Backend>(backend: &B, session: &Session) -> ProfileOutcome {
    let Some(token) = session.token() else {
        return ProfileOutcome::LoginRequired;
    };
    match backend.get_profile(&token).await {
        Ok(user) => ProfileOutcome::Loaded(user),
        Err(e) => {
            tracing::warn!(status = ?e.status(), "Failed to load profile: {e}");
            ProfileOutcome::Failed(profile_error(&e))
        }
    }
}

/// Clear the session token.
pub fn logout(session: &Session) {
    tracing::info!("Signing out");
    session.sign_out();
}

/// The "Minha Conta" card.
#[component]
pub fn ProfileView(
    /// Called instead of loading when there is no session token.
    on_login_required: EventHandler<()>,
    /// Called after the token was cleared.
    on_logged_out: EventHandler<()>,
    on_change_password: EventHandler<()>,
) -> Element {
    let backend = use_backend();
    let session = use_session();

    let profile = {
        let session = session.clone();
        use_resource(move || {
            let backend = backend.clone();
            let session = session.clone();
            async move {
                let outcome = load_profile(&backend, &session).await;
                if outcome == ProfileOutcome::LoginRequired {
                    on_login_required.call(());
                }
                outcome
            }
        })
    };

    let state = profile.read().clone();

    match state {
        None | Some(ProfileOutcome::LoginRequired) => rsx! {
            p { "{LOADING}" }
        },
        Some(ProfileOutcome::Failed(message)) => rsx! {
            p { class: "erro", "Erro: {message}" }
        },
        Some(ProfileOutcome::Loaded(user)) => rsx! {
            div {
                class: "perfil",
                div { class: "avatar", "{user.initial()}" }
                h2 { "Minha Conta" }
                p { strong { "Nome: " } "{user.name}" }
                p { strong { "Email: " } "{user.email}" }
                button {
                    class: "botao-alterar-senha",
                    onclick: move |_| on_change_password.call(()),
                    "Alterar Senha"
                }
                button {
                    class: "botao-sair",
                    onclick: move |_| {
                        logout(&session);
                        on_logged_out.call(());
                    },
                    "Sair"
                }
            }
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::messages::CONNECTION_ERROR;
    use crate::testing::{maria, server_error, Call, FakeBackend};
    use store::{MemoryStore, TokenStore};

    #[tokio::test]
    async fn test_no_token_redirects_without_fetching() {
        let backend = FakeBackend::new();
        let session = Session::new(MemoryStore::new());

        assert_eq!(
            load_profile(&backend, &session).await,
            ProfileOutcome::LoginRequired
        );
        assert!(backend.calls().is_empty());
    }

    #[tokio::test]
    async fn test_loaded_profile() {
        let backend = FakeBackend::new();
        let session = Session::new(MemoryStore::with_token("t1"));

        let outcome = load_profile(&backend, &session).await;
        assert_eq!(outcome, ProfileOutcome::Loaded(maria()));
        assert_eq!(backend.calls(), vec![Call::Profile("t1".to_string())]);
    }

    #[tokio::test]
    async fn test_server_failure_is_generic() {
        let backend = FakeBackend::new().with_profile_error(server_error("Token inválido"));
        let session = Session::new(MemoryStore::with_token("expired"));

        assert_eq!(
            load_profile(&backend, &session).await,
            ProfileOutcome::Failed("Falha ao obter perfil".to_string())
        );
    }

    #[tokio::test]
    async fn test_connection_failure() {
        let backend =
            FakeBackend::new().with_profile_error(ApiError::Connection("refused".to_string()));
        let session = Session::new(MemoryStore::with_token("t1"));

        assert_eq!(
            load_profile(&backend, &session).await,
            ProfileOutcome::Failed(CONNECTION_ERROR.to_string())
        );
    }

    #[test]
    fn test_logout_clears_token() {
        let store = MemoryStore::with_token("t1");
        let session = Session::new(store.clone());
        logout(&session);
        assert!(!session.is_logged_in());
        assert!(store.load().is_none());
    }
}
