//! # Account forms
//!
//! | Form | Endpoint | Client checks | On success |
//! |------|----------|---------------|------------|
//! | [`LoginForm`] | `POST /login` | both fields filled | token stored, `on_signed_in` |
//! | [`RegisterForm`] | `POST /cadastro` | all filled, passwords match | message posted to the [`Notice`], `on_registered` |
//! | [`ChangePasswordForm`] | `POST /alterar-senha` | token present, all filled, passwords match | message, fields cleared |
//!
//! Each form is a thin shell over an async workflow ([`sign_in`],
//! [`register`], [`change_password`]) that returns an [`AccountOutcome`].
//! Client checks run before any request is made.
//!
//! Registration navigates away on success, so its message travels through the
//! [`Notice`] and is shown by the [`LoginForm`] that mounts next.

use api::{Backend, ChangePassword, Credentials, Registration};
use dioxus::prelude::*;

use crate::context::use_backend;
use crate::messages::{
    describe_error, FILL_ALL_FIELDS, LOGIN_FAILED, PASSWORDS_DO_NOT_MATCH, PASSWORD_CHANGED,
    PASSWORD_CHANGE_FAILED, REGISTERED, REGISTER_FAILED,
};
use crate::notice::{use_notice, Notice};
use crate::session::{use_session, Session};

/// Result of submitting an account form.
#[derive(Clone, Debug, PartialEq)]
pub enum AccountOutcome {
    /// A client check failed; nothing was sent.
    Invalid(&'static str),
    /// No session token; nothing was sent.
    LoginRequired,
    Done(String),
    Failed(String),
}

impl AccountOutcome {
    pub fn is_done(&self) -> bool {
        matches!(self, AccountOutcome::Done(_))
    }

    /// Text for the form's message line, if any.
    pub fn message(&self) -> Option<String> {
        match self {
            AccountOutcome::Invalid(message) => Some(message.to_string()),
            AccountOutcome::LoginRequired => None,
            AccountOutcome::Done(message) | AccountOutcome::Failed(message) => {
                Some(message.clone())
            }
        }
    }
}

fn all_filled(values: &[&str]) -> bool {
    values.iter().all(|v| !v.trim().is_empty())
}

/// Log in and store the returned token.
pub async fn sign_in<B: Backend>(
    backend: &B,
    session: &Session,
    credentials: &Credentials,
) -> AccountOutcome {
    if !all_filled(&[&credentials.email, &credentials.password]) {
        return AccountOutcome::Invalid(FILL_ALL_FIELDS);
    }
    match backend.login(credentials).await {
        Ok(login) => {
            session.sign_in(&login.token);
            tracing::info!("Signed in");
            AccountOutcome::Done(login.message.unwrap_or_default())
        }
        Err(e) => {
            tracing::warn!("Login failed: {e}");
            AccountOutcome::Failed(describe_error(&e, LOGIN_FAILED))
        }
    }
}

/// Create an account.
pub async fn register<B: Backend>(backend: &B, registration: &Registration) -> AccountOutcome {
    if !all_filled(&[
        &registration.name,
        &registration.email,
        &registration.password,
        &registration.confirmation,
    ]) {
        return AccountOutcome::Invalid(FILL_ALL_FIELDS);
    }
    if registration.password != registration.confirmation {
        return AccountOutcome::Invalid(PASSWORDS_DO_NOT_MATCH);
    }
    match backend.register(registration).await {
        Ok(message) => AccountOutcome::Done(message.unwrap_or_else(|| REGISTERED.to_string())),
        Err(e) => {
            tracing::warn!("Registration failed: {e}");
            AccountOutcome::Failed(describe_error(&e, REGISTER_FAILED))
        }
    }
}

/// [`register`], then post the success message for the next page.
pub async fn register_and_notify<B: Backend>(
    backend: &B,
    registration: &Registration,
    notice: &Notice,
) -> AccountOutcome {
    let outcome = register(backend, registration).await;
    if let AccountOutcome::Done(message) = &outcome {
        notice.post(message.clone());
    }
    outcome
}

/// Change the password of the signed-in user.
pub async fn change_password<B: Backend>(
    backend: &B,
    session: &Session,
    change: &ChangePassword,
) -> AccountOutcome {
    let Some(token) = session.token() else {
        return AccountOutcome::LoginRequired;
    };
    if !all_filled(&[
        &change.current_password,
        &change.new_password,
        &change.confirmation,
    ]) {
        return AccountOutcome::Invalid(FILL_ALL_FIELDS);
    }
    if change.new_password != change.confirmation {
        return AccountOutcome::Invalid(PASSWORDS_DO_NOT_MATCH);
    }
    match backend.change_password(&token, change).await {
        Ok(message) => {
            AccountOutcome::Done(message.unwrap_or_else(|| PASSWORD_CHANGED.to_string()))
        }
        Err(e) => {
            tracing::warn!("Password change failed: {e}");
            AccountOutcome::Failed(describe_error(&e, PASSWORD_CHANGE_FAILED))
        }
    }
}

#[component]
pub fn LoginForm(on_signed_in: EventHandler<()>) -> Element {
    let backend = use_backend();
    let session = use_session();
    let notice = use_notice();
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut message = use_signal(move || notice.take());
    let mut busy = use_signal(|| false);

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        let backend = backend.clone();
        let session = session.clone();
        spawn(async move {
            busy.set(true);
            let credentials = Credentials {
                email: email(),
                password: password(),
            };
            let outcome = sign_in(&backend, &session, &credentials).await;
            busy.set(false);
            if outcome.is_done() {
                on_signed_in.call(());
            } else {
                message.set(outcome.message());
            }
        });
    };

    rsx! {
        form {
            class: "form-conta",
            onsubmit: handle_submit,
            h2 { "Entrar" }
            label {
                "Email:"
                input {
                    r#type: "email",
                    value: "{email}",
                    oninput: move |evt: FormEvent| email.set(evt.value()),
                }
            }
            label {
                "Senha:"
                input {
                    r#type: "password",
                    value: "{password}",
                    oninput: move |evt: FormEvent| password.set(evt.value()),
                }
            }
            button { r#type: "submit", disabled: busy(), "Entrar" }
            if let Some(text) = message() {
                p { class: "mensagem", "{text}" }
            }
        }
    }
}

#[component]
pub fn RegisterForm(on_registered: EventHandler<()>) -> Element {
    let backend = use_backend();
    let notice = use_notice();
    let mut name = use_signal(String::new);
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut confirmation = use_signal(String::new);
    let mut message = use_signal(|| Option::<String>::None);
    let mut busy = use_signal(|| false);

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        let backend = backend.clone();
        let notice = notice.clone();
        spawn(async move {
            busy.set(true);
            let registration = Registration {
                name: name(),
                email: email(),
                password: password(),
                confirmation: confirmation(),
            };
            let outcome = register_and_notify(&backend, &registration, &notice).await;
            busy.set(false);
            if outcome.is_done() {
                on_registered.call(());
            } else {
                message.set(outcome.message());
            }
        });
    };

    rsx! {
        form {
            class: "form-conta",
            onsubmit: handle_submit,
            h2 { "Cadastro" }
            label {
                "Nome:"
                input {
                    r#type: "text",
                    value: "{name}",
                    oninput: move |evt: FormEvent| name.set(evt.value()),
                }
            }
            label {
                "Email:"
                input {
                    r#type: "email",
                    value: "{email}",
                    oninput: move |evt: FormEvent| email.set(evt.value()),
                }
            }
            label {
                "Senha:"
                input {
                    r#type: "password",
                    value: "{password}",
                    oninput: move |evt: FormEvent| password.set(evt.value()),
                }
            }
            label {
                "Confirmar Senha:"
                input {
                    r#type: "password",
                    value: "{confirmation}",
                    oninput: move |evt: FormEvent| confirmation.set(evt.value()),
                }
            }
            button { r#type: "submit", disabled: busy(), "Cadastrar" }
            if let Some(text) = message() {
                p { class: "mensagem", "{text}" }
            }
        }
    }
}

#[component]
pub fn ChangePasswordForm(on_login_required: EventHandler<()>) -> Element {
    let backend = use_backend();
    let session = use_session();
    let mut current = use_signal(String::new);
    let mut new_password = use_signal(String::new);
    let mut confirmation = use_signal(String::new);
    let mut message = use_signal(|| Option::<String>::None);
    let mut busy = use_signal(|| false);

    {
        let session = session.clone();
        use_effect(move || {
            if !session.is_logged_in() {
                on_login_required.call(());
            }
        });
    }

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        let backend = backend.clone();
        let session = session.clone();
        spawn(async move {
            busy.set(true);
            let change = ChangePassword {
                current_password: current(),
                new_password: new_password(),
                confirmation: confirmation(),
            };
            let outcome = change_password(&backend, &session, &change).await;
            busy.set(false);
            match &outcome {
                AccountOutcome::LoginRequired => on_login_required.call(()),
                AccountOutcome::Done(_) => {
                    current.set(String::new());
                    new_password.set(String::new());
                    confirmation.set(String::new());
                    message.set(outcome.message());
                }
                _ => message.set(outcome.message()),
            }
        });
    };

    rsx! {
        form {
            class: "form-conta",
            onsubmit: handle_submit,
            h2 { "Alterar Senha" }
            label {
                "Senha Atual:"
                input {
                    r#type: "password",
                    value: "{current}",
                    oninput: move |evt: FormEvent| current.set(evt.value()),
                }
            }
            label {
                "Nova Senha:"
                input {
                    r#type: "password",
                    value: "{new_password}",
                    oninput: move |evt: FormEvent| new_password.set(evt.value()),
                }
            }
            label {
                "Confirmar Nova Senha:"
                input {
                    r#type: "password",
                    value: "{confirmation}",
                    oninput: move |evt: FormEvent| confirmation.set(evt.value()),
                }
            }
            button { r#type: "submit", disabled: busy(), "Alterar Senha" }
            if let Some(text) = message() {
                p { class: "mensagem", "{text}" }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::messages::CONNECTION_ERROR;
    use crate::testing::{server_error, Call, FakeBackend};
    use api::ApiError;
    use store::MemoryStore;

    fn credentials(password: &str) -> Credentials {
        Credentials {
            email: "maria@example.com".to_string(),
            password: password.to_string(),
        }
    }

    fn registration(password: &str, confirmation: &str) -> Registration {
        Registration {
            name: "Maria".to_string(),
            email: "maria@example.com".to_string(),
            password: password.to_string(),
            confirmation: confirmation.to_string(),
        }
    }

    fn change(new_password: &str, confirmation: &str) -> ChangePassword {
        ChangePassword {
            current_password: "antiga".to_string(),
            new_password: new_password.to_string(),
            confirmation: confirmation.to_string(),
        }
    }

    #[tokio::test]
    async fn test_login_stores_token() {
        let backend = FakeBackend::new();
        let session = Session::new(MemoryStore::new());

        let outcome = sign_in(&backend, &session, &credentials("segredo")).await;
        assert!(outcome.is_done());
        assert_eq!(session.token().as_deref(), Some("issued-token"));
        assert_eq!(backend.calls(), vec![Call::Login(credentials("segredo"))]);
    }

    #[tokio::test]
    async fn test_login_requires_both_fields() {
        let backend = FakeBackend::new();
        let session = Session::new(MemoryStore::new());

        let outcome = sign_in(&backend, &session, &credentials("  ")).await;
        assert_eq!(outcome, AccountOutcome::Invalid(FILL_ALL_FIELDS));
        assert!(backend.calls().is_empty());
        assert!(!session.is_logged_in());
    }

    #[tokio::test]
    async fn test_login_failure_keeps_session_empty() {
        let backend = FakeBackend::new().with_login_error(server_error("Credenciais inválidas"));
        let session = Session::new(MemoryStore::new());

        let outcome = sign_in(&backend, &session, &credentials("errada")).await;
        assert_eq!(
            outcome.message().as_deref(),
            Some("Credenciais inválidas")
        );
        assert!(!session.is_logged_in());
    }

    #[tokio::test]
    async fn test_register_checks_confirmation_before_sending() {
        let backend = FakeBackend::new();

        let outcome = register(&backend, &registration("123456", "654321")).await;
        assert_eq!(outcome, AccountOutcome::Invalid(PASSWORDS_DO_NOT_MATCH));
        assert!(backend.calls().is_empty());

        let outcome = register(&backend, &registration("", "")).await;
        assert_eq!(outcome, AccountOutcome::Invalid(FILL_ALL_FIELDS));
        assert!(backend.calls().is_empty());
    }

    #[tokio::test]
    async fn test_register_messages() {
        let backend = FakeBackend::new()
            .with_message(Ok(Some("Usuário cadastrado com sucesso!".to_string())));
        let outcome = register(&backend, &registration("123456", "123456")).await;
        assert_eq!(
            outcome,
            AccountOutcome::Done("Usuário cadastrado com sucesso!".to_string())
        );

        let backend = FakeBackend::new();
        let outcome = register(&backend, &registration("123456", "123456")).await;
        assert_eq!(outcome, AccountOutcome::Done(REGISTERED.to_string()));

        let backend = FakeBackend::new().with_message(Err(server_error("Email já cadastrado")));
        let outcome = register(&backend, &registration("123456", "123456")).await;
        assert_eq!(
            outcome,
            AccountOutcome::Failed("Email já cadastrado".to_string())
        );
    }

    #[tokio::test]
    async fn test_registration_message_reaches_next_page() {
        let backend = FakeBackend::new()
            .with_message(Ok(Some("Usuário cadastrado com sucesso!".to_string())));
        let notice = Notice::new();

        let outcome =
            register_and_notify(&backend, &registration("123456", "123456"), &notice).await;
        assert!(outcome.is_done());
        assert_eq!(
            notice.take().as_deref(),
            Some("Usuário cadastrado com sucesso!")
        );
        assert_eq!(notice.take(), None);
    }

    #[tokio::test]
    async fn test_failed_registration_posts_nothing() {
        let notice = Notice::new();

        let backend = FakeBackend::new();
        let outcome =
            register_and_notify(&backend, &registration("123456", "654321"), &notice).await;
        assert_eq!(outcome, AccountOutcome::Invalid(PASSWORDS_DO_NOT_MATCH));
        assert_eq!(notice.take(), None);

        let backend = FakeBackend::new().with_message(Err(server_error("Email já cadastrado")));
        let outcome =
            register_and_notify(&backend, &registration("123456", "123456"), &notice).await;
        assert_eq!(
            outcome.message().as_deref(),
            Some("Email já cadastrado")
        );
        assert_eq!(notice.take(), None);
    }

    #[tokio::test]
    async fn test_change_password_without_token_sends_nothing() {
        let backend = FakeBackend::new();
        let session = Session::new(MemoryStore::new());

        let outcome = change_password(&backend, &session, &change("nova", "nova")).await;
        assert_eq!(outcome, AccountOutcome::LoginRequired);
        assert_eq!(outcome.message(), None);
        assert!(backend.calls().is_empty());
    }

    #[tokio::test]
    async fn test_change_password_checks_confirmation() {
        let backend = FakeBackend::new();
        let session = Session::new(MemoryStore::with_token("t1"));

        let outcome = change_password(&backend, &session, &change("nova", "outra")).await;
        assert_eq!(outcome, AccountOutcome::Invalid(PASSWORDS_DO_NOT_MATCH));
        assert!(backend.calls().is_empty());
    }

    #[tokio::test]
    async fn test_change_password_sends_token() {
        let backend = FakeBackend::new();
        let session = Session::new(MemoryStore::with_token("t1"));

        let outcome = change_password(&backend, &session, &change("nova", "nova")).await;
        assert_eq!(outcome, AccountOutcome::Done(PASSWORD_CHANGED.to_string()));
        assert_eq!(
            backend.calls(),
            vec![Call::ChangePassword {
                token: "t1".to_string(),
                change: change("nova", "nova"),
            }]
        );
    }

    #[tokio::test]
    async fn test_change_password_connection_error() {
        let backend =
            FakeBackend::new().with_message(Err(ApiError::Connection("reset".to_string())));
        let session = Session::new(MemoryStore::with_token("t1"));

        let outcome = change_password(&backend, &session, &change("nova", "nova")).await;
        assert_eq!(outcome, AccountOutcome::Failed(CONNECTION_ERROR.to_string()));
    }
}
