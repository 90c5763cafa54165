//! # User and account models
//!
//! [`UserInfo`] is the read-only profile returned by `GET /perfil` and inside
//! the login response. The remaining types are request bodies for the account
//! endpoints (`/login`, `/cadastro`, `/alterar-senha`) and the login response
//! itself.

use serde::{Deserialize, Serialize};

/// User information returned by the backend.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UserInfo {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(rename = "nome")]
    pub name: String,
    pub email: String,
    #[serde(rename = "data_cadastro", default)]
    pub registered_at: Option<String>,
}

impl UserInfo {
    /// Uppercased first letter of the name, used as the avatar.
    pub fn initial(&self) -> String {
        self.name
            .chars()
            .next()
            .map(|c| c.to_uppercase().collect())
            .unwrap_or_default()
    }
}

/// Body of `POST /login`.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Credentials {
    pub email: String,
    #[serde(rename = "senha")]
    pub password: String,
}

/// Successful `POST /login` response.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct LoginSession {
    pub token: String,
    #[serde(rename = "usuario", default)]
    pub user: Option<UserInfo>,
    #[serde(rename = "mensagem", default)]
    pub message: Option<String>,
}

/// Body of `POST /cadastro`.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Registration {
    #[serde(rename = "nome")]
    pub name: String,
    pub email: String,
    #[serde(rename = "senha")]
    pub password: String,
    #[serde(rename = "confirmar")]
    pub confirmation: String,
}

/// Body of `POST /alterar-senha`.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ChangePassword {
    #[serde(rename = "senha_atual")]
    pub current_password: String,
    #[serde(rename = "nova_senha")]
    pub new_password: String,
    #[serde(rename = "confirmar_senha")]
    pub confirmation: String,
}
