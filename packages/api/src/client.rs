//! # REST client for the recipe backend
//!
//! [`ApiClient`] implements [`Backend`] over HTTP with `reqwest`, which uses
//! the browser's `fetch` on `wasm32` and hyper on native targets (tests).
//!
//! Every response goes through [`read_json`]: a success status decodes the
//! expected envelope, anything else becomes [`ApiError::Server`] carrying the
//! body's `erro` field when the server sent one. Transport failures and
//! undecodable success bodies become [`ApiError::Connection`].

use serde::de::DeserializeOwned;
use serde::Deserialize;

use crate::error::ApiError;
use crate::models::{
    ChangePassword, CreatedRecipe, Credentials, LoginSession, NewRecipe, Recipe, RecipeQuery,
    Registration, UserInfo,
};
use crate::Backend;

/// HTTP implementation of [`Backend`].
///
/// Cheap to clone; clones share the underlying connection pool.
#[derive(Clone, Debug)]
pub struct ApiClient {
    base_url: String,
    http: reqwest::Client,
}

impl ApiClient {
    /// Create a client for the backend at `base_url` (trailing slashes are ignored).
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            http: reqwest::Client::new(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

#[derive(Deserialize)]
struct RecipeList {
    receitas: Vec<Recipe>,
}

#[derive(Deserialize)]
struct RecipeEnvelope {
    receita: Recipe,
}

#[derive(Deserialize)]
struct ProfileEnvelope {
    usuario: UserInfo,
}

#[derive(Deserialize)]
struct MessageBody {
    #[serde(default)]
    mensagem: Option<String>,
}

#[derive(Deserialize)]
struct ErrorBody {
    #[serde(default)]
    erro: Option<String>,
}

async fn read_json<T: DeserializeOwned>(response: reqwest::Response) -> Result<T, ApiError> {
    let status = response.status();
    if status.is_success() {
        return response.json::<T>().await.map_err(ApiError::from);
    }
    let message = response.json::<ErrorBody>().await.ok().and_then(|b| b.erro);
    tracing::debug!(status = status.as_u16(), ?message, "backend returned an error");
    Err(ApiError::Server {
        status: status.as_u16(),
        message,
    })
}

impl Backend for ApiClient {
    async fn list_recipes(&self, query: &RecipeQuery) -> Result<Vec<Recipe>, ApiError> {
        let response = self
            .http
            .get(self.url("/receitas"))
            .query(&query.params())
            .send()
            .await?;
        let list: RecipeList = read_json(response).await?;
        Ok(list.receitas)
    }

    async fn get_recipe(&self, id: &str) -> Result<Recipe, ApiError> {
        let response = self
            .http
            .get(self.url(&format!("/receitas/{id}")))
            .send()
            .await?;
        let envelope: RecipeEnvelope = read_json(response).await?;
        Ok(envelope.receita)
    }

    async fn create_recipe(
        &self,
        token: &str,
        recipe: &NewRecipe,
    ) -> Result<CreatedRecipe, ApiError> {
        let response = self
            .http
            .post(self.url("/receitas"))
            .bearer_auth(token)
            .json(recipe)
            .send()
            .await?;
        read_json(response).await
    }

    async fn get_profile(&self, token: &str) -> Result<UserInfo, ApiError> {
        let response = self
            .http
            .get(self.url("/perfil"))
            .bearer_auth(token)
            .send()
            .await?;
        let envelope: ProfileEnvelope = read_json(response).await?;
        Ok(envelope.usuario)
    }

    async fn login(&self, credentials: &Credentials) -> Result<LoginSession, ApiError> {
        let response = self
            .http
            .post(self.url("/login"))
            .json(credentials)
            .send()
            .await?;
        read_json(response).await
    }

    async fn register(&self, registration: &Registration) -> Result<Option<String>, ApiError> {
        let response = self
            .http
            .post(self.url("/cadastro"))
            .json(registration)
            .send()
            .await?;
        let body: MessageBody = read_json(response).await?;
        Ok(body.mensagem)
    }

    async fn change_password(
        &self,
        token: &str,
        change: &ChangePassword,
    ) -> Result<Option<String>, ApiError> {
        let response = self
            .http
            .post(self.url("/alterar-senha"))
            .bearer_auth(token)
            .json(change)
            .send()
            .await?;
        let body: MessageBody = read_json(response).await?;
        Ok(body.mensagem)
    }
}
