//! # API crate — typed client for the ECOmida recipe backend
//!
//! The backend is an external REST service (default `http://localhost:5000`).
//! This crate describes its contract in Rust: the [`Backend`] trait lists every
//! call the web client makes, [`ApiClient`] implements it over HTTP, and
//! [`models`] holds the request/response types.
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`client`] | `reqwest`-based [`ApiClient`] |
//! | [`error`] | [`ApiError`]: connection failure vs. server-reported failure |
//! | [`models`] | `Recipe`, `NewRecipe`, `UserInfo` and the account request bodies |
//!
//! ## Endpoints
//!
//! | Method | Path | Auth | Trait method |
//! |--------|------|------|--------------|
//! | `GET` | `/receitas?busca=` | — | [`Backend::list_recipes`] |
//! | `GET` | `/receitas/<id>` | — | [`Backend::get_recipe`] |
//! | `POST` | `/receitas` | bearer | [`Backend::create_recipe`] |
//! | `GET` | `/perfil` | bearer | [`Backend::get_profile`] |
//! | `POST` | `/login` | — | [`Backend::login`] |
//! | `POST` | `/cadastro` | — | [`Backend::register`] |
//! | `POST` | `/alterar-senha` | bearer | [`Backend::change_password`] |

pub mod client;
pub mod error;
pub mod models;

pub use client::ApiClient;
pub use error::ApiError;
pub use models::{
    Category, ChangePassword, CreatedRecipe, Credentials, Difficulty, LoginSession, NewRecipe,
    Recipe, RecipeQuery, Registration, UserInfo,
};

/// Async interface to the recipe backend.
///
/// Authorized calls take the bearer token explicitly; callers are expected to
/// have checked for a session before calling them.
pub trait Backend {
    /// `GET /receitas`, filtered by `query`.
    async fn list_recipes(&self, query: &RecipeQuery) -> Result<Vec<Recipe>, ApiError>;

    /// `GET /receitas/<id>`.
    async fn get_recipe(&self, id: &str) -> Result<Recipe, ApiError>;

    /// `POST /receitas` with `Authorization: Bearer <token>`.
    async fn create_recipe(&self, token: &str, recipe: &NewRecipe)
        -> Result<CreatedRecipe, ApiError>;

    /// `GET /perfil` with `Authorization: Bearer <token>`.
    async fn get_profile(&self, token: &str) -> Result<UserInfo, ApiError>;

    /// `POST /login`. The returned session carries the bearer token.
    async fn login(&self, credentials: &Credentials) -> Result<LoginSession, ApiError>;

    /// `POST /cadastro`. Returns the server's confirmation message.
    async fn register(&self, registration: &Registration) -> Result<Option<String>, ApiError>;

    /// `POST /alterar-senha` with `Authorization: Bearer <token>`.
    async fn change_password(
        &self,
        token: &str,
        change: &ChangePassword,
    ) -> Result<Option<String>, ApiError>;
}
