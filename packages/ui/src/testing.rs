//! Recording fake of [`Backend`] for workflow tests.

use std::sync::Mutex;
use std::time::Duration;

use api::{
    ApiError, Backend, ChangePassword, CreatedRecipe, Credentials, LoginSession, NewRecipe, Recipe,
    RecipeQuery, Registration, UserInfo,
};

use crate::debounce::sleep;

#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    List(RecipeQuery),
    Get(String),
    Create { token: String, recipe: NewRecipe },
    Profile(String),
    Login(Credentials),
    Register(Registration),
    ChangePassword { token: String, change: ChangePassword },
}

pub fn recipe(id: &str, title: &str) -> Recipe {
    Recipe {
        id: id.to_string(),
        title: title.to_string(),
        ingredients: "ingrediente".to_string(),
        preparation_steps: "passo".to_string(),
        category: "Sobremesa".to_string(),
        description: None,
        preparation_time: None,
        servings: None,
        difficulty: Some("média".to_string()),
        author_name: None,
        created_at: None,
    }
}

pub fn maria() -> UserInfo {
    UserInfo {
        id: Some("u1".to_string()),
        name: "Maria".to_string(),
        email: "maria@example.com".to_string(),
        registered_at: None,
    }
}

pub fn server_error(message: &str) -> ApiError {
    ApiError::Server {
        status: 400,
        message: Some(message.to_string()),
    }
}

pub struct FakeBackend {
    calls: Mutex<Vec<Call>>,
    recipes: Mutex<Result<Vec<Recipe>, ApiError>>,
    list_delays: Mutex<Vec<(String, Duration)>>,
    detail: Mutex<Result<Recipe, ApiError>>,
    created: Mutex<Result<CreatedRecipe, ApiError>>,
    profile: Mutex<Result<UserInfo, ApiError>>,
    login: Mutex<Result<LoginSession, ApiError>>,
    message: Mutex<Result<Option<String>, ApiError>>,
}

impl FakeBackend {
    pub fn new() -> Self {
        Self {
            calls: Mutex::new(Vec::new()),
            recipes: Mutex::new(Ok(Vec::new())),
            list_delays: Mutex::new(Vec::new()),
            detail: Mutex::new(Ok(recipe("1", "Bolo"))),
            created: Mutex::new(Ok(CreatedRecipe {
                message: Some("Receita criada com sucesso!".to_string()),
                id: Some("new".to_string()),
            })),
            profile: Mutex::new(Ok(maria())),
            login: Mutex::new(Ok(LoginSession {
                token: "issued-token".to_string(),
                user: Some(maria()),
                message: None,
            })),
            message: Mutex::new(Ok(None)),
        }
    }

    pub fn with_recipes(self, recipes: Vec<Recipe>) -> Self {
        *self.recipes.lock().unwrap() = Ok(recipes);
        self
    }

    pub fn with_list_error(self, err: ApiError) -> Self {
        *self.recipes.lock().unwrap() = Err(err);
        self
    }

    /// Delay the reply to a search for `text`.
    pub fn with_list_delay(self, text: &str, delay: Duration) -> Self {
        self.list_delays.lock().unwrap().push((text.to_string(), delay));
        self
    }

    pub fn with_detail(self, result: Result<Recipe, ApiError>) -> Self {
        *self.detail.lock().unwrap() = result;
        self
    }

    pub fn with_create_error(self, err: ApiError) -> Self {
        *self.created.lock().unwrap() = Err(err);
        self
    }

    pub fn with_profile_error(self, err: ApiError) -> Self {
        *self.profile.lock().unwrap() = Err(err);
        self
    }

    pub fn with_login_error(self, err: ApiError) -> Self {
        *self.login.lock().unwrap() = Err(err);
        self
    }

    pub fn with_message(self, result: Result<Option<String>, ApiError>) -> Self {
        *self.message.lock().unwrap() = result;
        self
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, call: Call) {
        self.calls.lock().unwrap().push(call);
    }
}

impl Backend for FakeBackend {
    async fn list_recipes(&self, query: &RecipeQuery) -> Result<Vec<Recipe>, ApiError> {
        self.record(Call::List(query.clone()));
        let text = query.search.clone().unwrap_or_default();
        let delay = self
            .list_delays
            .lock()
            .unwrap()
            .iter()
            .find(|(t, _)| *t == text)
            .map(|(_, d)| *d);
        if let Some(delay) = delay {
            sleep(delay).await;
        }
        let recipes = self.recipes.lock().unwrap().clone()?;
        Ok(recipes
            .into_iter()
            .filter(|r| r.title.to_lowercase().contains(&text.to_lowercase()))
            .collect())
    }

    async fn get_recipe(&self, id: &str) -> Result<Recipe, ApiError> {
        self.record(Call::Get(id.to_string()));
        self.detail.lock().unwrap().clone()
    }

    async fn create_recipe(
        &self,
        token: &str,
        recipe: &NewRecipe,
    ) -> Result<CreatedRecipe, ApiError> {
        self.record(Call::Create {
            token: token.to_string(),
            recipe: recipe.clone(),
        });
        self.created.lock().unwrap().clone()
    }

    async fn get_profile(&self, token: &str) -> Result<UserInfo, ApiError> {
        self.record(Call::Profile(token.to_string()));
        self.profile.lock().unwrap().clone()
    }

    async fn login(&self, credentials: &Credentials) -> Result<LoginSession, ApiError> {
        self.record(Call::Login(credentials.clone()));
        self.login.lock().unwrap().clone()
    }

    async fn register(&self, registration: &Registration) -> Result<Option<String>, ApiError> {
        self.record(Call::Register(registration.clone()));
        self.message.lock().unwrap().clone()
    }

    async fn change_password(
        &self,
        token: &str,
        change: &ChangePassword,
    ) -> Result<Option<String>, ApiError> {
        self.record(Call::ChangePassword {
            token: token.to_string(),
            change: change.clone(),
        });
        self.message.lock().unwrap().clone()
    }
}
