//! # Recipe detail
//!
//! [`RecipeDetail`] is the display contract for one recipe: ingredients and
//! steps are already split into lines, metadata is already formatted. Both
//! the static dessert page ([`RecipeDetail::chocolate_cake`]) and the dynamic
//! `/receitas/:id` page ([`RemoteRecipe`]) render through [`RecipeDetailView`].

use api::{Backend, Difficulty, Recipe};
use dioxus::prelude::*;

use crate::context::use_backend;
use crate::messages::{describe_error, LOADING, RECIPE_LOAD_FAILED};

/// Everything the detail page shows.
#[derive(Clone, Debug, PartialEq)]
pub struct RecipeDetail {
    pub title: String,
    /// Preparation time as displayed, e.g. "40 min".
    pub time: Option<String>,
    pub difficulty: Option<String>,
    pub servings: Option<String>,
    pub ingredients: Vec<String>,
    pub steps: Vec<String>,
    /// Free text entered by the author. Shown under the title.
    pub description: Option<String>,
    /// Cooking tip. Only the static pages have one.
    pub tip: Option<String>,
}

impl RecipeDetail {
    /// The chocolate cake shown on the dessert page.
    pub fn chocolate_cake() -> Self {
        Self {
            title: "Bolo de Chocolate Fofinho".to_string(),
            time: Some("40 min".to_string()),
            difficulty: Some(Difficulty::Easy.display_name().to_string()),
            servings: Some("8 porções".to_string()),
            ingredients: [
                "3 ovos",
                "2 xícaras de farinha de trigo",
                "1 xícara de açúcar",
                "1/2 xícara de chocolate em pó",
            ]
            .map(String::from)
            .to_vec(),
            steps: [
                "Pré-aqueça o forno a 180°C.",
                "Bata os ovos e o açúcar até ficar homogêneo.",
                "Adicione a farinha e o chocolate, misturando bem.",
                "Asse por 30 minutos.",
            ]
            .map(String::from)
            .to_vec(),
            description: None,
            tip: Some(
                "Para um toque especial, adicione raspas de chocolate por cima antes de assar."
                    .to_string(),
            ),
        }
    }
}

impl From<&Recipe> for RecipeDetail {
    fn from(recipe: &Recipe) -> Self {
        let time = match recipe.preparation_minutes() {
            Some(minutes) => Some(format!("{minutes} min")),
            None => recipe.preparation_time.clone(),
        };
        let difficulty = recipe.difficulty.as_deref().map(|raw| {
            Difficulty::from_label(raw)
                .map(|d| d.display_name().to_string())
                .unwrap_or_else(|| raw.to_string())
        });
        let servings = recipe.servings.as_deref().map(|s| match s.parse::<u32>() {
            Ok(1) => "1 porção".to_string(),
            Ok(n) => format!("{n} porções"),
            Err(_) => s.to_string(),
        });

        Self {
            title: recipe.title.clone(),
            time,
            difficulty,
            servings,
            ingredients: recipe.ingredient_lines(),
            steps: recipe.step_lines(),
            description: recipe
                .description
                .clone()
                .filter(|d| !d.trim().is_empty()),
            tip: None,
        }
    }
}

/// State of a recipe fetched by id.
#[derive(Clone, Debug, PartialEq)]
pub enum DetailState {
    Loading,
    Failed(String),
    Loaded(RecipeDetail),
}

pub async fn load_recipe_detail<B: Backend>(backend: &B, id: &str) -> DetailState {
    match backend.get_recipe(id).await {
        Ok(recipe) => DetailState::Loaded(RecipeDetail::from(&recipe)),
        Err(e) => {
            tracing::warn!("Failed to load recipe {id}: {e}");
            DetailState::Failed(describe_error(&e, RECIPE_LOAD_FAILED))
        }
    }
}

/// Read-only rendering of a [`RecipeDetail`].
#[component]
pub fn RecipeDetailView(detail: RecipeDetail) -> Element {
    rsx! {
        article {
            class: "receita-detalhe",
            h1 { "{detail.title}" }
            if let Some(description) = &detail.description {
                p { class: "receita-descricao", "{description}" }
            }

            ul {
                class: "receita-info",
                if let Some(time) = &detail.time {
                    li { strong { "Tempo: " } "{time}" }
                }
                if let Some(difficulty) = &detail.difficulty {
                    li { strong { "Dificuldade: " } "{difficulty}" }
                }
                if let Some(servings) = &detail.servings {
                    li { strong { "Rendimento: " } "{servings}" }
                }
            }

            section {
                h2 { "Ingredientes" }
                ul {
                    for (i, ingredient) in detail.ingredients.iter().enumerate() {
                        li { key: "{i}", "{ingredient}" }
                    }
                }
            }

            section {
                h2 { "Modo de Preparo" }
                ol {
                    for (i, step) in detail.steps.iter().enumerate() {
                        li { key: "{i}", "{step}" }
                    }
                }
            }

            if let Some(tip) = &detail.tip {
                section {
                    class: "receita-dica",
                    h2 { "Dica" }
                    p { "{tip}" }
                }
            }
        }
    }
}

/// Fetch a recipe by id and render it.
#[component]
pub fn RemoteRecipe(id: String) -> Element {
    let backend = use_backend();

    let detail = use_resource(use_reactive((&id,), move |(id,)| {
        let backend = backend.clone();
        async move { load_recipe_detail(&backend, &id).await }
    }));

    let state = detail.read().clone().unwrap_or(DetailState::Loading);

    match state {
        DetailState::Loading => rsx! {
            p { "{LOADING}" }
        },
        DetailState::Failed(message) => rsx! {
            p { class: "erro", "{message}" }
        },
        DetailState::Loaded(detail) => rsx! {
            RecipeDetailView { detail }
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{recipe, server_error, Call, FakeBackend};
    use api::ApiError;

    #[test]
    fn test_chocolate_cake() {
        let cake = RecipeDetail::chocolate_cake();
        assert_eq!(cake.title, "Bolo de Chocolate Fofinho");
        assert_eq!(cake.time.as_deref(), Some("40 min"));
        assert_eq!(cake.difficulty.as_deref(), Some("Fácil"));
        assert_eq!(cake.servings.as_deref(), Some("8 porções"));
        assert_eq!(cake.ingredients.len(), 4);
        assert_eq!(cake.steps[0], "Pré-aqueça o forno a 180°C.");
        assert_eq!(cake.steps[3], "Asse por 30 minutos.");
        assert!(cake.tip.is_some());
        assert_eq!(cake.description, None);
    }

    #[test]
    fn test_from_recipe_formats_metadata() {
        let mut source = recipe("9", "Frango assado");
        source.ingredients = "1 frango\n\n  sal a gosto \n".to_string();
        source.preparation_steps = "Tempere\nAsse".to_string();
        source.preparation_time = Some("90".to_string());
        source.servings = Some("1".to_string());
        source.difficulty = Some("difícil".to_string());

        let detail = RecipeDetail::from(&source);
        assert_eq!(detail.ingredients, vec!["1 frango", "sal a gosto"]);
        assert_eq!(detail.steps, vec!["Tempere", "Asse"]);
        assert_eq!(detail.time.as_deref(), Some("90 min"));
        assert_eq!(detail.servings.as_deref(), Some("1 porção"));
        assert_eq!(detail.difficulty.as_deref(), Some("Difícil"));
        assert_eq!(detail.description, None);
        assert_eq!(detail.tip, None);
    }

    #[test]
    fn test_description_is_not_shown_as_tip() {
        let mut source = recipe("4", "Salada de grão-de-bico");
        source.description = Some("Leve e rápida para o almoço.".to_string());

        let detail = RecipeDetail::from(&source);
        assert_eq!(
            detail.description.as_deref(),
            Some("Leve e rápida para o almoço.")
        );
        assert_eq!(detail.tip, None);

        source.description = Some("   ".to_string());
        assert_eq!(RecipeDetail::from(&source).description, None);
    }

    #[test]
    fn test_from_seeded_recipe_keeps_text_values() {
        let mut source = recipe("2", "Sopa");
        source.preparation_time = Some("15 minutos".to_string());
        source.difficulty = Some("fácil demais".to_string());
        source.servings = None;

        let detail = RecipeDetail::from(&source);
        assert_eq!(detail.time.as_deref(), Some("15 minutos"));
        assert_eq!(detail.difficulty.as_deref(), Some("fácil demais"));
        assert_eq!(detail.servings, None);
    }

    #[tokio::test]
    async fn test_load_by_id() {
        let backend = FakeBackend::new().with_detail(Ok(recipe("7", "Pudim")));
        let state = load_recipe_detail(&backend, "7").await;
        assert!(matches!(state, DetailState::Loaded(ref d) if d.title == "Pudim"));
        assert_eq!(backend.calls(), vec![Call::Get("7".to_string())]);
    }

    #[tokio::test]
    async fn test_load_failures() {
        let backend = FakeBackend::new().with_detail(Err(server_error("Receita não encontrada")));
        assert_eq!(
            load_recipe_detail(&backend, "x").await,
            DetailState::Failed("Receita não encontrada".to_string())
        );

        let backend = FakeBackend::new().with_detail(Err(ApiError::Server {
            status: 500,
            message: None,
        }));
        assert_eq!(
            load_recipe_detail(&backend, "x").await,
            DetailState::Failed(RECIPE_LOAD_FAILED.to_string())
        );
    }
}
