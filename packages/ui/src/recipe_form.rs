//! # Recipe creation form
//!
//! [`RecipeDraft`] is the raw form state, one `String` per text input.
//! [`RecipeDraft::validate`] turns it into an [`api::NewRecipe`] or names the
//! first offending field. [`submit_recipe`] runs the whole submission:
//!
//! 1. client-side validation (nothing is sent on failure),
//! 2. session check (no token → [`LOGIN_REQUIRED_TO_SUBMIT`], nothing is sent),
//! 3. the authorized `POST /receitas`.
//!
//! [`RecipeDraft::settle`] applies the outcome: a created recipe resets every
//! field to its default and asks for a list refresh; any other outcome leaves
//! the entered values untouched.

use std::fmt;

use api::{Backend, Category, Difficulty, NewRecipe};
use dioxus::prelude::*;

use crate::context::use_backend;
use crate::messages::{describe_error, LOGIN_REQUIRED_TO_SUBMIT, RECIPE_SEND_FAILED, RECIPE_SENT};
use crate::session::{use_session, Session};

/// Raw values of the creation form.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RecipeDraft {
    pub title: String,
    pub ingredients: String,
    pub preparation_steps: String,
    pub category: Category,
    pub description: String,
    /// Minutes, as typed. Blank means "not given".
    pub preparation_time: String,
    /// As typed. Blank means "not given".
    pub servings: String,
    pub difficulty: Difficulty,
}

/// Why a draft cannot be submitted.
#[derive(Clone, Debug, PartialEq)]
pub enum DraftError {
    Missing(&'static str),
    InvalidNumber(&'static str),
}

impl fmt::Display for DraftError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DraftError::Missing(field) => write!(f, "Preencha o campo obrigatório: {field}."),
            DraftError::InvalidNumber(field) => write!(f, "Valor inválido para {field}."),
        }
    }
}

impl std::error::Error for DraftError {}

fn required(value: &str, field: &'static str) -> Result<String, DraftError> {
    if value.trim().is_empty() {
        Err(DraftError::Missing(field))
    } else {
        Ok(value.to_string())
    }
}

fn optional_number(value: &str, field: &'static str, min: u32) -> Result<Option<u32>, DraftError> {
    let value = value.trim();
    if value.is_empty() {
        return Ok(None);
    }
    match value.parse::<u32>() {
        Ok(n) if n >= min => Ok(Some(n)),
        _ => Err(DraftError::InvalidNumber(field)),
    }
}

impl RecipeDraft {
    /// Check required fields and parse the numeric ones.
    pub fn validate(&self) -> Result<NewRecipe, DraftError> {
        let title = required(&self.title, "Título da Receita")?;
        let ingredients = required(&self.ingredients, "Ingredientes")?;
        let preparation_steps = required(&self.preparation_steps, "Modo de Preparo")?;
        let preparation_time_minutes =
            optional_number(&self.preparation_time, "Tempo de Preparo", 0)?;
        let servings = optional_number(&self.servings, "Porções", 1)?;
        let description = Some(self.description.clone()).filter(|d| !d.trim().is_empty());

        Ok(NewRecipe {
            title,
            ingredients,
            preparation_steps,
            category: self.category,
            description,
            preparation_time_minutes,
            servings,
            difficulty: self.difficulty,
        })
    }

    /// Apply a submission outcome. Returns `true` when the recipe list should
    /// be re-queried.
    pub fn settle(&mut self, outcome: &SubmitOutcome) -> bool {
        if outcome.is_success() {
            *self = RecipeDraft::default();
            true
        } else {
            false
        }
    }
}

/// Result of one press of the submit button.
#[derive(Clone, Debug, PartialEq)]
pub enum SubmitOutcome {
    Invalid(DraftError),
    LoginRequired,
    Created,
    Failed(String),
}

impl SubmitOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, SubmitOutcome::Created)
    }

    /// Message shown under the form.
    pub fn message(&self) -> String {
        match self {
            SubmitOutcome::Invalid(e) => e.to_string(),
            SubmitOutcome::LoginRequired => LOGIN_REQUIRED_TO_SUBMIT.to_string(),
            SubmitOutcome::Created => RECIPE_SENT.to_string(),
            SubmitOutcome::Failed(message) => message.clone(),
        }
    }
}

/// Validate, check the session, and send the draft.
pub async fn submit_recipe<B: Backend>(
    backend: &B,
    session: &Session,
    draft: &RecipeDraft,
) -> SubmitOutcome {
    let recipe = match draft.validate() {
        Ok(recipe) => recipe,
        Err(e) => return SubmitOutcome::Invalid(e),
    };
    let Some(token) = session.token() else {
        return SubmitOutcome::LoginRequired;
    };

    match backend.create_recipe(&token, &recipe).await {
        Ok(created) => {
            tracing::info!("Recipe created: {:?}", created.id);
            SubmitOutcome::Created
        }
        Err(e) => {
            tracing::warn!("Failed to create recipe: {e}");
            SubmitOutcome::Failed(describe_error(&e, RECIPE_SEND_FAILED))
        }
    }
}

/// The "Enviar Nova Receita" form.
#[component]
pub fn RecipeForm(
    /// Called after a recipe was created, so the list can refresh.
    on_created: EventHandler<()>,
) -> Element {
    let backend = use_backend();
    let session = use_session();
    let mut draft = use_signal(RecipeDraft::default);
    let mut message = use_signal(|| Option::<String>::None);
    let mut submitting = use_signal(|| false);

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        let backend = backend.clone();
        let session = session.clone();
        spawn(async move {
            submitting.set(true);
            let current = draft();
            let outcome = submit_recipe(&backend, &session, &current).await;
            if draft.write().settle(&outcome) {
                on_created.call(());
            }
            message.set(Some(outcome.message()));
            submitting.set(false);
        });
    };

    let current = draft();

    rsx! {
        form {
            class: "form-receita",
            onsubmit: handle_submit,

            label {
                "Título da Receita:"
                input {
                    r#type: "text",
                    required: true,
                    value: "{current.title}",
                    oninput: move |evt: FormEvent| draft.write().title = evt.value(),
                }
            }

            label {
                "Ingredientes:"
                textarea {
                    rows: "5",
                    required: true,
                    value: "{current.ingredients}",
                    oninput: move |evt: FormEvent| draft.write().ingredients = evt.value(),
                }
            }

            label {
                "Modo de Preparo:"
                textarea {
                    rows: "5",
                    required: true,
                    value: "{current.preparation_steps}",
                    oninput: move |evt: FormEvent| draft.write().preparation_steps = evt.value(),
                }
            }

            label {
                "Categoria:"
                select {
                    required: true,
                    value: current.category.label(),
                    onchange: move |evt: FormEvent| {
                        if let Some(category) = Category::from_label(&evt.value()) {
                            draft.write().category = category;
                        }
                    },
                    for category in Category::ALL {
                        option {
                            key: "{category.label()}",
                            value: category.label(),
                            selected: category == current.category,
                            "{category.label()}"
                        }
                    }
                }
            }

            label {
                "Descrição:"
                textarea {
                    rows: "3",
                    value: "{current.description}",
                    oninput: move |evt: FormEvent| draft.write().description = evt.value(),
                }
            }

            label {
                "Tempo de Preparo (minutos):"
                input {
                    r#type: "number",
                    min: "0",
                    value: "{current.preparation_time}",
                    oninput: move |evt: FormEvent| draft.write().preparation_time = evt.value(),
                }
            }

            label {
                "Porções:"
                input {
                    r#type: "number",
                    min: "1",
                    value: "{current.servings}",
                    oninput: move |evt: FormEvent| draft.write().servings = evt.value(),
                }
            }

            label {
                "Dificuldade:"
                select {
                    value: current.difficulty.label(),
                    onchange: move |evt: FormEvent| {
                        if let Some(difficulty) = Difficulty::from_label(&evt.value()) {
                            draft.write().difficulty = difficulty;
                        }
                    },
                    for difficulty in Difficulty::ALL {
                        option {
                            key: "{difficulty.label()}",
                            value: difficulty.label(),
                            selected: difficulty == current.difficulty,
                            "{difficulty.display_name()}"
                        }
                    }
                }
            }

            button {
                r#type: "submit",
                disabled: submitting(),
                "Enviar Receita"
            }

            if let Some(text) = message() {
                p { class: "mensagem", "{text}" }
            }
        }
    }
}
