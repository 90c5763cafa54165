//! # Recipe search and listing
//!
//! [`use_recipe_search`] owns the search text and the list state. Every change
//! of the text cancels the previous debounce task and spawns a new one that
//! runs [`SearchController::type_text`]: once the quiet period settles it
//! calls [`search_latest`], whose result is only applied if no newer search
//! was issued in the meantime. [`RecipeSearch::refresh`] re-runs the current
//! text immediately, which is how the creation form makes a new recipe
//! appear.
//!
//! Tasks are spawned in the component's scope, so they are dropped together
//! with the view and never write into an unmounted list.

use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use api::{ApiClient, Backend, Recipe, RecipeQuery};
use dioxus::core::Task;
use dioxus::prelude::*;

use crate::context::{use_backend, use_site_config};
use crate::debounce::{Debouncer, RequestSequence};
use crate::messages::{describe_error, LOADING_RECIPES, NO_RECIPES_FOUND, RECIPES_LOAD_FAILED};

/// What the recipe list currently shows.
#[derive(Clone, Debug, PartialEq)]
pub enum ListState {
    Loading,
    Failed(String),
    Loaded(Vec<Recipe>),
}

/// Fetch recipes matching `text` and turn the response into a [`ListState`].
pub async fn fetch_recipes<B: Backend>(backend: &B, text: &str) -> ListState {
    match backend.list_recipes(&RecipeQuery::search(text)).await {
        Ok(recipes) => ListState::Loaded(recipes),
        Err(e) => {
            tracing::warn!(status = ?e.status(), "Failed to load recipes for {text:?}: {e}");
            ListState::Failed(describe_error(&e, RECIPES_LOAD_FAILED))
        }
    }
}

/// Issue a search and return its state, or `None` if a newer search was
/// issued on `sequence` before this one answered.
pub async fn search_latest<B: Backend>(
    backend: &B,
    sequence: &RequestSequence,
    text: &str,
) -> Option<ListState> {
    let ticket = sequence.issue();
    let state = fetch_recipes(backend, text).await;
    if sequence.is_latest(ticket) {
        Some(state)
    } else {
        tracing::debug!("Discarding stale results for {text:?}");
        None
    }
}

/// The search logic behind [`use_recipe_search`], independent of Dioxus.
///
/// Remembers the current text so [`refresh`](Self::refresh) can re-run it,
/// coalesces keystrokes with a [`Debouncer`] and drops stale answers with a
/// [`RequestSequence`].
#[derive(Clone)]
pub struct SearchController<B> {
    backend: B,
    query: Rc<RefCell<String>>,
    debouncer: Debouncer,
    sequence: RequestSequence,
}

impl<B: Backend> SearchController<B> {
    pub fn new(backend: B, quiet: Duration) -> Self {
        Self {
            backend,
            query: Rc::new(RefCell::new(String::new())),
            debouncer: Debouncer::new(quiet),
            sequence: RequestSequence::new(),
        }
    }

    /// The most recently typed text.
    pub fn query(&self) -> String {
        self.query.borrow().clone()
    }

    /// Record a keystroke and search once typing has settled.
    ///
    /// `on_search` runs right before the request is sent. Returns `None` when
    /// a newer keystroke superseded this one, or a newer search answered
    /// first.
    pub async fn type_text(&self, text: &str, on_search: impl FnOnce()) -> Option<ListState> {
        self.query.replace(text.to_string());
        if !self.debouncer.trigger().settled().await {
            return None;
        }
        on_search();
        search_latest(&self.backend, &self.sequence, text).await
    }

    /// Search the current text now, without waiting.
    pub async fn refresh(&self) -> Option<ListState> {
        let text = self.query();
        search_latest(&self.backend, &self.sequence, &text).await
    }

    #[cfg(test)]
    pub(crate) fn backend(&self) -> &B {
        &self.backend
    }
}

/// Handle returned by [`use_recipe_search`].
#[derive(Clone, Copy, PartialEq)]
pub struct RecipeSearch {
    pub query: Signal<String>,
    pub state: Signal<ListState>,
    controller: Signal<SearchController<ApiClient>>,
    pending: Signal<Option<Task>>,
}

impl RecipeSearch {
    /// Replace the search text; the debounced search follows.
    pub fn set_query(mut self, text: String) {
        self.query.set(text);
    }

    /// Re-run the current search text now, bypassing the debounce.
    pub fn refresh(self) {
        let controller = self.controller.peek().clone();
        let mut state = self.state;
        spawn(async move {
            state.set(ListState::Loading);
            if let Some(result) = controller.refresh().await {
                state.set(result);
            }
        });
    }

    fn schedule(mut self, text: String) {
        if let Some(task) = self.pending.write().take() {
            task.cancel();
        }
        let controller = self.controller.peek().clone();
        let mut state = self.state;
        let task = spawn(async move {
            let result = controller
                .type_text(&text, || state.set(ListState::Loading))
                .await;
            if let Some(result) = result {
                state.set(result);
            }
        });
        self.pending.set(Some(task));
    }
}

/// Debounced recipe search bound to the current component.
pub fn use_recipe_search() -> RecipeSearch {
    let backend = use_backend();
    let config = use_site_config();

    let search = RecipeSearch {
        query: use_signal(String::new),
        state: use_signal(|| ListState::Loading),
        controller: use_signal(move || SearchController::new(backend, config.search.debounce())),
        pending: use_signal(|| None),
    };

    // Runs on mount and whenever the text changes.
    use_effect(move || {
        let text = search.query.read().clone();
        search.schedule(text);
    });

    search
}

/// Search box plus the result list.
#[component]
pub fn RecipeList(search: RecipeSearch) -> Element {
    let state = search.state.read().clone();

    rsx! {
        div {
            class: "lista-receitas",
            h2 { "Receitas Cadastradas" }

            input {
                r#type: "text",
                class: "input-busca",
                placeholder: "Buscar receitas por título, ingrediente ou descrição",
                value: "{search.query}",
                oninput: move |evt: FormEvent| search.set_query(evt.value()),
            }

            {match state {
                ListState::Loading => rsx! {
                    p { "{LOADING_RECIPES}" }
                },
                ListState::Failed(message) => rsx! {
                    p { class: "erro-lista", "{message}" }
                },
                ListState::Loaded(recipes) if recipes.is_empty() => rsx! {
                    p { "{NO_RECIPES_FOUND}" }
                },
                ListState::Loaded(recipes) => rsx! {
                    ul {
                        for recipe in recipes {
                            RecipeListItem { key: "{recipe.id}", recipe: recipe.clone() }
                        }
                    }
                },
            }}
        }
    }
}

#[component]
fn RecipeListItem(recipe: Recipe) -> Element {
    rsx! {
        li {
            class: "item-receita",
            Link {
                to: format!("/receitas/{}", recipe.id),
                h3 { "{recipe.title}" }
            }
            p {
                strong { "Categoria: " }
                "{recipe.category}"
            }
            if let Some(description) = &recipe.description {
                p { em { "{description}" } }
            }
        }
    }
}
