use dioxus::prelude::*;
use ui::views::RecipesView;
use ui::{RecipeDetail, RecipeDetailView, RemoteRecipe};

#[component]
pub fn Recipes() -> Element {
    rsx! {
        RecipesView {}
    }
}

/// `/receitas/:id`
#[component]
pub fn RecipePage(id: String) -> Element {
    rsx! {
        RemoteRecipe { id }
    }
}

/// `/sobremesas/bolo`
#[component]
pub fn ChocolateCake() -> Element {
    rsx! {
        RecipeDetailView { detail: RecipeDetail::chocolate_cake() }
    }
}
