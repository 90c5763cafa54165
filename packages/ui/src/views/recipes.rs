use dioxus::prelude::*;

use crate::recipe_form::RecipeForm;
use crate::search::{use_recipe_search, RecipeList};

/// The recipes page body: creation form above the searchable list.
///
/// A created recipe refreshes the list with whatever is in the search box.
#[component]
pub fn RecipesView() -> Element {
    let search = use_recipe_search();

    rsx! {
        div {
            class: "pagina-receitas",
            section {
                class: "nova-receita",
                h2 { "Enviar Nova Receita" }
                RecipeForm { on_created: move |_| search.refresh() }
            }
            section {
                RecipeList { search }
            }
        }
    }
}
