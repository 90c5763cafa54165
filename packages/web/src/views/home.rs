use dioxus::prelude::*;

use crate::Route;

#[component]
pub fn Home() -> Element {
    rsx! {
        section {
            class: "hero",
            h1 { "Cozinhe com o que você já tem" }
            p { "Receitas para aproveitar sobras e reduzir o desperdício de alimentos." }
            Link { to: Route::Recipes {}, "Ver receitas" }
        }
    }
}
