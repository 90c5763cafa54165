use dioxus::prelude::*;

#[component]
pub fn About() -> Element {
    rsx! {
        div {
            class: "pagina-texto",
            h1 { "Sobre Nós" }
            p {
                "O ECOmida reúne receitas que aproveitam sobras e ingredientes "
                "do dia a dia. Qualquer pessoa cadastrada pode compartilhar uma receita."
            }
        }
    }
}
