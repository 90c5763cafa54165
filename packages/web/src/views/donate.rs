use dioxus::prelude::*;

#[component]
pub fn Donate() -> Element {
    rsx! {
        div {
            class: "pagina-texto",
            h1 { "Doe" }
            p {
                "Alimentos em bom estado que você não vai usar podem alimentar outra pessoa. "
                "Procure um banco de alimentos perto de você."
            }
        }
    }
}
