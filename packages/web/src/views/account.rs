//! Account pages. Each wraps a `ui` form and turns its callbacks into
//! navigation.

use dioxus::prelude::*;
use ui::{ChangePasswordForm, LoginForm, ProfileView, RegisterForm};

use crate::Route;

#[component]
pub fn Login() -> Element {
    let nav = use_navigator();

    rsx! {
        div {
            class: "pagina-conta",
            LoginForm {
                on_signed_in: move |_| {
                    nav.push(Route::Profile {});
                },
            }
        }
    }
}

#[component]
pub fn Register() -> Element {
    let nav = use_navigator();

    rsx! {
        div {
            class: "pagina-conta",
            RegisterForm {
                on_registered: move |_| {
                    nav.push(Route::Login {});
                },
            }
        }
    }
}

#[component]
pub fn Profile() -> Element {
    let nav = use_navigator();

    rsx! {
        div {
            class: "pagina-conta",
            ProfileView {
                on_login_required: move |_| {
                    nav.replace(Route::Login {});
                },
                on_logged_out: move |_| {
                    nav.push(Route::Home {});
                },
                on_change_password: move |_| {
                    nav.push(Route::ChangePassword {});
                },
            }
        }
    }
}

#[component]
pub fn ChangePassword() -> Element {
    let nav = use_navigator();

    rsx! {
        div {
            class: "pagina-conta",
            ChangePasswordForm {
                on_login_required: move |_| {
                    nav.replace(Route::Login {});
                },
            }
        }
    }
}
