//! Navigation header.
//!
//! | Session | Account links |
//! |---------|---------------|
//! | token present | profile icon → `/usuario` |
//! | no token | "Cadastrar" → `/cadastro`, "Entrar" → `/login` |
//!
//! The site links are always shown. The home page gets the dark variant with
//! the light logo; every other page the light variant.

use dioxus::prelude::*;

use crate::session::use_session;
use crate::{icons, Icon};

const LOGO_LIGHT: Asset = asset!("/assets/logo-branco.svg");
const LOGO_DARK: Asset = asset!("/assets/logo-preto.svg");
const VIEWS_CSS: Asset = asset!("/src/views/views.css");

/// A header link.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavLink {
    pub label: &'static str,
    pub to: &'static str,
}

pub const SITE_LINKS: [NavLink; 3] = [
    NavLink { label: "Sobre Nós", to: "/sobre" },
    NavLink { label: "Receitas", to: "/receitas" },
    NavLink { label: "Doe", to: "/Doacao" },
];

pub const PROFILE_LINK: NavLink = NavLink { label: "Perfil", to: "/usuario" };
pub const REGISTER_LINK: NavLink = NavLink { label: "Cadastrar", to: "/cadastro" };
pub const LOGIN_LINK: NavLink = NavLink { label: "Entrar", to: "/login" };

/// Account links for the given session state.
pub fn account_links(logged_in: bool) -> Vec<NavLink> {
    if logged_in {
        vec![PROFILE_LINK]
    } else {
        vec![REGISTER_LINK, LOGIN_LINK]
    }
}

/// Every link the header can render, in either session state.
pub fn header_links() -> Vec<NavLink> {
    let mut links = SITE_LINKS.to_vec();
    links.extend(account_links(true));
    links.extend(account_links(false));
    links
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HeaderVariant {
    Dark,
    Light,
}

impl HeaderVariant {
    pub fn for_path(path: &str) -> Self {
        if path == "/" {
            HeaderVariant::Dark
        } else {
            HeaderVariant::Light
        }
    }

    pub fn class(self) -> &'static str {
        match self {
            HeaderVariant::Dark => "header escuro",
            HeaderVariant::Light => "header claro",
        }
    }

    fn logo(self) -> Asset {
        match self {
            HeaderVariant::Dark => LOGO_LIGHT,
            HeaderVariant::Light => LOGO_DARK,
        }
    }
}

#[component]
pub fn Header(current_path: String) -> Element {
    let session = use_session();
    let variant = HeaderVariant::for_path(&current_path);
    let logged_in = session.is_logged_in();

    rsx! {
        document::Link { rel: "stylesheet", href: VIEWS_CSS }
        header {
            class: variant.class(),
            Link {
                to: "/",
                class: "logo",
                img { src: variant.logo(), alt: "ECOmida" }
            }
            nav {
                for link in SITE_LINKS {
                    Link { key: "{link.to}", to: link.to, "{link.label}" }
                }
            }
            div {
                class: "conta",
                for link in account_links(logged_in) {
                    if link == PROFILE_LINK {
                        Link {
                            key: "{link.to}",
                            to: link.to,
                            class: "icone-perfil",
                            Icon { icon: icons::FaCircleUser, width: 28, height: 28 }
                        }
                    } else {
                        Link { key: "{link.to}", to: link.to, class: "botao-conta", "{link.label}" }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exactly_one_account_variant() {
        let logged_in = account_links(true);
        assert_eq!(logged_in, vec![PROFILE_LINK]);
        assert!(!logged_in.contains(&LOGIN_LINK));

        let guest = account_links(false);
        assert_eq!(guest, vec![REGISTER_LINK, LOGIN_LINK]);
        assert!(!guest.contains(&PROFILE_LINK));
    }

    #[test]
    fn test_site_links_always_present() {
        let labels: Vec<_> = SITE_LINKS.iter().map(|l| l.label).collect();
        assert_eq!(labels, vec!["Sobre Nós", "Receitas", "Doe"]);
    }

    #[test]
    fn test_header_links_cover_both_states() {
        let links = header_links();
        assert_eq!(links.len(), 6);
        assert!(links.contains(&PROFILE_LINK));
        assert!(links.contains(&REGISTER_LINK));
    }

    #[test]
    fn test_variant_by_path() {
        assert_eq!(HeaderVariant::for_path("/"), HeaderVariant::Dark);
        assert_eq!(HeaderVariant::for_path("/receitas"), HeaderVariant::Light);
        assert_eq!(HeaderVariant::for_path("/usuario"), HeaderVariant::Light);
    }
}
