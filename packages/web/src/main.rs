use dioxus::prelude::*;

use store::SiteConfig;
use ui::{AppProvider, Header};
use views::{About, ChangePassword, ChocolateCake, Donate, Home, Login, Profile, RecipePage, Recipes, Register};

mod views;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(SiteLayout)]
        #[route("/")]
        Home {},
        #[route("/sobre")]
        About {},
        #[route("/receitas")]
        Recipes {},
        #[route("/receitas/:id")]
        RecipePage { id: String },
        #[route("/sobremesas/bolo")]
        ChocolateCake {},
        #[route("/Doacao")]
        Donate {},
        #[route("/cadastro")]
        Register {},
        #[route("/login")]
        Login {},
        #[route("/usuario")]
        Profile {},
        #[route("/alterar-senha")]
        ChangePassword {},
}

const FAVICON: Asset = asset!("/assets/favicon.svg");
const MAIN_CSS: Asset = asset!("/assets/main.css");

const SITE_TOML: &str = include_str!("../site.toml");

/// Parse the embedded `site.toml`, falling back to the defaults.
fn load_config() -> SiteConfig {
    match SiteConfig::from_toml(SITE_TOML) {
        Ok(config) => config,
        Err(e) => {
            tracing::warn!("Invalid {}, using defaults: {e}", SiteConfig::filename());
            SiteConfig::default()
        }
    }
}

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    let config = use_hook(load_config);
    tracing::debug!("Backend at {}", config.api.base_url);

    rsx! {
        // Global app resources
        document::Link { rel: "icon", href: FAVICON }
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        AppProvider {
            config,
            Router::<Route> {}
        }
    }
}

/// Header above every page. The header re-reads the session on each
/// navigation.
#[component]
fn SiteLayout() -> Element {
    let route = use_route::<Route>();

    rsx! {
        Header { current_path: route.to_string() }
        main {
            Outlet::<Route> {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedded_config_parses() {
        let config = SiteConfig::from_toml(SITE_TOML).unwrap();
        assert_eq!(config, SiteConfig::default());
    }

    #[test]
    fn test_routes_match_site_paths() {
        assert_eq!(Route::Home {}.to_string(), "/");
        assert_eq!(Route::Donate {}.to_string(), "/Doacao");
        assert_eq!(Route::Profile {}.to_string(), "/usuario");
        assert_eq!(
            Route::RecipePage { id: "abc".to_string() }.to_string(),
            "/receitas/abc"
        );
        assert_eq!(
            "/alterar-senha".parse::<Route>().ok(),
            Some(Route::ChangePassword {})
        );
    }

    #[test]
    fn test_header_links_resolve_to_routes() {
        let links = ui::header_links();
        for link in links {
            assert!(link.to.parse::<Route>().is_ok(), "{} has no route", link.to);
        }
    }
}
