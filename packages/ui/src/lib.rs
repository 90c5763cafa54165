//! This crate contains all shared UI for the workspace.
//!
//! Components are thin shells over async workflows (`submit_recipe`,
//! `load_profile`, `sign_in`, ...) that take any [`api::Backend`], so the
//! behaviour is tested without a browser.

// Re-export icon library
pub use dioxus_free_icons::Icon;
pub mod icons {
    pub use dioxus_free_icons::icons::fa_solid_icons::*;
}

pub mod debounce;
pub use debounce::{Debouncer, RequestSequence, RequestTicket};

pub mod messages;

mod session;
pub use session::{use_session, Session};

mod notice;
pub use notice::{use_notice, Notice};

mod context;
pub use context::{make_token_store, use_backend, use_site_config, AppProvider};

pub mod search;
pub use search::{use_recipe_search, ListState, RecipeList, RecipeSearch, SearchController};

pub mod recipe_form;
pub use recipe_form::{submit_recipe, RecipeDraft, RecipeForm, SubmitOutcome};

pub mod recipe_detail;
pub use recipe_detail::{RecipeDetail, RecipeDetailView, RemoteRecipe};

pub mod profile;
pub use profile::{load_profile, ProfileView};

mod header;
pub use header::{header_links, Header, HeaderVariant, NavLink};

pub mod account;
pub use account::{ChangePasswordForm, LoginForm, RegisterForm};

pub mod views;

#[cfg(test)]
mod testing;
