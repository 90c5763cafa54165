//! Wire models exchanged with the recipe backend.

mod recipe;
mod user;

pub use recipe::{Category, CreatedRecipe, Difficulty, NewRecipe, Recipe, RecipeQuery};
pub use user::{ChangePassword, Credentials, LoginSession, Registration, UserInfo};
