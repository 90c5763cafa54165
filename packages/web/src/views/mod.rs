mod home;
pub use home::Home;

mod about;
pub use about::About;

mod donate;
pub use donate::Donate;

mod recipes;
pub use recipes::{ChocolateCake, RecipePage, Recipes};

mod account;
pub use account::{ChangePassword, Login, Profile, Register};
