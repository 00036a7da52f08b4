mod listing;
mod recipe;

pub use listing::SharedListing;
pub use recipe::{GeneratedRecipe, NewRecipe};
