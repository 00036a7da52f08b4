use thiserror::Error;

#[derive(Error, Debug)]
pub enum PantryChefError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Recipe search request failed: {0}")]
    Search(reqwest::Error),

    #[error("Recipe detail request failed for id {id}: {source}")]
    Detail { id: u64, source: reqwest::Error },

    #[error("Failed to decode recipe data: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Not signed in")]
    NotSignedIn,

    #[error("Missing required environment variable {0}")]
    MissingEnv(&'static str),

    #[error("Collection not found with id: {0}")]
    CollectionNotFound(i64),

    #[error("Recipe not found with id: {0}")]
    RecipeNotFound(i64),
}

pub type Result<T> = std::result::Result<T, PantryChefError>;
