use std::env;

use tracing::info;

use crate::error::{PantryChefError, Result};
use crate::spoonacular::DEFAULT_BASE_URL;

const DEFAULT_DATABASE_URL: &str = "sqlite://pantrychef.db";

pub struct Config {
    pub database_url: String,
    pub spoonacular_api_key: String,
    pub spoonacular_base_url: String,
}

impl Config {
    /// Load configuration from the environment.
    ///
    /// Only the API key is required; everything else falls back to a logged
    /// default.
    pub fn load() -> Result<Self> {
        Ok(Self {
            database_url: try_load("DATABASE_URL", DEFAULT_DATABASE_URL),
            spoonacular_api_key: require("SPOONACULAR_API_KEY")?,
            spoonacular_base_url: try_load("SPOONACULAR_BASE_URL", DEFAULT_BASE_URL),
        })
    }
}

fn try_load(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| {
        info!("{key} not set, using default: {default}");
        default.to_string()
    })
}

fn require(key: &'static str) -> Result<String> {
    env::var(key).map_err(|_| PantryChefError::MissingEnv(key))
}
