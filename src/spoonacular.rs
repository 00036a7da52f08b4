use reqwest::Client;
use serde::Deserialize;

use crate::error::{PantryChefError, Result};

pub const DEFAULT_BASE_URL: &str = "https://api.spoonacular.com/recipes";

/// Search and detail operations of the recipe-data provider.
///
/// The generation orchestrator is generic over this trait so the fan-out and
/// normalization logic can be exercised against canned responses.
pub trait RecipeApi {
    /// Ingredient-based search. `ingredients` is the comma-joined list;
    /// at most `limit` candidates come back, ranked to maximize used
    /// ingredients.
    fn find_by_ingredients(
        &self,
        ingredients: &str,
        limit: u32,
    ) -> impl Future<Output = Result<Vec<RecipeCandidate>>>;

    /// Full detail for one candidate by its numeric id.
    fn recipe_information(&self, id: u64) -> impl Future<Output = Result<RecipeInformation>>;
}

/// Minimal search hit, used only to drive the detail fetch.
#[derive(Debug, Clone, Deserialize)]
pub struct RecipeCandidate {
    pub id: u64,
    #[serde(default)]
    pub title: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecipeInformation {
    pub title: String,
    #[serde(default)]
    pub summary: Option<String>,
    #[serde(default)]
    pub extended_ingredients: Option<Vec<ExtendedIngredient>>,
    #[serde(default)]
    pub analyzed_instructions: Option<Vec<AnalyzedInstruction>>,
    pub ready_in_minutes: i64,
    #[serde(default)]
    pub servings: Option<i64>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ExtendedIngredient {
    pub original: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AnalyzedInstruction {
    #[serde(default)]
    pub steps: Vec<InstructionStep>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct InstructionStep {
    pub step: String,
}

/// HTTP client for the recipe-data provider.
///
/// Both endpoints take the API key as a query parameter. Each call is a
/// single request: no retries, no caching, no per-request timeout beyond
/// the client default. Bodies are read as text and decoded separately so
/// transport failures and parse failures surface as distinct error kinds.
#[derive(Debug, Clone)]
pub struct SpoonacularClient {
    client: Client,
    base_url: String,
    api_key: String,
}

impl SpoonacularClient {
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            client: Client::new(),
            base_url,
            api_key: api_key.into(),
        }
    }
}

impl RecipeApi for SpoonacularClient {
    async fn find_by_ingredients(
        &self,
        ingredients: &str,
        limit: u32,
    ) -> Result<Vec<RecipeCandidate>> {
        let url = format!("{}/findByIngredients", self.base_url);
        let body = self
            .client
            .get(&url)
            .query(&[
                ("ingredients", ingredients.to_string()),
                ("number", limit.to_string()),
                // ranking=1 maximizes used ingredients
                ("ranking", "1".to_string()),
                ("apiKey", self.api_key.clone()),
            ])
            .send()
            .await
            .and_then(reqwest::Response::error_for_status)
            .map_err(PantryChefError::Search)?
            .text()
            .await
            .map_err(PantryChefError::Search)?;

        Ok(serde_json::from_str(&body)?)
    }

    async fn recipe_information(&self, id: u64) -> Result<RecipeInformation> {
        let url = format!("{}/{}/information", self.base_url, id);
        let body = self
            .client
            .get(&url)
            .query(&[
                ("includeNutrition", "false".to_string()),
                ("apiKey", self.api_key.clone()),
            ])
            .send()
            .await
            .and_then(reqwest::Response::error_for_status)
            .map_err(|source| PantryChefError::Detail { id, source })?
            .text()
            .await
            .map_err(|source| PantryChefError::Detail { id, source })?;

        Ok(serde_json::from_str(&body)?)
    }
}
