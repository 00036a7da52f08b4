use std::sync::OnceLock;

use futures_util::future::try_join_all;
use regex::Regex;
use tracing::error;

use crate::error::Result;
use crate::models::api::GeneratedRecipe;
use crate::models::{Difficulty, IngredientSet};
use crate::spoonacular::{RecipeApi, RecipeInformation};

/// Fallback description when the provider has none, or nothing but markup.
pub const DEFAULT_DESCRIPTION: &str = "A delicious recipe.";

/// Candidates requested per generation.
pub const CANDIDATE_LIMIT: u32 = 3;

fn tag_pattern() -> &'static Regex {
    static TAG: OnceLock<Regex> = OnceLock::new();
    TAG.get_or_init(|| Regex::new(r"<[^>]+>").expect("tag pattern is valid"))
}

/// Strip markup tags, leaving only text content.
pub fn strip_tags(input: &str) -> String {
    tag_pattern().replace_all(input, "").into_owned()
}

/// Flatten a detail response into a [`GeneratedRecipe`].
pub fn normalize_recipe(info: &RecipeInformation) -> GeneratedRecipe {
    let description = match info.summary.as_deref() {
        Some(summary) => {
            let text = strip_tags(summary);
            if text.is_empty() {
                DEFAULT_DESCRIPTION.to_string()
            } else {
                text
            }
        }
        None => DEFAULT_DESCRIPTION.to_string(),
    };

    let ingredients = info
        .extended_ingredients
        .as_ref()
        .map(|list| list.iter().map(|i| i.original.clone()).collect())
        .unwrap_or_default();

    // Only the first instruction group is surfaced; later groups are dropped.
    let instructions = info
        .analyzed_instructions
        .as_ref()
        .and_then(|groups| groups.first())
        .map(|group| group.steps.iter().map(|s| s.step.clone()).collect())
        .unwrap_or_default();

    GeneratedRecipe {
        name: info.title.clone(),
        description,
        ingredients,
        instructions,
        cooking_time: format!("{} minutes", info.ready_in_minutes),
        servings: info.servings,
        difficulty: Difficulty::from_minutes(info.ready_in_minutes),
    }
}

/// Generate up to [`CANDIDATE_LIMIT`] recipes from the given ingredients.
///
/// One search request, then a concurrent detail fetch per candidate. The
/// batch is all-or-nothing: the first failing detail fetch fails the whole
/// generation and its in-flight siblings are abandoned, not cancelled.
/// No retries at either stage. An empty ingredient set short-circuits to an
/// empty result without any network call.
pub async fn generate_recipes<A: RecipeApi>(
    api: &A,
    ingredients: &IngredientSet,
) -> Result<Vec<GeneratedRecipe>> {
    if ingredients.is_empty() {
        return Ok(Vec::new());
    }

    let candidates = api
        .find_by_ingredients(&ingredients.to_query(), CANDIDATE_LIMIT)
        .await
        .inspect_err(|e| error!("recipe search failed: {e}"))?;

    let details = try_join_all(
        candidates
            .iter()
            .map(|candidate| api.recipe_information(candidate.id)),
    )
    .await
    .inspect_err(|e| error!("recipe detail fetch failed: {e}"))?;

    Ok(details.iter().map(normalize_recipe).collect())
}
