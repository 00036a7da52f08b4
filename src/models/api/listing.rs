use crate::models::Difficulty;

/// A community listing joined to its recipe and sharer profile.
///
/// Produced by the discovery join; only listings whose recipe row resolved
/// make it into one of these.
#[derive(Debug, Clone)]
pub struct SharedListing {
    pub id: i64,
    pub recipe_id: i64,
    pub shared_by: i64,
    pub title: String,
    pub description: Option<String>,
    pub view_count: i64,
    pub created_at: String,
    pub recipe_name: String,
    pub recipe_description: Option<String>,
    pub recipe_ingredients: Vec<String>,
    pub recipe_instructions: Vec<String>,
    pub recipe_cooking_time: String,
    pub recipe_servings: i64,
    pub recipe_difficulty: Difficulty,
    pub sharer_name: Option<String>,
    pub sharer_email: Option<String>,
}

impl SharedListing {
    /// Case-insensitive substring match over the listing title, the recipe
    /// name, and each ingredient line.
    pub fn matches(&self, query: &str) -> bool {
        let query = query.to_lowercase();
        self.title.to_lowercase().contains(&query)
            || self.recipe_name.to_lowercase().contains(&query)
            || self
                .recipe_ingredients
                .iter()
                .any(|ingredient| ingredient.to_lowercase().contains(&query))
    }
}
