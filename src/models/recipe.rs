use sqlx::prelude::FromRow;

use crate::models::Difficulty;

/// A recipe saved inside a collection, as stored.
///
/// Saving the same generated recipe into two collections produces two
/// independent rows; there is no shared ownership across collections.
#[derive(Debug, Clone, FromRow)]
pub struct RecipeRecord {
    pub id: i64,
    pub collection_id: i64,
    pub name: String,
    pub description: Option<String>,
    #[sqlx(json)]
    pub ingredients: Vec<String>,
    #[sqlx(json)]
    pub instructions: Vec<String>,
    pub cooking_time: String,
    pub servings: i64,
    pub difficulty: Difficulty,
    #[sqlx(json(nullable))]
    pub source_ingredients: Option<Vec<String>>,
    pub created_at: String,
    pub updated_at: String,
}
