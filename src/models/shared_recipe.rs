use sqlx::prelude::FromRow;

/// A public listing pointing at a saved recipe.
///
/// `recipe_id` is a weak reference: the listing survives deletion of the
/// recipe it points at, and the discovery join is responsible for filtering
/// such dangling rows out.
#[derive(Debug, Clone, FromRow)]
pub struct SharedRecipeRecord {
    pub id: i64,
    pub recipe_id: i64,
    pub shared_by: i64,
    pub title: String,
    pub description: Option<String>,
    pub is_active: bool,
    pub view_count: i64,
    pub created_at: String,
}
