use sqlx::SqlitePool;
use sqlx::types::Json;

use crate::error::{PantryChefError, Result};
use crate::models::RecipeRecord;
use crate::models::api::NewRecipe;

const RECIPE_COLUMNS: &str = "id, collection_id, name, description, ingredients, instructions, cooking_time, servings, difficulty, source_ingredients, created_at, updated_at";

/// Save a recipe into a collection owned by `user_id`.
///
/// Each save is an independent copy; saving one generated recipe into two
/// collections produces two unrelated rows.
pub async fn add_recipe_to_collection(
    pool: &SqlitePool,
    user_id: i64,
    collection_id: i64,
    recipe: &NewRecipe,
) -> Result<i64> {
    // The target collection must belong to the caller
    let owned: Option<i64> =
        sqlx::query_scalar("SELECT id FROM collections WHERE id = ? AND user_id = ?")
            .bind(collection_id)
            .bind(user_id)
            .fetch_optional(pool)
            .await?;

    if owned.is_none() {
        return Err(PantryChefError::CollectionNotFound(collection_id));
    }

    let id = sqlx::query(
        "INSERT INTO recipes (collection_id, name, description, ingredients, instructions, cooking_time, servings, difficulty, source_ingredients) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?)",
    )
    .bind(collection_id)
    .bind(&recipe.name)
    .bind(&recipe.description)
    .bind(Json(&recipe.ingredients))
    .bind(Json(&recipe.instructions))
    .bind(&recipe.cooking_time)
    .bind(recipe.servings)
    .bind(recipe.difficulty)
    .bind(recipe.source_ingredients.as_ref().map(Json))
    .execute(pool)
    .await?
    .last_insert_rowid();

    Ok(id)
}

/// Fetch a saved recipe by id.
pub async fn get_recipe(pool: &SqlitePool, recipe_id: i64) -> Result<RecipeRecord> {
    sqlx::query_as::<_, RecipeRecord>(&format!(
        "SELECT {RECIPE_COLUMNS} FROM recipes WHERE id = ?"
    ))
    .bind(recipe_id)
    .fetch_optional(pool)
    .await?
    .ok_or(PantryChefError::RecipeNotFound(recipe_id))
}

/// Remove one saved recipe from one collection, scoped to the owner.
pub async fn remove_recipe_from_collection(
    pool: &SqlitePool,
    user_id: i64,
    collection_id: i64,
    recipe_id: i64,
) -> Result<()> {
    sqlx::query(
        "DELETE FROM recipes WHERE id = ? AND collection_id = ? AND collection_id IN (SELECT id FROM collections WHERE user_id = ?)",
    )
    .bind(recipe_id)
    .bind(collection_id)
    .bind(user_id)
    .execute(pool)
    .await?;

    Ok(())
}

/// Saved recipes across the given collections. Backs the repository cache.
pub async fn get_recipes_for_collections(
    pool: &SqlitePool,
    collection_ids: &[i64],
) -> Result<Vec<RecipeRecord>> {
    fetch_recipes_in(pool, "collection_id", collection_ids).await
}

/// Saved recipes by id. Backs the discovery join.
pub async fn get_recipes_by_ids(pool: &SqlitePool, ids: &[i64]) -> Result<Vec<RecipeRecord>> {
    fetch_recipes_in(pool, "id", ids).await
}

async fn fetch_recipes_in(
    pool: &SqlitePool,
    column: &str,
    values: &[i64],
) -> Result<Vec<RecipeRecord>> {
    if values.is_empty() {
        return Ok(Vec::new());
    }

    // sqlite has no array binds; expand one placeholder per value
    let placeholders = vec!["?"; values.len()].join(", ");
    let sql = format!(
        "SELECT {RECIPE_COLUMNS} FROM recipes WHERE {column} IN ({placeholders}) ORDER BY id"
    );

    let mut query = sqlx::query_as::<_, RecipeRecord>(&sql);
    for value in values {
        query = query.bind(value);
    }

    Ok(query.fetch_all(pool).await?)
}
