use sqlx::SqlitePool;

use crate::error::Result;
use crate::models::SharedRecipeRecord;

const SHARED_COLUMNS: &str =
    "id, recipe_id, shared_by, title, description, is_active, view_count, created_at";

/// Publish a saved recipe to the community feed. Returns the listing id.
pub async fn share_recipe(
    pool: &SqlitePool,
    user_id: i64,
    recipe_id: i64,
    title: &str,
    description: Option<&str>,
) -> Result<i64> {
    let id = sqlx::query(
        "INSERT INTO shared_recipes (recipe_id, shared_by, title, description) VALUES (?, ?, ?, ?)",
    )
    .bind(recipe_id)
    .bind(user_id)
    .bind(title)
    .bind(description)
    .execute(pool)
    .await?
    .last_insert_rowid();

    Ok(id)
}

/// All active listings, newest first.
pub async fn get_active_shared_recipes(pool: &SqlitePool) -> Result<Vec<SharedRecipeRecord>> {
    let shared = sqlx::query_as::<_, SharedRecipeRecord>(&format!(
        "SELECT {SHARED_COLUMNS} FROM shared_recipes WHERE is_active = 1 ORDER BY created_at DESC, id DESC"
    ))
    .fetch_all(pool)
    .await?;

    Ok(shared)
}

/// Bump the view counter on every listing of `recipe_id`.
///
/// This is the remote half of a best-effort operation; callers treat a
/// failure as non-fatal and keep their optimistic local count.
pub async fn increment_view_count(pool: &SqlitePool, recipe_id: i64) -> Result<()> {
    sqlx::query("UPDATE shared_recipes SET view_count = view_count + 1 WHERE recipe_id = ?")
        .bind(recipe_id)
        .execute(pool)
        .await?;

    Ok(())
}
