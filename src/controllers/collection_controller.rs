use sqlx::SqlitePool;

use crate::error::{PantryChefError, Result};
use crate::models::CollectionRecord;

const COLLECTION_COLUMNS: &str =
    "id, user_id, name, description, color, is_public, created_at, updated_at";

/// Create a collection owned by `user_id`. Returns the new collection's id.
pub async fn create_collection(
    pool: &SqlitePool,
    user_id: i64,
    name: &str,
    description: Option<&str>,
    color: &str,
    is_public: bool,
) -> Result<i64> {
    let id = sqlx::query(
        "INSERT INTO collections (user_id, name, description, color, is_public) VALUES (?, ?, ?, ?, ?)",
    )
    .bind(user_id)
    .bind(name)
    .bind(description)
    .bind(color)
    .bind(is_public)
    .execute(pool)
    .await?
    .last_insert_rowid();

    Ok(id)
}

/// Fetch one collection, scoped to its owner.
pub async fn get_collection(pool: &SqlitePool, user_id: i64, id: i64) -> Result<CollectionRecord> {
    sqlx::query_as::<_, CollectionRecord>(&format!(
        "SELECT {COLLECTION_COLUMNS} FROM collections WHERE id = ? AND user_id = ?"
    ))
    .bind(id)
    .bind(user_id)
    .fetch_optional(pool)
    .await?
    .ok_or(PantryChefError::CollectionNotFound(id))
}

/// All collections owned by `user_id`, newest first.
pub async fn get_user_collections(
    pool: &SqlitePool,
    user_id: i64,
) -> Result<Vec<CollectionRecord>> {
    let collections = sqlx::query_as::<_, CollectionRecord>(&format!(
        "SELECT {COLLECTION_COLUMNS} FROM collections WHERE user_id = ? ORDER BY created_at DESC, id DESC"
    ))
    .bind(user_id)
    .fetch_all(pool)
    .await?;

    Ok(collections)
}

/// Partial update of a collection's fields; `None` keeps the stored value.
/// Returns the updated row.
pub async fn update_collection(
    pool: &SqlitePool,
    user_id: i64,
    id: i64,
    name: Option<&str>,
    description: Option<&str>,
    color: Option<&str>,
    is_public: Option<bool>,
) -> Result<CollectionRecord> {
    sqlx::query(
        r#"
        UPDATE collections
        SET name = COALESCE(?, name),
            description = COALESCE(?, description),
            color = COALESCE(?, color),
            is_public = COALESCE(?, is_public),
            updated_at = datetime('now')
        WHERE id = ? AND user_id = ?
        "#,
    )
    .bind(name)
    .bind(description)
    .bind(color)
    .bind(is_public)
    .bind(id)
    .bind(user_id)
    .execute(pool)
    .await?;

    get_collection(pool, user_id, id).await
}

/// Delete a collection and everything saved inside it.
///
/// Scoped to the owner: a non-owner `user_id` deletes nothing and the call
/// still succeeds, the way a row-level-security backend behaves.
pub async fn delete_collection(pool: &SqlitePool, user_id: i64, id: i64) -> Result<()> {
    let mut tx = pool.begin().await?;

    sqlx::query(
        "DELETE FROM recipes WHERE collection_id IN (SELECT id FROM collections WHERE id = ? AND user_id = ?)",
    )
    .bind(id)
    .bind(user_id)
    .execute(&mut *tx)
    .await?;

    sqlx::query("DELETE FROM collections WHERE id = ? AND user_id = ?")
        .bind(id)
        .bind(user_id)
        .execute(&mut *tx)
        .await?;

    tx.commit().await?;

    Ok(())
}
