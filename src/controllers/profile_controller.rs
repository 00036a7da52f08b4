use sqlx::SqlitePool;

use crate::error::Result;
use crate::models::ProfileRecord;

const PROFILE_COLUMNS: &str = "id, email, full_name, avatar_url, created_at, updated_at";

/// Create a profile row. The returned id stands in for the hosted-auth
/// user id everywhere else in the store.
pub async fn create_profile(
    pool: &SqlitePool,
    email: Option<&str>,
    full_name: Option<&str>,
) -> Result<i64> {
    let id = sqlx::query("INSERT INTO profiles (email, full_name) VALUES (?, ?)")
        .bind(email)
        .bind(full_name)
        .execute(pool)
        .await?
        .last_insert_rowid();

    Ok(id)
}

/// Profiles by id; attribution data for the discovery feed.
pub async fn get_profiles_by_ids(pool: &SqlitePool, ids: &[i64]) -> Result<Vec<ProfileRecord>> {
    if ids.is_empty() {
        return Ok(Vec::new());
    }

    let placeholders = vec!["?"; ids.len()].join(", ");
    let sql = format!("SELECT {PROFILE_COLUMNS} FROM profiles WHERE id IN ({placeholders})");

    let mut query = sqlx::query_as::<_, ProfileRecord>(&sql);
    for id in ids {
        query = query.bind(id);
    }

    Ok(query.fetch_all(pool).await?)
}
