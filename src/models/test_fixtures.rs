use rstest::*;
use sqlx::{SqlitePool, sqlite::SqlitePoolOptions};

/// Test fixture that creates an in-memory SQLite database with migrations applied
///
/// This fixture can be imported and used across all model tests to ensure
/// consistency in test database setup.
#[fixture]
pub async fn test_db() -> SqlitePool {
    // Create an in-memory SQLite database
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect("sqlite::memory:")
        .await
        .expect("Failed to create in-memory database");

    // Run migrations
    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .expect("Failed to run migrations");

    pool
}

/// Insert a profile plus one collection owned by it; returns (user_id, collection_id).
pub async fn seed_collection(pool: &SqlitePool, name: &str) -> (i64, i64) {
    let user_id = sqlx::query("INSERT INTO profiles (email) VALUES (?)")
        .bind(format!("{}@example.com", name.to_lowercase().replace(' ', ".")))
        .execute(pool)
        .await
        .expect("Failed to insert profile")
        .last_insert_rowid();

    let collection_id = sqlx::query("INSERT INTO collections (user_id, name) VALUES (?, ?)")
        .bind(user_id)
        .bind(name)
        .execute(pool)
        .await
        .expect("Failed to insert collection")
        .last_insert_rowid();

    (user_id, collection_id)
}
