use sqlx::prelude::FromRow;

/// A user-owned named group of saved recipes.
#[derive(Debug, Clone, FromRow)]
pub struct CollectionRecord {
    pub id: i64,
    pub user_id: i64,
    pub name: String,
    pub description: Option<String>,
    pub color: String,
    pub is_public: bool,
    pub created_at: String,
    pub updated_at: String,
}
