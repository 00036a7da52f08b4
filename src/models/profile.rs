use sqlx::prelude::FromRow;

/// A user profile, the attribution side of shared listings.
///
/// The id stands in for the hosted-auth user id; every owned row in the
/// other tables points back at it.
#[derive(Debug, Clone, FromRow)]
pub struct ProfileRecord {
    pub id: i64,
    pub email: Option<String>,
    pub full_name: Option<String>,
    pub avatar_url: Option<String>,
    pub created_at: String,
    pub updated_at: String,
}
