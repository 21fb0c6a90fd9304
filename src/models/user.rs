use sqlx::{FromRow, PgPool};

/// A user as offered in a select input: id plus display name.
#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct UserOption {
    pub id: i64,
    pub name: String,
}

impl UserOption {
    pub fn new(id: i64, name: impl Into<String>) -> Self {
        Self { id, name: name.into() }
    }
}

/// All users, display label falling back to the login name, sorted by name.
pub async fn find_options(pool: &PgPool) -> Result<Vec<UserOption>, sqlx::Error> {
    sqlx::query_as::<_, UserOption>(
        "SELECT id, COALESCE(NULLIF(label, ''), name) AS name \
         FROM entities \
         WHERE entity_type = 'user' \
         ORDER BY name, id",
    )
    .fetch_all(pool)
    .await
}
