use serde::{Deserialize, Serialize};
use sqlx::{FromRow, PgPool};

/// The single administrator identity. At most one row ever exists; the
/// cardinality is enforced by the setup handler, not the schema.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Admin {
    pub id: i32,
    pub username: String,
    #[serde(skip_serializing)]
    pub password_hash: String,
}

impl Admin {
    pub async fn find_by_username(db: &PgPool, username: &str) -> anyhow::Result<Option<Admin>> {
        let admin = sqlx::query_as::<_, Admin>(
            r#"
            SELECT id, username, password_hash
            FROM admins
            WHERE username = $1
            "#,
        )
        .bind(username)
        .fetch_optional(db)
        .await?;
        Ok(admin)
    }

    /// True when any admin identity has been bootstrapped.
    pub async fn any_exists(db: &PgPool) -> anyhow::Result<bool> {
        let (exists,): (bool,) = sqlx::query_as(r#"SELECT EXISTS (SELECT 1 FROM admins)"#)
            .fetch_one(db)
            .await?;
        Ok(exists)
    }

    pub async fn create(db: &PgPool, username: &str, password_hash: &str) -> anyhow::Result<Admin> {
        let admin = sqlx::query_as::<_, Admin>(
            r#"
            INSERT INTO admins (username, password_hash)
            VALUES ($1, $2)
            RETURNING id, username, password_hash
            "#,
        )
        .bind(username)
        .bind(password_hash)
        .fetch_one(db)
        .await?;
        Ok(admin)
    }
}
