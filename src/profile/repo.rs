use serde::{Deserialize, Serialize};
use sqlx::{FromRow, PgPool};

use super::dto::{AboutContentInput, ProfileInput};

/// Singleton row: at most one profile ever exists, enforced by the upsert
/// below rather than the schema.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Profile {
    pub id: i32,
    pub name: String,
    pub bio: String,
    pub role: String,
    pub location: String,
    pub status: String,
    pub whatsapp: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct AboutContent {
    pub id: i32,
    pub intro1: String,
    pub intro2: String,
}

impl Profile {
    pub async fn get(db: &PgPool) -> anyhow::Result<Option<Profile>> {
        let row = sqlx::query_as::<_, Profile>(
            r#"SELECT id, name, bio, role, location, status, whatsapp FROM profile LIMIT 1"#,
        )
        .fetch_optional(db)
        .await?;
        Ok(row)
    }

    /// Create-if-absent, else full-field overwrite of the existing row.
    /// Concurrent writers race benignly: last writer wins.
    pub async fn upsert(db: &PgPool, input: &ProfileInput) -> anyhow::Result<Profile> {
        let existing: Option<(i32,)> = sqlx::query_as(r#"SELECT id FROM profile LIMIT 1"#)
            .fetch_optional(db)
            .await?;

        let row = match existing {
            Some((id,)) => {
                sqlx::query_as::<_, Profile>(
                    r#"
                    UPDATE profile
                    SET name = $2, bio = $3, role = $4, location = $5, status = $6, whatsapp = $7
                    WHERE id = $1
                    RETURNING id, name, bio, role, location, status, whatsapp
                    "#,
                )
                .bind(id)
                .bind(&input.name)
                .bind(&input.bio)
                .bind(&input.role)
                .bind(&input.location)
                .bind(&input.status)
                .bind(input.whatsapp.as_deref().unwrap_or(""))
                .fetch_one(db)
                .await?
            }
            None => {
                sqlx::query_as::<_, Profile>(
                    r#"
                    INSERT INTO profile (name, bio, role, location, status, whatsapp)
                    VALUES ($1, $2, $3, $4, $5, $6)
                    RETURNING id, name, bio, role, location, status, whatsapp
                    "#,
                )
                .bind(&input.name)
                .bind(&input.bio)
                .bind(&input.role)
                .bind(&input.location)
                .bind(&input.status)
                .bind(input.whatsapp.as_deref().unwrap_or(""))
                .fetch_one(db)
                .await?
            }
        };
        Ok(row)
    }
}

impl AboutContent {
    pub async fn get(db: &PgPool) -> anyhow::Result<Option<AboutContent>> {
        let row = sqlx::query_as::<_, AboutContent>(
            r#"SELECT id, intro1, intro2 FROM about_content LIMIT 1"#,
        )
        .fetch_optional(db)
        .await?;
        Ok(row)
    }

    pub async fn upsert(db: &PgPool, input: &AboutContentInput) -> anyhow::Result<AboutContent> {
        let existing: Option<(i32,)> = sqlx::query_as(r#"SELECT id FROM about_content LIMIT 1"#)
            .fetch_optional(db)
            .await?;

        let row = match existing {
            Some((id,)) => {
                sqlx::query_as::<_, AboutContent>(
                    r#"
                    UPDATE about_content
                    SET intro1 = $2, intro2 = $3
                    WHERE id = $1
                    RETURNING id, intro1, intro2
                    "#,
                )
                .bind(id)
                .bind(&input.intro1)
                .bind(&input.intro2)
                .fetch_one(db)
                .await?
            }
            None => {
                sqlx::query_as::<_, AboutContent>(
                    r#"
                    INSERT INTO about_content (intro1, intro2)
                    VALUES ($1, $2)
                    RETURNING id, intro1, intro2
                    "#,
                )
                .bind(&input.intro1)
                .bind(&input.intro2)
                .fetch_one(db)
                .await?
            }
        };
        Ok(row)
    }
}
