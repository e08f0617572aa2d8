use serde::{Deserialize, Serialize};
use sqlx::{types::Json, FromRow, PgPool};

use super::dto::ProjectInput;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Project {
    pub id: i32,
    pub title: String,
    pub slug: String,
    pub short_description: String,
    pub detailed_description: String,
    pub stack: Json<Vec<String>>,
    pub category: String,
    pub priority: String,
    pub link: Option<String>,
    pub github_link: Option<String>,
    pub images: Json<Vec<String>>,
    pub featured: bool,
}

const COLUMNS: &str = "id, title, slug, short_description, detailed_description, stack, \
                       category, priority, link, github_link, images, featured";

pub async fn list(db: &PgPool, featured_only: bool) -> anyhow::Result<Vec<Project>> {
    let sql = if featured_only {
        format!("SELECT {COLUMNS} FROM projects WHERE featured = TRUE ORDER BY id")
    } else {
        format!("SELECT {COLUMNS} FROM projects ORDER BY id")
    };
    let rows = sqlx::query_as::<_, Project>(&sql).fetch_all(db).await?;
    Ok(rows)
}

pub async fn get_by_slug(db: &PgPool, slug: &str) -> anyhow::Result<Option<Project>> {
    let row = sqlx::query_as::<_, Project>(&format!(
        "SELECT {COLUMNS} FROM projects WHERE slug = $1"
    ))
    .bind(slug)
    .fetch_optional(db)
    .await?;
    Ok(row)
}

pub async fn create(db: &PgPool, input: &ProjectInput) -> anyhow::Result<Project> {
    let row = sqlx::query_as::<_, Project>(&format!(
        r#"
        INSERT INTO projects (title, slug, short_description, detailed_description, stack,
                              category, priority, link, github_link, images, featured)
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)
        RETURNING {COLUMNS}
        "#
    ))
    .bind(&input.title)
    .bind(&input.slug)
    .bind(&input.short_description)
    .bind(&input.detailed_description)
    .bind(Json(&input.stack))
    .bind(&input.category)
    .bind(&input.priority)
    .bind(&input.link)
    .bind(&input.github_link)
    .bind(Json(&input.images))
    .bind(input.featured)
    .fetch_one(db)
    .await?;
    Ok(row)
}

/// Full-field overwrite of an existing row; `None` when the id is unknown.
pub async fn update(db: &PgPool, id: i32, input: &ProjectInput) -> anyhow::Result<Option<Project>> {
    let row = sqlx::query_as::<_, Project>(&format!(
        r#"
        UPDATE projects
        SET title = $2, slug = $3, short_description = $4, detailed_description = $5,
            stack = $6, category = $7, priority = $8, link = $9, github_link = $10,
            images = $11, featured = $12
        WHERE id = $1
        RETURNING {COLUMNS}
        "#
    ))
    .bind(id)
    .bind(&input.title)
    .bind(&input.slug)
    .bind(&input.short_description)
    .bind(&input.detailed_description)
    .bind(Json(&input.stack))
    .bind(&input.category)
    .bind(&input.priority)
    .bind(&input.link)
    .bind(&input.github_link)
    .bind(Json(&input.images))
    .bind(input.featured)
    .fetch_optional(db)
    .await?;
    Ok(row)
}

pub async fn delete(db: &PgPool, id: i32) -> anyhow::Result<bool> {
    let result = sqlx::query(r#"DELETE FROM projects WHERE id = $1"#)
        .bind(id)
        .execute(db)
        .await?;
    Ok(result.rows_affected() > 0)
}
