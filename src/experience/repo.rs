use serde::{Deserialize, Serialize};
use sqlx::{FromRow, PgPool};

use super::dto::{ExperienceInput, TimelineItemInput};

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Experience {
    pub id: i32,
    pub title: String,
    pub company: String,
    pub start_date: String, // YYYY-MM
    pub end_date: Option<String>,
    pub current: bool,
    pub description: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct TimelineItem {
    pub id: i32,
    pub date: String, // YYYY-MM
    pub title: String,
    pub description: String,
}

pub async fn list_experiences(db: &PgPool) -> anyhow::Result<Vec<Experience>> {
    let rows = sqlx::query_as::<_, Experience>(
        r#"
        SELECT id, title, company, start_date, end_date, current, description
        FROM experiences
        ORDER BY id
        "#,
    )
    .fetch_all(db)
    .await?;
    Ok(rows)
}

pub async fn create_experience(db: &PgPool, input: &ExperienceInput) -> anyhow::Result<Experience> {
    let row = sqlx::query_as::<_, Experience>(
        r#"
        INSERT INTO experiences (title, company, start_date, end_date, current, description)
        VALUES ($1, $2, $3, $4, $5, $6)
        RETURNING id, title, company, start_date, end_date, current, description
        "#,
    )
    .bind(&input.title)
    .bind(&input.company)
    .bind(&input.start_date)
    .bind(&input.end_date)
    .bind(input.current)
    .bind(&input.description)
    .fetch_one(db)
    .await?;
    Ok(row)
}

pub async fn update_experience(
    db: &PgPool,
    id: i32,
    input: &ExperienceInput,
) -> anyhow::Result<Option<Experience>> {
    let row = sqlx::query_as::<_, Experience>(
        r#"
        UPDATE experiences
        SET title = $2, company = $3, start_date = $4, end_date = $5, current = $6,
            description = $7
        WHERE id = $1
        RETURNING id, title, company, start_date, end_date, current, description
        "#,
    )
    .bind(id)
    .bind(&input.title)
    .bind(&input.company)
    .bind(&input.start_date)
    .bind(&input.end_date)
    .bind(input.current)
    .bind(&input.description)
    .fetch_optional(db)
    .await?;
    Ok(row)
}

pub async fn delete_experience(db: &PgPool, id: i32) -> anyhow::Result<bool> {
    let result = sqlx::query(r#"DELETE FROM experiences WHERE id = $1"#)
        .bind(id)
        .execute(db)
        .await?;
    Ok(result.rows_affected() > 0)
}

pub async fn list_timeline(db: &PgPool) -> anyhow::Result<Vec<TimelineItem>> {
    let rows = sqlx::query_as::<_, TimelineItem>(
        r#"SELECT id, "date", title, description FROM timeline ORDER BY id"#,
    )
    .fetch_all(db)
    .await?;
    Ok(rows)
}

pub async fn create_timeline_item(
    db: &PgPool,
    input: &TimelineItemInput,
) -> anyhow::Result<TimelineItem> {
    let row = sqlx::query_as::<_, TimelineItem>(
        r#"
        INSERT INTO timeline ("date", title, description)
        VALUES ($1, $2, $3)
        RETURNING id, "date", title, description
        "#,
    )
    .bind(&input.date)
    .bind(&input.title)
    .bind(&input.description)
    .fetch_one(db)
    .await?;
    Ok(row)
}

pub async fn update_timeline_item(
    db: &PgPool,
    id: i32,
    input: &TimelineItemInput,
) -> anyhow::Result<Option<TimelineItem>> {
    let row = sqlx::query_as::<_, TimelineItem>(
        r#"
        UPDATE timeline
        SET "date" = $2, title = $3, description = $4
        WHERE id = $1
        RETURNING id, "date", title, description
        "#,
    )
    .bind(id)
    .bind(&input.date)
    .bind(&input.title)
    .bind(&input.description)
    .fetch_optional(db)
    .await?;
    Ok(row)
}

pub async fn delete_timeline_item(db: &PgPool, id: i32) -> anyhow::Result<bool> {
    let result = sqlx::query(r#"DELETE FROM timeline WHERE id = $1"#)
        .bind(id)
        .execute(db)
        .await?;
    Ok(result.rows_affected() > 0)
}
