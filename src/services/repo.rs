use serde::{Deserialize, Serialize};
use sqlx::{types::Json, FromRow, PgPool};

use super::dto::ServiceInput;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Service {
    pub id: i32,
    pub title: String,
    pub short_description: String,
    pub detailed_description: String,
    pub price_from: String,
    pub deliverables: Json<Vec<String>>,
    pub stack: Json<Vec<String>>,
    pub is_active: bool,
}

const COLUMNS: &str = "id, title, short_description, detailed_description, price_from, \
                       deliverables, stack, is_active";

/// Public listing only shows active services.
pub async fn list_active(db: &PgPool) -> anyhow::Result<Vec<Service>> {
    let rows = sqlx::query_as::<_, Service>(&format!(
        "SELECT {COLUMNS} FROM services WHERE is_active = TRUE ORDER BY id"
    ))
    .fetch_all(db)
    .await?;
    Ok(rows)
}

pub async fn create(db: &PgPool, input: &ServiceInput) -> anyhow::Result<Service> {
    let row = sqlx::query_as::<_, Service>(&format!(
        r#"
        INSERT INTO services (title, short_description, detailed_description, price_from,
                              deliverables, stack, is_active)
        VALUES ($1, $2, $3, $4, $5, $6, $7)
        RETURNING {COLUMNS}
        "#
    ))
    .bind(&input.title)
    .bind(&input.short_description)
    .bind(&input.detailed_description)
    .bind(&input.price_from)
    .bind(Json(&input.deliverables))
    .bind(Json(&input.stack))
    .bind(input.is_active)
    .fetch_one(db)
    .await?;
    Ok(row)
}

pub async fn update(db: &PgPool, id: i32, input: &ServiceInput) -> anyhow::Result<Option<Service>> {
    let row = sqlx::query_as::<_, Service>(&format!(
        r#"
        UPDATE services
        SET title = $2, short_description = $3, detailed_description = $4, price_from = $5,
            deliverables = $6, stack = $7, is_active = $8
        WHERE id = $1
        RETURNING {COLUMNS}
        "#
    ))
    .bind(id)
    .bind(&input.title)
    .bind(&input.short_description)
    .bind(&input.detailed_description)
    .bind(&input.price_from)
    .bind(Json(&input.deliverables))
    .bind(Json(&input.stack))
    .bind(input.is_active)
    .fetch_optional(db)
    .await?;
    Ok(row)
}

pub async fn delete(db: &PgPool, id: i32) -> anyhow::Result<bool> {
    let result = sqlx::query(r#"DELETE FROM services WHERE id = $1"#)
        .bind(id)
        .execute(db)
        .await?;
    Ok(result.rows_affected() > 0)
}
