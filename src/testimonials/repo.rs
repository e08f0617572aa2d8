use serde::{Deserialize, Serialize};
use sqlx::{FromRow, PgPool};

use super::dto::TestimonialInput;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Testimonial {
    pub id: i32,
    pub client_name: String,
    pub role: String,
    pub text: String,
}

pub async fn list(db: &PgPool) -> anyhow::Result<Vec<Testimonial>> {
    let rows = sqlx::query_as::<_, Testimonial>(
        r#"SELECT id, client_name, role, text FROM testimonials ORDER BY id"#,
    )
    .fetch_all(db)
    .await?;
    Ok(rows)
}

pub async fn create(db: &PgPool, input: &TestimonialInput) -> anyhow::Result<Testimonial> {
    let row = sqlx::query_as::<_, Testimonial>(
        r#"
        INSERT INTO testimonials (client_name, role, text)
        VALUES ($1, $2, $3)
        RETURNING id, client_name, role, text
        "#,
    )
    .bind(&input.client_name)
    .bind(&input.role)
    .bind(&input.text)
    .fetch_one(db)
    .await?;
    Ok(row)
}

pub async fn delete(db: &PgPool, id: i32) -> anyhow::Result<bool> {
    let result = sqlx::query(r#"DELETE FROM testimonials WHERE id = $1"#)
        .bind(id)
        .execute(db)
        .await?;
    Ok(result.rows_affected() > 0)
}
