use serde::{Deserialize, Serialize};
use sqlx::{FromRow, PgPool};
use time::OffsetDateTime;

use super::dto::MessageInput;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Message {
    pub id: i32,
    pub name: String,
    pub email: String,
    #[serde(rename = "type")]
    #[sqlx(rename = "type")]
    pub message_type: String,
    pub budget: Option<String>,
    pub whatsapp: Option<String>,
    pub message: String,
    pub read: bool,
    #[serde(with = "time::serde::rfc3339")]
    pub timestamp: OffsetDateTime,
}

const COLUMNS: &str = r#"id, name, email, "type", budget, whatsapp, message, "read", timestamp"#;

pub async fn insert(db: &PgPool, input: &MessageInput) -> anyhow::Result<Message> {
    let row = sqlx::query_as::<_, Message>(&format!(
        r#"
        INSERT INTO messages (name, email, "type", budget, whatsapp, message)
        VALUES ($1, $2, $3, $4, $5, $6)
        RETURNING {COLUMNS}
        "#
    ))
    .bind(&input.name)
    .bind(&input.email)
    .bind(&input.message_type)
    .bind(&input.budget)
    .bind(&input.whatsapp)
    .bind(&input.message)
    .fetch_one(db)
    .await?;
    Ok(row)
}

/// Inbox view, newest first.
pub async fn list_desc(db: &PgPool) -> anyhow::Result<Vec<Message>> {
    let rows = sqlx::query_as::<_, Message>(&format!(
        "SELECT {COLUMNS} FROM messages ORDER BY timestamp DESC"
    ))
    .fetch_all(db)
    .await?;
    Ok(rows)
}
