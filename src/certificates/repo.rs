use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use sqlx::{FromRow, PgPool};
use time::OffsetDateTime;

use super::import::CertificateImport;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Certificate {
    pub id: i32,
    pub title: String,
    pub issuer: String,
    #[serde(with = "time::serde::rfc3339")]
    pub date: OffsetDateTime,
    pub url: Option<String>,
}

pub async fn list(db: &PgPool) -> anyhow::Result<Vec<Certificate>> {
    let rows = sqlx::query_as::<_, Certificate>(
        r#"SELECT id, title, issuer, "date", url FROM certificates ORDER BY "date" DESC"#,
    )
    .fetch_all(db)
    .await?;
    Ok(rows)
}

/// Inserts the parsed rows whose titles are not already present, in one
/// transaction. Returns the number of newly inserted rows.
pub async fn insert_new(db: &PgPool, rows: &[CertificateImport]) -> anyhow::Result<u64> {
    let existing: Vec<(String,)> = sqlx::query_as(r#"SELECT title FROM certificates"#)
        .fetch_all(db)
        .await?;
    let existing: HashSet<String> = existing.into_iter().map(|(t,)| t).collect();

    let mut tx = db.begin().await?;
    let mut inserted = 0u64;
    for row in rows {
        if existing.contains(&row.title) {
            continue;
        }
        sqlx::query(r#"INSERT INTO certificates (title, issuer, url) VALUES ($1, $2, $3)"#)
            .bind(&row.title)
            .bind(&row.issuer)
            .bind(&row.url)
            .execute(&mut *tx)
            .await?;
        inserted += 1;
    }
    tx.commit().await?;
    Ok(inserted)
}
