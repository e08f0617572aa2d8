use sqlx::PgPool;

/// Appends one visit row. Rows are append-only: nothing in the API ever
/// updates or deletes them.
pub async fn insert_visit(db: &PgPool, ip_hash: &str, path: &str) -> anyhow::Result<()> {
    sqlx::query(r#"INSERT INTO analytics (ip_hash, path) VALUES ($1, $2)"#)
        .bind(ip_hash)
        .bind(path)
        .execute(db)
        .await?;
    Ok(())
}

/// Both counts are recomputed per call. Write volume is personal-site scale,
/// so a fresh `COUNT(DISTINCT ...)` is cheaper than maintaining an
/// incremental structure.
pub async fn stats(db: &PgPool) -> anyhow::Result<(i64, i64)> {
    let (total, unique): (i64, i64) = sqlx::query_as(
        r#"SELECT COUNT(*), COUNT(DISTINCT ip_hash) FROM analytics"#,
    )
    .fetch_one(db)
    .await?;
    Ok((total, unique))
}
