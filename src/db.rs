use anyhow::Context;
use sqlx::PgPool;
use tracing::debug;

/// Idempotent startup schema. There is no migration framework: every
/// statement tolerates re-running, and later column additions are applied as
/// `ADD COLUMN IF NOT EXISTS` after the base tables exist.
const CREATE_TABLES: &[&str] = &[
    r#"CREATE TABLE IF NOT EXISTS admins (
        id            SERIAL PRIMARY KEY,
        username      TEXT NOT NULL UNIQUE,
        password_hash TEXT NOT NULL
    )"#,
    r#"CREATE TABLE IF NOT EXISTS profile (
        id       SERIAL PRIMARY KEY,
        name     TEXT NOT NULL,
        bio      TEXT NOT NULL,
        role     TEXT NOT NULL,
        location TEXT NOT NULL,
        status   TEXT NOT NULL
    )"#,
    r#"CREATE TABLE IF NOT EXISTS projects (
        id                   SERIAL PRIMARY KEY,
        title                TEXT NOT NULL,
        slug                 TEXT NOT NULL UNIQUE,
        short_description    TEXT NOT NULL,
        detailed_description TEXT NOT NULL,
        stack                JSONB NOT NULL DEFAULT '[]',
        category             TEXT NOT NULL,
        priority             TEXT NOT NULL DEFAULT 'Medium',
        link                 TEXT,
        github_link          TEXT,
        images               JSONB NOT NULL DEFAULT '[]'
    )"#,
    r#"CREATE TABLE IF NOT EXISTS services (
        id                   SERIAL PRIMARY KEY,
        title                TEXT NOT NULL,
        short_description    TEXT NOT NULL,
        detailed_description TEXT NOT NULL,
        price_from           TEXT NOT NULL,
        deliverables         JSONB NOT NULL DEFAULT '[]',
        stack                JSONB NOT NULL DEFAULT '[]',
        is_active            BOOLEAN NOT NULL DEFAULT TRUE
    )"#,
    r#"CREATE TABLE IF NOT EXISTS messages (
        id        SERIAL PRIMARY KEY,
        name      TEXT NOT NULL,
        email     TEXT NOT NULL,
        "type"    TEXT NOT NULL,
        budget    TEXT,
        whatsapp  TEXT,
        message   TEXT NOT NULL,
        "read"    BOOLEAN NOT NULL DEFAULT FALSE,
        timestamp TIMESTAMPTZ NOT NULL DEFAULT now()
    )"#,
    r#"CREATE TABLE IF NOT EXISTS certificates (
        id     SERIAL PRIMARY KEY,
        title  TEXT NOT NULL,
        issuer TEXT NOT NULL,
        "date" TIMESTAMPTZ NOT NULL DEFAULT now(),
        url    TEXT
    )"#,
    r#"CREATE TABLE IF NOT EXISTS analytics (
        id        SERIAL PRIMARY KEY,
        ip_hash   TEXT NOT NULL,
        path      TEXT NOT NULL,
        timestamp TIMESTAMPTZ NOT NULL DEFAULT now()
    )"#,
    r#"CREATE INDEX IF NOT EXISTS analytics_ip_hash_idx ON analytics (ip_hash)"#,
    r#"CREATE TABLE IF NOT EXISTS testimonials (
        id          SERIAL PRIMARY KEY,
        client_name TEXT NOT NULL,
        role        TEXT NOT NULL,
        text        TEXT NOT NULL
    )"#,
    r#"CREATE TABLE IF NOT EXISTS about_content (
        id     SERIAL PRIMARY KEY,
        intro1 TEXT NOT NULL,
        intro2 TEXT NOT NULL
    )"#,
    r#"CREATE TABLE IF NOT EXISTS experiences (
        id          SERIAL PRIMARY KEY,
        title       TEXT NOT NULL,
        company     TEXT NOT NULL,
        start_date  TEXT NOT NULL,
        end_date    TEXT,
        current     BOOLEAN NOT NULL DEFAULT FALSE,
        description TEXT NOT NULL
    )"#,
    r#"CREATE TABLE IF NOT EXISTS timeline (
        id          SERIAL PRIMARY KEY,
        "date"      TEXT NOT NULL,
        title       TEXT NOT NULL,
        description TEXT NOT NULL
    )"#,
    r#"CREATE TABLE IF NOT EXISTS skill_categories (
        id            SERIAL PRIMARY KEY,
        name          TEXT NOT NULL UNIQUE,
        display_order INTEGER NOT NULL DEFAULT 0
    )"#,
    r#"CREATE TABLE IF NOT EXISTS skills (
        id       SERIAL PRIMARY KEY,
        name     TEXT NOT NULL,
        category TEXT NOT NULL
    )"#,
];

/// Columns added after the initial schema shipped.
const ADD_COLUMNS: &[&str] = &[
    r#"ALTER TABLE profile ADD COLUMN IF NOT EXISTS whatsapp TEXT NOT NULL DEFAULT ''"#,
    r#"ALTER TABLE projects ADD COLUMN IF NOT EXISTS featured BOOLEAN NOT NULL DEFAULT FALSE"#,
];

pub async fn ensure_schema(db: &PgPool) -> anyhow::Result<()> {
    for stmt in CREATE_TABLES.iter().chain(ADD_COLUMNS) {
        sqlx::query(stmt)
            .execute(db)
            .await
            .with_context(|| format!("schema statement failed: {}", &stmt[..40.min(stmt.len())]))?;
    }
    debug!("schema ensured");
    Ok(())
}
