use serde::{Deserialize, Serialize};
use sqlx::{FromRow, PgPool};

use super::dto::{SkillCategoryInput, SkillInput};

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct SkillCategory {
    pub id: i32,
    pub name: String,
    pub display_order: i32,
}

/// `category` is a soft reference to `SkillCategory.name`. The cascade on
/// category delete lives in `delete_category_cascade`, nowhere else.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Skill {
    pub id: i32,
    pub name: String,
    pub category: String,
}

pub async fn list_categories(db: &PgPool) -> anyhow::Result<Vec<SkillCategory>> {
    let rows = sqlx::query_as::<_, SkillCategory>(
        r#"SELECT id, name, display_order FROM skill_categories ORDER BY display_order"#,
    )
    .fetch_all(db)
    .await?;
    Ok(rows)
}

pub async fn create_category(
    db: &PgPool,
    input: &SkillCategoryInput,
) -> anyhow::Result<SkillCategory> {
    let row = sqlx::query_as::<_, SkillCategory>(
        r#"
        INSERT INTO skill_categories (name, display_order)
        VALUES ($1, $2)
        RETURNING id, name, display_order
        "#,
    )
    .bind(&input.name)
    .bind(input.display_order)
    .fetch_one(db)
    .await?;
    Ok(row)
}

pub async fn update_category(
    db: &PgPool,
    id: i32,
    input: &SkillCategoryInput,
) -> anyhow::Result<Option<SkillCategory>> {
    let row = sqlx::query_as::<_, SkillCategory>(
        r#"
        UPDATE skill_categories
        SET name = $2, display_order = $3
        WHERE id = $1
        RETURNING id, name, display_order
        "#,
    )
    .bind(id)
    .bind(&input.name)
    .bind(input.display_order)
    .fetch_optional(db)
    .await?;
    Ok(row)
}

/// Deletes a category and every skill whose `category` matches its name, in
/// one transaction. Returns false when the category id is unknown; skills in
/// other categories are untouched.
pub async fn delete_category_cascade(db: &PgPool, id: i32) -> anyhow::Result<bool> {
    let mut tx = db.begin().await?;

    let category: Option<(String,)> =
        sqlx::query_as(r#"SELECT name FROM skill_categories WHERE id = $1"#)
            .bind(id)
            .fetch_optional(&mut *tx)
            .await?;

    let Some((name,)) = category else {
        return Ok(false);
    };

    sqlx::query(r#"DELETE FROM skills WHERE category = $1"#)
        .bind(&name)
        .execute(&mut *tx)
        .await?;
    sqlx::query(r#"DELETE FROM skill_categories WHERE id = $1"#)
        .bind(id)
        .execute(&mut *tx)
        .await?;

    tx.commit().await?;
    Ok(true)
}

pub async fn list_skills(db: &PgPool) -> anyhow::Result<Vec<Skill>> {
    let rows = sqlx::query_as::<_, Skill>(r#"SELECT id, name, category FROM skills ORDER BY id"#)
        .fetch_all(db)
        .await?;
    Ok(rows)
}

pub async fn create_skill(db: &PgPool, input: &SkillInput) -> anyhow::Result<Skill> {
    let row = sqlx::query_as::<_, Skill>(
        r#"
        INSERT INTO skills (name, category)
        VALUES ($1, $2)
        RETURNING id, name, category
        "#,
    )
    .bind(&input.name)
    .bind(&input.category)
    .fetch_one(db)
    .await?;
    Ok(row)
}

pub async fn delete_skill(db: &PgPool, id: i32) -> anyhow::Result<bool> {
    let result = sqlx::query(r#"DELETE FROM skills WHERE id = $1"#)
        .bind(id)
        .execute(db)
        .await?;
    Ok(result.rows_affected() > 0)
}
