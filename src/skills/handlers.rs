use axum::{
    extract::{Path, State},
    routing::{delete, get},
    Json, Router,
};
use tracing::{info, instrument};

use crate::{auth::jwt::AdminUser, error::ApiError, state::AppState};

use super::dto::{SkillCategoryInput, SkillInput};
use super::repo::{self, Skill, SkillCategory};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route(
            "/skill-categories",
            get(list_categories).post(create_category),
        )
        .route(
            "/skill-categories/:id",
            axum::routing::put(update_category).delete(delete_category),
        )
        .route("/skills", get(list_skills).post(create_skill))
        .route("/skills/:id", delete(delete_skill))
}

#[instrument(skip(state))]
pub async fn list_categories(
    State(state): State<AppState>,
) -> Result<Json<Vec<SkillCategory>>, ApiError> {
    let categories = repo::list_categories(&state.db).await?;
    Ok(Json(categories))
}

#[instrument(skip(state, input))]
pub async fn create_category(
    State(state): State<AppState>,
    AdminUser(username): AdminUser,
    Json(input): Json<SkillCategoryInput>,
) -> Result<Json<SkillCategory>, ApiError> {
    let category = repo::create_category(&state.db, &input).await.map_err(|e| {
        match e.downcast_ref::<sqlx::Error>() {
            Some(sqlx::Error::Database(db_err)) if db_err.is_unique_violation() => {
                ApiError::Conflict("skill category already exists")
            }
            _ => ApiError::Internal(e),
        }
    })?;
    info!(admin = %username, name = %category.name, "skill category created");
    Ok(Json(category))
}

#[instrument(skip(state, input))]
pub async fn update_category(
    State(state): State<AppState>,
    AdminUser(username): AdminUser,
    Path(id): Path<i32>,
    Json(input): Json<SkillCategoryInput>,
) -> Result<Json<SkillCategory>, ApiError> {
    let category = repo::update_category(&state.db, id, &input)
        .await?
        .ok_or(ApiError::NotFound("Category"))?;
    info!(admin = %username, id, "skill category updated");
    Ok(Json(category))
}

/// Removes the category and all skills referencing it by name.
#[instrument(skip(state))]
pub async fn delete_category(
    State(state): State<AppState>,
    AdminUser(username): AdminUser,
    Path(id): Path<i32>,
) -> Result<Json<serde_json::Value>, ApiError> {
    if !repo::delete_category_cascade(&state.db, id).await? {
        return Err(ApiError::NotFound("Category"));
    }
    info!(admin = %username, id, "skill category deleted with skills");
    Ok(Json(serde_json::json!({ "ok": true })))
}

#[instrument(skip(state))]
pub async fn list_skills(State(state): State<AppState>) -> Result<Json<Vec<Skill>>, ApiError> {
    let skills = repo::list_skills(&state.db).await?;
    Ok(Json(skills))
}

#[instrument(skip(state, input))]
pub async fn create_skill(
    State(state): State<AppState>,
    AdminUser(username): AdminUser,
    Json(input): Json<SkillInput>,
) -> Result<Json<Skill>, ApiError> {
    let skill = repo::create_skill(&state.db, &input).await?;
    info!(admin = %username, id = skill.id, "skill created");
    Ok(Json(skill))
}

#[instrument(skip(state))]
pub async fn delete_skill(
    State(state): State<AppState>,
    AdminUser(username): AdminUser,
    Path(id): Path<i32>,
) -> Result<Json<serde_json::Value>, ApiError> {
    if !repo::delete_skill(&state.db, id).await? {
        return Err(ApiError::NotFound("Skill"));
    }
    info!(admin = %username, id, "skill deleted");
    Ok(Json(serde_json::json!({ "ok": true })))
}
