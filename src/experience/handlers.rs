use axum::{
    extract::{Path, State},
    routing::get,
    Json, Router,
};
use tracing::{info, instrument};

use crate::{auth::jwt::AdminUser, error::ApiError, state::AppState};

use super::dto::{ExperienceInput, TimelineItemInput};
use super::repo::{self, Experience, TimelineItem};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/experiences", get(list_experiences).post(create_experience))
        .route(
            "/experiences/:id",
            axum::routing::put(update_experience).delete(delete_experience),
        )
        .route("/timeline", get(list_timeline).post(create_timeline_item))
        .route(
            "/timeline/:id",
            axum::routing::put(update_timeline_item).delete(delete_timeline_item),
        )
}

#[instrument(skip(state))]
pub async fn list_experiences(
    State(state): State<AppState>,
) -> Result<Json<Vec<Experience>>, ApiError> {
    let experiences = repo::list_experiences(&state.db).await?;
    Ok(Json(experiences))
}

#[instrument(skip(state, input))]
pub async fn create_experience(
    State(state): State<AppState>,
    AdminUser(username): AdminUser,
    Json(input): Json<ExperienceInput>,
) -> Result<Json<Experience>, ApiError> {
    let experience = repo::create_experience(&state.db, &input).await?;
    info!(admin = %username, id = experience.id, "experience created");
    Ok(Json(experience))
}

#[instrument(skip(state, input))]
pub async fn update_experience(
    State(state): State<AppState>,
    AdminUser(username): AdminUser,
    Path(id): Path<i32>,
    Json(input): Json<ExperienceInput>,
) -> Result<Json<Experience>, ApiError> {
    let experience = repo::update_experience(&state.db, id, &input)
        .await?
        .ok_or(ApiError::NotFound("Experience"))?;
    info!(admin = %username, id, "experience updated");
    Ok(Json(experience))
}

#[instrument(skip(state))]
pub async fn delete_experience(
    State(state): State<AppState>,
    AdminUser(username): AdminUser,
    Path(id): Path<i32>,
) -> Result<Json<serde_json::Value>, ApiError> {
    if !repo::delete_experience(&state.db, id).await? {
        return Err(ApiError::NotFound("Experience"));
    }
    info!(admin = %username, id, "experience deleted");
    Ok(Json(serde_json::json!({ "ok": true })))
}

#[instrument(skip(state))]
pub async fn list_timeline(
    State(state): State<AppState>,
) -> Result<Json<Vec<TimelineItem>>, ApiError> {
    let items = repo::list_timeline(&state.db).await?;
    Ok(Json(items))
}

#[instrument(skip(state, input))]
pub async fn create_timeline_item(
    State(state): State<AppState>,
    AdminUser(username): AdminUser,
    Json(input): Json<TimelineItemInput>,
) -> Result<Json<TimelineItem>, ApiError> {
    let item = repo::create_timeline_item(&state.db, &input).await?;
    info!(admin = %username, id = item.id, "timeline item created");
    Ok(Json(item))
}

#[instrument(skip(state, input))]
pub async fn update_timeline_item(
    State(state): State<AppState>,
    AdminUser(username): AdminUser,
    Path(id): Path<i32>,
    Json(input): Json<TimelineItemInput>,
) -> Result<Json<TimelineItem>, ApiError> {
    let item = repo::update_timeline_item(&state.db, id, &input)
        .await?
        .ok_or(ApiError::NotFound("Timeline item"))?;
    info!(admin = %username, id, "timeline item updated");
    Ok(Json(item))
}

#[instrument(skip(state))]
pub async fn delete_timeline_item(
    State(state): State<AppState>,
    AdminUser(username): AdminUser,
    Path(id): Path<i32>,
) -> Result<Json<serde_json::Value>, ApiError> {
    if !repo::delete_timeline_item(&state.db, id).await? {
        return Err(ApiError::NotFound("Timeline item"));
    }
    info!(admin = %username, id, "timeline item deleted");
    Ok(Json(serde_json::json!({ "ok": true })))
}
