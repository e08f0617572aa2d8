use axum::{extract::State, routing::get, Json, Router};
use tracing::{info, instrument};

use crate::{auth::jwt::AdminUser, error::ApiError, state::AppState};

use super::dto::{default_about_content, default_profile, AboutContentInput, ProfileInput};
use super::repo::{AboutContent, Profile};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/profile", get(get_profile).put(put_profile))
        .route("/about-content", get(get_about_content).put(put_about_content))
}

#[instrument(skip(state))]
pub async fn get_profile(State(state): State<AppState>) -> Result<Json<Profile>, ApiError> {
    let profile = Profile::get(&state.db).await?.unwrap_or_else(default_profile);
    Ok(Json(profile))
}

#[instrument(skip(state, input))]
pub async fn put_profile(
    State(state): State<AppState>,
    AdminUser(username): AdminUser,
    Json(input): Json<ProfileInput>,
) -> Result<Json<Profile>, ApiError> {
    let profile = Profile::upsert(&state.db, &input).await?;
    info!(admin = %username, "profile upserted");
    Ok(Json(profile))
}

#[instrument(skip(state))]
pub async fn get_about_content(
    State(state): State<AppState>,
) -> Result<Json<AboutContent>, ApiError> {
    let content = AboutContent::get(&state.db)
        .await?
        .unwrap_or_else(default_about_content);
    Ok(Json(content))
}

#[instrument(skip(state, input))]
pub async fn put_about_content(
    State(state): State<AppState>,
    AdminUser(username): AdminUser,
    Json(input): Json<AboutContentInput>,
) -> Result<Json<AboutContent>, ApiError> {
    let content = AboutContent::upsert(&state.db, &input).await?;
    info!(admin = %username, "about content upserted");
    Ok(Json(content))
}
