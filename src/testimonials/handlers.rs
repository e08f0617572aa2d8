use axum::{
    extract::{Path, State},
    routing::{delete, get},
    Json, Router,
};
use tracing::{info, instrument};

use crate::{auth::jwt::AdminUser, error::ApiError, state::AppState};

use super::dto::TestimonialInput;
use super::repo::{self, Testimonial};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/testimonials", get(list_testimonials).post(create_testimonial))
        .route("/testimonials/:id", delete(delete_testimonial))
}

#[instrument(skip(state))]
pub async fn list_testimonials(
    State(state): State<AppState>,
) -> Result<Json<Vec<Testimonial>>, ApiError> {
    let testimonials = repo::list(&state.db).await?;
    Ok(Json(testimonials))
}

#[instrument(skip(state, input))]
pub async fn create_testimonial(
    State(state): State<AppState>,
    AdminUser(username): AdminUser,
    Json(input): Json<TestimonialInput>,
) -> Result<Json<Testimonial>, ApiError> {
    let testimonial = repo::create(&state.db, &input).await?;
    info!(admin = %username, id = testimonial.id, "testimonial created");
    Ok(Json(testimonial))
}

#[instrument(skip(state))]
pub async fn delete_testimonial(
    State(state): State<AppState>,
    AdminUser(username): AdminUser,
    Path(id): Path<i32>,
) -> Result<Json<serde_json::Value>, ApiError> {
    if !repo::delete(&state.db, id).await? {
        return Err(ApiError::NotFound("Testimonial"));
    }
    info!(admin = %username, id, "testimonial deleted");
    Ok(Json(serde_json::json!({ "ok": true })))
}
