use axum::{
    extract::{Path, State},
    routing::get,
    Json, Router,
};
use tracing::{info, instrument};

use crate::{auth::jwt::AdminUser, error::ApiError, state::AppState};

use super::dto::ServiceInput;
use super::repo::{self, Service};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/services", get(list_services).post(create_service))
        .route(
            "/services/:id",
            axum::routing::put(update_service).delete(delete_service),
        )
}

#[instrument(skip(state))]
pub async fn list_services(State(state): State<AppState>) -> Result<Json<Vec<Service>>, ApiError> {
    let services = repo::list_active(&state.db).await?;
    Ok(Json(services))
}

#[instrument(skip(state, input))]
pub async fn create_service(
    State(state): State<AppState>,
    AdminUser(username): AdminUser,
    Json(input): Json<ServiceInput>,
) -> Result<Json<Service>, ApiError> {
    let service = repo::create(&state.db, &input).await?;
    info!(admin = %username, id = service.id, "service created");
    Ok(Json(service))
}

#[instrument(skip(state, input))]
pub async fn update_service(
    State(state): State<AppState>,
    AdminUser(username): AdminUser,
    Path(id): Path<i32>,
    Json(input): Json<ServiceInput>,
) -> Result<Json<Service>, ApiError> {
    let service = repo::update(&state.db, id, &input)
        .await?
        .ok_or(ApiError::NotFound("Service"))?;
    info!(admin = %username, id, "service updated");
    Ok(Json(service))
}

#[instrument(skip(state))]
pub async fn delete_service(
    State(state): State<AppState>,
    AdminUser(username): AdminUser,
    Path(id): Path<i32>,
) -> Result<Json<serde_json::Value>, ApiError> {
    if !repo::delete(&state.db, id).await? {
        return Err(ApiError::NotFound("Service"));
    }
    info!(admin = %username, id, "service deleted");
    Ok(Json(serde_json::json!({ "ok": true })))
}
