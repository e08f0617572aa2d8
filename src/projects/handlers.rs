use axum::{
    extract::{Path, Query, State},
    routing::get,
    Json, Router,
};
use tracing::{info, instrument};

use crate::{auth::jwt::AdminUser, error::ApiError, state::AppState};

use super::dto::{ProjectInput, ProjectListQuery};
use super::repo::{self, Project};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/projects", get(list_projects).post(create_project))
        // GET takes the slug, PUT/DELETE parse the same segment as an id.
        .route(
            "/projects/:key",
            get(get_project).put(update_project).delete(delete_project),
        )
}

#[instrument(skip(state))]
pub async fn list_projects(
    State(state): State<AppState>,
    Query(query): Query<ProjectListQuery>,
) -> Result<Json<Vec<Project>>, ApiError> {
    let projects = repo::list(&state.db, query.featured).await?;
    Ok(Json(projects))
}

#[instrument(skip(state))]
pub async fn get_project(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> Result<Json<Project>, ApiError> {
    repo::get_by_slug(&state.db, &slug)
        .await?
        .map(Json)
        .ok_or(ApiError::NotFound("Project"))
}

#[instrument(skip(state, input))]
pub async fn create_project(
    State(state): State<AppState>,
    AdminUser(username): AdminUser,
    Json(input): Json<ProjectInput>,
) -> Result<Json<Project>, ApiError> {
    let project = repo::create(&state.db, &input).await.map_err(|e| {
        match e.downcast_ref::<sqlx::Error>() {
            Some(sqlx::Error::Database(db_err)) if db_err.is_unique_violation() => {
                ApiError::Conflict("project slug already exists")
            }
            _ => ApiError::Internal(e),
        }
    })?;
    info!(admin = %username, slug = %project.slug, "project created");
    Ok(Json(project))
}

#[instrument(skip(state, input))]
pub async fn update_project(
    State(state): State<AppState>,
    AdminUser(username): AdminUser,
    Path(id): Path<i32>,
    Json(input): Json<ProjectInput>,
) -> Result<Json<Project>, ApiError> {
    let project = repo::update(&state.db, id, &input)
        .await?
        .ok_or(ApiError::NotFound("Project"))?;
    info!(admin = %username, id, "project updated");
    Ok(Json(project))
}

#[instrument(skip(state))]
pub async fn delete_project(
    State(state): State<AppState>,
    AdminUser(username): AdminUser,
    Path(id): Path<i32>,
) -> Result<Json<serde_json::Value>, ApiError> {
    if !repo::delete(&state.db, id).await? {
        return Err(ApiError::NotFound("Project"));
    }
    info!(admin = %username, id, "project deleted");
    Ok(Json(serde_json::json!({ "ok": true })))
}
