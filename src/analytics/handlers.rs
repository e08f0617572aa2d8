use axum::{extract::State, routing::get, Json, Router};
use serde::Serialize;
use tracing::instrument;

use crate::{error::ApiError, state::AppState};

use super::repo;

#[derive(Debug, Serialize)]
pub struct Stats {
    pub total_views: i64,
    pub unique_visitors: i64,
}

pub fn routes() -> Router<AppState> {
    Router::new().route("/stats", get(get_stats))
}

#[instrument(skip(state))]
pub async fn get_stats(State(state): State<AppState>) -> Result<Json<Stats>, ApiError> {
    let (total_views, unique_visitors) = repo::stats(&state.db).await?;
    Ok(Json(Stats {
        total_views,
        unique_visitors,
    }))
}
