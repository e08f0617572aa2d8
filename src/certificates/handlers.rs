use axum::{
    extract::{Multipart, State},
    routing::{get, post},
    Json, Router,
};
use serde::Serialize;
use tracing::{info, instrument};

use crate::{auth::jwt::AdminUser, error::ApiError, state::AppState};

use super::repo::Certificate;
use super::{import, repo};

#[derive(Debug, Serialize)]
pub struct ImportResponse {
    pub inserted: u64,
    pub msg: String,
}

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/certificates", get(list_certificates))
        .route("/certificates/upload", post(upload_certificates))
}

#[instrument(skip(state))]
pub async fn list_certificates(
    State(state): State<AppState>,
) -> Result<Json<Vec<Certificate>>, ApiError> {
    let certificates = repo::list(&state.db).await?;
    Ok(Json(certificates))
}

/// Bulk-imports certificates from a CSV export. Re-importing a file is a
/// no-op for titles already present.
#[instrument(skip(state, multipart))]
pub async fn upload_certificates(
    State(state): State<AppState>,
    AdminUser(username): AdminUser,
    mut multipart: Multipart,
) -> Result<Json<ImportResponse>, ApiError> {
    let mut data = None;
    while let Ok(Some(field)) = multipart.next_field().await {
        if field.name() == Some("file") {
            data = Some(field.bytes().await.map_err(|e| {
                ApiError::Validation(format!("failed to read uploaded file: {e}"))
            })?);
            break;
        }
    }
    let data = data.ok_or_else(|| ApiError::Validation("file field is required".into()))?;

    let rows = import::parse_csv(&data[..])
        .map_err(|e| ApiError::Validation(format!("invalid csv: {e}")))?;
    let inserted = repo::insert_new(&state.db, &rows).await?;

    info!(admin = %username, inserted, "certificates imported");
    Ok(Json(ImportResponse {
        inserted,
        msg: format!("Uploaded {inserted} certificates"),
    }))
}
