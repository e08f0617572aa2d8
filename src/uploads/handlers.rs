use std::path::Path as FsPath;

use anyhow::Context;
use axum::{
    extract::{DefaultBodyLimit, Multipart, State},
    routing::post,
    Json, Router,
};
use bytes::Bytes;
use serde::Serialize;
use time::OffsetDateTime;
use tracing::{info, instrument};

use crate::{auth::jwt::AdminUser, error::ApiError, state::AppState};

use super::services::{is_allowed_image, timestamped_filename};

#[derive(Debug, Serialize)]
pub struct UploadResponse {
    pub url: String,
}

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/upload-image", post(upload_image))
        .layer(DefaultBodyLimit::max(10 * 1024 * 1024)) // 10MB
}

/// Stores the image under the static-served uploads directory and returns a
/// retrievable URL.
#[instrument(skip(state, multipart))]
pub async fn upload_image(
    State(state): State<AppState>,
    AdminUser(username): AdminUser,
    mut multipart: Multipart,
) -> Result<Json<UploadResponse>, ApiError> {
    let mut file: Option<(String, String, Bytes)> = None;
    while let Ok(Some(field)) = multipart.next_field().await {
        if field.name() == Some("file") {
            let content_type = field.content_type().unwrap_or_default().to_string();
            let original_name = field.file_name().unwrap_or("upload").to_string();
            let data = field
                .bytes()
                .await
                .map_err(|e| ApiError::Validation(format!("failed to read upload: {e}")))?;
            file = Some((content_type, original_name, data));
            break;
        }
    }
    let (content_type, original_name, data) =
        file.ok_or_else(|| ApiError::Validation("file field is required".into()))?;

    if !is_allowed_image(&content_type) {
        return Err(ApiError::Validation(
            "Only JPEG and PNG images are allowed".into(),
        ));
    }

    let filename = timestamped_filename(&original_name, OffsetDateTime::now_utc());
    let dir = FsPath::new(&state.config.upload_dir);
    tokio::fs::create_dir_all(dir)
        .await
        .context("create upload dir")?;
    tokio::fs::write(dir.join(&filename), &data)
        .await
        .context("write uploaded image")?;

    info!(admin = %username, filename = %filename, bytes = data.len(), "image uploaded");
    Ok(Json(UploadResponse {
        url: format!("{}/uploads/{}", state.config.public_base_url, filename),
    }))
}
