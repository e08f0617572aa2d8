use axum::{
    extract::{FromRef, State},
    routing::post,
    Form, Json, Router,
};
use tracing::{info, instrument, warn};

use crate::{
    auth::{
        dto::{LoginForm, MsgResponse, SetupAdminRequest, TokenResponse},
        jwt::JwtKeys,
        password::{hash_password, verify_password},
        repo::Admin,
    },
    error::ApiError,
    state::AppState,
};

pub fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/token", post(login))
        .route("/setup-admin", post(setup_admin))
}

#[instrument(skip(state, form))]
pub async fn login(
    State(state): State<AppState>,
    Form(form): Form<LoginForm>,
) -> Result<Json<TokenResponse>, ApiError> {
    let admin = Admin::find_by_username(&state.db, &form.username).await?;

    let admin = match admin {
        Some(a) => a,
        None => {
            warn!(username = %form.username, "login unknown username");
            return Err(ApiError::Unauthorized("incorrect username or password"));
        }
    };

    if !verify_password(&form.password, &admin.password_hash)? {
        warn!(username = %form.username, "login invalid password");
        return Err(ApiError::Unauthorized("incorrect username or password"));
    }

    let token = JwtKeys::from_ref(&state).sign(&admin.username)?;
    info!(username = %admin.username, "admin logged in");
    Ok(Json(TokenResponse {
        access_token: token,
        token_type: "bearer".into(),
    }))
}

/// Bootstraps the admin identity. Usable exactly once: a second call fails
/// with 409 regardless of the payload.
#[instrument(skip(state, payload))]
pub async fn setup_admin(
    State(state): State<AppState>,
    Json(payload): Json<SetupAdminRequest>,
) -> Result<Json<MsgResponse>, ApiError> {
    if payload.username.trim().is_empty() {
        return Err(ApiError::Validation("username must not be empty".into()));
    }
    if payload.password.len() < 8 {
        return Err(ApiError::Validation("password too short".into()));
    }

    if Admin::any_exists(&state.db).await? {
        warn!("setup-admin attempted but admin already exists");
        return Err(ApiError::Conflict("admin already exists"));
    }

    let hash = hash_password(&payload.password)?;
    let admin = Admin::create(&state.db, payload.username.trim(), &hash).await?;

    info!(username = %admin.username, "admin created");
    Ok(Json(MsgResponse {
        msg: "Admin created".into(),
    }))
}
