use axum::{
    extract::State,
    routing::{get, post},
    Json, Router,
};
use tracing::{info, instrument, warn};

use crate::{
    auth::jwt::AdminUser, error::ApiError, mailer::ContactNotification, state::AppState,
};

use super::dto::MessageInput;
use super::repo::{self, Message};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/contact", post(send_message))
        .route("/messages", get(list_messages))
}

/// Persists the submission, then notifies the operator's inbox. The
/// notification is fire-and-forget: the row is already durable when the send
/// starts, and a failed send never fails the request.
#[instrument(skip(state, input))]
pub async fn send_message(
    State(state): State<AppState>,
    Json(input): Json<MessageInput>,
) -> Result<Json<Message>, ApiError> {
    input.validate().map_err(ApiError::Validation)?;

    let message = repo::insert(&state.db, &input).await?;

    let notification = ContactNotification {
        name: message.name.clone(),
        email: message.email.clone(),
        message_type: message.message_type.clone(),
        budget: message.budget.clone(),
        whatsapp: message.whatsapp.clone(),
        message: message.message.clone(),
    };
    if let Err(e) = state.mailer.send_contact(&notification).await {
        warn!(error = %e, id = message.id, "contact notification failed");
    }

    info!(id = message.id, "contact message received");
    Ok(Json(message))
}

/// Admin-only: submissions include the sender's contact details.
#[instrument(skip(state))]
pub async fn list_messages(
    State(state): State<AppState>,
    AdminUser(_username): AdminUser,
) -> Result<Json<Vec<Message>>, ApiError> {
    let messages = repo::list_desc(&state.db).await?;
    Ok(Json(messages))
}
