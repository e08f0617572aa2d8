use serde::{Deserialize, Serialize};

/// Form-encoded credentials posted to `/token`.
#[derive(Debug, Deserialize)]
pub struct LoginForm {
    pub username: String,
    pub password: String,
}

/// Bearer-token response for a successful login.
#[derive(Debug, Serialize)]
pub struct TokenResponse {
    pub access_token: String,
    pub token_type: String,
}

/// One-time bootstrap request for the admin identity.
#[derive(Debug, Deserialize)]
pub struct SetupAdminRequest {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Serialize)]
pub struct MsgResponse {
    pub msg: String,
}
