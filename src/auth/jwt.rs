use std::time::Duration;

use axum::{
    async_trait,
    extract::{FromRef, FromRequestParts},
    http::request::Parts,
};
use jsonwebtoken::{decode, encode, errors::ErrorKind, DecodingKey, EncodingKey, Header, Validation};
use thiserror::Error;
use time::{Duration as TimeDuration, OffsetDateTime};
use tracing::{debug, warn};

use crate::auth::claims::Claims;
use crate::config::JwtConfig;
use crate::error::ApiError;
use crate::state::AppState;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum TokenError {
    #[error("token expired")]
    Expired,
    #[error("token invalid")]
    Invalid,
}

/// Signing and verification keys plus validity window, derived once per use
/// from the immutable app config. Signature comparison inside `jsonwebtoken`
/// is constant-time.
#[derive(Clone)]
pub struct JwtKeys {
    pub encoding: EncodingKey,
    pub decoding: DecodingKey,
    pub issuer: String,
    pub ttl: Duration,
}

impl FromRef<AppState> for JwtKeys {
    fn from_ref(state: &AppState) -> Self {
        let JwtConfig {
            secret,
            issuer,
            ttl_minutes,
        } = state.config.jwt.clone();
        Self {
            encoding: EncodingKey::from_secret(secret.as_bytes()),
            decoding: DecodingKey::from_secret(secret.as_bytes()),
            issuer,
            ttl: Duration::from_secs((ttl_minutes as u64) * 60),
        }
    }
}

impl JwtKeys {
    pub fn sign(&self, username: &str) -> anyhow::Result<String> {
        let now = OffsetDateTime::now_utc();
        let exp = now + TimeDuration::seconds(self.ttl.as_secs() as i64);
        let claims = Claims {
            sub: username.to_string(),
            iat: now.unix_timestamp() as usize,
            exp: exp.unix_timestamp() as usize,
            iss: self.issuer.clone(),
        };
        let token = encode(&Header::default(), &claims, &self.encoding)?;
        debug!(username, "jwt signed");
        Ok(token)
    }

    pub fn verify(&self, token: &str) -> Result<Claims, TokenError> {
        let mut validation = Validation::default();
        validation.set_issuer(std::slice::from_ref(&self.issuer));
        match decode::<Claims>(token, &self.decoding, &validation) {
            Ok(data) => {
                debug!(username = %data.claims.sub, "jwt verified");
                Ok(data.claims)
            }
            Err(e) if matches!(e.kind(), ErrorKind::ExpiredSignature) => Err(TokenError::Expired),
            Err(_) => Err(TokenError::Invalid),
        }
    }
}

/// Extracts and validates the bearer token, yielding the admin username.
/// Every admin-gated route takes this as an argument.
pub struct AdminUser(pub String);

#[async_trait]
impl<S> FromRequestParts<S> for AdminUser
where
    S: Send + Sync,
    JwtKeys: FromRef<S>,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let keys = JwtKeys::from_ref(state);
        let auth_header = parts
            .headers
            .get(axum::http::header::AUTHORIZATION)
            .and_then(|v| v.to_str().ok())
            .ok_or(ApiError::Unauthorized("missing Authorization header"))?;

        let token = auth_header
            .strip_prefix("Bearer ")
            .ok_or(ApiError::Unauthorized("invalid Authorization header"))?;

        match keys.verify(token) {
            Ok(claims) => Ok(AdminUser(claims.sub)),
            Err(TokenError::Expired) => {
                warn!("expired token");
                Err(ApiError::Unauthorized("token expired"))
            }
            Err(TokenError::Invalid) => {
                warn!("invalid token");
                Err(ApiError::Unauthorized("invalid token"))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_keys() -> JwtKeys {
        let state = AppState::fake();
        JwtKeys::from_ref(&state)
    }

    #[tokio::test]
    async fn sign_and_verify_roundtrip() {
        let keys = make_keys();
        let token = keys.sign("admin").expect("sign");
        let claims = keys.verify(&token).expect("verify");
        assert_eq!(claims.sub, "admin");
        assert_eq!(claims.iss, "test-issuer");
        assert!(claims.exp > claims.iat);
    }

    #[tokio::test]
    async fn verify_rejects_garbage_as_invalid() {
        let keys = make_keys();
        assert_eq!(keys.verify("not.a.jwt"), Err(TokenError::Invalid));
    }

    #[tokio::test]
    async fn verify_rejects_foreign_signature() {
        let keys = make_keys();
        let foreign = JwtKeys {
            encoding: EncodingKey::from_secret(b"other-secret"),
            decoding: DecodingKey::from_secret(b"other-secret"),
            issuer: keys.issuer.clone(),
            ttl: keys.ttl,
        };
        let token = foreign.sign("admin").expect("sign");
        assert_eq!(keys.verify(&token), Err(TokenError::Invalid));
    }

    #[tokio::test]
    async fn verify_rejects_expired_token() {
        let keys = make_keys();
        // Expired beyond the default 60s validation leeway.
        let now = OffsetDateTime::now_utc().unix_timestamp();
        let claims = Claims {
            sub: "admin".into(),
            iat: (now - 600) as usize,
            exp: (now - 300) as usize,
            iss: keys.issuer.clone(),
        };
        let token = encode(&Header::default(), &claims, &keys.encoding).expect("encode");
        assert_eq!(keys.verify(&token), Err(TokenError::Expired));
    }

    #[tokio::test]
    async fn verify_rejects_wrong_issuer() {
        let keys = make_keys();
        let other = JwtKeys {
            encoding: keys.encoding.clone(),
            decoding: keys.decoding.clone(),
            issuer: "someone-else".into(),
            ttl: keys.ttl,
        };
        let token = other.sign("admin").expect("sign");
        assert_eq!(keys.verify(&token), Err(TokenError::Invalid));
    }
}
