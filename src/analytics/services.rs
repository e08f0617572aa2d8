use axum::{
    extract::{ConnectInfo, Request, State},
    http::Method,
    middleware::Next,
    response::Response,
};
use sha2::{Digest, Sha256};
use std::net::SocketAddr;
use tracing::warn;

use crate::state::AppState;

use super::repo;

/// One-way salted digest of the caller's address. The raw address is never
/// persisted; the salt is process-wide config, so the same visitor hashes
/// identically within a salt epoch.
pub fn ip_hash(raw_client_address: &str, salt: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(raw_client_address.as_bytes());
    hasher.update(salt.as_bytes());
    hasher
        .finalize()
        .iter()
        .map(|b| format!("{:02x}", b))
        .collect()
}

/// Public, read-only requests under the API prefix count as visits.
pub fn is_qualifying(method: &Method, path: &str) -> bool {
    method == Method::GET && path.starts_with("/api")
}

fn client_address(req: &Request) -> String {
    // Behind a proxy the first X-Forwarded-For hop is the real client.
    if let Some(forwarded) = req
        .headers()
        .get("x-forwarded-for")
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.split(',').next())
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
    {
        return forwarded;
    }
    req.extensions()
        .get::<ConnectInfo<SocketAddr>>()
        .map(|ConnectInfo(addr)| addr.ip().to_string())
        .unwrap_or_else(|| "unknown".to_string())
}

/// Records a visit after the response is produced. Strictly best-effort: the
/// insert runs in its own task and transaction, and any failure is logged,
/// never propagated to the parent request.
pub async fn track_visits(State(state): State<AppState>, req: Request, next: Next) -> Response {
    let method = req.method().clone();
    let path = req.uri().path().to_string();
    let addr = client_address(&req);

    let response = next.run(req).await;

    if is_qualifying(&method, &path) {
        let hash = ip_hash(&addr, &state.config.analytics_salt);
        let db = state.db.clone();
        tokio::spawn(async move {
            if let Err(e) = repo::insert_visit(&db, &hash, &path).await {
                warn!(error = %e, path, "failed to record visit");
            }
        });
    }

    response
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hash_is_deterministic_for_same_address_and_salt() {
        assert_eq!(ip_hash("203.0.113.7", "salt-a"), ip_hash("203.0.113.7", "salt-a"));
    }

    #[test]
    fn hash_changes_with_salt() {
        assert_ne!(ip_hash("203.0.113.7", "salt-a"), ip_hash("203.0.113.7", "salt-b"));
    }

    #[test]
    fn hash_changes_with_address() {
        assert_ne!(ip_hash("203.0.113.7", "salt-a"), ip_hash("203.0.113.8", "salt-a"));
    }

    #[test]
    fn hash_is_hex_sha256() {
        let h = ip_hash("203.0.113.7", "salt-a");
        assert_eq!(h.len(), 64);
        assert!(h.chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn only_public_reads_qualify() {
        assert!(is_qualifying(&Method::GET, "/api/projects"));
        assert!(is_qualifying(&Method::GET, "/api/stats"));
        assert!(!is_qualifying(&Method::POST, "/api/contact"));
        assert!(!is_qualifying(&Method::GET, "/token"));
        assert!(!is_qualifying(&Method::GET, "/uploads/x.png"));
        assert!(!is_qualifying(&Method::DELETE, "/api/projects/1"));
    }
}
