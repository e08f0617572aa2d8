use serde::{Deserialize, Serialize};

/// JWT payload for the single admin operator. No refresh tokens and no
/// server-side revocation: expiry is the only termination mechanism.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String, // admin username
    pub iat: usize,  // issued at (unix timestamp)
    pub exp: usize,  // expires at (unix timestamp)
    pub iss: String, // issuer
}
