use serde::{Deserialize, Serialize};

/// Credentials exchanged for a session token.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LoginRequest {
    /// Username or email address.
    pub username: String,

    /// Plain-text password, only ever sent over the login call.
    pub password: String,
}

/// Successful login payload.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LoginResponse {
    /// Opaque bearer token issued by the backend.
    pub token: String,
}
