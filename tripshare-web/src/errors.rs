use thiserror::Error;

/// Maximum number of error body characters kept for display.
const MAX_ERROR_CHARS: usize = 200;

/// Everything that can go wrong between a store and the backend.
///
/// Errors are carried as data inside store state, hence `Clone + PartialEq`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    #[error("No token found")]
    MissingToken,
    #[error("Invalid header value: {0}")]
    InvalidHeader(String),
    #[error("Unable to reach the server: {0}")]
    Network(String),
    #[error("Request failed ({status}): {message}")]
    Http { status: u16, message: String },
    #[error("Failed to decode response: {0}")]
    Decode(String),
}

impl FetchError {
    /// Builds an HTTP error from a raw response body.
    pub fn http(status: u16, body: &str) -> Self {
        Self::Http {
            status,
            message: sanitize_body(body),
        }
    }

    /// The backend refused the token it was given.
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, Self::Http { status: 401, .. })
    }
}

impl From<reqwest::Error> for FetchError {
    fn from(err: reqwest::Error) -> Self {
        Self::Network(err.to_string())
    }
}

impl From<serde_json::Error> for FetchError {
    fn from(err: serde_json::Error) -> Self {
        Self::Decode(err.to_string())
    }
}

fn sanitize_body(body: &str) -> String {
    let trimmed = body.trim();
    if trimmed.is_empty() {
        "Request failed.".to_string()
    } else {
        trimmed.chars().take(MAX_ERROR_CHARS).collect()
    }
}
