use reqwest::StatusCode;
use thiserror::Error;

/// Errors surfaced by backend calls.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Login rejected. Shown inline by the login view; session state is
    /// unchanged.
    #[error("{0}")]
    AuthenticationFailed(String),

    /// The stored bearer credential was rejected (401/403). Callers route
    /// this to `SessionStore::handle_unauthorized` rather than handling it
    /// per view.
    #[error("backend rejected the stored credential")]
    Unauthorized,

    /// Non-auth failure status from the backend.
    #[error("backend returned {0}")]
    Status(StatusCode),

    /// Network or protocol failure.
    #[error("request failed")]
    Transport(#[from] reqwest::Error),

    /// The backend answered with a shape the client cannot use.
    #[error("unexpected response: {0}")]
    InvalidResponse(String),
}

impl ApiError {
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, ApiError::Unauthorized)
    }
}
