//! The authentication endpoint: the only backend call the core owns.

use serde::{Deserialize, Serialize};

use incidentlog_core::Identity;

use crate::error::ApiError;

/// Which login flow the credentials belong to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LoginType {
    Staff,
    Student,
}

/// Body of `POST /auth/login`.
#[derive(Debug, Clone, Serialize)]
pub struct LoginRequest {
    /// Staff authenticate by email, students by admission number; the
    /// backend disambiguates via `login_type`.
    pub email_or_admission_no: String,
    pub password: String,
    #[serde(rename = "loginType")]
    pub login_type: LoginType,
}

impl LoginRequest {
    pub fn staff(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email_or_admission_no: email.into(),
            password: password.into(),
            login_type: LoginType::Staff,
        }
    }

    pub fn student(admission_no: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email_or_admission_no: admission_no.into(),
            password: password.into(),
            login_type: LoginType::Student,
        }
    }
}

/// Best-effort shape of a failed auth response body.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: Option<String>,
}

/// Client for the backend authentication endpoint.
#[derive(Debug, Clone)]
pub struct AuthClient {
    http: reqwest::Client,
    base_url: String,
}

impl AuthClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: normalize_base(base_url.into()),
        }
    }

    /// `POST /auth/login`.
    ///
    /// A success body is consumed verbatim as the new identity; the token is
    /// not validated locally (the backend is the trust boundary). Any
    /// non-success status becomes [`ApiError::AuthenticationFailed`] carrying
    /// the backend's message when it sent one.
    pub async fn login(&self, request: &LoginRequest) -> Result<Identity, ApiError> {
        let url = format!("{}/auth/login", self.base_url);
        tracing::debug!(login_type = ?request.login_type, "submitting login request");

        let response = self.http.post(&url).json(request).send().await?;

        if response.status().is_success() {
            let identity = response
                .json::<Identity>()
                .await
                .map_err(|err| ApiError::InvalidResponse(err.to_string()))?;
            tracing::info!(role = %identity.role, "login accepted");
            return Ok(identity);
        }

        let status = response.status();
        let message = response
            .json::<ErrorBody>()
            .await
            .ok()
            .and_then(|body| body.message)
            .unwrap_or_else(|| format!("login failed ({status})"));

        tracing::debug!(%status, "login rejected");
        Err(ApiError::AuthenticationFailed(message))
    }
}

pub(crate) fn normalize_base(mut base: String) -> String {
    while base.ends_with('/') {
        base.pop();
    }
    base
}
