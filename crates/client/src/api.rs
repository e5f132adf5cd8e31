//! Bearer-attaching access to the resource endpoints.
//!
//! Incidents, the student registry, category/location lists and bulk upload
//! are rendered by view code outside this core. All the views need from here
//! is a request builder that carries the stored token and a uniform
//! unauthorized signal feeding the session store, so a dead credential is
//! handled once instead of per page.

use reqwest::{RequestBuilder, StatusCode};
use serde::Serialize;

use incidentlog_session::SessionStore;

use crate::auth::normalize_base;
use crate::error::ApiError;

/// Client for the resource endpoints. Every builder it hands out already
/// carries the bearer credential.
#[derive(Debug, Clone)]
pub struct BackendClient {
    http: reqwest::Client,
    base_url: String,
}

impl BackendClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: normalize_base(base_url.into()),
        }
    }

    pub fn get(&self, path: &str, token: &str) -> RequestBuilder {
        self.http.get(self.url(path)).bearer_auth(token)
    }

    pub fn post_json<T: Serialize>(&self, path: &str, token: &str, body: &T) -> RequestBuilder {
        self.http.post(self.url(path)).bearer_auth(token).json(body)
    }

    pub fn put_json<T: Serialize>(&self, path: &str, token: &str, body: &T) -> RequestBuilder {
        self.http.put(self.url(path)).bearer_auth(token).json(body)
    }

    pub fn delete(&self, path: &str, token: &str) -> RequestBuilder {
        self.http.delete(self.url(path)).bearer_auth(token)
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }
}

/// Map a response status into the error taxonomy.
///
/// 401 and 403 collapse into [`ApiError::Unauthorized`] so every view funnels
/// through the same session policy.
pub fn status_to_error(status: StatusCode) -> Result<(), ApiError> {
    if status.is_success() {
        return Ok(());
    }

    if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
        return Err(ApiError::Unauthorized);
    }

    Err(ApiError::Status(status))
}

/// The global unauthorized policy: when the backend rejects the stored
/// credential, the session is cleared (an implicit logout) and the caller
/// should navigate to the login view. Returns whether the session was
/// cleared by this call.
pub fn enforce_unauthorized_policy(error: &ApiError, session: &mut SessionStore) -> bool {
    if error.is_unauthorized() {
        session.handle_unauthorized()
    } else {
        false
    }
}
