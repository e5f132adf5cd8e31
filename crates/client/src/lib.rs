//! `incidentlog-client` — HTTP collaborator for the incident-tracking backend.
//!
//! The backend owns all business logic; this crate only knows how to reach
//! it: the login call that produces an [`incidentlog_core::Identity`], and
//! bearer-attaching request builders for the resource endpoints, with one
//! uniform unauthorized signal feeding the session store.

pub mod api;
pub mod auth;
pub mod error;

pub use api::{BackendClient, enforce_unauthorized_policy, status_to_error};
pub use auth::{AuthClient, LoginRequest, LoginType};
pub use error::ApiError;
