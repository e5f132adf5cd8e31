//! `incidentlog-core` — domain primitives for the incident-tracking client.
//!
//! This crate is intentionally decoupled from HTTP and storage.

pub mod identity;
pub mod role;

pub use identity::Identity;
pub use role::Role;
