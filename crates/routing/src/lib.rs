//! `incidentlog-routing` — role-gated navigation for the client.
//!
//! Pure policy layer: given a requested path and a snapshot of the current
//! identity, decide whether to render the view or redirect. No IO, no panics;
//! enforcement here is a UX convenience, the backend re-checks every request.

pub mod guard;
pub mod route;
pub mod router;

pub use guard::{Access, access_for};
pub use route::Route;
pub use router::{AccessRouter, AuthState, Resolution};
