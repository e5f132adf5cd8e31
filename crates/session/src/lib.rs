//! `incidentlog-session` — identity/credential lifecycle for the client.
//!
//! The [`SessionStore`] is an explicitly owned context object, not a global:
//! initialize it with [`SessionStore::restore`] at startup, mutate it only
//! via login/logout, and inject it into the router and anything else that
//! needs the current identity.

pub mod storage;
pub mod store;

pub use storage::{FileStorage, MemoryStorage, PersistedSession, SessionStorage, StorageError};
pub use store::{LoginAttempt, SessionStore};
