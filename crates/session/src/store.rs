//! The session store: single source of truth for who is using the client.

use incidentlog_core::{Identity, Role};

use crate::storage::{PersistedSession, SessionStorage};

/// Ticket capturing the store state at the time a login request was issued.
///
/// A login response commits only if nothing mutated the store in between, so
/// a response racing a logout is dropped instead of resurrecting the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoginAttempt {
    epoch: u64,
}

/// Owns the current identity and its durable copy.
///
/// Lifecycle: [`SessionStore::restore`] once at startup (before the first
/// routing decision), then mutation only through login/logout. Replacement is
/// wholesale; there is no partial identity mutation.
pub struct SessionStore {
    storage: Box<dyn SessionStorage>,
    current: Option<Identity>,
    epoch: u64,
}

impl SessionStore {
    pub fn new(storage: Box<dyn SessionStorage>) -> Self {
        Self {
            storage,
            current: None,
            epoch: 0,
        }
    }

    /// Re-establish a previously persisted session, if any.
    ///
    /// Malformed or token-less payloads are discarded (and the slot cleared)
    /// without surfacing an error; the first navigation will simply land on
    /// the login view. The outcome is deterministic before this returns.
    pub fn restore(&mut self) {
        match self.storage.load() {
            Ok(Some(saved)) if saved.identity.is_authenticated() => {
                tracing::info!(role = %saved.identity.role, "restored persisted session");
                self.current = Some(saved.identity);
            }
            Ok(Some(_)) => {
                tracing::warn!("persisted session has no token, discarding");
                let _ = self.storage.clear();
            }
            Ok(None) => {}
            Err(err) => {
                tracing::warn!(error = %err, "persisted session unreadable, starting unauthenticated");
                let _ = self.storage.clear();
            }
        }
    }

    /// Establish `identity` as the current session.
    ///
    /// Never fails: the backend already validated the credentials and its
    /// response is trusted verbatim. A persistence failure degrades to a
    /// per-process session and is logged, not surfaced.
    pub fn login(&mut self, identity: Identity) {
        let attempt = self.begin_login();
        self.complete_login(attempt, identity);
    }

    /// Capture the store state before issuing a login request.
    pub fn begin_login(&self) -> LoginAttempt {
        LoginAttempt { epoch: self.epoch }
    }

    /// Commit a login response.
    ///
    /// Returns `false` (dropping the identity) if the store was mutated after
    /// [`SessionStore::begin_login`]: a logout or a newer login wins over the
    /// stale response.
    pub fn complete_login(&mut self, attempt: LoginAttempt, identity: Identity) -> bool {
        if attempt.epoch != self.epoch {
            tracing::warn!("discarding stale login response");
            return false;
        }

        self.epoch += 1;

        let persisted = PersistedSession::now(identity.clone());
        if let Err(err) = self.storage.save(&persisted) {
            tracing::error!(error = %err, "failed to persist session, continuing in-memory");
        }

        tracing::info!(role = %identity.role, "session established");
        self.current = Some(identity);
        true
    }

    /// Clear the session from memory and durable storage.
    ///
    /// Idempotent: with no active session the visible state is unchanged.
    /// Always invalidates outstanding [`LoginAttempt`]s.
    pub fn logout(&mut self) {
        self.epoch += 1;

        if self.current.take().is_some() {
            tracing::info!("session cleared");
        }

        if let Err(err) = self.storage.clear() {
            tracing::warn!(error = %err, "failed to clear persisted session");
        }
    }

    /// Centralized policy for upstream 401/403 responses: the stored token is
    /// dead, so treat it as an implicit logout. Returns whether a session was
    /// actually cleared.
    pub fn handle_unauthorized(&mut self) -> bool {
        if !self.is_authenticated() {
            return false;
        }

        tracing::warn!("backend rejected stored credential, clearing session");
        self.logout();
        true
    }

    pub fn current(&self) -> Option<&Identity> {
        self.current.as_ref().filter(|i| i.is_authenticated())
    }

    pub fn role(&self) -> Option<&Role> {
        self.current().map(|i| &i.role)
    }

    /// The bearer credential for backend calls, if any.
    pub fn token(&self) -> Option<&str> {
        self.current().map(|i| i.token.as_str())
    }

    pub fn is_authenticated(&self) -> bool {
        self.current().is_some()
    }
}

impl core::fmt::Debug for SessionStore {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("SessionStore")
            .field("authenticated", &self.is_authenticated())
            .field("role", &self.role())
            .field("epoch", &self.epoch)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStorage;

    fn identity(name: &str, role: Role, token: &str) -> Identity {
        Identity {
            name: name.to_string(),
            role,
            token: token.to_string(),
            admission_no: None,
        }
    }

    fn store_with(storage: MemoryStorage) -> SessionStore {
        SessionStore::new(Box::new(storage))
    }

    #[test]
    fn login_establishes_session() {
        let mut store = store_with(MemoryStorage::new());
        assert!(!store.is_authenticated());

        store.login(identity("root", Role::Admin, "t1"));
        assert!(store.is_authenticated());
        assert_eq!(store.token(), Some("t1"));
        assert_eq!(store.role(), Some(&Role::Admin));
    }

    #[test]
    fn restore_round_trips_a_login() {
        let slot = MemoryStorage::new();

        let mut first = store_with(slot.clone());
        first.login(identity("A", Role::Student, "abc"));
        drop(first);

        // "Process restart": a fresh store over the same durable slot.
        let mut second = store_with(slot);
        second.restore();
        assert!(second.is_authenticated());
        assert_eq!(second.role(), Some(&Role::Student));
        assert_eq!(second.token(), Some("abc"));
    }

    #[test]
    fn logout_clears_memory_and_slot() {
        let slot = MemoryStorage::new();
        let mut store = store_with(slot.clone());

        store.login(identity("root", Role::Admin, "t1"));
        store.logout();
        assert!(!store.is_authenticated());
        assert!(slot.load().unwrap().is_none());
    }

    #[test]
    fn logout_is_idempotent() {
        let mut store = store_with(MemoryStorage::new());
        store.login(identity("root", Role::Admin, "t1"));

        store.logout();
        store.logout();
        assert!(!store.is_authenticated());
        assert!(store.token().is_none());
    }

    #[test]
    fn restore_discards_token_less_session() {
        let slot = MemoryStorage::new();
        slot.save(&PersistedSession::now(identity("ghost", Role::Admin, "")))
            .unwrap();

        let mut store = store_with(slot.clone());
        store.restore();
        assert!(!store.is_authenticated());
        // The dead payload is gone too.
        assert!(slot.load().unwrap().is_none());
    }

    #[test]
    fn restore_survives_a_malformed_slot() {
        struct MalformedSlot;

        impl SessionStorage for MalformedSlot {
            fn load(&self) -> Result<Option<PersistedSession>, crate::StorageError> {
                let err = serde_json::from_str::<PersistedSession>("{").unwrap_err();
                Err(crate::StorageError::Malformed(err))
            }

            fn save(&self, _: &PersistedSession) -> Result<(), crate::StorageError> {
                Ok(())
            }

            fn clear(&self) -> Result<(), crate::StorageError> {
                Ok(())
            }
        }

        let mut store = SessionStore::new(Box::new(MalformedSlot));
        store.restore();
        assert!(!store.is_authenticated());
    }

    #[test]
    fn stale_login_cannot_clobber_logout() {
        let mut store = store_with(MemoryStorage::new());

        let attempt = store.begin_login();
        store.logout();

        let committed = store.complete_login(attempt, identity("late", Role::Teacher, "t9"));
        assert!(!committed);
        assert!(!store.is_authenticated());
    }

    #[test]
    fn newer_login_wins_over_older_attempt() {
        let mut store = store_with(MemoryStorage::new());

        let slow = store.begin_login();
        store.login(identity("fast", Role::Teacher, "t-fast"));

        assert!(!store.complete_login(slow, identity("slow", Role::Admin, "t-slow")));
        assert_eq!(store.token(), Some("t-fast"));
    }

    #[test]
    fn relogin_replaces_identity_wholesale() {
        let mut store = store_with(MemoryStorage::new());

        store.login(identity("first", Role::Teacher, "t1"));
        store.login(identity("second", Role::Parent, "t2"));

        let current = store.current().unwrap();
        assert_eq!(current.name, "second");
        assert_eq!(current.role, Role::Parent);
        assert_eq!(current.token, "t2");
    }

    #[test]
    fn handle_unauthorized_clears_session_once() {
        let mut store = store_with(MemoryStorage::new());
        store.login(identity("root", Role::Admin, "expired"));

        assert!(store.handle_unauthorized());
        assert!(!store.is_authenticated());
        // Already unauthenticated: nothing left to clear.
        assert!(!store.handle_unauthorized());
    }
}
