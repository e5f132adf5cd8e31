use serde::{Deserialize, Serialize};

use crate::Role;

/// The authenticated user, consumed verbatim from a successful login response.
///
/// # Invariants
/// - Replaced wholesale on re-login, deleted on logout; no partial mutation.
/// - The token is an opaque bearer credential; the client never inspects it
///   beyond presence. An identity with an empty token is equivalent to no
///   identity at all.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Identity {
    pub name: String,
    pub role: Role,
    pub token: String,
    /// Present only for student identities.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub admission_no: Option<String>,
}

impl Identity {
    /// Whether this identity carries a usable bearer credential.
    pub fn is_authenticated(&self) -> bool {
        !self.token.trim().is_empty()
    }
}
