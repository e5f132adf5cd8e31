use incidentlog_core::{Identity, Role};

use crate::{Access, Route, access_for};

/// Session snapshot as the router sees it for one navigation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthState<'a> {
    Unauthenticated,
    /// Identity present but its role is not one the client recognizes.
    /// Treated as unauthenticated for every protected route.
    AuthenticatedNoRole,
    AuthenticatedWithRole(&'a Role),
}

impl<'a> AuthState<'a> {
    /// Classify a session snapshot. Token presence gates authentication;
    /// unrecognized roles are downgraded.
    pub fn of(identity: Option<&'a Identity>) -> Self {
        match identity {
            None => AuthState::Unauthenticated,
            Some(identity) if !identity.is_authenticated() => AuthState::Unauthenticated,
            Some(identity) if !identity.role.is_known() => AuthState::AuthenticatedNoRole,
            Some(identity) => AuthState::AuthenticatedWithRole(&identity.role),
        }
    }
}

/// Outcome of one navigation attempt. A denial is always a full redirect,
/// never a partial render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    Render(Route),
    Redirect(Route),
}

impl Resolution {
    pub fn is_render(&self) -> bool {
        matches!(self, Resolution::Render(_))
    }
}

/// Decides, per navigation attempt, whether to render the requested view or
/// redirect.
///
/// Stateless: every decision is a fresh function of the requested path and
/// the session snapshot, so re-login as a different identity immediately
/// changes what is reachable. No decision is ever cached.
#[derive(Debug, Clone, Copy, Default)]
pub struct AccessRouter;

impl AccessRouter {
    pub fn new() -> Self {
        Self
    }

    pub fn resolve(&self, path: &str, identity: Option<&Identity>) -> Resolution {
        let state = AuthState::of(identity);

        let Some(route) = Route::parse(path) else {
            // Root and unmatched paths share one default redirect.
            return match state {
                AuthState::AuthenticatedWithRole(_) => Resolution::Redirect(Route::Dashboard),
                _ => Resolution::Redirect(Route::Login),
            };
        };

        let resolution = match access_for(&route) {
            Access::Public => Resolution::Render(route),

            Access::Authenticated => match state {
                AuthState::AuthenticatedWithRole(_) => Resolution::Render(route),
                _ => Resolution::Redirect(Route::Login),
            },

            Access::Roles(allowed) => match state {
                AuthState::AuthenticatedWithRole(role) if allowed.contains(role) => {
                    Resolution::Render(route)
                }
                AuthState::AuthenticatedWithRole(_) => Resolution::Redirect(Route::Dashboard),
                _ => Resolution::Redirect(Route::Login),
            },
        };

        if let Resolution::Redirect(target) = &resolution {
            tracing::debug!(requested = path, target = %target, "navigation redirected");
        }

        resolution
    }
}
