//! Declarative route guard rules.
//!
//! Every route's permitted audience lives in one table so authorization is
//! never re-derived per view.

use incidentlog_core::Role;

use crate::Route;

/// Who may view a route.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Access {
    /// Rendered regardless of session state.
    Public,
    /// Any authenticated identity with a recognized role.
    Authenticated,
    /// Only the listed roles.
    Roles(&'static [Role]),
}

impl Access {
    /// Whether an authenticated identity with `role` may view the route.
    pub fn permits(&self, role: &Role) -> bool {
        match self {
            Access::Public | Access::Authenticated => true,
            Access::Roles(allowed) => allowed.contains(role),
        }
    }
}

/// The guard table.
pub fn access_for(route: &Route) -> Access {
    const REPORTERS: &[Role] = &[Role::Admin, Role::Teacher, Role::Student];
    const ADMIN_ONLY: &[Role] = &[Role::Admin];

    match route {
        Route::Login | Route::Register | Route::StudentLogin => Access::Public,

        Route::Dashboard
        | Route::StudentDashboard
        | Route::IncidentList
        | Route::IncidentDetail(_) => Access::Authenticated,

        // Parents see incident logs but never file them.
        Route::CreateIncident => Access::Roles(REPORTERS),

        Route::UserManagement | Route::StudentUpload => Access::Roles(ADMIN_ONLY),
    }
}
