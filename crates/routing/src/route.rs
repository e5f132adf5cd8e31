use std::borrow::Cow;

/// A navigable view in the application.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Route {
    Login,
    Register,
    StudentLogin,
    Dashboard,
    StudentDashboard,
    IncidentList,
    IncidentDetail(String),
    CreateIncident,
    UserManagement,
    StudentUpload,
}

impl Route {
    /// Parse a URL path.
    ///
    /// Returns `None` for the root path and anything unmatched; both share
    /// the same default redirect (there is deliberately no distinct 404).
    pub fn parse(path: &str) -> Option<Self> {
        let path = path.trim_end_matches('/');
        match path {
            "/login" => Some(Route::Login),
            "/register" => Some(Route::Register),
            "/student-login" => Some(Route::StudentLogin),
            "/dashboard" => Some(Route::Dashboard),
            "/student-dashboard" => Some(Route::StudentDashboard),
            "/incidents" => Some(Route::IncidentList),
            "/create-incident" => Some(Route::CreateIncident),
            "/users" => Some(Route::UserManagement),
            "/upload-students" => Some(Route::StudentUpload),
            other => other
                .strip_prefix("/incidents/")
                .filter(|id| !id.is_empty() && !id.contains('/'))
                .map(|id| Route::IncidentDetail(id.to_string())),
        }
    }

    pub fn path(&self) -> Cow<'static, str> {
        match self {
            Route::Login => Cow::Borrowed("/login"),
            Route::Register => Cow::Borrowed("/register"),
            Route::StudentLogin => Cow::Borrowed("/student-login"),
            Route::Dashboard => Cow::Borrowed("/dashboard"),
            Route::StudentDashboard => Cow::Borrowed("/student-dashboard"),
            Route::IncidentList => Cow::Borrowed("/incidents"),
            Route::IncidentDetail(id) => Cow::Owned(format!("/incidents/{id}")),
            Route::CreateIncident => Cow::Borrowed("/create-incident"),
            Route::UserManagement => Cow::Borrowed("/users"),
            Route::StudentUpload => Cow::Borrowed("/upload-students"),
        }
    }
}

impl core::fmt::Display for Route {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.path())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_paths_parse() {
        assert_eq!(Route::parse("/login"), Some(Route::Login));
        assert_eq!(Route::parse("/users"), Some(Route::UserManagement));
        assert_eq!(Route::parse("/upload-students"), Some(Route::StudentUpload));
    }

    #[test]
    fn incident_detail_captures_id() {
        assert_eq!(
            Route::parse("/incidents/42"),
            Some(Route::IncidentDetail("42".to_string()))
        );
        // Deeper segments are not a detail view.
        assert_eq!(Route::parse("/incidents/42/edit"), None);
        assert_eq!(Route::parse("/incidents/"), Some(Route::IncidentList));
    }

    #[test]
    fn root_and_unknown_paths_are_unmatched() {
        assert_eq!(Route::parse("/"), None);
        assert_eq!(Route::parse(""), None);
        assert_eq!(Route::parse("/no-such-page"), None);
    }

    #[test]
    fn trailing_slash_is_tolerated() {
        assert_eq!(Route::parse("/dashboard/"), Some(Route::Dashboard));
    }

    #[test]
    fn path_round_trips() {
        let detail = Route::IncidentDetail("abc".to_string());
        assert_eq!(Route::parse(&detail.path()), Some(detail));
        assert_eq!(Route::Dashboard.path(), "/dashboard");
    }
}
