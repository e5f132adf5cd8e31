use core::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Role of an authenticated identity.
///
/// The backend reports roles as free-form strings; this is the closed set the
/// client recognizes. Anything else is preserved as [`Role::Unknown`] and is
/// denied every privileged decision.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Role {
    Admin,
    Teacher,
    Student,
    Parent,
    /// Unrecognized backend-provided role, preserved verbatim.
    Unknown(String),
}

impl Role {
    pub fn parse(name: &str) -> Self {
        match name {
            "Admin" => Role::Admin,
            "Teacher" => Role::Teacher,
            "Student" => Role::Student,
            "Parent" => Role::Parent,
            other => Role::Unknown(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Role::Admin => "Admin",
            Role::Teacher => "Teacher",
            Role::Student => "Student",
            Role::Parent => "Parent",
            Role::Unknown(name) => name,
        }
    }

    /// Whether this is one of the four roles the client recognizes.
    pub fn is_known(&self) -> bool {
        !matches!(self, Role::Unknown(_))
    }
}

impl core::fmt::Display for Role {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = core::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::parse(s))
    }
}

// On the wire a role is just its string form; unknown values round-trip
// unchanged so the raw backend value is never lost.
impl Serialize for Role {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Role {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let name = String::deserialize(deserializer)?;
        Ok(Role::parse(&name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_roles_parse() {
        assert_eq!(Role::parse("Admin"), Role::Admin);
        assert_eq!(Role::parse("Teacher"), Role::Teacher);
        assert_eq!(Role::parse("Student"), Role::Student);
        assert_eq!(Role::parse("Parent"), Role::Parent);
    }

    #[test]
    fn unrecognized_role_is_preserved() {
        let role = Role::parse("Superintendent");
        assert!(!role.is_known());
        assert_eq!(role.as_str(), "Superintendent");
    }

    #[test]
    fn role_is_case_sensitive() {
        // The backend emits capitalized role names; "admin" is not "Admin".
        assert!(!Role::parse("admin").is_known());
    }

    #[test]
    fn wire_round_trip() {
        let json = serde_json::to_string(&Role::Parent).unwrap();
        assert_eq!(json, "\"Parent\"");

        let back: Role = serde_json::from_str("\"Counselor\"").unwrap();
        assert_eq!(back, Role::Unknown("Counselor".to_string()));
        assert_eq!(serde_json::to_string(&back).unwrap(), "\"Counselor\"");
    }
}
