use serde::{Deserialize, Serialize};

/// The three portal roles. The set is closed: every role-gated decision in
/// the application is an exhaustive match over these variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum UserRole {
    Student,
    Authority,
    Partner,
}

impl UserRole {
    pub const ALL: [UserRole; 3] = [UserRole::Authority, UserRole::Partner, UserRole::Student];

    /// Stable wire/session code.
    pub fn code(&self) -> &'static str {
        match self {
            UserRole::Student => "STUDENT",
            UserRole::Authority => "AUTHORITY",
            UserRole::Partner => "PARTNER",
        }
    }

    pub fn from_code(code: &str) -> Option<UserRole> {
        match code {
            "STUDENT" => Some(UserRole::Student),
            "AUTHORITY" => Some(UserRole::Authority),
            "PARTNER" => Some(UserRole::Partner),
            _ => None,
        }
    }

    /// Display title as shown on the login portal.
    pub fn label(&self) -> &'static str {
        match self {
            UserRole::Student => "Student Representative",
            UserRole::Authority => "Campus Authority",
            UserRole::Partner => "Campus Partner",
        }
    }

    /// Dashboard headline for the logged-in role.
    pub fn headline(&self) -> &'static str {
        match self {
            UserRole::Authority => "Authority Strategic Dashboard",
            UserRole::Partner => "Campus Partnership Network",
            UserRole::Student => "Student Experience Hub",
        }
    }
}
