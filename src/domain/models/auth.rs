use serde::Serialize;
use super::session::Role;

/// Result of a successful sign-in or OTP verification.
#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct AuthOutcome {
    pub role: Role,
    pub email: String,
    pub message: String,
    pub redirect: String,
}

impl AuthOutcome {
    pub fn new(role: Role, email: String, message: impl Into<String>) -> Self {
        Self {
            role,
            email,
            message: message.into(),
            redirect: role.dashboard_route().to_string(),
        }
    }
}
