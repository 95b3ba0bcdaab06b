use std::fmt;
use uuid::Uuid;

pub const EVENTS_KEY: &str = "events";
pub const REGISTERED_EVENTS_KEY: &str = "registeredEvents";
pub const USER_ROLE_KEY: &str = "userRole";
pub const USER_EMAIL_KEY: &str = "userEmail";
pub const USER_NAME_KEY: &str = "userName";
pub const EMAIL_VERIFIED_KEY: &str = "emailVerified";

pub const SESSION_KEYS: [&str; 4] = [USER_ROLE_KEY, USER_EMAIL_KEY, USER_NAME_KEY, EMAIL_VERIFIED_KEY];

/// One browser, identified by its device cookie. Stands in for the origin
/// that owns a local storage area.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DeviceId(pub Uuid);

impl DeviceId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Physical store key of a per-device record.
    pub fn key(&self, name: &str) -> String {
        format!("device:{}:{}", self.0, name)
    }
}

impl Default for DeviceId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for DeviceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}
