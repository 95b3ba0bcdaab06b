pub mod announcement;
pub mod auth;
pub mod event;
pub mod record;
pub mod session;
