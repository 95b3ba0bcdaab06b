use crate::domain::models::{announcement::Announcement, event::{Event, EventView}, session::Role};
use crate::domain::services::registration::RegistrationOutcome;
use serde::Serialize;

#[derive(Serialize)]
pub struct MessageResponse {
    pub message: String,
}

#[derive(Serialize)]
pub struct DemoAccount {
    pub role: Role,
    pub email: &'static str,
    pub password: &'static str,
}

#[derive(Serialize)]
pub struct SignInPageResponse {
    pub role: Option<Role>,
    pub demo_accounts: Vec<DemoAccount>,
}

#[derive(Serialize)]
pub struct CatalogResponse {
    pub events: Vec<EventView>,
}

#[derive(Serialize)]
pub struct StudentDashboardResponse {
    pub user_name: Option<String>,
    pub upcoming_events: Vec<EventView>,
    pub registered_events: Vec<EventView>,
    pub announcements: Vec<Announcement>,
}

#[derive(Serialize)]
pub struct StudentEventsResponse {
    pub events: Vec<EventView>,
    pub upcoming: Vec<EventView>,
    pub registered: Vec<EventView>,
}

#[derive(Serialize)]
pub struct AdminDashboardResponse {
    pub user_email: Option<String>,
    pub total_events: usize,
    pub upcoming_events: usize,
    pub total_registrations: u64,
    pub events: Vec<Event>,
}

#[derive(Serialize)]
pub struct RegistrationResponse {
    #[serde(flatten)]
    pub outcome: RegistrationOutcome,
    pub message: Option<String>,
}
