use axum::{extract::State, response::IntoResponse, Json};
use crate::state::AppState;
use crate::api::extractors::session::{AdminSession, StudentSession};
use crate::api::dtos::responses::{AdminDashboardResponse, StudentDashboardResponse, StudentEventsResponse};
use crate::domain::services::defaults;
use crate::error::AppError;
use std::sync::Arc;

pub async fn student_dashboard(
    State(state): State<Arc<AppState>>,
    session: StudentSession,
) -> Result<impl IntoResponse, AppError> {
    let catalog = state.catalog.load_events(session.device).await?;

    Ok(Json(StudentDashboardResponse {
        user_name: session.flags.user_name,
        upcoming_events: catalog.upcoming_widget(),
        registered_events: catalog.registered(),
        announcements: defaults::announcements(),
    }))
}

pub async fn student_events(
    State(state): State<Arc<AppState>>,
    session: StudentSession,
) -> Result<impl IntoResponse, AppError> {
    let catalog = state.catalog.load_events(session.device).await?;

    Ok(Json(StudentEventsResponse {
        upcoming: catalog.upcoming(),
        registered: catalog.registered(),
        events: catalog.events().to_vec(),
    }))
}

pub async fn admin_dashboard(
    State(state): State<Arc<AppState>>,
    session: AdminSession,
) -> Result<impl IntoResponse, AppError> {
    let events = state.catalog.stored_events().await?;

    Ok(Json(AdminDashboardResponse {
        user_email: session.flags.user_email,
        total_events: events.len(),
        upcoming_events: events.iter().filter(|e| e.is_upcoming()).count(),
        total_registrations: events.iter().map(|e| u64::from(e.registrations)).sum(),
        events,
    }))
}
