use axum::{extract::{State, Path}, http::StatusCode, response::IntoResponse, Json};
use crate::state::AppState;
use crate::api::extractors::{device::Device, session::AdminSession};
use crate::api::dtos::{requests::EventRequest, responses::CatalogResponse};
use crate::domain::services::{catalog::EventDraft, defaults};
use crate::error::AppError;
use std::sync::Arc;
use tracing::info;

impl From<EventRequest> for EventDraft {
    fn from(payload: EventRequest) -> Self {
        Self {
            name: payload.name,
            date: payload.date,
            venue: payload.venue,
            description: payload.description,
            image_url: payload.image_url,
            status: payload.status,
        }
    }
}

pub async fn list_events(
    State(state): State<Arc<AppState>>,
    Device(device): Device,
) -> Result<impl IntoResponse, AppError> {
    let catalog = state.catalog.load_events(device).await?;
    Ok(Json(CatalogResponse { events: catalog.events().to_vec() }))
}

pub async fn list_announcements() -> impl IntoResponse {
    Json(defaults::announcements())
}

pub async fn create_event(
    State(state): State<Arc<AppState>>,
    admin: AdminSession,
    Json(payload): Json<EventRequest>,
) -> Result<impl IntoResponse, AppError> {
    info!("Admin {:?} creating event {}", admin.flags.user_email, payload.name);
    let event = state.catalog.create_event(payload.into()).await?;
    Ok((StatusCode::CREATED, Json(event)))
}

pub async fn update_event(
    State(state): State<Arc<AppState>>,
    admin: AdminSession,
    Path(event_id): Path<i64>,
    Json(payload): Json<EventRequest>,
) -> Result<impl IntoResponse, AppError> {
    info!("Admin {:?} updating event {}", admin.flags.user_email, event_id);
    let event = state.catalog.update_event(event_id, payload.into()).await?;
    Ok(Json(event))
}
