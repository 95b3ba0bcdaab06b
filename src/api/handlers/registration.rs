use axum::{extract::{State, Path}, response::IntoResponse, Json};
use crate::state::AppState;
use crate::api::extractors::session::StudentSession;
use crate::api::dtos::responses::RegistrationResponse;
use crate::error::AppError;
use std::sync::Arc;

pub async fn register_for_event(
    State(state): State<Arc<AppState>>,
    session: StudentSession,
    Path(event_id): Path<i64>,
) -> Result<impl IntoResponse, AppError> {
    let outcome = state.registration_service.register_for_event(session.device, event_id).await?;
    let message = outcome.message();
    Ok(Json(RegistrationResponse { outcome, message }))
}
