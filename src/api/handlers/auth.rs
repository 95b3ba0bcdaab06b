use axum::{extract::{State, Query}, response::IntoResponse, Json};
use crate::state::AppState;
use crate::api::extractors::device::Device;
use crate::api::dtos::{
    requests::{SignInRequest, SignInPageQuery, VerifyOtpRequest},
    responses::{DemoAccount, MessageResponse, SignInPageResponse},
};
use crate::domain::services::auth_service::{OtpSubmission, DEMO_ACCOUNTS};
use crate::error::AppError;
use std::sync::Arc;
use tracing::info;

/// Entry point the gate redirects to. `role` only preselects the form.
pub async fn sign_in_page(
    Query(query): Query<SignInPageQuery>,
) -> impl IntoResponse {
    let demo_accounts = DEMO_ACCOUNTS
        .iter()
        .map(|(email, password, role)| DemoAccount { role: *role, email: *email, password: *password })
        .collect();

    Json(SignInPageResponse { role: query.role, demo_accounts })
}

pub async fn sign_in(
    State(state): State<Arc<AppState>>,
    Device(device): Device,
    Json(payload): Json<SignInRequest>,
) -> Result<impl IntoResponse, AppError> {
    info!("Sign in attempt for {}", payload.email);
    let outcome = state.auth_service.sign_in(device, &payload.email, &payload.password).await?;
    Ok(Json(outcome))
}

pub async fn verify_otp(
    State(state): State<Arc<AppState>>,
    Device(device): Device,
    Json(payload): Json<VerifyOtpRequest>,
) -> Result<impl IntoResponse, AppError> {
    let submission = OtpSubmission {
        otp: payload.otp,
        email: payload.email,
        role: payload.role,
        name: payload.name,
    };
    let outcome = state.auth_service.verify_otp(device, submission).await?;
    Ok(Json(outcome))
}

pub async fn resend_otp(
    State(state): State<Arc<AppState>>,
) -> impl IntoResponse {
    Json(MessageResponse { message: state.auth_service.resend_otp_notice() })
}

pub async fn sign_out(
    State(state): State<Arc<AppState>>,
    Device(device): Device,
) -> Result<impl IntoResponse, AppError> {
    state.auth_service.sign_out(device).await?;
    Ok(Json(MessageResponse { message: "Signed out".to_string() }))
}

pub async fn current_session(
    State(state): State<Arc<AppState>>,
    Device(device): Device,
) -> Result<impl IntoResponse, AppError> {
    Ok(Json(state.auth_service.session(device).await?))
}
