use axum::{
    body::Body,
    extract::Request,
    routing::{get, post, put},
    Router,
};
use std::sync::Arc;
use std::time::Duration;
use crate::state::AppState;
use crate::api::handlers::{health, auth, event, dashboard, registration};
use tower_http::{
    trace::TraceLayer,
    classify::ServerErrorsFailureClass,
};
use tower_cookies::CookieManagerLayer;
use tracing::{info_span, Span, error, info};
use uuid::Uuid;

pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(health::health_check))

        // Auth
        .route("/signin", get(auth::sign_in_page))
        .route("/api/v1/auth/signin", post(auth::sign_in))
        .route("/api/v1/auth/otp/verify", post(auth::verify_otp))
        .route("/api/v1/auth/otp/resend", post(auth::resend_otp))
        .route("/api/v1/auth/signout", post(auth::sign_out))
        .route("/api/v1/auth/session", get(auth::current_session))

        // Public
        .route("/api/v1/events", get(event::list_events))
        .route("/api/v1/announcements", get(event::list_announcements))

        // Student
        .route("/student/dashboard", get(dashboard::student_dashboard))
        .route("/student/events", get(dashboard::student_events))
        .route("/student/events/{event_id}/register", post(registration::register_for_event))

        // Admin
        .route("/admin/dashboard", get(dashboard::admin_dashboard))
        .route("/admin/events", post(event::create_event))
        .route("/admin/events/{event_id}", put(event::update_event))

        .layer(
            TraceLayer::new_for_http()
                .make_span_with(|request: &Request<Body>| {
                    let request_id = Uuid::new_v4().to_string();
                    info_span!(
                        "http_request",
                        request_id = %request_id,
                        method = ?request.method(),
                        uri = ?request.uri(),
                        version = ?request.version(),
                        device_id = tracing::field::Empty,
                    )
                })
                .on_request(|request: &Request<Body>, _span: &Span| {
                    info!("started processing request: {} {}", request.method(), request.uri().path());
                })
                .on_response(|response: &axum::http::Response<Body>, latency: Duration, _span: &Span| {
                    info!(
                        status = response.status().as_u16(),
                        latency_ms = latency.as_millis(),
                        "finished processing request"
                    );
                })
                .on_failure(|error: ServerErrorsFailureClass, _latency: Duration, _span: &Span| {
                    error!("request failed: {:?}", error);
                })
        )
        .layer(CookieManagerLayer::new())
        .with_state(state)
}
