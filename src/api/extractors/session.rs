use axum::{
    extract::{FromRequestParts, FromRef},
    http::{header, request::Parts, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use crate::api::extractors::device::Device;
use crate::domain::models::{record::DeviceId, session::{Role, SessionFlags}};
use crate::state::AppState;
use serde_json::json;
use std::sync::Arc;
use tracing::{error, info};

pub const SIGN_IN_ROUTE: &str = "/signin";

/// A device signed in as a student.
pub struct StudentSession {
    pub device: DeviceId,
    pub flags: SessionFlags,
}

/// A device signed in as an admin.
pub struct AdminSession {
    pub device: DeviceId,
    pub flags: SessionFlags,
}

pub enum SessionRejection {
    SignInRequired(Role),
    Internal,
}

impl IntoResponse for SessionRejection {
    fn into_response(self) -> Response {
        match self {
            SessionRejection::SignInRequired(role) => {
                let notice = match role {
                    Role::Admin => "Please sign in as an admin to access this page",
                    Role::Student => "Please sign in as a student to access this page",
                };
                (
                    StatusCode::SEE_OTHER,
                    [(header::LOCATION, SIGN_IN_ROUTE)],
                    Json(json!({ "notice": notice, "redirect": SIGN_IN_ROUTE })),
                ).into_response()
            }
            SessionRejection::Internal => {
                (StatusCode::INTERNAL_SERVER_ERROR, Json(json!({ "error": "Internal error" }))).into_response()
            }
        }
    }
}

async fn require_role<S>(parts: &mut Parts, state: &S, role: Role) -> Result<(DeviceId, SessionFlags), SessionRejection>
where
    S: Send + Sync,
    Arc<AppState>: FromRef<S>,
{
    let Device(device) = Device::from_request_parts(parts, state)
        .await
        .map_err(|_| SessionRejection::Internal)?;

    let app_state = <Arc<AppState> as FromRef<S>>::from_ref(state);
    match app_state.auth_service.require_role(device, role).await {
        Ok(Some(flags)) => Ok((device, flags)),
        Ok(None) => {
            info!(%device, required = %role, "Redirecting to sign in");
            Err(SessionRejection::SignInRequired(role))
        }
        Err(e) => {
            error!("Failed to read session flags: {:?}", e);
            Err(SessionRejection::Internal)
        }
    }
}

impl<S> FromRequestParts<S> for StudentSession
where
    S: Send + Sync,
    Arc<AppState>: FromRef<S>,
{
    type Rejection = SessionRejection;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let (device, flags) = require_role(parts, state, Role::Student).await?;
        Ok(StudentSession { device, flags })
    }
}

impl<S> FromRequestParts<S> for AdminSession
where
    S: Send + Sync,
    Arc<AppState>: FromRef<S>,
{
    type Rejection = SessionRejection;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let (device, flags) = require_role(parts, state, Role::Admin).await?;
        Ok(AdminSession { device, flags })
    }
}
