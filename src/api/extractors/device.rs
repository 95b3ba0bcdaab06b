use axum::{
    extract::{FromRequestParts, FromRef},
    http::{request::Parts, StatusCode},
};
use crate::domain::models::record::DeviceId;
use crate::state::AppState;
use std::sync::Arc;
use time::Duration;
use tower_cookies::{Cookie, Cookies};
use tower_cookies::cookie::SameSite;
use tracing::{debug, Span};
use uuid::Uuid;

pub const DEVICE_COOKIE: &str = "festhive_device";

/// The calling browser. A fresh id is issued when the cookie is missing or garbled,
/// which gives that browser an empty local store.
pub struct Device(pub DeviceId);

impl<S> FromRequestParts<S> for Device
where
    S: Send + Sync,
    Arc<AppState>: FromRef<S>,
{
    type Rejection = StatusCode;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let cookies = parts.extensions.get::<Cookies>()
            .ok_or(StatusCode::INTERNAL_SERVER_ERROR)?;

        let existing = cookies.get(DEVICE_COOKIE)
            .and_then(|cookie| Uuid::parse_str(cookie.value()).ok())
            .map(DeviceId);

        let device = match existing {
            Some(device) => device,
            None => {
                let app_state = <Arc<AppState> as FromRef<S>>::from_ref(state);
                let device = DeviceId::new();
                debug!("Issuing new device id {}", device);

                let mut cookie = Cookie::new(DEVICE_COOKIE, device.to_string());
                cookie.set_http_only(true);
                cookie.set_secure(app_state.config.secure_cookies);
                cookie.set_same_site(SameSite::Lax);
                cookie.set_path("/");
                cookie.set_max_age(Duration::days(365));
                cookies.add(cookie);
                device
            }
        };

        Span::current().record("device_id", tracing::field::display(device));

        Ok(Device(device))
    }
}
