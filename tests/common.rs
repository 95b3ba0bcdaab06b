use festhive_backend::{
    api::router::create_router,
    config::Config,
    domain::models::event::{Event, EventStatus},
    domain::models::record::EVENTS_KEY,
    infra::factory::connect_record_store,
    state::AppState,
};
use axum::{
    body::Body,
    http::{header, Request, Response},
    Router,
};
use chrono::NaiveDate;
use serde_json::Value;
use std::sync::Arc;
use std::time::Duration;
use tower::ServiceExt;
use uuid::Uuid;

#[allow(dead_code)]
pub struct TestApp {
    pub router: Router,
    pub db_filename: String,
    pub state: Arc<AppState>,
}

#[allow(dead_code)]
impl TestApp {
    pub async fn new() -> Self {
        let db_filename = format!("test_{}.db", Uuid::new_v4());
        let db_url = format!("sqlite://{}?mode=rwc", db_filename);

        let config = Config {
            database_url: db_url.clone(),
            port: 0,
            signin_delay: Duration::ZERO,
            otp_delay: Duration::ZERO,
            seed_demo_data: false,
            secure_cookies: false,
        };

        let record_store = connect_record_store(&db_url).await;
        let state = Arc::new(AppState::new(config, record_store));
        let router = create_router(state.clone());

        Self {
            router,
            db_filename,
            state,
        }
    }

    pub async fn seed_events(&self, events: &[Event]) {
        self.state.record_store
            .put(EVENTS_KEY, serde_json::to_vec(events).unwrap())
            .await
            .unwrap();
    }

    pub async fn send(&self, method: &str, uri: &str, device: Option<&str>, body: Option<Value>) -> Response<Body> {
        let mut builder = Request::builder().method(method).uri(uri);
        if let Some(device) = device {
            builder = builder.header(header::COOKIE, format!("festhive_device={}", device));
        }
        let request = match body {
            Some(json) => builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(json.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };

        self.router.clone().oneshot(request).await.unwrap()
    }

    /// Opens a fresh browser: the first request hands out a device cookie.
    pub async fn new_device(&self) -> String {
        let response = self.send("GET", "/api/v1/auth/session", None, None).await;
        device_cookie(&response).expect("No device cookie issued")
    }

    pub async fn sign_in(&self, device: &str, email: &str, password: &str) -> Response<Body> {
        self.send(
            "POST",
            "/api/v1/auth/signin",
            Some(device),
            Some(serde_json::json!({ "email": email, "password": password })),
        ).await
    }

    pub async fn student_device(&self) -> String {
        let device = self.new_device().await;
        let response = self.sign_in(&device, "student@ies.edu", "student").await;
        assert!(response.status().is_success(), "Student sign in failed: {}", response.status());
        device
    }

    pub async fn admin_device(&self) -> String {
        let device = self.new_device().await;
        let response = self.sign_in(&device, "admin@ies.edu", "admin").await;
        assert!(response.status().is_success(), "Admin sign in failed: {}", response.status());
        device
    }
}

impl Drop for TestApp {
    fn drop(&mut self) {
        let _ = std::fs::remove_file(&self.db_filename);
        let _ = std::fs::remove_file(format!("{}-wal", self.db_filename));
        let _ = std::fs::remove_file(format!("{}-shm", self.db_filename));
    }
}

#[allow(dead_code)]
pub fn device_cookie(response: &Response<Body>) -> Option<String> {
    response.headers()
        .get_all(header::SET_COOKIE)
        .iter()
        .filter_map(|h| h.to_str().ok())
        .find(|c| c.starts_with("festhive_device="))
        .map(|c| {
            let start = "festhive_device=".len();
            let end = c.find(';').unwrap_or(c.len());
            c[start..end].to_string()
        })
}

#[allow(dead_code)]
pub async fn parse_body(response: Response<Body>) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

#[allow(dead_code)]
pub fn event(id: i64, name: &str, registrations: u32, status: EventStatus) -> Event {
    Event {
        id,
        name: name.to_string(),
        date: NaiveDate::from_ymd_opt(2024, 6, 20).unwrap(),
        venue: "Main Auditorium".to_string(),
        description: None,
        image_url: None,
        registrations,
        status,
    }
}
