mod common;

use axum::http::{header, StatusCode};
use common::{event, parse_body, TestApp};
use festhive_backend::domain::models::{event::EventStatus, record::EVENTS_KEY};
use serde_json::json;

#[tokio::test]
async fn test_admin_dashboard_summarises_catalog() {
    let app = TestApp::new().await;
    app.seed_events(&[
        event(1, "Tech Innovate 2024", 45, EventStatus::Upcoming),
        event(2, "Freshers Welcome", 210, EventStatus::Completed),
    ]).await;
    let device = app.admin_device().await;

    let res = app.send("GET", "/admin/dashboard", Some(&device), None).await;
    assert_eq!(res.status(), StatusCode::OK);
    let body = parse_body(res).await;
    assert_eq!(body["user_email"], "admin@ies.edu");
    assert_eq!(body["total_events"], 2);
    assert_eq!(body["upcoming_events"], 1);
    assert_eq!(body["total_registrations"], 255);
    assert!(body["events"][0].get("registered").is_none());
}

#[tokio::test]
async fn test_admin_pages_reject_students() {
    let app = TestApp::new().await;
    let device = app.student_device().await;

    let res = app.send("GET", "/admin/dashboard", Some(&device), None).await;
    assert_eq!(res.status(), StatusCode::SEE_OTHER);
    assert_eq!(res.headers().get(header::LOCATION).unwrap(), "/signin");
    assert_eq!(parse_body(res).await["notice"], "Please sign in as an admin to access this page");

    let res = app.send("POST", "/admin/events", Some(&device), Some(json!({
        "name": "Sneaky", "date": "2024-10-01", "venue": "Nowhere"
    }))).await;
    assert_eq!(res.status(), StatusCode::SEE_OTHER);
}

#[tokio::test]
async fn test_created_event_is_open_for_registration() {
    let app = TestApp::new().await;
    let admin = app.admin_device().await;

    let res = app.send("POST", "/admin/events", Some(&admin), Some(json!({
        "name": "Hackathon", "date": "2024-10-01", "venue": "CS Building",
        "description": "24 hour build sprint", "imageUrl": "/img/hack.png"
    }))).await;
    assert_eq!(res.status(), StatusCode::CREATED);
    let created = parse_body(res).await;
    assert_eq!(created["id"], 1);
    assert_eq!(created["status"], "Upcoming");
    assert_eq!(created["registrations"], 0);
    assert_eq!(created["imageUrl"], "/img/hack.png");

    let student = app.student_device().await;
    let body = parse_body(app.send("POST", "/student/events/1/register", Some(&student), None).await).await;
    assert_eq!(body["outcome"], "registered");
}

#[tokio::test]
async fn test_update_keeps_registration_count() {
    let app = TestApp::new().await;
    app.seed_events(&[event(3, "Coding Competition", 60, EventStatus::Upcoming)]).await;
    let admin = app.admin_device().await;

    let res = app.send("PUT", "/admin/events/3", Some(&admin), Some(json!({
        "name": "Coding Competition", "date": "2024-08-05", "venue": "CS Building",
        "status": "Completed"
    }))).await;
    assert_eq!(res.status(), StatusCode::OK);
    let body = parse_body(res).await;
    assert_eq!(body["registrations"], 60);
    assert_eq!(body["status"], "Completed");
    assert_eq!(body["venue"], "CS Building");

    let missing = app.send("PUT", "/admin/events/99", Some(&admin), Some(json!({
        "name": "Ghost", "date": "2024-08-05", "venue": "Nowhere"
    }))).await;
    assert_eq!(missing.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_blank_event_fields_are_rejected() {
    let app = TestApp::new().await;
    let admin = app.admin_device().await;

    let res = app.send("POST", "/admin/events", Some(&admin), Some(json!({
        "name": "  ", "date": "2024-10-01", "venue": "Hall"
    }))).await;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_public_catalog_and_announcements() {
    let app = TestApp::new().await;
    app.seed_events(&[event(1, "Tech Innovate 2024", 45, EventStatus::Upcoming)]).await;

    let body = parse_body(app.send("GET", "/api/v1/events", None, None).await).await;
    assert_eq!(body["events"][0]["name"], "Tech Innovate 2024");
    assert_eq!(body["events"][0]["registered"], false);

    let res = app.send("GET", "/api/v1/announcements", None, None).await;
    assert_eq!(res.status(), StatusCode::OK);
    assert_eq!(parse_body(res).await.as_array().unwrap().len(), 3);
}

#[tokio::test]
async fn test_admin_create_refuses_to_replace_unreadable_catalog() {
    let app = TestApp::new().await;
    let raw = r#"[{"id":1,"name":"Tech Innovate 2024","date":"2024-06-20","venue":"Main Auditorium","registrations":45,"status":"Upcoming"},{"id":2,"name":"Annual Cultural Fest","date":"2024-07-15T18:00:00Z","venue":"Open Air Theatre","registrations":120,"status":"Upcoming"}]"#;
    app.state.record_store.put(EVENTS_KEY, raw.as_bytes().to_vec()).await.unwrap();
    let admin = app.admin_device().await;

    let res = app.send("POST", "/admin/events", Some(&admin), Some(json!({
        "name": "Hackathon", "date": "2024-10-01", "venue": "CS Building"
    }))).await;
    assert_eq!(res.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let res = app.send("PUT", "/admin/events/1", Some(&admin), Some(json!({
        "name": "Renamed", "date": "2024-06-21", "venue": "Main Auditorium"
    }))).await;
    assert_eq!(res.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let stored = app.state.record_store.get(EVENTS_KEY).await.unwrap().unwrap();
    assert_eq!(stored, raw.as_bytes().to_vec());
}
