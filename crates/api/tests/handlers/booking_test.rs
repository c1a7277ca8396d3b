use axum::http::{header, StatusCode};
use pretty_assertions::assert_eq;
use readygolf_core::models::{
    booking::BookingView, identity::Identity, schedule::Schedule, time_slot::TimeSlot,
};
use serde::Serialize;
use uuid::Uuid;

use crate::test_utils::{session_cookie, TestContext};

#[derive(Serialize)]
struct DateForm<'a> {
    date: &'a str,
}

fn labels(view: &BookingView) -> Vec<String> {
    view.slots
        .as_ref()
        .expect("slots present")
        .iter()
        .map(TimeSlot::to_string)
        .collect()
}

#[tokio::test]
async fn test_booking_view_redirects_anonymous_to_login() {
    let mut ctx = TestContext::new();
    ctx.sessions.expect_find_identity().times(0);
    let server = ctx.server();

    let response = server.get("/booking").await;

    assert_eq!(response.status_code(), StatusCode::SEE_OTHER);
    assert_eq!(response.headers()[header::LOCATION], "/login");
}

#[tokio::test]
async fn test_booking_submit_redirects_anonymous_to_login() {
    let server = TestContext::new().server();

    let response = server
        .post("/booking")
        .form(&DateForm { date: "2025-03-15" })
        .await;

    assert_eq!(response.status_code(), StatusCode::SEE_OTHER);
    assert_eq!(response.headers()[header::LOCATION], "/login");
}

#[tokio::test]
async fn test_stale_session_cookie_is_denied() {
    let session_id = Uuid::new_v4();
    let mut ctx = TestContext::new();
    ctx.sessions
        .expect_find_identity()
        .times(1)
        .returning(|_| Ok(None));
    let server = ctx.server();

    let (name, value) = session_cookie(session_id);
    let response = server.get("/booking").add_header(name, value).await;

    assert_eq!(response.status_code(), StatusCode::SEE_OTHER);
    assert_eq!(response.headers()[header::LOCATION], "/login");
}

#[tokio::test]
async fn test_booking_view_without_date() {
    let session_id = Uuid::new_v4();
    let mut ctx = TestContext::new();
    ctx.logged_in_as(session_id, Identity::new(1, "alice"));
    let server = ctx.server();

    let (name, value) = session_cookie(session_id);
    let response = server.get("/booking").add_header(name, value).await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let view: BookingView = response.json();
    assert_eq!(
        view,
        BookingView {
            username: "alice".to_string(),
            selected_date: None,
            slots: None,
            error: None,
        }
    );
}

#[tokio::test]
async fn test_booking_submit_lists_default_tee_times() {
    let session_id = Uuid::new_v4();
    let mut ctx = TestContext::new();
    ctx.logged_in_as(session_id, Identity::new(1, "alice"));
    let server = ctx.server();

    let (name, value) = session_cookie(session_id);
    let response = server
        .post("/booking")
        .add_header(name, value)
        .form(&DateForm { date: "2025-03-15" })
        .await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let view: BookingView = response.json();
    assert_eq!(view.username, "alice");
    assert_eq!(view.selected_date.as_deref(), Some("2025-03-15"));
    assert_eq!(view.error, None);

    let slots = labels(&view);
    assert_eq!(slots.len(), 25);
    assert_eq!(slots.first().map(String::as_str), Some("08:00"));
    assert_eq!(slots.last().map(String::as_str), Some("16:00"));
}

#[tokio::test]
async fn test_new_date_rerenders_without_carry_over() {
    let session_id = Uuid::new_v4();
    let mut ctx = TestContext::new();
    ctx.logged_in_as(session_id, Identity::new(1, "alice"));
    let server = ctx.server();

    let (name, value) = session_cookie(session_id);
    let first: BookingView = server
        .post("/booking")
        .add_header(name.clone(), value.clone())
        .form(&DateForm { date: "2025-03-15" })
        .await
        .json();
    let second: BookingView = server
        .post("/booking")
        .add_header(name, value)
        .form(&DateForm { date: "2025-03-16" })
        .await
        .json();

    assert_eq!(first.selected_date.as_deref(), Some("2025-03-15"));
    assert_eq!(second.selected_date.as_deref(), Some("2025-03-16"));
    assert_eq!(first.slots, second.slots);
}

#[tokio::test]
async fn test_booking_uses_configured_schedule() {
    let session_id = Uuid::new_v4();
    let mut ctx = TestContext::new();
    ctx.schedule = Schedule::new(420, 480, 30).unwrap();
    ctx.logged_in_as(session_id, Identity::new(1, "alice"));
    let server = ctx.server();

    let (name, value) = session_cookie(session_id);
    let view: BookingView = server
        .post("/booking")
        .add_header(name, value)
        .form(&DateForm { date: "2025-06-01" })
        .await
        .json();

    assert_eq!(labels(&view), ["07:00", "07:30", "08:00"]);
}

#[tokio::test]
async fn test_invalid_date_rerenders_date_selection() {
    let session_id = Uuid::new_v4();
    let mut ctx = TestContext::new();
    ctx.logged_in_as(session_id, Identity::new(1, "alice"));
    let server = ctx.server();

    let (name, value) = session_cookie(session_id);
    let response = server
        .post("/booking")
        .add_header(name, value)
        .form(&DateForm { date: "2025-02-30" })
        .await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    let view: BookingView = response.json();
    assert_eq!(view.username, "alice");
    assert_eq!(view.selected_date, None);
    assert_eq!(view.slots, None);
    assert!(view.error.unwrap().contains("2025-02-30"));
}

#[tokio::test]
async fn test_missing_date_rerenders_date_selection() {
    let session_id = Uuid::new_v4();
    let mut ctx = TestContext::new();
    ctx.logged_in_as(session_id, Identity::new(1, "alice"));
    let server = ctx.server();

    let (name, value) = session_cookie(session_id);
    let response = server.post("/booking").add_header(name, value).await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    let view: BookingView = response.json();
    assert_eq!(view.slots, None);
    assert!(view.error.is_some());
}
