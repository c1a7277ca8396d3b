use axum::http::{header, StatusCode};
use pretty_assertions::assert_eq;
use readygolf_core::models::{
    identity::Identity,
    page::{ForgotPasswordView, PageView},
};
use rstest::rstest;
use uuid::Uuid;

use crate::test_utils::{session_cookie, TestContext};

#[rstest]
#[case("/")]
#[case("/privacy")]
#[case("/login")]
#[case("/register")]
#[tokio::test]
async fn test_page_anonymous(#[case] path: &str) {
    let mut ctx = TestContext::new();
    ctx.sessions.expect_find_identity().times(0);
    let server = ctx.server();

    let response = server.get(path).await;

    assert_eq!(response.status_code(), StatusCode::OK);
    assert_eq!(response.json::<PageView>(), PageView::new(None));
}

#[rstest]
#[case("/")]
#[case("/privacy")]
#[case("/login")]
#[case("/register")]
#[tokio::test]
async fn test_page_shows_logged_in_user(#[case] path: &str) {
    let session_id = Uuid::new_v4();
    let mut ctx = TestContext::new();
    ctx.logged_in_as(session_id, Identity::new(5, "bob"));
    let server = ctx.server();

    let (name, value) = session_cookie(session_id);
    let response = server.get(path).add_header(name, value).await;

    assert_eq!(response.status_code(), StatusCode::OK);
    assert_eq!(
        response.json::<PageView>(),
        PageView::new(Some(Identity::new(5, "bob")))
    );
}

#[tokio::test]
async fn test_forgot_password_page_is_empty_form() {
    let server = TestContext::new().server();

    let response = server.get("/forgot-password").await;

    assert_eq!(response.status_code(), StatusCode::OK);
    assert_eq!(
        response.json::<ForgotPasswordView>(),
        ForgotPasswordView {
            error: None,
            success: None,
        }
    );
}

#[tokio::test]
async fn test_booking_redirect_lands_on_login_page() {
    let server = TestContext::new().server();

    let denied = server.get("/booking").await;
    assert_eq!(denied.status_code(), StatusCode::SEE_OTHER);
    let location = denied.headers()[header::LOCATION]
        .to_str()
        .unwrap()
        .to_string();

    let response = server.get(&location).await;

    assert_eq!(response.status_code(), StatusCode::OK);
    assert_eq!(response.json::<PageView>(), PageView::new(None));
}
