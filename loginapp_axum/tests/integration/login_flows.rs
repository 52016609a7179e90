//! Login, verify, refresh and logout against each provider

use axum::http::{Method, StatusCode, header};

use crate::common::test_app::{body_text, cookie_pair};
use crate::common::{
    FIREBASE_LOCAL_ID, POCKETBASE_RECORD_ID, SUPABASE_USER_ID, TEST_EMAIL, TEST_PASSWORD, TestApp,
};

const PROVIDERS: [(&str, &str); 3] = [
    ("firebase", FIREBASE_LOCAL_ID),
    ("supabase", SUPABASE_USER_ID),
    ("pocketbase", POCKETBASE_RECORD_ID),
];

#[tokio::test]
async fn test_full_session_lifecycle_for_each_provider() {
    let app = TestApp::start().await;

    for (base, subject) in PROVIDERS {
        // Anonymous GET shows the login form
        let response = app.request(Method::GET, None).await;
        assert_eq!(response.status(), StatusCode::OK);
        assert!(body_text(response).await.contains("<form"));

        // Login redirects home with the provider subject as the cookie value
        let response = app.login(base, TEST_EMAIL, TEST_PASSWORD).await;
        assert_eq!(response.status(), StatusCode::FOUND, "{base}");
        assert_eq!(
            response
                .headers()
                .get(header::LOCATION)
                .and_then(|v| v.to_str().ok()),
            Some("/")
        );
        let cookie = cookie_pair(&response).expect("session cookie");
        assert_eq!(cookie, format!("__session__={subject}"));

        // Authenticated GET shows the session controls
        let response = app.request(Method::GET, Some(&cookie)).await;
        assert_eq!(response.status(), StatusCode::OK);
        let body = body_text(response).await;
        assert!(body.contains(r#"id="verify""#));
        assert!(!body.contains("<form"));

        let response = app.request(Method::PATCH, Some(&cookie)).await;
        assert_eq!(response.status(), StatusCode::OK);

        let response = app.request(Method::PUT, Some(&cookie)).await;
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(cookie_pair(&response), Some(cookie.clone()));

        // Logout clears the cookie; the browser then sends none
        let response = app.request(Method::DELETE, Some(&cookie)).await;
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(cookie_pair(&response).as_deref(), Some("__session__="));

        let response = app.request(Method::GET, None).await;
        assert_eq!(response.status(), StatusCode::OK);
        assert!(body_text(response).await.contains("<form"));

        let response = app.request(Method::PATCH, None).await;
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }
}

#[tokio::test]
async fn test_wrong_password_is_unauthorized_for_each_provider() {
    let app = TestApp::start().await;

    for (base, _) in PROVIDERS {
        let response = app.login(base, TEST_EMAIL, "wrong").await;
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED, "{base}");
        assert!(response.headers().get(header::SET_COOKIE).is_none());
        assert!(!body_text(response).await.is_empty());
    }
}

#[tokio::test]
async fn test_provider_messages_reach_the_client() {
    let app = TestApp::start().await;

    let response = app.login("firebase", TEST_EMAIL, "wrong").await;
    assert_eq!(body_text(response).await, "status code: 400");

    let response = app.login("supabase", TEST_EMAIL, "wrong").await;
    assert_eq!(
        body_text(response).await,
        "sign in with email and password: response status 400: Invalid login credentials"
    );

    let response = app.login("pocketbase", TEST_EMAIL, "wrong").await;
    assert_eq!(body_text(response).await, "unexpected status code: 400");
}

#[tokio::test]
async fn test_unknown_provider_is_bad_request() {
    let app = TestApp::start().await;
    let response = app.login("auth0", TEST_EMAIL, TEST_PASSWORD).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert!(response.headers().get(header::SET_COOKIE).is_none());
}

#[tokio::test]
async fn test_health() {
    let app = TestApp::start().await;
    let response = app
        .send(
            axum::http::Request::builder()
                .uri("/health")
                .body(axum::body::Body::empty())
                .expect("valid request"),
        )
        .await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_text(response).await, "ok");
}
