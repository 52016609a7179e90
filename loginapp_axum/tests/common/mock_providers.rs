//! Mock Firebase, Supabase and Pocketbase endpoints
//!
//! Each provider gets its own axum server on an ephemeral port. All three accept
//! exactly one email/password pair.

use axum::{
    Json, Router,
    extract::Query,
    http::{Method, StatusCode, Uri},
    routing::post,
};
use serde_json::{Value, json};
use std::collections::HashMap;

pub const TEST_EMAIL: &str = "user@example.com";
pub const TEST_PASSWORD: &str = "correct-horse";
pub const FIREBASE_API_KEY: &str = "test-api-key";

pub const FIREBASE_LOCAL_ID: &str = "fb-local-id-1";
pub const SUPABASE_USER_ID: &str = "3f2504e0-4f89-41d3-9a0c-0305e82c3301";
pub const POCKETBASE_RECORD_ID: &str = "pbrecord0000001";

/// Base URLs of the running mock providers.
pub struct MockProviders {
    pub firebase_endpoint: String,
    pub supabase_url: String,
    pub pocketbase_url: String,
}

impl MockProviders {
    pub async fn start() -> Self {
        // The `:` in the Identity Toolkit path is matched by hand.
        let firebase = Router::new().fallback(firebase_sign_in);
        let supabase = Router::new().route("/token", post(supabase_token));
        let pocketbase = Router::new().route(
            "/api/collections/users/auth-with-password",
            post(pocketbase_auth_with_password),
        );

        Self {
            firebase_endpoint: serve(firebase).await,
            supabase_url: serve(supabase).await,
            pocketbase_url: serve(pocketbase).await,
        }
    }
}

async fn serve(router: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind mock provider");
    let addr = listener
        .local_addr()
        .expect("Failed to read mock provider address");
    tokio::spawn(async move {
        axum::serve(listener, router)
            .await
            .expect("Mock provider stopped");
    });
    format!("http://{addr}")
}

fn credentials_match(body: &Value, email_field: &str) -> bool {
    body[email_field].as_str() == Some(TEST_EMAIL)
        && body["password"].as_str() == Some(TEST_PASSWORD)
}

async fn firebase_sign_in(
    method: Method,
    uri: Uri,
    Query(query): Query<HashMap<String, String>>,
    Json(body): Json<Value>,
) -> (StatusCode, Json<Value>) {
    if method != Method::POST || uri.path() != "/v1/accounts:signInWithPassword" {
        return (StatusCode::NOT_FOUND, Json(json!({})));
    }
    if query.get("key").map(String::as_str) != Some(FIREBASE_API_KEY) {
        return (
            StatusCode::BAD_REQUEST,
            Json(json!({"error": {"code": 400, "message": "API key not valid"}})),
        );
    }
    if !credentials_match(&body, "email") {
        return (
            StatusCode::BAD_REQUEST,
            Json(json!({"error": {"code": 400, "message": "INVALID_LOGIN_CREDENTIALS"}})),
        );
    }
    (
        StatusCode::OK,
        Json(json!({
            "kind": "identitytoolkit#VerifyPasswordResponse",
            "localId": FIREBASE_LOCAL_ID,
            "email": TEST_EMAIL,
            "idToken": "id-token",
            "registered": true,
            "refreshToken": "refresh-token",
            "expiresIn": "3600"
        })),
    )
}

async fn supabase_token(
    Query(query): Query<HashMap<String, String>>,
    Json(body): Json<Value>,
) -> (StatusCode, Json<Value>) {
    if query.get("grant_type").map(String::as_str) != Some("password")
        || !credentials_match(&body, "email")
    {
        return (
            StatusCode::BAD_REQUEST,
            Json(json!({
                "error": "invalid_grant",
                "error_description": "Invalid login credentials"
            })),
        );
    }
    (
        StatusCode::OK,
        Json(json!({
            "access_token": "jwt",
            "token_type": "bearer",
            "expires_in": 3600,
            "refresh_token": "refresh",
            "user": {"id": SUPABASE_USER_ID, "aud": "authenticated", "email": TEST_EMAIL}
        })),
    )
}

async fn pocketbase_auth_with_password(Json(body): Json<Value>) -> (StatusCode, Json<Value>) {
    if !credentials_match(&body, "identity") {
        return (
            StatusCode::BAD_REQUEST,
            Json(json!({"code": 400, "message": "Failed to authenticate.", "data": {}})),
        );
    }
    (
        StatusCode::OK,
        Json(json!({
            "token": "pb-token",
            "record": {
                "id": POCKETBASE_RECORD_ID,
                "collectionName": "users",
                "email": TEST_EMAIL,
                "verified": true
            }
        })),
    )
}
