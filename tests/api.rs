//! HTTP API integration tests
//!
//! Most tests run against a server with no database configured: they cover
//! the routing surface, the uniform error envelope, validation ordering,
//! and the auth middleware, none of which need a store. The `#[ignore]`d
//! tests at the bottom exercise the full signup/login/profile flow and
//! need live PostgreSQL reachable through `DATABASE_URL`.

use axum::http::StatusCode;
use axum_test::TestServer;
use codefolio::auth::TokenKeys;
use codefolio::routes::create_router;
use codefolio::server::state::AppState;

const TEST_SECRET: &str = "integration-test-secret";

fn state_without_database() -> AppState {
    AppState {
        db_pool: None,
        token_keys: Some(TokenKeys::new(TEST_SECRET)),
        ai: None,
        http_client: reqwest::Client::new(),
    }
}

fn server_without_database() -> TestServer {
    TestServer::new(create_router(state_without_database())).unwrap()
}

#[tokio::test]
async fn test_welcome_route() {
    let server = server_without_database();

    let response = server.get("/").await;
    assert_eq!(response.status_code(), StatusCode::OK);

    let body: serde_json::Value = response.json();
    assert_eq!(body["success"], true);
    assert_eq!(body["status"], "active");
}

#[tokio::test]
async fn test_health_reports_degraded_services() {
    let server = server_without_database();

    let response = server.get("/health").await;
    assert_eq!(response.status_code(), StatusCode::OK);

    let body: serde_json::Value = response.json();
    assert_eq!(body["status"], "ok");
    assert_eq!(body["database"], "disconnected");
    assert_eq!(body["auth"], "configured");
}

#[tokio::test]
async fn test_unknown_route_returns_error_envelope() {
    let server = server_without_database();

    let response = server.get("/does-not-exist").await;
    assert_eq!(response.status_code(), StatusCode::NOT_FOUND);

    let body: serde_json::Value = response.json();
    assert_eq!(body["success"], false);
    assert!(body["message"].is_string());
}

#[tokio::test]
async fn test_signup_missing_fields() {
    let server = server_without_database();

    let response = server
        .post("/api/auth/signup")
        .json(&serde_json::json!({ "email": "u1@x.com", "password": "secret1" }))
        .await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    let body: serde_json::Value = response.json();
    assert_eq!(body["success"], false);
    assert_eq!(body["message"], "All fields are required");
}

#[tokio::test]
async fn test_signup_invalid_email() {
    let server = server_without_database();

    let response = server
        .post("/api/auth/signup")
        .json(&serde_json::json!({
            "username": "user1",
            "email": "not-an-email",
            "password": "secret1"
        }))
        .await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    let body: serde_json::Value = response.json();
    assert_eq!(body["message"], "Invalid email format");
}

#[tokio::test]
async fn test_signup_short_password() {
    let server = server_without_database();

    let response = server
        .post("/api/auth/signup")
        .json(&serde_json::json!({
            "username": "user1",
            "email": "u1@x.com",
            "password": "12345"
        }))
        .await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    let body: serde_json::Value = response.json();
    assert_eq!(body["message"], "Password must be at least 6 characters long");
}

#[tokio::test]
async fn test_signup_without_database_is_configuration_error() {
    let server = server_without_database();

    let response = server
        .post("/api/auth/signup")
        .json(&serde_json::json!({
            "username": "user1",
            "email": "u1@x.com",
            "password": "secret1"
        }))
        .await;

    assert_eq!(response.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    let body: serde_json::Value = response.json();
    assert_eq!(body["success"], false);
}

#[tokio::test]
async fn test_login_without_database_is_configuration_error() {
    let server = server_without_database();

    let response = server
        .post("/api/auth/login")
        .json(&serde_json::json!({ "email": "u1@x.com", "password": "secret1" }))
        .await;

    assert_eq!(response.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
}

#[tokio::test]
async fn test_profile_requires_token() {
    let server = server_without_database();

    let response = server.get("/api/auth/user/profile").await;
    assert_eq!(response.status_code(), StatusCode::UNAUTHORIZED);

    let body: serde_json::Value = response.json();
    assert_eq!(body["success"], false);
}

#[tokio::test]
async fn test_profile_rejects_garbage_token() {
    let server = server_without_database();

    let response = server
        .get("/api/auth/user/profile")
        .add_header("Authorization", "Bearer not.a.token")
        .await;

    assert_eq!(response.status_code(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_profile_with_valid_token_but_no_database() {
    // The middleware accepts the token; the handler then reports the
    // missing store as a configuration error.
    let keys = TokenKeys::new(TEST_SECRET);
    let token = keys.issue(uuid::Uuid::new_v4()).unwrap();
    let server = server_without_database();

    let response = server
        .get("/api/auth/user/profile")
        .add_header("Authorization", format!("Bearer {}", token))
        .await;

    assert_eq!(response.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    let body: serde_json::Value = response.json();
    assert_eq!(body["message"], "Database connection error");
}

#[tokio::test]
async fn test_ai_chat_unconfigured() {
    let server = server_without_database();

    let response = server
        .post("/ai/chat")
        .json(&serde_json::json!({ "prompt": "hello" }))
        .await;

    assert_eq!(response.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    let body: serde_json::Value = response.json();
    assert_eq!(body["message"], "AI service is not configured");
}

#[tokio::test]
async fn test_create_comment_rejects_invalid_project_id() {
    let server = server_without_database();

    let response = server
        .post("/api/comments")
        .json(&serde_json::json!({
            "projectId": "not-a-uuid",
            "user": "user1",
            "text": "nice"
        }))
        .await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
}

// -------------------------------------------------------------------------
// Live-database flow. Needs PostgreSQL reachable via DATABASE_URL with the
// migrations applied (they run below). Run with: cargo test -- --ignored
// -------------------------------------------------------------------------

async fn server_with_database() -> TestServer {
    let database_url =
        std::env::var("DATABASE_URL").expect("DATABASE_URL must be set for live-database tests");
    let pool = sqlx::PgPool::connect(&database_url)
        .await
        .expect("Failed to connect to test database");
    sqlx::migrate!()
        .run(&pool)
        .await
        .expect("Failed to run migrations");

    let state = AppState {
        db_pool: Some(pool),
        token_keys: Some(TokenKeys::new(TEST_SECRET)),
        ai: None,
        http_client: reqwest::Client::new(),
    };
    TestServer::new(create_router(state)).unwrap()
}

fn unique_credentials() -> (String, String) {
    let suffix = uuid::Uuid::new_v4().simple().to_string();
    (format!("user_{}", &suffix[..12]), format!("u_{}@example.com", &suffix[..12]))
}

#[tokio::test]
#[ignore = "requires a PostgreSQL instance via DATABASE_URL"]
async fn test_signup_login_profile_flow() {
    let server = server_with_database().await;
    let (username, email) = unique_credentials();

    // Signup returns 201 with a token whose subject is the new user id.
    let response = server
        .post("/api/auth/signup")
        .json(&serde_json::json!({
            "username": username,
            "email": email,
            "password": "secret1"
        }))
        .await;
    assert_eq!(response.status_code(), StatusCode::CREATED);
    let body: serde_json::Value = response.json();
    assert_eq!(body["success"], true);
    let user_id = body["userId"].as_str().unwrap().to_string();
    let keys = TokenKeys::new(TEST_SECRET);
    let subject = keys.verify(body["token"].as_str().unwrap()).unwrap();
    assert_eq!(subject.to_string(), user_id);

    // Login returns a fresh token for the same subject.
    let response = server
        .post("/api/auth/login")
        .json(&serde_json::json!({ "email": email, "password": "secret1" }))
        .await;
    assert_eq!(response.status_code(), StatusCode::OK);
    let body: serde_json::Value = response.json();
    let token = body["token"].as_str().unwrap().to_string();
    assert_eq!(keys.verify(&token).unwrap().to_string(), user_id);

    // Wrong password and unknown email produce byte-identical payloads.
    let wrong_password = server
        .post("/api/auth/login")
        .json(&serde_json::json!({ "email": email, "password": "wrong" }))
        .await;
    let unknown_email = server
        .post("/api/auth/login")
        .json(&serde_json::json!({ "email": "nobody@example.com", "password": "wrong" }))
        .await;
    assert_eq!(wrong_password.status_code(), StatusCode::UNAUTHORIZED);
    assert_eq!(unknown_email.status_code(), StatusCode::UNAUTHORIZED);
    assert_eq!(wrong_password.text(), unknown_email.text());
    let body: serde_json::Value = wrong_password.json();
    assert_eq!(body["success"], false);
    assert_eq!(body["message"], "Invalid email or password");

    // Profile returns the record without any password field.
    let response = server
        .get("/api/auth/user/profile")
        .add_header("Authorization", format!("Bearer {}", token))
        .await;
    assert_eq!(response.status_code(), StatusCode::OK);
    let body: serde_json::Value = response.json();
    assert_eq!(body["user"]["id"], user_id);
    let user_keys: Vec<String> = body["user"]
        .as_object()
        .unwrap()
        .keys()
        .cloned()
        .collect();
    assert!(!user_keys.iter().any(|k| k.to_lowercase().contains("password")));

    // A truncated token is rejected.
    let truncated = &token[..token.len() - 1];
    let response = server
        .get("/api/auth/user/profile")
        .add_header("Authorization", format!("Bearer {}", truncated))
        .await;
    assert_eq!(response.status_code(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
#[ignore = "requires a PostgreSQL instance via DATABASE_URL"]
async fn test_duplicate_signup_conflicts() {
    let server = server_with_database().await;
    let (username, email) = unique_credentials();
    let body = serde_json::json!({
        "username": username,
        "email": email,
        "password": "secret1"
    });

    let first = server.post("/api/auth/signup").json(&body).await;
    assert_eq!(first.status_code(), StatusCode::CREATED);

    // Same email, different username and password: still a conflict.
    let second = server
        .post("/api/auth/signup")
        .json(&serde_json::json!({
            "username": format!("{}_b", username),
            "email": email,
            "password": "different"
        }))
        .await;
    assert_eq!(second.status_code(), StatusCode::BAD_REQUEST);
    let body: serde_json::Value = second.json();
    assert_eq!(body["message"], "User already exists");
}

#[tokio::test]
#[ignore = "requires a PostgreSQL instance via DATABASE_URL"]
async fn test_concurrent_duplicate_signup_yields_one_record() {
    let server = server_with_database().await;
    let (username, email) = unique_credentials();
    let body = serde_json::json!({
        "username": username,
        "email": email,
        "password": "secret1"
    });

    // Both requests can pass the pre-check; the unique index decides.
    let (a, b) = tokio::join!(
        async { server.post("/api/auth/signup").json(&body).await },
        async { server.post("/api/auth/signup").json(&body).await },
    );

    let statuses = [a.status_code(), b.status_code()];
    assert!(statuses.contains(&StatusCode::CREATED));
    assert!(statuses.contains(&StatusCode::BAD_REQUEST));
}
