//! API tests
//!
//! The first half drives the router in-process through `tower::ServiceExt`
//! and needs no database: it covers the session/auth contract. The
//! `live_*` tests at the end expect a running server and database; run
//! them with `cargo test -- --ignored`.

use axum::{
    body::Body,
    http::{header, Request, StatusCode},
    Router,
};
use serde_json::{json, Value};
use tower::ServiceExt;

use biblioteca_server::{config::AppConfig, create_router, models::session::Role, AppState};

fn test_state() -> AppState {
    AppState::new(AppConfig::default())
}

/// Router plus a pre-seeded session token for the given role
async fn app_with_session(role: Role) -> (Router, String) {
    let state = test_state();
    let (token, _) = state.sessions.create("tester", role).await;
    (create_router(state), token)
}

async fn body_json(response: axum::response::Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("failed to read body");
    serde_json::from_slice(&bytes).expect("body is not valid JSON")
}

fn json_request(method: &str, uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .expect("failed to build request")
}

#[tokio::test]
async fn health_is_public() {
    let app = create_router(test_state());

    let response = app
        .oneshot(
            Request::builder()
                .uri("/api/health")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await, json!({"ok": true}));
}

#[tokio::test]
async fn login_requires_user_and_password() {
    let app = create_router(test_state());

    let response = app
        .oneshot(json_request("POST", "/auth/login", json!({"user": "alice"})))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_json(response).await;
    assert_eq!(body["error"], "user and password required");
}

#[tokio::test]
async fn protected_route_without_token_is_unauthenticated() {
    let app = create_router(test_state());

    let response = app
        .oneshot(
            Request::builder()
                .uri("/api/users")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(body_json(response).await["error"], "missing token");
}

#[tokio::test]
async fn admin_route_without_token_is_unauthenticated_not_forbidden() {
    let app = create_router(test_state());

    let response = app
        .oneshot(json_request("POST", "/api/books", json!({"title": "X"})))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn bogus_token_is_unauthenticated() {
    let app = create_router(test_state());

    let response = app
        .oneshot(
            Request::builder()
                .uri("/api/users")
                .header("X-Auth-Token", "never-issued")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(
        body_json(response).await["error"],
        "invalid or expired token"
    );
}

#[tokio::test]
async fn expired_token_is_unauthenticated() {
    let mut config = AppConfig::default();
    config.auth.token_ttl_secs = 0;
    let state = AppState::new(config);
    let (token, _) = state.sessions.create("tester", Role::Admin).await;
    let app = create_router(state);

    let response = app
        .oneshot(
            Request::builder()
                .uri("/api/users")
                .header("X-Auth-Token", &token)
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn reader_on_admin_route_is_forbidden() {
    let (app, token) = app_with_session(Role::Reader).await;

    let mut request = json_request(
        "POST",
        "/api/users",
        json!({"name": "Ana", "kind": "student"}),
    );
    request
        .headers_mut()
        .insert("X-Auth-Token", token.parse().unwrap());

    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::FORBIDDEN);
    assert_eq!(body_json(response).await["error"], "admin required");
}

#[tokio::test]
async fn token_is_accepted_via_query_parameter() {
    let (app, token) = app_with_session(Role::Reader).await;

    // Forbidden, not unauthenticated: the query token reached the store.
    let response = app
        .oneshot(json_request(
            "POST",
            &format!("/api/users?token={}", token),
            json!({"name": "Ana", "kind": "student"}),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn empty_header_falls_back_to_query_token() {
    let (app, token) = app_with_session(Role::Reader).await;

    // Forbidden, not unauthenticated: the empty header is treated as
    // absent and the query token reaches the store.
    let mut request = json_request(
        "POST",
        &format!("/api/users?token={}", token),
        json!({"name": "Ana", "kind": "student"}),
    );
    request
        .headers_mut()
        .insert("X-Auth-Token", "".parse().unwrap());

    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn unknown_loan_status_is_ignored_not_rejected() {
    let (app, token) = app_with_session(Role::Reader).await;

    // An unrecognized status must fall back to the unfiltered listing
    // instead of failing request extraction.
    let response = app
        .oneshot(
            Request::builder()
                .uri(format!("/api/loans?status=bogus&token={}", token))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_ne!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn create_member_requires_name_and_kind() {
    let (app, token) = app_with_session(Role::Admin).await;

    let mut request = json_request("POST", "/api/users", json!({"email": "a@b.c"}));
    request
        .headers_mut()
        .insert("X-Auth-Token", token.parse().unwrap());

    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["error"], "name and kind required");
}

#[tokio::test]
async fn logout_invalidates_token_and_is_idempotent() {
    let (app, token) = app_with_session(Role::Reader).await;

    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/auth/logout")
                .header("X-Auth-Token", &token)
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await, json!({"ok": true}));

    // The token no longer opens protected routes.
    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .uri("/api/users")
                .header("X-Auth-Token", &token)
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    // Logging out again still succeeds.
    let response = app
        .oneshot(json_request(
            "POST",
            "/auth/logout",
            json!({"token": token}),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn logout_accepts_token_from_body() {
    let (app, token) = app_with_session(Role::Admin).await;

    let response = app
        .clone()
        .oneshot(json_request(
            "POST",
            "/auth/logout",
            json!({"token": token}),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let response = app
        .oneshot(
            Request::builder()
                .uri("/api/users")
                .header("X-Auth-Token", &token)
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

// ---------------------------------------------------------------------------
// Live tests: require a running server and a seeded database.
// ---------------------------------------------------------------------------

const BASE_URL: &str = "http://localhost:5001";

async fn live_login(client: &reqwest::Client, user: &str, password: &str) -> (String, String) {
    let response = client
        .post(format!("{}/auth/login", BASE_URL))
        .json(&json!({"user": user, "password": password}))
        .send()
        .await
        .expect("Failed to send login request");

    let body: Value = response.json().await.expect("Failed to parse login response");
    (
        body["token"].as_str().expect("No token in response").to_string(),
        body["role"].as_str().expect("No role in response").to_string(),
    )
}

#[tokio::test]
#[ignore] // Run with: cargo test -- --ignored
async fn live_login_as_admin_returns_admin_role() {
    let client = reqwest::Client::new();
    let (token, role) = live_login(&client, "biblioteca_admin", "senha").await;

    assert_eq!(role, "admin");
    assert!(!token.is_empty());
}

#[tokio::test]
#[ignore]
async fn live_login_as_reader_returns_reader_role() {
    // Expects a seeded database account with valid credentials that is
    // not a member of the biblioteca_admin role.
    let client = reqwest::Client::new();
    let (token, role) = live_login(&client, "biblioteca_reader", "senha").await;

    assert_eq!(role, "reader");
    assert!(!token.is_empty());
}

#[tokio::test]
#[ignore]
async fn live_login_invalid_credentials() {
    let client = reqwest::Client::new();

    let response = client
        .post(format!("{}/auth/login", BASE_URL))
        .json(&json!({"user": "biblioteca_admin", "password": "wrong"}))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 401);

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["error"], "invalid credentials");
}

#[tokio::test]
#[ignore]
async fn live_book_quantity_defaults_to_one() {
    let client = reqwest::Client::new();
    let (token, _) = live_login(&client, "biblioteca_admin", "senha").await;

    let response = client
        .post(format!("{}/api/books", BASE_URL))
        .header("X-Auth-Token", &token)
        .json(&json!({"title": "X"}))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 201);

    let body: Value = response.json().await.expect("Failed to parse response");
    let book_id = body["id"].as_i64().expect("No book ID");

    let books: Value = client
        .get(format!("{}/api/books", BASE_URL))
        .header("X-Auth-Token", &token)
        .send()
        .await
        .expect("Failed to send request")
        .json()
        .await
        .expect("Failed to parse response");

    let created = books
        .as_array()
        .expect("Expected an array")
        .iter()
        .find(|b| b["id"].as_i64() == Some(book_id))
        .expect("Created book not in list");
    assert_eq!(created["quantity"], 1);

    // Cleanup
    let _ = client
        .delete(format!("{}/api/books/{}", BASE_URL, book_id))
        .header("X-Auth-Token", &token)
        .send()
        .await;
}

#[tokio::test]
#[ignore]
async fn live_loan_with_unknown_member_surfaces_constraint_error() {
    let client = reqwest::Client::new();
    let (token, _) = live_login(&client, "biblioteca_admin", "senha").await;

    let response = client
        .post(format!("{}/api/loans", BASE_URL))
        .header("X-Auth-Token", &token)
        .json(&json!({"member_id": 999999999, "book_id": 999999999}))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 500);

    let body: Value = response.json().await.expect("Failed to parse response");
    assert!(body["error"].as_str().expect("No error message").len() > 0);
}

#[tokio::test]
#[ignore]
async fn live_member_round_trip() {
    let client = reqwest::Client::new();
    let (token, _) = live_login(&client, "biblioteca_admin", "senha").await;

    // Create
    let response = client
        .post(format!("{}/api/users", BASE_URL))
        .header("X-Auth-Token", &token)
        .json(&json!({"name": "Round Trip", "kind": "student", "email": "rt@example.org"}))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 201);
    let member_id = response.json::<Value>().await.unwrap()["id"]
        .as_i64()
        .expect("No member ID");

    let fetch = |client: reqwest::Client, token: String| async move {
        client
            .get(format!("{}/api/users", BASE_URL))
            .header("X-Auth-Token", &token)
            .send()
            .await
            .expect("Failed to send request")
            .json::<Value>()
            .await
            .expect("Failed to parse response")
    };

    // Fetch
    let members = fetch(client.clone(), token.clone()).await;
    let created = members
        .as_array()
        .unwrap()
        .iter()
        .find(|m| m["id"].as_i64() == Some(member_id))
        .expect("Created member not in list")
        .clone();
    assert_eq!(created["name"], "Round Trip");

    // Update one field; the others must be left untouched
    let response = client
        .put(format!("{}/api/users/{}", BASE_URL, member_id))
        .header("X-Auth-Token", &token)
        .json(&json!({"email": "updated@example.org"}))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 200);

    let members = fetch(client.clone(), token.clone()).await;
    let updated = members
        .as_array()
        .unwrap()
        .iter()
        .find(|m| m["id"].as_i64() == Some(member_id))
        .expect("Updated member not in list")
        .clone();
    assert_eq!(updated["email"], "updated@example.org");
    assert_eq!(updated["name"], "Round Trip");
    assert_eq!(updated["kind"], "student");

    // Delete
    let response = client
        .delete(format!("{}/api/users/{}", BASE_URL, member_id))
        .header("X-Auth-Token", &token)
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 200);

    let members = fetch(client, token).await;
    assert!(members
        .as_array()
        .unwrap()
        .iter()
        .all(|m| m["id"].as_i64() != Some(member_id)));
}
