//! HTTP-level integration tests for the auth endpoints.
//!
//! Tests cover login, token reuse, credential failures, `me`, logout and the
//! user listing.

mod common;

use axum::http::StatusCode;
use common::{
    body_json, create_test_user, get, get_auth, login_token, post_auth, post_json, TEST_PASSWORD,
};
use promag_db::repositories::UserRepo;
use sqlx::PgPool;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

async fn login(pool: &PgPool, username: &str, password: &str) -> axum::response::Response {
    let app = common::build_test_app(pool.clone());
    let body = serde_json::json!({ "username": username, "password": password });
    post_json(app, "/api/auth/login/", body).await
}

// ---------------------------------------------------------------------------
// Login
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn test_login_success(pool: PgPool) {
    let user = create_test_user(&pool, "alice").await;

    let response = login(&pool, "alice", TEST_PASSWORD).await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    let token = json["token"].as_str().expect("token must be a string");
    assert_eq!(token.len(), 64);
    assert!(token.chars().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()));
    assert_eq!(json["user"]["id"], user.id);
    assert_eq!(json["user"]["username"], "alice");
    assert_eq!(json["user"]["email"], "alice@test.com");
    assert!(json["user"].get("password_hash").is_none());
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_login_twice_returns_same_token(pool: PgPool) {
    create_test_user(&pool, "alice").await;

    let first = body_json(login(&pool, "alice", TEST_PASSWORD).await).await;
    let second = body_json(login(&pool, "alice", TEST_PASSWORD).await).await;

    assert_eq!(first["token"], second["token"]);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_login_username_is_trimmed(pool: PgPool) {
    create_test_user(&pool, "alice").await;

    let response = login(&pool, "  alice  ", TEST_PASSWORD).await;
    assert_eq!(response.status(), StatusCode::OK);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_login_failures_are_indistinguishable(pool: PgPool) {
    create_test_user(&pool, "alice").await;

    let wrong_password = login(&pool, "alice", "not-the-password").await;
    assert_eq!(wrong_password.status(), StatusCode::UNAUTHORIZED);
    let wrong_password = body_json(wrong_password).await;

    let unknown_user = login(&pool, "nobody", TEST_PASSWORD).await;
    assert_eq!(unknown_user.status(), StatusCode::UNAUTHORIZED);
    let unknown_user = body_json(unknown_user).await;

    assert_eq!(wrong_password, unknown_user);
    assert_eq!(wrong_password["detail"], "invalid credentials");
    assert_eq!(wrong_password["code"], "UNAUTHORIZED");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_login_blank_fields_rejected(pool: PgPool) {
    let response = login(&pool, "   ", "secret").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["detail"], "username and password are required");

    let app = common::build_test_app(pool.clone());
    let response = post_json(app, "/api/auth/login/", serde_json::json!({})).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_login_malformed_credentials_are_bad_request(pool: PgPool) {
    create_test_user(&pool, "alice").await;

    for body in [
        serde_json::json!({ "username": 42, "password": TEST_PASSWORD }),
        serde_json::json!({ "username": "alice", "password": ["x"] }),
        serde_json::json!(["alice", TEST_PASSWORD]),
    ] {
        let app = common::build_test_app(pool.clone());
        let response = post_json(app, "/api/auth/login/", body.clone()).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST, "{body}");
        assert_eq!(body_json(response).await["code"], "BAD_REQUEST", "{body}");
    }
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_login_inactive_user_rejected(pool: PgPool) {
    let user = create_test_user(&pool, "alice").await;
    UserRepo::deactivate(&pool, user.id).await.unwrap();

    let response = login(&pool, "alice", TEST_PASSWORD).await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(body_json(response).await["detail"], "invalid credentials");
}

// ---------------------------------------------------------------------------
// Me / logout
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn test_me_returns_current_user(pool: PgPool) {
    let token = login_token(&pool, "alice").await;
    let app = common::build_test_app(pool);

    let response = get_auth(app, "/api/auth/me/", &token).await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["user"]["username"], "alice");
    assert_eq!(json["user"]["email"], "alice@test.com");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_me_without_credentials_is_401(pool: PgPool) {
    let app = common::build_test_app(pool);

    let response = get(app, "/api/auth/me/").await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(
        body_json(response).await["detail"],
        "Authentication credentials were not provided."
    );
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_me_with_unknown_token_is_401(pool: PgPool) {
    let app = common::build_test_app(pool);

    let response = get_auth(app, "/api/auth/me/", &"0".repeat(64)).await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(body_json(response).await["detail"], "Invalid token.");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_me_with_deactivated_user_is_401(pool: PgPool) {
    let token = login_token(&pool, "alice").await;
    let user = UserRepo::find_by_username(&pool, "alice").await.unwrap().unwrap();
    UserRepo::deactivate(&pool, user.id).await.unwrap();

    let app = common::build_test_app(pool);
    let response = get_auth(app, "/api/auth/me/", &token).await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(body_json(response).await["detail"], "User inactive or deleted.");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_logout_revokes_token(pool: PgPool) {
    let token = login_token(&pool, "alice").await;

    let app = common::build_test_app(pool.clone());
    let response = post_auth(app, "/api/auth/logout/", &token).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["detail"], "logged out");

    let app = common::build_test_app(pool.clone());
    let response = get_auth(app, "/api/auth/me/", &token).await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    // A fresh login mints a different key.
    let json = body_json(login(&pool, "alice", TEST_PASSWORD).await).await;
    assert_ne!(json["token"], token.as_str());
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_logout_without_credentials_is_401(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = post_json(app, "/api/auth/logout/", serde_json::json!({})).await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

// ---------------------------------------------------------------------------
// Users
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn test_list_users(pool: PgPool) {
    let token = login_token(&pool, "alice").await;
    create_test_user(&pool, "bob").await;
    let app = common::build_test_app(pool);

    let response = get_auth(app, "/api/auth/users/", &token).await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    let names: Vec<&str> = json
        .as_array()
        .unwrap()
        .iter()
        .map(|u| u["username"].as_str().unwrap())
        .collect();
    assert_eq!(names, ["alice", "bob"]);
    assert!(json[0].get("password_hash").is_none());
}
