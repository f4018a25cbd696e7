//! Route definitions for the `/auth` resource.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::auth;
use crate::state::AppState;

/// Auth routes.
///
/// ```text
/// POST /auth/login/   -> login (public)
/// GET  /auth/me/      -> me (requires auth)
/// POST /auth/logout/  -> logout (requires auth)
/// GET  /auth/users/   -> list_users (requires auth)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/auth/login/", post(auth::login))
        .route("/auth/me/", get(auth::me))
        .route("/auth/logout/", post(auth::logout))
        .route("/auth/users/", get(auth::list_users))
}
