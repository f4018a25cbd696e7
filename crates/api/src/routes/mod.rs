pub mod auth;
pub mod dashboard;
pub mod health;
pub mod milestone;
pub mod project;
pub mod risk;
pub mod task;

use axum::Router;

use crate::state::AppState;

/// Build the `/api` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /health/                         health check (public)
///
/// /auth/login/                     login (public)
/// /auth/me/                        current user
/// /auth/logout/                    revoke tokens
/// /auth/users/                     list users
///
/// /dashboard/summary/              aggregate counts
///
/// /projects/                       list, create
/// /projects/{id}/                  get, replace, update, delete (cascades)
/// /tasks/                          list, create
/// /tasks/{id}/                     get, replace, update, delete
/// /milestones/                     list, create
/// /milestones/{id}/                get, replace, update, delete
/// /risks/                          list, create
/// /risks/{id}/                     get, replace, update, delete
/// ```
///
/// Everything except health and login requires `Authorization: Token <key>`.
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .merge(health::router())
        .merge(auth::router())
        .merge(dashboard::router())
        .merge(project::router())
        .merge(task::router())
        .merge(milestone::router())
        .merge(risk::router())
}
