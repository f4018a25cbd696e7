//! Route definitions for the dashboard.

use axum::routing::get;
use axum::Router;

use crate::handlers::dashboard;
use crate::state::AppState;

/// Dashboard routes. Require auth.
///
/// ```text
/// GET /dashboard/summary/   -> summary
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/dashboard/summary/", get(dashboard::summary))
}
