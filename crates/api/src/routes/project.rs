//! Route definitions for the `/projects` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::project;
use crate::state::AppState;

/// Routes for projects. All require auth.
///
/// ```text
/// GET    /projects/        -> list
/// POST   /projects/        -> create
/// GET    /projects/{id}/   -> get_by_id
/// PUT    /projects/{id}/   -> replace
/// PATCH  /projects/{id}/   -> update
/// DELETE /projects/{id}/   -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/projects/", get(project::list).post(project::create))
        .route(
            "/projects/{id}/",
            get(project::get_by_id)
                .put(project::replace)
                .patch(project::update)
                .delete(project::delete),
        )
}
