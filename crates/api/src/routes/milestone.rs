//! Route definitions for the `/milestones` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::milestone;
use crate::state::AppState;

/// Routes for milestones. All require auth.
///
/// ```text
/// GET    /milestones/        -> list
/// POST   /milestones/        -> create
/// GET    /milestones/{id}/   -> get_by_id
/// PUT    /milestones/{id}/   -> replace
/// PATCH  /milestones/{id}/   -> update
/// DELETE /milestones/{id}/   -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/milestones/", get(milestone::list).post(milestone::create))
        .route(
            "/milestones/{id}/",
            get(milestone::get_by_id)
                .put(milestone::replace)
                .patch(milestone::update)
                .delete(milestone::delete),
        )
}
