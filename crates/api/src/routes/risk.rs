//! Route definitions for the `/risks` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::risk;
use crate::state::AppState;

/// Routes for risks. All require auth.
///
/// ```text
/// GET    /risks/        -> list
/// POST   /risks/        -> create
/// GET    /risks/{id}/   -> get_by_id
/// PUT    /risks/{id}/   -> replace
/// PATCH  /risks/{id}/   -> update
/// DELETE /risks/{id}/   -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/risks/", get(risk::list).post(risk::create))
        .route(
            "/risks/{id}/",
            get(risk::get_by_id)
                .put(risk::replace)
                .patch(risk::update)
                .delete(risk::delete),
        )
}
