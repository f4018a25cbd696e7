//! Request handlers.
//!
//! Each entity submodule provides async handler functions (list, create,
//! get_by_id, replace, update, delete) for a single entity type. Handlers
//! delegate to the corresponding repository in `promag_db` and map errors
//! via [`AppError`].

pub mod auth;
pub mod dashboard;
pub mod milestone;
pub mod project;
pub mod risk;
pub mod task;

use promag_core::types::DbId;
use promag_db::repositories::ProjectRepo;
use sqlx::PgPool;

use crate::error::{AppError, AppResult};

/// Reject a child write whose `project` does not reference an existing row.
pub(crate) async fn ensure_project_exists(pool: &PgPool, project_id: DbId) -> AppResult<()> {
    if ProjectRepo::exists(pool, project_id).await? {
        Ok(())
    } else {
        Err(AppError::validation(format!(
            "project: invalid id {project_id} - object does not exist"
        )))
    }
}
