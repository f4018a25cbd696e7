//! Handlers for the `/projects` resource.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use promag_core::error::CoreError;
use promag_core::types::DbId;
use promag_db::models::project::{CreateProject, Project, UpdateProject};
use promag_db::repositories::ProjectRepo;
use sqlx::PgPool;

use crate::error::{AppError, AppResult};
use crate::extract::{IdPath, ValidatedJson};
use crate::middleware::auth::AuthUser;
use crate::state::AppState;

fn not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity: "Project",
        id,
    })
}

/// Report a missing row as 404 before the request body is looked at.
async fn ensure_exists(pool: &PgPool, id: DbId) -> AppResult<()> {
    if ProjectRepo::exists(pool, id).await? {
        Ok(())
    } else {
        Err(not_found(id))
    }
}

/// GET /api/projects/
pub async fn list(
    State(state): State<AppState>,
    _user: AuthUser,
) -> AppResult<Json<Vec<Project>>> {
    let projects = ProjectRepo::list(&state.pool).await?;
    Ok(Json(projects))
}

/// POST /api/projects/
pub async fn create(
    State(state): State<AppState>,
    user: AuthUser,
    ValidatedJson(input): ValidatedJson<CreateProject>,
) -> AppResult<(StatusCode, Json<Project>)> {
    let project = ProjectRepo::create(&state.pool, &input).await?;
    tracing::info!(user_id = user.user_id, project_id = project.id, "Project created");
    Ok((StatusCode::CREATED, Json(project)))
}

/// GET /api/projects/{id}/
pub async fn get_by_id(
    State(state): State<AppState>,
    _user: AuthUser,
    IdPath(id): IdPath,
) -> AppResult<Json<Project>> {
    let project = ProjectRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(id))?;
    Ok(Json(project))
}

/// PUT /api/projects/{id}/
pub async fn replace(
    State(state): State<AppState>,
    user: AuthUser,
    IdPath(id): IdPath,
    payload: Result<ValidatedJson<CreateProject>, AppError>,
) -> AppResult<Json<Project>> {
    ensure_exists(&state.pool, id).await?;
    let ValidatedJson(input) = payload?;
    let project = ProjectRepo::replace(&state.pool, id, &input)
        .await?
        .ok_or_else(|| not_found(id))?;
    tracing::info!(user_id = user.user_id, project_id = id, "Project replaced");
    Ok(Json(project))
}

/// PATCH /api/projects/{id}/
pub async fn update(
    State(state): State<AppState>,
    user: AuthUser,
    IdPath(id): IdPath,
    payload: Result<ValidatedJson<UpdateProject>, AppError>,
) -> AppResult<Json<Project>> {
    ensure_exists(&state.pool, id).await?;
    let ValidatedJson(input) = payload?;
    let project = ProjectRepo::update(&state.pool, id, &input)
        .await?
        .ok_or_else(|| not_found(id))?;
    tracing::info!(user_id = user.user_id, project_id = id, "Project updated");
    Ok(Json(project))
}

/// DELETE /api/projects/{id}/
///
/// Tasks, milestones and risks of the project are removed with it.
pub async fn delete(
    State(state): State<AppState>,
    user: AuthUser,
    IdPath(id): IdPath,
) -> AppResult<StatusCode> {
    if ProjectRepo::delete(&state.pool, id).await? {
        tracing::info!(user_id = user.user_id, project_id = id, "Project deleted");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(not_found(id))
    }
}
