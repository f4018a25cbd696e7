//! Handlers for the `/tasks` resource.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use promag_core::error::CoreError;
use promag_core::types::DbId;
use promag_db::models::task::{CreateTask, Task, UpdateTask};
use promag_db::repositories::TaskRepo;
use sqlx::PgPool;

use crate::error::{AppError, AppResult};
use crate::extract::{IdPath, ValidatedJson};
use crate::handlers::ensure_project_exists;
use crate::middleware::auth::AuthUser;
use crate::state::AppState;

fn not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity: "Task",
        id,
    })
}

/// Report a missing row as 404 before the request body is looked at.
async fn ensure_exists(pool: &PgPool, id: DbId) -> AppResult<()> {
    if TaskRepo::exists(pool, id).await? {
        Ok(())
    } else {
        Err(not_found(id))
    }
}

/// GET /api/tasks/
pub async fn list(
    State(state): State<AppState>,
    _user: AuthUser,
) -> AppResult<Json<Vec<Task>>> {
    let tasks = TaskRepo::list(&state.pool).await?;
    Ok(Json(tasks))
}

/// POST /api/tasks/
pub async fn create(
    State(state): State<AppState>,
    user: AuthUser,
    ValidatedJson(input): ValidatedJson<CreateTask>,
) -> AppResult<(StatusCode, Json<Task>)> {
    ensure_project_exists(&state.pool, input.project_id).await?;
    let task = TaskRepo::create(&state.pool, &input).await?;
    tracing::info!(
        user_id = user.user_id,
        project_id = task.project_id,
        task_id = task.id,
        "Task created"
    );
    Ok((StatusCode::CREATED, Json(task)))
}

/// GET /api/tasks/{id}/
pub async fn get_by_id(
    State(state): State<AppState>,
    _user: AuthUser,
    IdPath(id): IdPath,
) -> AppResult<Json<Task>> {
    let task = TaskRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(id))?;
    Ok(Json(task))
}

/// PUT /api/tasks/{id}/
pub async fn replace(
    State(state): State<AppState>,
    user: AuthUser,
    IdPath(id): IdPath,
    payload: Result<ValidatedJson<CreateTask>, AppError>,
) -> AppResult<Json<Task>> {
    ensure_exists(&state.pool, id).await?;
    let ValidatedJson(input) = payload?;
    ensure_project_exists(&state.pool, input.project_id).await?;
    let task = TaskRepo::replace(&state.pool, id, &input)
        .await?
        .ok_or_else(|| not_found(id))?;
    tracing::info!(user_id = user.user_id, task_id = id, "Task replaced");
    Ok(Json(task))
}

/// PATCH /api/tasks/{id}/
pub async fn update(
    State(state): State<AppState>,
    user: AuthUser,
    IdPath(id): IdPath,
    payload: Result<ValidatedJson<UpdateTask>, AppError>,
) -> AppResult<Json<Task>> {
    ensure_exists(&state.pool, id).await?;
    let ValidatedJson(input) = payload?;
    if let Some(project_id) = input.project_id {
        ensure_project_exists(&state.pool, project_id).await?;
    }
    let task = TaskRepo::update(&state.pool, id, &input)
        .await?
        .ok_or_else(|| not_found(id))?;
    tracing::info!(user_id = user.user_id, task_id = id, "Task updated");
    Ok(Json(task))
}

/// DELETE /api/tasks/{id}/
pub async fn delete(
    State(state): State<AppState>,
    user: AuthUser,
    IdPath(id): IdPath,
) -> AppResult<StatusCode> {
    if TaskRepo::delete(&state.pool, id).await? {
        tracing::info!(user_id = user.user_id, task_id = id, "Task deleted");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(not_found(id))
    }
}
