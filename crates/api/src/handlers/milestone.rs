//! Handlers for the `/milestones` resource.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use promag_core::error::CoreError;
use promag_core::types::DbId;
use promag_db::models::milestone::{CreateMilestone, Milestone, UpdateMilestone};
use promag_db::repositories::MilestoneRepo;
use sqlx::PgPool;

use crate::error::{AppError, AppResult};
use crate::extract::{IdPath, ValidatedJson};
use crate::handlers::ensure_project_exists;
use crate::middleware::auth::AuthUser;
use crate::state::AppState;

fn not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity: "Milestone",
        id,
    })
}

/// Report a missing row as 404 before the request body is looked at.
async fn ensure_exists(pool: &PgPool, id: DbId) -> AppResult<()> {
    if MilestoneRepo::exists(pool, id).await? {
        Ok(())
    } else {
        Err(not_found(id))
    }
}

/// GET /api/milestones/
pub async fn list(
    State(state): State<AppState>,
    _user: AuthUser,
) -> AppResult<Json<Vec<Milestone>>> {
    let milestones = MilestoneRepo::list(&state.pool).await?;
    Ok(Json(milestones))
}

/// POST /api/milestones/
pub async fn create(
    State(state): State<AppState>,
    user: AuthUser,
    ValidatedJson(input): ValidatedJson<CreateMilestone>,
) -> AppResult<(StatusCode, Json<Milestone>)> {
    ensure_project_exists(&state.pool, input.project_id).await?;
    let milestone = MilestoneRepo::create(&state.pool, &input).await?;
    tracing::info!(
        user_id = user.user_id,
        project_id = milestone.project_id,
        milestone_id = milestone.id,
        "Milestone created"
    );
    Ok((StatusCode::CREATED, Json(milestone)))
}

/// GET /api/milestones/{id}/
pub async fn get_by_id(
    State(state): State<AppState>,
    _user: AuthUser,
    IdPath(id): IdPath,
) -> AppResult<Json<Milestone>> {
    let milestone = MilestoneRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(id))?;
    Ok(Json(milestone))
}

/// PUT /api/milestones/{id}/
pub async fn replace(
    State(state): State<AppState>,
    user: AuthUser,
    IdPath(id): IdPath,
    payload: Result<ValidatedJson<CreateMilestone>, AppError>,
) -> AppResult<Json<Milestone>> {
    ensure_exists(&state.pool, id).await?;
    let ValidatedJson(input) = payload?;
    ensure_project_exists(&state.pool, input.project_id).await?;
    let milestone = MilestoneRepo::replace(&state.pool, id, &input)
        .await?
        .ok_or_else(|| not_found(id))?;
    tracing::info!(user_id = user.user_id, milestone_id = id, "Milestone replaced");
    Ok(Json(milestone))
}

/// PATCH /api/milestones/{id}/
pub async fn update(
    State(state): State<AppState>,
    user: AuthUser,
    IdPath(id): IdPath,
    payload: Result<ValidatedJson<UpdateMilestone>, AppError>,
) -> AppResult<Json<Milestone>> {
    ensure_exists(&state.pool, id).await?;
    let ValidatedJson(input) = payload?;
    if let Some(project_id) = input.project_id {
        ensure_project_exists(&state.pool, project_id).await?;
    }
    let milestone = MilestoneRepo::update(&state.pool, id, &input)
        .await?
        .ok_or_else(|| not_found(id))?;
    tracing::info!(user_id = user.user_id, milestone_id = id, "Milestone updated");
    Ok(Json(milestone))
}

/// DELETE /api/milestones/{id}/
pub async fn delete(
    State(state): State<AppState>,
    user: AuthUser,
    IdPath(id): IdPath,
) -> AppResult<StatusCode> {
    if MilestoneRepo::delete(&state.pool, id).await? {
        tracing::info!(user_id = user.user_id, milestone_id = id, "Milestone deleted");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(not_found(id))
    }
}
