//! Handlers for the `/risks` resource.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use promag_core::error::CoreError;
use promag_core::types::DbId;
use promag_db::models::risk::{CreateRisk, Risk, UpdateRisk};
use promag_db::repositories::RiskRepo;
use sqlx::PgPool;

use crate::error::{AppError, AppResult};
use crate::extract::{IdPath, ValidatedJson};
use crate::handlers::ensure_project_exists;
use crate::middleware::auth::AuthUser;
use crate::state::AppState;

fn not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity: "Risk",
        id,
    })
}

/// Report a missing row as 404 before the request body is looked at.
async fn ensure_exists(pool: &PgPool, id: DbId) -> AppResult<()> {
    if RiskRepo::exists(pool, id).await? {
        Ok(())
    } else {
        Err(not_found(id))
    }
}

/// GET /api/risks/
pub async fn list(
    State(state): State<AppState>,
    _user: AuthUser,
) -> AppResult<Json<Vec<Risk>>> {
    let risks = RiskRepo::list(&state.pool).await?;
    Ok(Json(risks))
}

/// POST /api/risks/
pub async fn create(
    State(state): State<AppState>,
    user: AuthUser,
    ValidatedJson(input): ValidatedJson<CreateRisk>,
) -> AppResult<(StatusCode, Json<Risk>)> {
    ensure_project_exists(&state.pool, input.project_id).await?;
    let risk = RiskRepo::create(&state.pool, &input).await?;
    tracing::info!(
        user_id = user.user_id,
        project_id = risk.project_id,
        risk_id = risk.id,
        "Risk created"
    );
    Ok((StatusCode::CREATED, Json(risk)))
}

/// GET /api/risks/{id}/
pub async fn get_by_id(
    State(state): State<AppState>,
    _user: AuthUser,
    IdPath(id): IdPath,
) -> AppResult<Json<Risk>> {
    let risk = RiskRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(id))?;
    Ok(Json(risk))
}

/// PUT /api/risks/{id}/
pub async fn replace(
    State(state): State<AppState>,
    user: AuthUser,
    IdPath(id): IdPath,
    payload: Result<ValidatedJson<CreateRisk>, AppError>,
) -> AppResult<Json<Risk>> {
    ensure_exists(&state.pool, id).await?;
    let ValidatedJson(input) = payload?;
    ensure_project_exists(&state.pool, input.project_id).await?;
    let risk = RiskRepo::replace(&state.pool, id, &input)
        .await?
        .ok_or_else(|| not_found(id))?;
    tracing::info!(user_id = user.user_id, risk_id = id, "Risk replaced");
    Ok(Json(risk))
}

/// PATCH /api/risks/{id}/
pub async fn update(
    State(state): State<AppState>,
    user: AuthUser,
    IdPath(id): IdPath,
    payload: Result<ValidatedJson<UpdateRisk>, AppError>,
) -> AppResult<Json<Risk>> {
    ensure_exists(&state.pool, id).await?;
    let ValidatedJson(input) = payload?;
    if let Some(project_id) = input.project_id {
        ensure_project_exists(&state.pool, project_id).await?;
    }
    let risk = RiskRepo::update(&state.pool, id, &input)
        .await?
        .ok_or_else(|| not_found(id))?;
    tracing::info!(user_id = user.user_id, risk_id = id, "Risk updated");
    Ok(Json(risk))
}

/// DELETE /api/risks/{id}/
pub async fn delete(
    State(state): State<AppState>,
    user: AuthUser,
    IdPath(id): IdPath,
) -> AppResult<StatusCode> {
    if RiskRepo::delete(&state.pool, id).await? {
        tracing::info!(user_id = user.user_id, risk_id = id, "Risk deleted");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(not_found(id))
    }
}
