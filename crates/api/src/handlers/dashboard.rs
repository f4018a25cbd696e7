//! Handler for the dashboard summary.

use axum::extract::State;
use axum::Json;
use promag_db::models::dashboard::DashboardSummary;
use promag_db::repositories::DashboardRepo;

use crate::error::AppResult;
use crate::middleware::auth::AuthUser;
use crate::state::AppState;

/// GET /api/dashboard/summary/
pub async fn summary(
    State(state): State<AppState>,
    _user: AuthUser,
) -> AppResult<Json<DashboardSummary>> {
    let summary = DashboardRepo::summary(&state.pool).await?;
    Ok(Json(summary))
}
