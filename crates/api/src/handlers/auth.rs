//! Handlers for the `/auth` resource (login, me, logout, users).

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::Json;
use promag_db::models::user::UserSummary;
use promag_db::repositories::UserRepo;
use serde::{Deserialize, Serialize};

use crate::auth::service::AuthService;
use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Request / response types
// ---------------------------------------------------------------------------

/// Request body for `POST /auth/login/`.
///
/// Missing fields deserialize as blank so they are reported together with
/// blank ones.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub password: String,
}

/// Successful login response.
#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub token: String,
    pub user: UserSummary,
}

/// Response for `GET /auth/me/`.
#[derive(Debug, Serialize)]
pub struct MeResponse {
    pub user: UserSummary,
}

/// Plain `{ "detail": ... }` acknowledgement.
#[derive(Debug, Serialize)]
pub struct DetailResponse {
    pub detail: &'static str,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// POST /api/auth/login/
///
/// Authenticate with username + password. Returns the caller's token,
/// reusing the existing one if present. Any unreadable body, including
/// non-string credentials, is a plain bad request.
pub async fn login(
    State(state): State<AppState>,
    payload: Result<Json<LoginRequest>, JsonRejection>,
) -> AppResult<Json<LoginResponse>> {
    let Json(input) = payload.map_err(|rejection| AppError::BadRequest(rejection.body_text()))?;
    let (token, user) = AuthService::login(&state.pool, &input.username, &input.password).await?;
    Ok(Json(LoginResponse {
        token: token.key,
        user,
    }))
}

/// GET /api/auth/me/
pub async fn me(auth_user: AuthUser) -> Json<MeResponse> {
    Json(MeResponse {
        user: auth_user.summary(),
    })
}

/// POST /api/auth/logout/
///
/// Delete every token of the authenticated user.
pub async fn logout(
    State(state): State<AppState>,
    auth_user: AuthUser,
) -> AppResult<Json<DetailResponse>> {
    AuthService::logout(&state.pool, auth_user.user_id).await?;
    Ok(Json(DetailResponse {
        detail: "logged out",
    }))
}

/// GET /api/auth/users/
pub async fn list_users(
    State(state): State<AppState>,
    _auth_user: AuthUser,
) -> AppResult<Json<Vec<UserSummary>>> {
    let users = UserRepo::list_summaries(&state.pool).await?;
    Ok(Json(users))
}
