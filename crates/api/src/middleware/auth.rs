//! Token-based authentication extractor for Axum handlers.

use axum::extract::FromRequestParts;
use axum::http::header::AUTHORIZATION;
use axum::http::request::Parts;
use promag_core::types::DbId;
use promag_db::models::user::UserSummary;

use crate::auth::service::AuthService;
use crate::auth::token::parse_authorization;
use crate::error::AppError;
use crate::state::AppState;

/// Authenticated user resolved from the `Authorization` header.
///
/// Use this as an extractor parameter in any handler that requires authentication:
///
/// ```ignore
/// async fn my_handler(user: AuthUser) -> AppResult<Json<()>> {
///     tracing::info!(user_id = user.user_id, "handling request");
///     Ok(Json(()))
/// }
/// ```
#[derive(Debug, Clone)]
pub struct AuthUser {
    /// The user's internal database id.
    pub user_id: DbId,
    pub username: String,
    pub email: String,
}

impl AuthUser {
    pub fn summary(&self) -> UserSummary {
        UserSummary {
            id: self.user_id,
            username: self.username.clone(),
            email: self.email.clone(),
        }
    }
}

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let auth_header = parts
            .headers
            .get(AUTHORIZATION)
            .and_then(|v| v.to_str().ok())
            .ok_or_else(|| {
                AppError::unauthorized("Authentication credentials were not provided.")
            })?;

        let key = parse_authorization(auth_header)
            .map_err(|e| AppError::unauthorized(e.detail()))?;

        let user = AuthService::current_user(&state.pool, key).await?;

        Ok(AuthUser {
            user_id: user.id,
            username: user.username,
            email: user.email,
        })
    }
}
