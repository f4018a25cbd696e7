//! Credential checks and token issuance.
//!
//! Every function takes the pool explicitly; nothing here reads ambient state.

use promag_core::types::DbId;
use promag_db::models::auth_token::AuthToken;
use promag_db::models::user::{CreateUser, User, UserSummary};
use promag_db::repositories::{TokenRepo, UserRepo};
use sqlx::PgPool;

use crate::auth::password::{hash_password, verify_against_dummy, verify_password};
use crate::auth::token::generate_token_key;
use crate::error::{AppError, AppResult};

/// Detail returned for every credential failure, whatever the cause.
const INVALID_CREDENTIALS: &str = "invalid credentials";

/// Login, token resolution and logout.
pub struct AuthService;

impl AuthService {
    /// Check `username` / `password` and return the user's token, minting one
    /// on first login.
    ///
    /// The username is trimmed; either field being blank is a bad request.
    /// Unknown users, wrong passwords and inactive accounts all fail with the
    /// same 401.
    pub async fn login(
        pool: &PgPool,
        username: &str,
        password: &str,
    ) -> AppResult<(AuthToken, UserSummary)> {
        let username = username.trim();
        if username.is_empty() || password.is_empty() {
            return Err(AppError::BadRequest(
                "username and password are required".into(),
            ));
        }

        let Some(user) = UserRepo::find_by_username(pool, username).await? else {
            verify_against_dummy(password);
            tracing::warn!(username, "Login failed: unknown username");
            return Err(AppError::unauthorized(INVALID_CREDENTIALS));
        };

        let password_valid = verify_password(password, &user.password_hash)
            .map_err(|e| AppError::InternalError(format!("Password verification error: {e}")))?;

        if !password_valid || !user.is_active {
            tracing::warn!(user_id = user.id, "Login failed: bad password or inactive account");
            return Err(AppError::unauthorized(INVALID_CREDENTIALS));
        }

        let token = TokenRepo::get_or_create(pool, user.id, &generate_token_key()).await?;
        tracing::info!(user_id = user.id, "User logged in");

        Ok((token, UserSummary::from(&user)))
    }

    /// Resolve a token key to its active owner.
    pub async fn current_user(pool: &PgPool, key: &str) -> AppResult<User> {
        let user = TokenRepo::find_user_by_key(pool, key)
            .await?
            .ok_or_else(|| AppError::unauthorized("Invalid token."))?;

        if !user.is_active {
            return Err(AppError::unauthorized("User inactive or deleted."));
        }
        Ok(user)
    }

    /// Revoke every token the user owns. Safe to call when none exist.
    pub async fn logout(pool: &PgPool, user_id: DbId) -> AppResult<u64> {
        let revoked = TokenRepo::delete_for_user(pool, user_id).await?;
        tracing::info!(user_id, revoked, "User logged out");
        Ok(revoked)
    }

    /// Create the account, or reset its email and password if the username
    /// already exists.
    pub async fn ensure_user(
        pool: &PgPool,
        username: &str,
        email: &str,
        password: &str,
    ) -> AppResult<User> {
        if username.trim().is_empty() || password.is_empty() {
            return Err(AppError::validation(
                "username and password must not be blank",
            ));
        }

        let password_hash = hash_password(password)
            .map_err(|e| AppError::InternalError(format!("Password hashing error: {e}")))?;

        let input = CreateUser {
            username: username.trim().to_string(),
            email: email.to_string(),
            password_hash,
        };
        let user = UserRepo::upsert(pool, &input).await?;
        tracing::info!(user_id = user.id, username = %user.username, "User account ensured");
        Ok(user)
    }
}
