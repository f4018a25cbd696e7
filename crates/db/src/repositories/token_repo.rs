//! Repository for the `auth_tokens` table.

use promag_core::types::DbId;
use sqlx::PgPool;

use crate::models::auth_token::AuthToken;
use crate::models::user::User;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "key, user_id, created_at";

/// Provides issuance, lookup and revocation of auth tokens.
pub struct TokenRepo;

impl TokenRepo {
    /// Return the user's existing token, or store `candidate_key` as a new one.
    ///
    /// Runs as a single upsert, so concurrent logins for the same user all
    /// observe the same key. The no-op `DO UPDATE` makes `RETURNING` yield the
    /// existing row on conflict.
    pub async fn get_or_create(
        pool: &PgPool,
        user_id: DbId,
        candidate_key: &str,
    ) -> Result<AuthToken, sqlx::Error> {
        let query = format!(
            "INSERT INTO auth_tokens (key, user_id)
             VALUES ($1, $2)
             ON CONFLICT (user_id) DO UPDATE SET user_id = EXCLUDED.user_id
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, AuthToken>(&query)
            .bind(candidate_key)
            .bind(user_id)
            .fetch_one(pool)
            .await
    }

    /// Find the token row owned by a user, if any.
    pub async fn find_by_user(
        pool: &PgPool,
        user_id: DbId,
    ) -> Result<Option<AuthToken>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM auth_tokens WHERE user_id = $1");
        sqlx::query_as::<_, AuthToken>(&query)
            .bind(user_id)
            .fetch_optional(pool)
            .await
    }

    /// Resolve a token key to the user that owns it.
    pub async fn find_user_by_key(pool: &PgPool, key: &str) -> Result<Option<User>, sqlx::Error> {
        sqlx::query_as::<_, User>(
            "SELECT u.id, u.username, u.email, u.password_hash, u.is_active,
                    u.created_at, u.updated_at
             FROM auth_tokens t
             JOIN users u ON u.id = t.user_id
             WHERE t.key = $1",
        )
        .bind(key)
        .fetch_optional(pool)
        .await
    }

    /// Delete every token owned by a user. Returns the number removed.
    pub async fn delete_for_user(pool: &PgPool, user_id: DbId) -> Result<u64, sqlx::Error> {
        let result = sqlx::query("DELETE FROM auth_tokens WHERE user_id = $1")
            .bind(user_id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected())
    }
}
