//! Auth token model.

use promag_core::types::{DbId, Timestamp};
use sqlx::FromRow;

/// A row from the `auth_tokens` table. Each user owns at most one.
#[derive(Debug, Clone, FromRow)]
pub struct AuthToken {
    pub key: String,
    pub user_id: DbId,
    pub created_at: Timestamp,
}
