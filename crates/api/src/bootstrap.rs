//! Startup provisioning of the configured admin account.

use promag_db::DbPool;

use crate::auth::service::AuthService;
use crate::config::SeedAdmin;
use crate::error::AppResult;

/// Create or refresh the seed admin so a fresh database can be logged into.
///
/// Re-running with the same settings resets the password to the configured
/// one; existing tokens stay valid.
pub async fn ensure_seed_admin(pool: &DbPool, seed: &SeedAdmin) -> AppResult<()> {
    let user = AuthService::ensure_user(pool, &seed.username, &seed.email, &seed.password).await?;
    tracing::info!(user_id = user.id, username = %user.username, "Seed admin ready");
    Ok(())
}
