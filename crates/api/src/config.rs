/// Credentials for the account ensured at startup.
#[derive(Debug, Clone)]
pub struct SeedAdmin {
    pub username: String,
    pub password: String,
    pub email: String,
}

/// Server configuration loaded from environment variables.
///
/// All fields have sensible defaults suitable for local development.
/// In production, override via environment variables.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `4000`).
    pub port: u16,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS`.
    /// Empty means any origin is allowed.
    pub cors_origins: Vec<String>,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// Maximum pooled database connections (default: `10`).
    pub db_max_connections: u32,
    /// Account to create or refresh at startup, if configured.
    pub seed_admin: Option<SeedAdmin>,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                | Default    |
    /// |------------------------|------------|
    /// | `HOST`                 | `0.0.0.0`  |
    /// | `PORT`                 | `4000`     |
    /// | `CORS_ORIGINS`         | `*`        |
    /// | `REQUEST_TIMEOUT_SECS` | `30`       |
    /// | `DB_MAX_CONNECTIONS`   | `10`       |
    /// | `SEED_ADMIN_USERNAME`  | unset      |
    /// | `SEED_ADMIN_PASSWORD`  | unset      |
    /// | `SEED_ADMIN_EMAIL`     | `""`       |
    ///
    /// # Panics
    ///
    /// Panics if a numeric variable does not parse; misconfiguration should
    /// stop the server before it binds.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a configuration from an arbitrary key lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let var = |key: &str, default: &str| lookup(key).unwrap_or_else(|| default.to_string());

        let host = var("HOST", "0.0.0.0");

        let port: u16 = var("PORT", "4000")
            .parse()
            .expect("PORT must be a valid u16");

        let cors_origins: Vec<String> = var("CORS_ORIGINS", "*")
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty() && s != "*")
            .collect();

        let request_timeout_secs: u64 = var("REQUEST_TIMEOUT_SECS", "30")
            .parse()
            .expect("REQUEST_TIMEOUT_SECS must be a valid u64");

        let db_max_connections: u32 = var("DB_MAX_CONNECTIONS", "10")
            .parse()
            .expect("DB_MAX_CONNECTIONS must be a valid u32");

        let seed_admin = match (lookup("SEED_ADMIN_USERNAME"), lookup("SEED_ADMIN_PASSWORD")) {
            (Some(username), Some(password))
                if !username.trim().is_empty() && !password.is_empty() =>
            {
                Some(SeedAdmin {
                    username: username.trim().to_string(),
                    password,
                    email: var("SEED_ADMIN_EMAIL", ""),
                })
            }
            _ => None,
        };

        Self {
            host,
            port,
            cors_origins,
            request_timeout_secs,
            db_max_connections,
            seed_admin,
        }
    }
}
