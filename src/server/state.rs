/**
 * Application State
 *
 * `AppState` is the process-wide state container, built once at startup
 * and cloned into every handler. Services that failed to initialize are
 * carried as `None`; the accessor helpers convert absence into the
 * configuration error so every endpoint degrades the same way instead of
 * crashing the process.
 */

use sqlx::PgPool;

use crate::auth::sessions::TokenKeys;
use crate::error::ApiError;
use crate::server::config::AiProxyConfig;

/// Application state shared across all request handlers
///
/// # Fields
///
/// * `db_pool` - PostgreSQL pool, `None` when `DATABASE_URL` is unset or
///   the connection failed at startup
/// * `token_keys` - signing/verification keys, `None` when `JWT_SECRET`
///   is unset
/// * `ai` - upstream AI proxy configuration, `None` when unset
/// * `http_client` - shared HTTP client for the AI proxy
#[derive(Clone)]
pub struct AppState {
    pub db_pool: Option<PgPool>,
    pub token_keys: Option<TokenKeys>,
    pub ai: Option<AiProxyConfig>,
    pub http_client: reqwest::Client,
}

impl AppState {
    /// The database pool, or the configuration error if the store is
    /// unavailable
    pub fn pool(&self) -> Result<&PgPool, ApiError> {
        self.db_pool.as_ref().ok_or_else(|| {
            tracing::error!("Database is not connected");
            ApiError::configuration("Database connection error")
        })
    }

    /// The token keys, or the configuration error if the signing secret
    /// is missing
    pub fn token_keys(&self) -> Result<&TokenKeys, ApiError> {
        self.token_keys.as_ref().ok_or_else(|| {
            tracing::error!("JWT signing secret is not configured");
            ApiError::configuration("Server configuration error")
        })
    }
}
