/**
 * Server Configuration
 *
 * Configuration is read from the environment exactly once at startup and
 * collected into an explicit `ServerConfig` object; nothing else in the
 * codebase reads environment variables. Missing optional services are
 * logged and carried as `None` so the server starts degraded instead of
 * crashing.
 *
 * # Environment Variables
 *
 * - `SERVER_PORT` - listen port (default 5000)
 * - `DATABASE_URL` - PostgreSQL connection string
 * - `JWT_SECRET` - token signing secret
 * - `CORS_ORIGINS` - comma-separated allowed origins
 * - `AI_API_URL` / `AI_API_KEY` - upstream completion API for /ai
 */

use sqlx::PgPool;

/// Upstream configuration for the AI proxy route
#[derive(Clone, Debug)]
pub struct AiProxyConfig {
    pub api_url: String,
    pub api_key: String,
}

/// Process-wide configuration, read from the environment at startup
#[derive(Clone, Debug)]
pub struct ServerConfig {
    pub port: u16,
    pub cors_origins: Vec<String>,
    pub database_url: Option<String>,
    pub jwt_secret: Option<String>,
    pub ai: Option<AiProxyConfig>,
}

impl ServerConfig {
    /// Read configuration from the environment
    ///
    /// Never fails: absent values become `None` (or defaults) and the
    /// affected endpoints surface configuration errors at request time.
    pub fn from_env() -> Self {
        let port = std::env::var("SERVER_PORT")
            .ok()
            .and_then(|p| p.parse::<u16>().ok())
            .unwrap_or(5000);

        let cors_origins = std::env::var("CORS_ORIGINS")
            .map(|v| {
                v.split(',')
                    .map(|s| s.trim().to_string())
                    .filter(|s| !s.is_empty())
                    .collect()
            })
            .unwrap_or_else(|_| {
                vec![
                    "http://localhost:5173".to_string(),
                    "http://localhost:5174".to_string(),
                ]
            });

        let database_url = std::env::var("DATABASE_URL").ok();
        if database_url.is_none() {
            tracing::warn!("DATABASE_URL not set. Database features will be disabled.");
        }

        let jwt_secret = std::env::var("JWT_SECRET").ok();
        if jwt_secret.is_none() {
            tracing::warn!("JWT_SECRET not set. Authentication endpoints will be disabled.");
        }

        let ai = match std::env::var("AI_API_KEY") {
            Ok(api_key) => Some(AiProxyConfig {
                api_url: std::env::var("AI_API_URL").unwrap_or_else(|_| {
                    "https://api.openai.com/v1/chat/completions".to_string()
                }),
                api_key,
            }),
            Err(_) => {
                tracing::warn!("AI_API_KEY not set. AI proxy route will be disabled.");
                None
            }
        };

        Self {
            port,
            cors_origins,
            database_url,
            jwt_secret,
            ai,
        }
    }
}

/// Connect to the database and run migrations
///
/// Returns `None` on any failure so the server can start without the
/// store; the condition is logged and the affected endpoints return the
/// configuration error envelope.
pub async fn load_database(database_url: Option<&str>) -> Option<PgPool> {
    let database_url = database_url?;

    tracing::info!("Connecting to database...");

    let pool = match PgPool::connect(database_url).await {
        Ok(pool) => pool,
        Err(e) => {
            tracing::error!("Failed to create database connection pool: {:?}", e);
            tracing::warn!("Database features will be disabled.");
            return None;
        }
    };

    tracing::info!("Database connection pool created");

    match sqlx::migrate!().run(&pool).await {
        Ok(_) => tracing::info!("Database migrations completed"),
        Err(e) => {
            // Migrations may already be applied by an earlier deploy.
            tracing::error!("Failed to run database migrations: {:?}", e);
            tracing::warn!("Continuing without migrations");
        }
    }

    Some(pool)
}
