/**
 * Server Initialization
 *
 * Builds the Axum application from a `ServerConfig`: connects the optional
 * services, assembles `AppState`, and wraps the router in the CORS and
 * request-tracing layers.
 *
 * # Initialization Steps
 *
 * 1. Connect the database pool and run migrations (optional)
 * 2. Build the token keys from the signing secret (optional)
 * 3. Create `AppState` and the router
 * 4. Apply CORS and `TraceLayer`
 *
 * Missing services never abort startup; their endpoints degrade to the
 * configuration error envelope.
 */

use std::time::Duration;

use axum::http::{header, HeaderValue, Method};
use axum::Router;
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::auth::sessions::TokenKeys;
use crate::routes::create_router;
use crate::server::config::{load_database, ServerConfig};
use crate::server::state::AppState;

/// CORS policy from the configured origins
///
/// Mirrors the deployment's browser clients: explicit origin list, the
/// five CRUD methods, JSON/auth headers, 24-hour preflight cache.
fn cors_layer(origins: &[String]) -> CorsLayer {
    let origins: Vec<HeaderValue> = origins.iter().filter_map(|o| o.parse().ok()).collect();

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION, header::ACCEPT])
        .max_age(Duration::from_secs(86400))
}

/// Create and configure the Axum application
pub async fn create_app(config: &ServerConfig) -> Router {
    tracing::info!("Initializing backend server");

    let db_pool = load_database(config.database_url.as_deref()).await;

    let token_keys = config.jwt_secret.as_deref().map(TokenKeys::new);

    let app_state = AppState {
        db_pool,
        token_keys,
        ai: config.ai.clone(),
        http_client: reqwest::Client::new(),
    };

    create_router(app_state)
        .layer(cors_layer(&config.cors_origins))
        .layer(TraceLayer::new_for_http())
}
