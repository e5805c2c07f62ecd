/**
 * Router Configuration
 *
 * Assembles the full application router: the welcome and health endpoints,
 * the API routes, and the 404 fallback. CORS and tracing layers are
 * applied by `server::init::create_app` around the finished router.
 */

use axum::{extract::State, response::Json, routing::get, Router};

use crate::error::ApiError;
use crate::routes::api_routes::configure_api_routes;
use crate::server::state::AppState;

/// GET / - deployment smoke check
async fn welcome() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "success": true,
        "message": "Backend API is successfully deployed and running!",
        "status": "active",
    }))
}

/// GET /health - service health report
///
/// Reports store connectivity (a live ping, not just configuration) and
/// whether the signing secret is present. No secret material is echoed.
async fn health(State(state): State<AppState>) -> Json<serde_json::Value> {
    let database = match &state.db_pool {
        Some(pool) => match sqlx::query("SELECT 1").execute(pool).await {
            Ok(_) => "connected",
            Err(_) => "disconnected",
        },
        None => "disconnected",
    };

    let auth = if state.token_keys.is_some() {
        "configured"
    } else {
        "missing"
    };

    Json(serde_json::json!({
        "status": "ok",
        "database": database,
        "auth": auth,
    }))
}

/// Create the application router with all routes configured
pub fn create_router(app_state: AppState) -> Router<()> {
    let router = Router::new()
        .route("/", get(welcome))
        .route("/health", get(health));

    let router = configure_api_routes(router, &app_state);

    let router = router.fallback(|| async { ApiError::not_found("Not found") });

    router.with_state(app_state)
}
