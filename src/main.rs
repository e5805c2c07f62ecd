/**
 * Codefolio Server Entry Point
 *
 * Reads configuration, initializes tracing, and serves the Axum app.
 */

use codefolio::server::{create_app, ServerConfig};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load environment variables from .env file if present
    dotenv::dotenv().ok();

    let env_filter = std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::new(&env_filter))
        .init();

    let config = ServerConfig::from_env();

    // Presence only; secret values are never logged.
    tracing::info!(
        has_database_url = config.database_url.is_some(),
        has_jwt_secret = config.jwt_secret.is_some(),
        has_ai_upstream = config.ai.is_some(),
        "Environment check"
    );

    let app = create_app(&config).await;

    let addr = std::net::SocketAddr::from(([0, 0, 0, 0], config.port));
    tracing::info!("Server is running on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
