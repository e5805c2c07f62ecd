//! AI Proxy Module
//!
//! A passthrough route in front of an upstream completion API, so browser
//! clients never see the API key. The request body is forwarded verbatim
//! and the upstream's JSON and status come back as-is; nothing is
//! interpreted or cached here.

use axum::{extract::State, http::StatusCode, response::Json};

use crate::error::ApiError;
use crate::server::state::AppState;

/// POST /ai/chat
///
/// Forwards the JSON body to the configured upstream with the server-held
/// API key.
///
/// # Errors
///
/// * `500` - AI upstream not configured, unreachable, or returned a
///   non-JSON body
pub async fn chat(
    State(state): State<AppState>,
    Json(payload): Json<serde_json::Value>,
) -> Result<(StatusCode, Json<serde_json::Value>), ApiError> {
    let ai = state.ai.as_ref().ok_or_else(|| {
        tracing::error!("AI proxy is not configured");
        ApiError::configuration("AI service is not configured")
    })?;

    let response = state
        .http_client
        .post(&ai.api_url)
        .bearer_auth(&ai.api_key)
        .json(&payload)
        .send()
        .await
        .map_err(|e| {
            tracing::error!("AI upstream request failed: {:?}", e);
            ApiError::internal("AI service error")
        })?;

    let status =
        StatusCode::from_u16(response.status().as_u16()).unwrap_or(StatusCode::BAD_GATEWAY);

    let body: serde_json::Value = response.json().await.map_err(|e| {
        tracing::error!("AI upstream returned a non-JSON body: {:?}", e);
        ApiError::internal("AI service error")
    })?;

    Ok((status, Json(body)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_chat_without_configuration_is_configuration_error() {
        let state = AppState {
            db_pool: None,
            token_keys: None,
            ai: None,
            http_client: reqwest::Client::new(),
        };

        let result = chat(State(state), Json(serde_json::json!({"prompt": "hi"}))).await;
        assert!(matches!(
            result.err().unwrap(),
            ApiError::Configuration { .. }
        ));
    }
}
