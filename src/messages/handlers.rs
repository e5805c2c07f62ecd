//! HTTP handlers for contact messages

use axum::{
    extract::{Path, State},
    response::Json,
};
use serde::Deserialize;
use uuid::Uuid;

use crate::error::ApiError;
use crate::messages::{db, Message};
use crate::server::state::AppState;

#[derive(Deserialize, Debug)]
pub struct MessageRequest {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub content: String,
}

/// GET /api/messages
pub async fn list_messages(State(state): State<AppState>) -> Result<Json<Vec<Message>>, ApiError> {
    let pool = state.pool()?;
    let messages = db::list_messages(pool).await?;
    Ok(Json(messages))
}

/// POST /api/messages
pub async fn create_message(
    State(state): State<AppState>,
    Json(request): Json<MessageRequest>,
) -> Result<Json<Message>, ApiError> {
    if request.name.is_empty() || request.email.is_empty() || request.content.is_empty() {
        return Err(ApiError::validation("All fields are required"));
    }

    let pool = state.pool()?;
    let message = db::create_message(pool, request.name, request.email, request.content).await?;
    Ok(Json(message))
}

/// DELETE /api/messages/{id}
pub async fn delete_message(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let pool = state.pool()?;
    db::delete_message(pool, id).await?;
    Ok(Json(serde_json::json!({ "success": true })))
}
