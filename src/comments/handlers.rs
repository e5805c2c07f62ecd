//! HTTP handlers for project comments

use axum::{
    extract::{Path, State},
    response::Json,
};
use serde::Deserialize;
use uuid::Uuid;

use crate::comments::{db, Comment};
use crate::error::ApiError;
use crate::server::state::AppState;

#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct CommentRequest {
    #[serde(default)]
    pub project_id: String,
    /// Display name of the commenter
    #[serde(default, rename = "user")]
    pub author: String,
    #[serde(default)]
    pub text: String,
}

/// GET /api/comments/{project_id}
pub async fn list_comments(
    State(state): State<AppState>,
    Path(project_id): Path<Uuid>,
) -> Result<Json<Vec<Comment>>, ApiError> {
    let pool = state.pool()?;
    let comments = db::list_comments_for_project(pool, project_id).await?;
    Ok(Json(comments))
}

/// POST /api/comments
pub async fn create_comment(
    State(state): State<AppState>,
    Json(request): Json<CommentRequest>,
) -> Result<Json<Comment>, ApiError> {
    if request.author.is_empty() || request.text.is_empty() {
        return Err(ApiError::validation("All fields are required"));
    }
    let project_id = Uuid::parse_str(&request.project_id)
        .map_err(|_| ApiError::validation("Invalid project id"))?;

    let pool = state.pool()?;
    let comment = db::create_comment(pool, project_id, request.author, request.text).await?;
    Ok(Json(comment))
}

/// DELETE /api/comments/{id}
pub async fn delete_comment(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let pool = state.pool()?;
    db::delete_comment(pool, id).await?;
    Ok(Json(serde_json::json!({ "success": true })))
}
