//! HTTP handlers for project CRUD

use axum::{
    extract::{Path, State},
    response::Json,
};
use serde::Deserialize;
use uuid::Uuid;

use crate::error::ApiError;
use crate::projects::{db, Project};
use crate::server::state::AppState;

#[derive(Deserialize, Debug)]
pub struct ProjectRequest {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub code: String,
    #[serde(default)]
    pub language: String,
}

/// GET /api/projects
pub async fn list_projects(State(state): State<AppState>) -> Result<Json<Vec<Project>>, ApiError> {
    let pool = state.pool()?;
    let projects = db::list_projects(pool).await?;
    Ok(Json(projects))
}

/// GET /api/projects/{id}
pub async fn get_project(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Project>, ApiError> {
    let pool = state.pool()?;
    let project = db::get_project(pool, id)
        .await?
        .ok_or_else(|| ApiError::not_found("Project not found"))?;
    Ok(Json(project))
}

/// POST /api/projects
pub async fn create_project(
    State(state): State<AppState>,
    Json(request): Json<ProjectRequest>,
) -> Result<Json<Project>, ApiError> {
    if request.title.is_empty() {
        return Err(ApiError::validation("Title is required"));
    }

    let pool = state.pool()?;
    let project = db::create_project(
        pool,
        request.title,
        request.description,
        request.code,
        request.language,
    )
    .await?;

    tracing::info!("Project created: {}", project.id);
    Ok(Json(project))
}

/// PUT /api/projects/{id}
pub async fn update_project(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<ProjectRequest>,
) -> Result<Json<Project>, ApiError> {
    if request.title.is_empty() {
        return Err(ApiError::validation("Title is required"));
    }

    let pool = state.pool()?;
    let project = db::update_project(
        pool,
        id,
        request.title,
        request.description,
        request.code,
        request.language,
    )
    .await?
    .ok_or_else(|| ApiError::not_found("Project not found"))?;

    Ok(Json(project))
}

/// DELETE /api/projects/{id}
pub async fn delete_project(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let pool = state.pool()?;
    db::delete_project(pool, id).await?;
    Ok(Json(serde_json::json!({ "success": true })))
}
