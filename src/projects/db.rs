//! Database operations for projects

use chrono::Utc;
use sqlx::PgPool;
use uuid::Uuid;

use crate::projects::Project;

/// List all projects, newest first
pub async fn list_projects(pool: &PgPool) -> Result<Vec<Project>, sqlx::Error> {
    sqlx::query_as::<_, Project>(
        r#"
        SELECT id, title, description, code, language, created_at, updated_at
        FROM projects
        ORDER BY created_at DESC
        "#,
    )
    .fetch_all(pool)
    .await
}

/// Get a project by ID
pub async fn get_project(pool: &PgPool, id: Uuid) -> Result<Option<Project>, sqlx::Error> {
    sqlx::query_as::<_, Project>(
        r#"
        SELECT id, title, description, code, language, created_at, updated_at
        FROM projects
        WHERE id = $1
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await
}

/// Create a new project
pub async fn create_project(
    pool: &PgPool,
    title: String,
    description: String,
    code: String,
    language: String,
) -> Result<Project, sqlx::Error> {
    let id = Uuid::new_v4();
    let now = Utc::now();

    sqlx::query_as::<_, Project>(
        r#"
        INSERT INTO projects (id, title, description, code, language, created_at, updated_at)
        VALUES ($1, $2, $3, $4, $5, $6, $7)
        RETURNING id, title, description, code, language, created_at, updated_at
        "#,
    )
    .bind(id)
    .bind(&title)
    .bind(&description)
    .bind(&code)
    .bind(&language)
    .bind(now)
    .bind(now)
    .fetch_one(pool)
    .await
}

/// Replace a project's editable fields
pub async fn update_project(
    pool: &PgPool,
    id: Uuid,
    title: String,
    description: String,
    code: String,
    language: String,
) -> Result<Option<Project>, sqlx::Error> {
    let now = Utc::now();

    sqlx::query_as::<_, Project>(
        r#"
        UPDATE projects
        SET title = $1, description = $2, code = $3, language = $4, updated_at = $5
        WHERE id = $6
        RETURNING id, title, description, code, language, created_at, updated_at
        "#,
    )
    .bind(&title)
    .bind(&description)
    .bind(&code)
    .bind(&language)
    .bind(now)
    .bind(id)
    .fetch_optional(pool)
    .await
}

/// Delete a project by ID
pub async fn delete_project(pool: &PgPool, id: Uuid) -> Result<(), sqlx::Error> {
    sqlx::query("DELETE FROM projects WHERE id = $1")
        .bind(id)
        .execute(pool)
        .await?;
    Ok(())
}
