//! Database operations for project comments

use chrono::Utc;
use sqlx::PgPool;
use uuid::Uuid;

use crate::comments::Comment;

/// List comments for a project, oldest first
pub async fn list_comments_for_project(
    pool: &PgPool,
    project_id: Uuid,
) -> Result<Vec<Comment>, sqlx::Error> {
    sqlx::query_as::<_, Comment>(
        r#"
        SELECT id, project_id, author, text, created_at
        FROM comments
        WHERE project_id = $1
        ORDER BY created_at ASC
        "#,
    )
    .bind(project_id)
    .fetch_all(pool)
    .await
}

/// Add a comment to a project
pub async fn create_comment(
    pool: &PgPool,
    project_id: Uuid,
    author: String,
    text: String,
) -> Result<Comment, sqlx::Error> {
    let id = Uuid::new_v4();
    let now = Utc::now();

    sqlx::query_as::<_, Comment>(
        r#"
        INSERT INTO comments (id, project_id, author, text, created_at)
        VALUES ($1, $2, $3, $4, $5)
        RETURNING id, project_id, author, text, created_at
        "#,
    )
    .bind(id)
    .bind(project_id)
    .bind(&author)
    .bind(&text)
    .bind(now)
    .fetch_one(pool)
    .await
}

/// Delete a comment by ID
pub async fn delete_comment(pool: &PgPool, id: Uuid) -> Result<(), sqlx::Error> {
    sqlx::query("DELETE FROM comments WHERE id = $1")
        .bind(id)
        .execute(pool)
        .await?;
    Ok(())
}
