//! Database operations for contact messages

use chrono::Utc;
use sqlx::PgPool;
use uuid::Uuid;

use crate::messages::Message;

/// List all messages, newest first
pub async fn list_messages(pool: &PgPool) -> Result<Vec<Message>, sqlx::Error> {
    sqlx::query_as::<_, Message>(
        r#"
        SELECT id, name, email, content, created_at
        FROM messages
        ORDER BY created_at DESC
        "#,
    )
    .fetch_all(pool)
    .await
}

/// Store a new message
pub async fn create_message(
    pool: &PgPool,
    name: String,
    email: String,
    content: String,
) -> Result<Message, sqlx::Error> {
    let id = Uuid::new_v4();
    let now = Utc::now();

    sqlx::query_as::<_, Message>(
        r#"
        INSERT INTO messages (id, name, email, content, created_at)
        VALUES ($1, $2, $3, $4, $5)
        RETURNING id, name, email, content, created_at
        "#,
    )
    .bind(id)
    .bind(&name)
    .bind(&email)
    .bind(&content)
    .bind(now)
    .fetch_one(pool)
    .await
}

/// Delete a message by ID
pub async fn delete_message(pool: &PgPool, id: Uuid) -> Result<(), sqlx::Error> {
    sqlx::query("DELETE FROM messages WHERE id = $1")
        .bind(id)
        .execute(pool)
        .await?;
    Ok(())
}
