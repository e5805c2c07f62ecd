//! Comments Module
//!
//! Per-project comments, listed in the order they were written. The
//! commenter is a display name, not a user reference; comments outlive
//! accounts.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Database operations
pub mod db;

/// HTTP handlers
pub mod handlers;

/// A comment on a project
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    pub id: Uuid,
    pub project_id: Uuid,
    #[serde(rename = "user")]
    pub author: String,
    pub text: String,
    pub created_at: DateTime<Utc>,
}
