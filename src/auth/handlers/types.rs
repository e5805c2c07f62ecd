/**
 * Authentication Handler Types
 *
 * Request and response types shared by the signup, login, and profile
 * handlers. Response fields use the camelCase names the API has always
 * exposed; the password hash never appears in any response type.
 */

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::auth::users::User;

/// Sign up request
///
/// Missing fields deserialize as empty strings and are rejected by the
/// handler's presence check.
#[derive(Deserialize, Serialize, Debug)]
pub struct SignupRequest {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}

/// Login request
#[derive(Deserialize, Serialize, Debug)]
pub struct LoginRequest {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}

/// Auth response
///
/// Returned by signup and login: the fresh token plus the public identity
/// fields.
#[derive(Serialize, Debug)]
pub struct AuthResponse {
    pub success: bool,
    pub token: String,
    #[serde(rename = "userId")]
    pub user_id: String,
    pub username: String,
    pub email: String,
}

/// User response (without sensitive data)
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    pub id: String,
    pub username: String,
    pub email: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id.to_string(),
            username: user.username,
            email: user.email,
            created_at: user.created_at,
            updated_at: user.updated_at,
        }
    }
}

/// Profile response envelope
#[derive(Serialize, Debug)]
pub struct ProfileResponse {
    pub success: bool,
    pub user: UserResponse,
}
