/**
 * API Error Types
 *
 * This module defines the error type used by all HTTP handlers. Each
 * variant carries a client-facing message and maps to a fixed status code.
 *
 * # Status Code Mapping
 *
 * - `Validation` - 400 Bad Request
 * - `Conflict` - 400 Bad Request (duplicate identity)
 * - `Authentication` - 401 Unauthorized
 * - `NotFound` - 404 Not Found
 * - `Configuration` - 500 Internal Server Error
 * - `Database` / `Internal` - 500 Internal Server Error
 */

use axum::http::StatusCode;
use thiserror::Error;

/// Message returned for any credential failure during login.
///
/// Unknown email and wrong password both use this exact string so the two
/// responses are byte-identical (enumeration resistance).
pub const INVALID_CREDENTIALS: &str = "Invalid email or password";

/// Backend error type
///
/// All handler failures are expressed as a variant of this enum and
/// rendered through the single `IntoResponse` implementation in
/// `error::conversion`.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Malformed or missing input
    #[error("{message}")]
    Validation { message: String },

    /// Duplicate identity (username or email already taken)
    #[error("{message}")]
    Conflict { message: String },

    /// Bad credentials or bad token
    #[error("{message}")]
    Authentication { message: String },

    /// Resource does not exist
    #[error("{message}")]
    NotFound { message: String },

    /// Missing signing secret or unreachable store
    #[error("{message}")]
    Configuration { message: String },

    /// Unexpected database failure
    #[error("Database error")]
    Database(#[from] sqlx::Error),

    /// Unexpected internal failure (hashing, token encoding, task join)
    #[error("{message}")]
    Internal { message: String },
}

impl ApiError {
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    pub fn conflict(message: impl Into<String>) -> Self {
        Self::Conflict {
            message: message.into(),
        }
    }

    pub fn authentication(message: impl Into<String>) -> Self {
        Self::Authentication {
            message: message.into(),
        }
    }

    /// Credential failure with the shared, non-enumerable message
    pub fn invalid_credentials() -> Self {
        Self::Authentication {
            message: INVALID_CREDENTIALS.to_string(),
        }
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound {
            message: message.into(),
        }
    }

    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }

    /// HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::Validation { .. } | Self::Conflict { .. } => StatusCode::BAD_REQUEST,
            Self::Authentication { .. } => StatusCode::UNAUTHORIZED,
            Self::NotFound { .. } => StatusCode::NOT_FOUND,
            Self::Configuration { .. } | Self::Database(_) | Self::Internal { .. } => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// Client-facing message for this error
    ///
    /// Database internals are never echoed to the client.
    pub fn message(&self) -> String {
        match self {
            Self::Validation { message }
            | Self::Conflict { message }
            | Self::Authentication { message }
            | Self::NotFound { message }
            | Self::Configuration { message }
            | Self::Internal { message } => message.clone(),
            Self::Database(_) => "Database error".to_string(),
        }
    }
}
