/**
 * Authentication Middleware
 *
 * Protects routes that require a logged-in user. The middleware extracts
 * the bearer token from the Authorization header, verifies it against the
 * server keys, and attaches the authenticated identity to the request
 * extensions. On any failure the request is rejected with the 401 envelope
 * and the downstream handler never runs.
 *
 * Verification is a pure function of the token and the secret; the store
 * is not consulted and every request re-verifies independently.
 */

use axum::{
    extract::{Request, State},
    http::header::AUTHORIZATION,
    middleware::Next,
    response::Response,
};
use uuid::Uuid;

use crate::error::ApiError;
use crate::server::state::AppState;

/// Authenticated identity extracted from a verified token
#[derive(Clone, Debug)]
pub struct AuthenticatedUser {
    pub user_id: Uuid,
}

/// Authentication middleware
///
/// 1. Extract the `Authorization: Bearer <token>` header
/// 2. Verify the token signature and expiry
/// 3. Attach `AuthenticatedUser` to the request extensions
///
/// Missing or malformed headers and failed verification short-circuit
/// with 401; a missing signing secret degrades to the 500 configuration
/// envelope.
pub async fn auth_middleware(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let keys = state.token_keys()?;

    let auth_header = request
        .headers()
        .get(AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .ok_or_else(|| {
            tracing::warn!("Missing Authorization header");
            ApiError::authentication("Authentication required")
        })?;

    let token = auth_header.strip_prefix("Bearer ").ok_or_else(|| {
        tracing::warn!("Invalid Authorization header format");
        ApiError::authentication("Authentication required")
    })?;

    let user_id = keys.verify(token).map_err(|e| {
        tracing::warn!("Token rejected: {}", e);
        ApiError::authentication("Invalid or expired token")
    })?;

    request
        .extensions_mut()
        .insert(AuthenticatedUser { user_id });

    Ok(next.run(request).await)
}

/// Axum extractor for the authenticated user
///
/// Handlers behind `auth_middleware` take this as a parameter to receive
/// the identity the middleware attached.
#[derive(Clone, Debug)]
pub struct AuthUser(pub AuthenticatedUser);

impl<S> axum::extract::FromRequestParts<S> for AuthUser
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut axum::http::request::Parts,
        _state: &S,
    ) -> Result<Self, Self::Rejection> {
        let user = parts
            .extensions
            .get::<AuthenticatedUser>()
            .cloned()
            .ok_or_else(|| {
                tracing::warn!("AuthenticatedUser not found in request extensions");
                ApiError::authentication("Authentication required")
            })?;

        Ok(AuthUser(user))
    }
}
