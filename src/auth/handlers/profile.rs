/**
 * Profile Handler
 *
 * GET /api/auth/user/profile
 *
 * Requires a valid bearer token; the auth middleware has already verified
 * it and attached the subject id. Returns the user record without the
 * password hash.
 */

use axum::{extract::State, response::Json};

use crate::auth::handlers::types::{ProfileResponse, UserResponse};
use crate::auth::users::get_user_by_id;
use crate::error::ApiError;
use crate::middleware::AuthUser;
use crate::server::state::AppState;

/// Profile handler
///
/// # Errors
///
/// * `404` - no record matches the token's subject
/// * `500` - store unreachable
pub async fn profile(
    State(state): State<AppState>,
    AuthUser(auth): AuthUser,
) -> Result<Json<ProfileResponse>, ApiError> {
    let pool = state.pool()?;

    let user = get_user_by_id(pool, auth.user_id)
        .await?
        .ok_or_else(|| {
            tracing::warn!("Profile requested for missing user: {}", auth.user_id);
            ApiError::not_found("User not found")
        })?;

    Ok(Json(ProfileResponse {
        success: true,
        user: UserResponse::from(user),
    }))
}
