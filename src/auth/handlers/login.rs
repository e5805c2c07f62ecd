/**
 * Login Handler
 *
 * POST /api/auth/login
 *
 * # Authentication Process
 *
 * 1. Validate field presence
 * 2. Confirm the store and signing secret are available
 * 3. Look up the record by email
 * 4. Verify the password on a blocking thread
 * 5. Issue a fresh token and respond 200
 *
 * # Security Notes
 *
 * Unknown email and wrong password return the identical response, built
 * from the same constructor, so the two cases cannot be told apart.
 * Passwords are never logged.
 */

use axum::{extract::State, response::Json};

use crate::auth::handlers::types::{AuthResponse, LoginRequest};
use crate::auth::password;
use crate::auth::users::get_user_by_email;
use crate::error::ApiError;
use crate::server::state::AppState;

/// Login handler
///
/// Verifies the email/password pair and returns a fresh token on success.
///
/// # Errors
///
/// * `400` - missing email or password
/// * `401` - unknown email or wrong password (indistinguishable)
/// * `500` - store unreachable or signing secret missing
pub async fn login(
    State(state): State<AppState>,
    Json(request): Json<LoginRequest>,
) -> Result<Json<AuthResponse>, ApiError> {
    if request.email.is_empty() || request.password.is_empty() {
        return Err(ApiError::validation("Email and password are required"));
    }

    let pool = state.pool()?;
    let keys = state.token_keys()?;

    let user = get_user_by_email(pool, &request.email)
        .await?
        .ok_or_else(|| {
            tracing::warn!("Login failed: unknown email");
            ApiError::invalid_credentials()
        })?;

    let plaintext = request.password.clone();
    let digest = user.password_hash.clone();
    let valid = tokio::task::spawn_blocking(move || password::verify(&plaintext, &digest))
        .await
        .map_err(|e| {
            tracing::error!("Password verification task failed: {:?}", e);
            ApiError::internal("Error logging in")
        })?;

    if !valid {
        tracing::warn!("Login failed: wrong password for {}", user.username);
        return Err(ApiError::invalid_credentials());
    }

    let token = keys.issue(user.id).map_err(|e| {
        tracing::error!("Failed to issue token: {:?}", e);
        ApiError::internal("Error logging in")
    })?;

    tracing::info!("User logged in: {}", user.username);

    Ok(Json(AuthResponse {
        success: true,
        token,
        user_id: user.id.to_string(),
        username: user.username,
        email: user.email,
    }))
}
