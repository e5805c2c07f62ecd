/**
 * Signup Handler
 *
 * POST /api/auth/signup
 *
 * # Registration Process
 *
 * 1. Validate field presence, email shape, and password length
 * 2. Confirm the store and signing secret are available (before mutating)
 * 3. Reject if a record already matches the email or username
 * 4. Hash the password on a blocking thread
 * 5. Insert the record; a unique-index violation is the same conflict
 * 6. Issue a token for the new record and respond 201
 */

use axum::{extract::State, http::StatusCode, response::Json};

use crate::auth::handlers::types::{AuthResponse, SignupRequest};
use crate::auth::password;
use crate::auth::users::{create_user, get_user_by_email_or_username, is_unique_violation};
use crate::error::ApiError;
use crate::server::state::AppState;

/// Validate email shape: `local@domain` with at least one dot in the
/// domain and no whitespace anywhere.
pub(crate) fn is_valid_email(email: &str) -> bool {
    if email.chars().any(|c| c.is_whitespace()) {
        return false;
    }

    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }

    match domain.rsplit_once('.') {
        Some((host, tld)) => !host.is_empty() && !tld.is_empty(),
        None => false,
    }
}

/// Sign up handler
///
/// Creates a new user account and returns a token for immediate
/// authentication.
///
/// # Errors
///
/// * `400` - missing fields, bad email shape, short password, or duplicate
///   identity
/// * `500` - store unreachable or signing secret missing
pub async fn signup(
    State(state): State<AppState>,
    Json(request): Json<SignupRequest>,
) -> Result<(StatusCode, Json<AuthResponse>), ApiError> {
    if request.username.is_empty() || request.email.is_empty() || request.password.is_empty() {
        return Err(ApiError::validation("All fields are required"));
    }

    if !is_valid_email(&request.email) {
        tracing::warn!("Invalid email format on signup");
        return Err(ApiError::validation("Invalid email format"));
    }

    if request.password.len() < 6 {
        return Err(ApiError::validation(
            "Password must be at least 6 characters long",
        ));
    }

    // Both checked before any state is mutated.
    let pool = state.pool()?;
    let keys = state.token_keys()?;

    if get_user_by_email_or_username(pool, &request.email, &request.username)
        .await?
        .is_some()
    {
        tracing::warn!("Signup rejected, user already exists: {}", request.username);
        return Err(ApiError::conflict("User already exists"));
    }

    let plaintext = request.password.clone();
    let password_hash = tokio::task::spawn_blocking(move || password::hash(&plaintext))
        .await
        .map_err(|e| {
            tracing::error!("Password hashing task failed: {:?}", e);
            ApiError::internal("Error creating user")
        })??;

    // The pre-check above races against concurrent signups; the unique
    // index on username/email is the authoritative backstop.
    let user = match create_user(
        pool,
        request.username.clone(),
        request.email.clone(),
        password_hash,
    )
    .await
    {
        Ok(user) => user,
        Err(e) if is_unique_violation(&e) => {
            tracing::warn!("Concurrent duplicate signup for: {}", request.username);
            return Err(ApiError::conflict("User already exists"));
        }
        Err(e) => return Err(e.into()),
    };

    let token = keys.issue(user.id).map_err(|e| {
        tracing::error!("Failed to issue token: {:?}", e);
        ApiError::internal("Error creating user")
    })?;

    tracing::info!("User created: {} ({})", user.username, user.email);

    Ok((
        StatusCode::CREATED,
        Json(AuthResponse {
            success: true,
            token,
            user_id: user.id.to_string(),
            username: user.username,
            email: user.email,
        }),
    ))
}
