//! Authentication Module
//!
//! User registration, login, and stateless session tokens.
//!
//! # Architecture
//!
//! - **`users`** - user record model and store operations
//! - **`password`** - bcrypt hashing and verification wrappers
//! - **`sessions`** - JWT issuance and verification (`TokenKeys`)
//! - **`handlers`** - HTTP handlers for the auth endpoints
//!
//! # Authentication Flow
//!
//! 1. **Signup**: validate → check duplicates → hash → insert → token
//! 2. **Login**: validate → look up by email → verify hash → fresh token
//! 3. **Profile**: middleware verifies the bearer token → record minus hash
//!
//! # Security
//!
//! - Passwords are bcrypt-hashed with a random salt before storage and
//!   never appear in responses or logs
//! - Tokens are self-contained HS256 JWTs with a 24-hour expiry; nothing
//!   is persisted server-side and there is no revocation list
//! - Credential failures on login are indistinguishable between unknown
//!   email and wrong password

/// User record model and store operations
pub mod users;

/// Password hashing
pub mod password;

/// Session token issuance and verification
pub mod sessions;

/// HTTP handlers for authentication endpoints
pub mod handlers;

pub use handlers::types::{AuthResponse, LoginRequest, ProfileResponse, SignupRequest, UserResponse};
pub use handlers::{login, profile, signup};
pub use sessions::TokenKeys;
