//! Authentication Handlers Module
//!
//! HTTP handlers for the authentication endpoints.
//!
//! # Module Structure
//!
//! ```text
//! handlers/
//! ├── mod.rs      - Handler exports
//! ├── types.rs    - Request and response types
//! ├── signup.rs   - User registration handler
//! ├── login.rs    - User authentication handler
//! └── profile.rs  - Authenticated profile handler
//! ```
//!
//! # Handlers
//!
//! - **`signup`** - POST /api/auth/signup - user registration
//! - **`login`** - POST /api/auth/login - user authentication
//! - **`profile`** - GET /api/auth/user/profile - current user info

/// Request and response types
pub mod types;

/// Signup handler
pub mod signup;

/// Login handler
pub mod login;

/// Profile handler
pub mod profile;

pub use types::{AuthResponse, LoginRequest, ProfileResponse, SignupRequest, UserResponse};

pub use login::login;
pub use profile::profile;
pub use signup::signup;
