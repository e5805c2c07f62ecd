//! API Error Module
//!
//! This module defines the error taxonomy for the backend and the single
//! conversion point that turns every failure into the uniform JSON error
//! envelope `{"success": false, "message": ...}`.
//!
//! # Module Structure
//!
//! ```text
//! error/
//! ├── mod.rs        - Module exports
//! ├── types.rs      - ApiError definition and constructors
//! └── conversion.rs - IntoResponse implementation
//! ```
//!
//! # Error Taxonomy
//!
//! - `Validation` - malformed or missing input (400)
//! - `Conflict` - duplicate identity (400)
//! - `Authentication` - bad credentials or bad token (401)
//! - `NotFound` - missing resource (404)
//! - `Configuration` - missing secret / unreachable store (500)
//! - `Database` / `Internal` - unexpected failures (500)
//!
//! Handlers return `Result<_, ApiError>` and never hand-build the envelope;
//! the `IntoResponse` impl in `conversion` is the only place the error
//! shape is derived.

/// Error type definition and constructors
pub mod types;

/// Error conversion implementations
pub mod conversion;

pub use types::ApiError;
