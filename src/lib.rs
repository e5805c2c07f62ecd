//! Codefolio Backend
//!
//! The HTTP backend for the Codefolio app: accounts with stateless
//! bearer-token authentication, shared code projects with comments, a
//! contact-message inbox, and a proxy route in front of an upstream AI
//! completion API.
//!
//! # Module Structure
//!
//! - **`server`** - configuration, application state, startup wiring
//! - **`auth`** - users, password hashing, session tokens, auth handlers
//! - **`middleware`** - bearer-token middleware for protected routes
//! - **`projects`** / **`comments`** / **`messages`** - content CRUD
//! - **`ai`** - AI upstream passthrough
//! - **`routes`** - router assembly
//! - **`error`** - error taxonomy and the uniform JSON error envelope
//!
//! # Degraded Startup
//!
//! The server starts even when the database, the signing secret, or the
//! AI upstream are not configured; the affected endpoints return the
//! configuration error envelope instead of taking the process down.

/// AI upstream passthrough
pub mod ai;

/// Authentication: users, passwords, tokens, handlers
pub mod auth;

/// Project comments
pub mod comments;

/// Error taxonomy and response envelope
pub mod error;

/// Contact messages
pub mod messages;

/// HTTP middleware
pub mod middleware;

/// Code projects
pub mod projects;

/// Route configuration
pub mod routes;

/// Server configuration and startup
pub mod server;
