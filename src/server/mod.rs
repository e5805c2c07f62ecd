//! Server Module
//!
//! Startup wiring for the Axum HTTP server.
//!
//! # Module Structure
//!
//! ```text
//! server/
//! ├── mod.rs    - Module exports
//! ├── config.rs - Environment configuration and database loading
//! ├── state.rs  - AppState container and accessor helpers
//! └── init.rs   - create_app: services, router, CORS/trace layers
//! ```
//!
//! # Initialization Flow
//!
//! 1. `ServerConfig::from_env()` reads the environment once
//! 2. `create_app` connects optional services and builds the router
//! 3. `main` binds the listener and serves
//!
//! Services that fail to initialize are carried as `None` in `AppState`;
//! their endpoints return the configuration error envelope instead of
//! taking the process down.

/// Environment configuration loading
pub mod config;

/// Application state management
pub mod state;

/// Server initialization
pub mod init;

pub use config::ServerConfig;
pub use init::create_app;
pub use state::AppState;
