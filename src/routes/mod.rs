//! Route Configuration Module
//!
//! All HTTP routes for the backend server.
//!
//! # Module Structure
//!
//! ```text
//! routes/
//! ├── mod.rs        - Module exports
//! ├── router.rs     - Router assembly, welcome/health, fallback
//! └── api_routes.rs - /api and /ai endpoint wiring
//! ```
//!
//! # Route Organization
//!
//! 1. **Root** - `GET /` welcome, `GET /health`
//! 2. **API** - auth, projects, comments, messages
//! 3. **AI** - upstream passthrough
//! 4. **Fallback** - uniform 404 envelope

/// Main router creation
pub mod router;

/// API endpoint wiring
pub mod api_routes;

pub use router::create_router;
