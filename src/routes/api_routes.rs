/**
 * API Route Configuration
 *
 * Wires the /api and /ai endpoints onto the router.
 *
 * # Routes
 *
 * ## Authentication
 * - `POST /api/auth/signup` - user registration
 * - `POST /api/auth/login` - user login
 * - `GET  /api/auth/user/profile` - current user (requires bearer token)
 *
 * ## Content
 * - `GET/POST /api/projects`, `GET/PUT/DELETE /api/projects/{id}`
 * - `GET /api/comments/{id}` (project id), `POST /api/comments`,
 *   `DELETE /api/comments/{id}` (comment id)
 * - `GET/POST /api/messages`, `DELETE /api/messages/{id}`
 *
 * ## AI
 * - `POST /ai/chat` - passthrough to the configured upstream
 *
 * Only the profile route sits behind the auth middleware; everything else
 * is public, matching the deployed API.
 */

use axum::{
    middleware::from_fn_with_state,
    routing::{delete, get, post},
    Router,
};

use crate::ai;
use crate::auth::{login, profile, signup};
use crate::comments::handlers as comments;
use crate::messages::handlers as messages;
use crate::middleware::auth_middleware;
use crate::projects::handlers as projects;
use crate::server::state::AppState;

/// Configure API routes
pub fn configure_api_routes(router: Router<AppState>, state: &AppState) -> Router<AppState> {
    router
        // Authentication endpoints
        .route("/api/auth/signup", post(signup))
        .route("/api/auth/login", post(login))
        .route(
            "/api/auth/user/profile",
            get(profile).route_layer(from_fn_with_state(state.clone(), auth_middleware)),
        )
        // Project endpoints
        .route(
            "/api/projects",
            get(projects::list_projects).post(projects::create_project),
        )
        .route(
            "/api/projects/{id}",
            get(projects::get_project)
                .put(projects::update_project)
                .delete(projects::delete_project),
        )
        // Comment endpoints. GET takes a project id, DELETE a comment id;
        // they share the one-segment route.
        .route("/api/comments", post(comments::create_comment))
        .route(
            "/api/comments/{id}",
            get(comments::list_comments).delete(comments::delete_comment),
        )
        // Contact message endpoints
        .route(
            "/api/messages",
            get(messages::list_messages).post(messages::create_message),
        )
        .route("/api/messages/{id}", delete(messages::delete_message))
        // AI proxy
        .route("/ai/chat", post(ai::chat))
}
