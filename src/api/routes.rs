//! API route configuration.
//!
//! All routes here except signup require Bearer token authentication via
//! [`crate::api::middleware::auth`]; admin checks happen in the services.

use crate::api::handlers::{
    create_invite_handler, delete_invite_handler, delete_link_handler, delete_user_handler,
    list_invites_handler, list_links_handler, list_users_handler, shorten_handler,
};
use crate::state::AppState;
use axum::{
    routing::{delete, get, post},
    Router,
};

/// API routes protected by Bearer token authentication.
///
/// # Endpoints
///
/// - `POST   /shorten`       - Create a short link
/// - `GET    /links`         - List the caller's links
/// - `DELETE /links/{id}`    - Delete one of the caller's links
/// - `POST   /invites`       - Mint an invite (admin)
/// - `GET    /invites`       - List invites (admin)
/// - `DELETE /invites/{id}`  - Delete an invite (admin)
/// - `GET    /users`         - List accounts (admin)
/// - `DELETE /users/{id}`    - Delete an account (admin)
pub fn protected_routes() -> Router<AppState> {
    Router::new()
        .route("/shorten", post(shorten_handler))
        .route("/links", get(list_links_handler))
        .route("/links/{id}", delete(delete_link_handler))
        .route(
            "/invites",
            get(list_invites_handler).post(create_invite_handler),
        )
        .route("/invites/{id}", delete(delete_invite_handler))
        .route("/users", get(list_users_handler))
        .route("/users/{id}", delete(delete_user_handler))
}
