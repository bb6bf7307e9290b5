//! Authentication routes

use axum::{routing::get, Router};

use super::handlers;

/// Creates and returns the authentication router
///
/// # Routes
/// - `GET /api/auth/me` - Current user resolved from the bearer token
pub fn auth_routes() -> Router {
    Router::new().route("/api/auth/me", get(handlers::me_handler))
}
