// src/analysis/routes.rs

use axum::{
    routing::{get, post},
    Router,
};

use super::handlers;

pub fn analysis_routes() -> Router {
    Router::new()
        .route("/api/analysis", post(handlers::analyze_handler))
        .route("/api/catalog/roles", get(handlers::roles_handler))
        .route("/api/blueprints/template", get(handlers::template_handler))
}
