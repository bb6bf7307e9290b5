// src/blueprints/routes.rs

use axum::{
    routing::{get, post},
    Router,
};

use super::handlers::{export, saved};

pub fn blueprints_routes() -> Router {
    Router::new()
        // Saved blueprint routes
        .route(
            "/api/blueprints",
            get(saved::list_blueprints).post(saved::create_blueprint),
        )
        .route(
            "/api/blueprints/:id",
            get(saved::get_blueprint).delete(saved::delete_blueprint),
        )
        // PDF export routes
        .route("/api/blueprints/export", post(export::export_blueprint))
        .route("/api/blueprints/:id/pdf", get(export::export_saved_blueprint))
}
