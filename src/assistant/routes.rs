// src/assistant/routes.rs

use axum::{
    extract::DefaultBodyLimit,
    http::{header, HeaderName, Method},
    routing::post,
    Router,
};
use tower_http::cors::{Any, CorsLayer};

use super::handlers;
use crate::common::upload::RESUME_BODY_LIMIT;

/// Public proxy endpoints, open to any origin
///
/// # Routes
/// - `POST /extract-skills` (and `/api/extract-skills`) - Skills from an uploaded résumé
/// - `POST /generate-projects` (and `/api/generate-projects`) - Project ideas for a skill gap
pub fn assistant_routes() -> Router {
    let extract = post(handlers::extract_skills_handler).layer(DefaultBodyLimit::max(RESUME_BODY_LIMIT));
    let generate = post(handlers::generate_projects_handler);

    Router::new()
        .route("/extract-skills", extract.clone())
        .route("/api/extract-skills", extract)
        .route("/generate-projects", generate.clone())
        .route("/api/generate-projects", generate)
        .layer(proxy_cors())
}

fn proxy_cors() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::POST, Method::OPTIONS])
        .allow_headers([
            header::AUTHORIZATION,
            header::CONTENT_TYPE,
            HeaderName::from_static("x-client-info"),
            HeaderName::from_static("apikey"),
        ])
}
