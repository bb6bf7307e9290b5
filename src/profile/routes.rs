// src/profile/routes.rs

use axum::{extract::DefaultBodyLimit, routing::get, Router};

use super::handlers::{profile, resume, skills};
use crate::common::upload::RESUME_BODY_LIMIT;

pub fn profile_routes() -> Router {
    Router::new()
        // Profile routes
        .route(
            "/api/profile",
            get(profile::profile_handler).put(profile::update_profile_handler),
        )
        // Saved skills routes
        .route(
            "/api/profile/skills",
            get(skills::get_skills).put(skills::replace_skills),
        )
        // Résumé routes
        .route(
            "/api/profile/resume",
            get(resume::download_resume)
                .post(resume::upload_resume)
                .delete(resume::delete_resume)
                .layer(DefaultBodyLimit::max(RESUME_BODY_LIMIT)),
        )
}
