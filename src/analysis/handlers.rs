// src/analysis/handlers.rs

use axum::extract::{Extension, Json, Query};
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::info;

use super::models::{
    AnalysisRequest, AnalysisResponse, BlueprintTemplate, CatalogRolesResponse, TemplateQuery,
};
use super::validators::AnalysisValidator;
use super::{blueprint, matcher, radar};
use crate::common::{ApiError, AppState, Validator};

/// POST /api/analysis - Skill gap analysis, radar data and blueprint for a role
pub async fn analyze_handler(
    Extension(state_lock): Extension<Arc<RwLock<AppState>>>,
    Json(request): Json<AnalysisRequest>,
) -> Result<Json<AnalysisResponse>, ApiError> {
    AnalysisValidator.validate(&request).into_api_result()?;

    let state = state_lock.read().await.clone();
    let catalog = &state.catalog;
    let mode = request.match_mode.unwrap_or(state.match_mode);

    let (requirements_role, _) = catalog.requirements_for(&request.target_role);
    let analysis = matcher::match_skills(catalog, &request.target_role, &request.skills, mode);
    let radar = radar::score(catalog, &request.skills, mode, &mut rand::thread_rng());
    let blueprint = blueprint::select(catalog, &request.target_role).clone();

    info!(
        target_role = %request.target_role,
        requirements_role = %requirements_role,
        match_mode = ?mode,
        skills = request.skills.len(),
        match_percentage = analysis.match_percentage,
        "Skill gap analysis completed"
    );

    Ok(Json(AnalysisResponse {
        requirements_role: requirements_role.to_string(),
        target_role: request.target_role,
        match_mode: mode,
        analysis,
        radar,
        blueprint,
    }))
}

/// GET /api/catalog/roles - Roles and skills offered by the dashboard
pub async fn roles_handler(
    Extension(state_lock): Extension<Arc<RwLock<AppState>>>,
) -> Json<CatalogRolesResponse> {
    let state = state_lock.read().await;
    let catalog = &state.catalog;

    Json(CatalogRolesResponse {
        default_role: catalog.default_role().to_string(),
        target_roles: catalog.target_roles().to_vec(),
        popular_skills: catalog.popular_skills().to_vec(),
    })
}

/// GET /api/blueprints/template?role=... - Blueprint template for a role
pub async fn template_handler(
    Extension(state_lock): Extension<Arc<RwLock<AppState>>>,
    Query(query): Query<TemplateQuery>,
) -> Json<BlueprintTemplate> {
    let state = state_lock.read().await;
    Json(blueprint::select(&state.catalog, &query.role).clone())
}
