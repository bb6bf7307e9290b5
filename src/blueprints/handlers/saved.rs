// src/blueprints/handlers/saved.rs

use axum::{
    extract::{Extension, Json, Path},
    http::StatusCode,
};
use serde_json::json;
use std::sync::Arc;
use tokio::sync::RwLock;

use super::super::models::{CreateBlueprintRequest, SavedBlueprint};
use super::super::validators::CreateBlueprintValidator;
use crate::auth::AuthedUser;
use crate::common::{ApiError, AppState, Validator};
use crate::services::saved_blueprints::SavedBlueprintsService;

/// GET /api/blueprints - The user's saved blueprints, newest first
pub async fn list_blueprints(
    Extension(state_lock): Extension<Arc<RwLock<AppState>>>,
    authed: AuthedUser,
) -> Result<Json<Vec<SavedBlueprint>>, ApiError> {
    let service = SavedBlueprintsService::new(state_lock.read().await.db.clone());
    Ok(Json(service.list(&authed.id).await?))
}

/// POST /api/blueprints - Save a blueprint
pub async fn create_blueprint(
    Extension(state_lock): Extension<Arc<RwLock<AppState>>>,
    authed: AuthedUser,
    Json(request): Json<CreateBlueprintRequest>,
) -> Result<(StatusCode, Json<SavedBlueprint>), ApiError> {
    CreateBlueprintValidator.validate(&request).into_api_result()?;

    let service = SavedBlueprintsService::new(state_lock.read().await.db.clone());
    let saved = service.create(&authed.id, request).await?;

    Ok((StatusCode::CREATED, Json(saved)))
}

/// GET /api/blueprints/:id - One saved blueprint
pub async fn get_blueprint(
    Extension(state_lock): Extension<Arc<RwLock<AppState>>>,
    authed: AuthedUser,
    Path(blueprint_id): Path<String>,
) -> Result<Json<SavedBlueprint>, ApiError> {
    let service = SavedBlueprintsService::new(state_lock.read().await.db.clone());
    Ok(Json(service.get(&authed.id, &blueprint_id).await?))
}

/// DELETE /api/blueprints/:id - Remove a saved blueprint
pub async fn delete_blueprint(
    Extension(state_lock): Extension<Arc<RwLock<AppState>>>,
    authed: AuthedUser,
    Path(blueprint_id): Path<String>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let service = SavedBlueprintsService::new(state_lock.read().await.db.clone());
    service.delete(&authed.id, &blueprint_id).await?;

    Ok(Json(json!({ "message": "Blueprint deleted successfully" })))
}
