// src/blueprints/handlers/export.rs

use axum::{
    extract::{Extension, Json, Path},
    http::header,
    response::IntoResponse,
};
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::info;

use super::super::models::ExportRequest;
use super::super::validators::ExportValidator;
use crate::analysis::blueprint;
use crate::auth::AuthedUser;
use crate::common::{ApiError, AppState, Validator};
use crate::services::pdf::{self, ExportedPdf};
use crate::services::saved_blueprints::SavedBlueprintsService;

fn pdf_attachment(exported: ExportedPdf) -> impl IntoResponse {
    (
        [
            (header::CONTENT_TYPE, "application/pdf".to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{}\"", exported.file_name),
            ),
        ],
        exported.bytes,
    )
}

/// POST /api/blueprints/export - Render a blueprint (or the role's template) as PDF
pub async fn export_blueprint(
    Extension(state_lock): Extension<Arc<RwLock<AppState>>>,
    Json(request): Json<ExportRequest>,
) -> Result<impl IntoResponse, ApiError> {
    ExportValidator.validate(&request).into_api_result()?;

    let template = match request.blueprint {
        Some(template) => template,
        None => {
            let state = state_lock.read().await;
            blueprint::select(&state.catalog, &request.target_role).clone()
        }
    };

    info!(
        target_role = %request.target_role,
        title = %template.title,
        "Blueprint export requested"
    );

    let exported = pdf::build_blocking(template, request.target_role).await?;
    Ok(pdf_attachment(exported))
}

/// GET /api/blueprints/:id/pdf - Render a saved blueprint as PDF
pub async fn export_saved_blueprint(
    Extension(state_lock): Extension<Arc<RwLock<AppState>>>,
    authed: AuthedUser,
    Path(blueprint_id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let service = SavedBlueprintsService::new(state_lock.read().await.db.clone());
    let (template, target_role) = service.template(&authed.id, &blueprint_id).await?;

    info!(
        blueprint_id = %blueprint_id,
        user_id = %authed.id,
        "Saved blueprint export requested"
    );

    let exported = pdf::build_blocking(template, target_role).await?;
    Ok(pdf_attachment(exported))
}
