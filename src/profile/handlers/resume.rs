// src/profile/handlers/resume.rs

use axum::{
    extract::{Extension, Json, Multipart},
    http::header,
    response::IntoResponse,
};
use serde_json::json;
use std::path::Path;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{error, info, warn};

use super::super::models::ResumeUploadResponse;
use super::profile::ensure_profile;
use crate::auth::AuthedUser;
use crate::common::helpers::{now_timestamp, storage_dir_name};
use crate::common::upload::{read_resume_field, sniff_mime};
use crate::common::{ApiError, AppState};

const RESUME_STEM: &str = "resume";

async fn stored_resume_url(
    db: &sqlx::SqlitePool,
    user_id: &str,
) -> Result<Option<String>, ApiError> {
    let url: Option<Option<String>> =
        sqlx::query_scalar("SELECT resume_url FROM profiles WHERE user_id = ?")
            .bind(user_id)
            .fetch_optional(db)
            .await?;
    Ok(url.flatten())
}

/// Remove earlier uploads, whatever their extension
async fn remove_previous_resumes(dir: &Path) -> Result<(), std::io::Error> {
    let mut entries = match tokio::fs::read_dir(dir).await {
        Ok(entries) => entries,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(()),
        Err(e) => return Err(e),
    };

    while let Some(entry) = entries.next_entry().await? {
        let path = entry.path();
        if path.file_stem().and_then(|s| s.to_str()) == Some(RESUME_STEM) {
            tokio::fs::remove_file(&path).await?;
        }
    }
    Ok(())
}

/// POST /api/profile/resume - Upload or replace the user's résumé
pub async fn upload_resume(
    Extension(state_lock): Extension<Arc<RwLock<AppState>>>,
    authed: AuthedUser,
    mut multipart: Multipart,
) -> Result<Json<ResumeUploadResponse>, ApiError> {
    let (db, resumes_dir) = {
        let state = state_lock.read().await;
        (state.db.clone(), state.resumes_dir.clone())
    };

    info!(user_id = %authed.id, "User uploading resume");

    let file = read_resume_field(&mut multipart).await?;
    ensure_profile(&db, &authed).await?;

    let user_dir_name = storage_dir_name(&authed.id);
    let user_dir = resumes_dir.join(&user_dir_name);
    let file_name = format!("{}.{}", RESUME_STEM, file.extension());
    let resume_url = format!("{}/{}", user_dir_name, file_name);

    tokio::fs::create_dir_all(&user_dir).await.map_err(|e| {
        error!(error = %e, user_id = %authed.id, "Failed to create resume directory");
        ApiError::FileStorageError(e)
    })?;
    remove_previous_resumes(&user_dir)
        .await
        .map_err(ApiError::FileStorageError)?;
    tokio::fs::write(user_dir.join(&file_name), &file.bytes)
        .await
        .map_err(|e| {
            error!(error = %e, user_id = %authed.id, "Failed to save resume");
            ApiError::FileStorageError(e)
        })?;

    sqlx::query(
        "UPDATE profiles SET resume_url = ?, updated_at = ? WHERE user_id = ?",
    )
    .bind(&resume_url)
    .bind(now_timestamp())
    .bind(&authed.id)
    .execute(&db)
    .await?;

    info!(
        user_id = %authed.id,
        resume_url = %resume_url,
        size = file.bytes.len(),
        "Resume uploaded successfully"
    );

    Ok(Json(ResumeUploadResponse {
        resume_url,
        mime_type: file.mime_type,
        size: file.bytes.len(),
        message: "Resume uploaded successfully".to_string(),
    }))
}

/// GET /api/profile/resume - Download the stored résumé
pub async fn download_resume(
    Extension(state_lock): Extension<Arc<RwLock<AppState>>>,
    authed: AuthedUser,
) -> Result<impl IntoResponse, ApiError> {
    let (db, resumes_dir) = {
        let state = state_lock.read().await;
        (state.db.clone(), state.resumes_dir.clone())
    };

    let resume_url = stored_resume_url(&db, &authed.id)
        .await?
        .ok_or_else(|| ApiError::NotFound("No resume uploaded".to_string()))?;

    let bytes = match tokio::fs::read(resumes_dir.join(&resume_url)).await {
        Ok(bytes) => bytes,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            warn!(user_id = %authed.id, resume_url = %resume_url, "Resume file missing on disk");
            return Err(ApiError::NotFound("No resume uploaded".to_string()));
        }
        Err(e) => return Err(ApiError::FileStorageError(e)),
    };

    let file_name = Path::new(&resume_url)
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or("resume.pdf")
        .to_string();

    Ok((
        [
            (header::CONTENT_TYPE, sniff_mime(&bytes)),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{}\"", file_name),
            ),
        ],
        bytes,
    ))
}

/// DELETE /api/profile/resume - Remove the stored résumé
pub async fn delete_resume(
    Extension(state_lock): Extension<Arc<RwLock<AppState>>>,
    authed: AuthedUser,
) -> Result<Json<serde_json::Value>, ApiError> {
    let (db, resumes_dir) = {
        let state = state_lock.read().await;
        (state.db.clone(), state.resumes_dir.clone())
    };

    let resume_url = stored_resume_url(&db, &authed.id)
        .await?
        .ok_or_else(|| ApiError::NotFound("No resume uploaded".to_string()))?;

    match tokio::fs::remove_file(resumes_dir.join(&resume_url)).await {
        Ok(()) => {}
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            warn!(user_id = %authed.id, resume_url = %resume_url, "Resume file already gone");
        }
        Err(e) => return Err(ApiError::FileStorageError(e)),
    }

    sqlx::query(
        "UPDATE profiles SET resume_url = NULL, updated_at = ? WHERE user_id = ?",
    )
    .bind(now_timestamp())
    .bind(&authed.id)
    .execute(&db)
    .await?;

    info!(user_id = %authed.id, "Resume deleted");

    Ok(Json(json!({ "message": "Resume deleted successfully" })))
}
