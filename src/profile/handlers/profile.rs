// src/profile/handlers/profile.rs

use axum::extract::{Extension, Json};
use sqlx::SqlitePool;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{error, info};

use super::super::models::{Profile, UpdateProfileRequest};
use super::super::validators::ProfileUpdateValidator;
use crate::auth::AuthedUser;
use crate::common::helpers::now_timestamp;
use crate::common::{ApiError, AppState, Validator};

/// Profile row for `authed`, created on first access with the token email
pub async fn ensure_profile(db: &SqlitePool, authed: &AuthedUser) -> Result<Profile, ApiError> {
    let now = now_timestamp();
    sqlx::query(
        "INSERT OR IGNORE INTO profiles (user_id, email, created_at, updated_at) VALUES (?, ?, ?, ?)",
    )
    .bind(&authed.id)
    .bind(authed.email.as_deref())
    .bind(&now)
    .bind(&now)
    .execute(db)
    .await
    .map_err(|e| {
        error!(error = %e, user_id = %authed.id, "Database error creating profile");
        ApiError::StorageError(e)
    })?;

    let profile = sqlx::query_as::<_, Profile>("SELECT * FROM profiles WHERE user_id = ?")
        .bind(&authed.id)
        .fetch_one(db)
        .await?;

    Ok(profile)
}

/// GET /api/profile - Get user profile
pub async fn profile_handler(
    Extension(state_lock): Extension<Arc<RwLock<AppState>>>,
    authed: AuthedUser,
) -> Result<Json<Profile>, ApiError> {
    let db = state_lock.read().await.db.clone();
    Ok(Json(ensure_profile(&db, &authed).await?))
}

/// PUT /api/profile - Update display name and/or target role
pub async fn update_profile_handler(
    Extension(state_lock): Extension<Arc<RwLock<AppState>>>,
    authed: AuthedUser,
    Json(request): Json<UpdateProfileRequest>,
) -> Result<Json<Profile>, ApiError> {
    ProfileUpdateValidator
        .validate(&request)
        .into_api_result()?;

    let db = state_lock.read().await.db.clone();

    info!(user_id = %authed.id, "Profile update request received");

    ensure_profile(&db, &authed).await?;

    sqlx::query(
        r#"
        UPDATE profiles SET
            display_name = COALESCE(?, display_name),
            target_role = COALESCE(?, target_role),
            updated_at = ?
        WHERE user_id = ?
        "#,
    )
    .bind(request.display_name.as_deref().map(str::trim))
    .bind(request.target_role.as_deref().map(str::trim))
    .bind(now_timestamp())
    .bind(&authed.id)
    .execute(&db)
    .await
    .map_err(|e| {
        error!(
            error = %e,
            user_id = %authed.id,
            "Database error updating profile"
        );
        ApiError::StorageError(e)
    })?;

    let profile = sqlx::query_as::<_, Profile>("SELECT * FROM profiles WHERE user_id = ?")
        .bind(&authed.id)
        .fetch_one(&db)
        .await?;

    info!(user_id = %authed.id, "Profile updated successfully");

    Ok(Json(profile))
}
