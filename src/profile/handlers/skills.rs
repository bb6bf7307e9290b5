// src/profile/handlers/skills.rs

use axum::extract::{Extension, Json};
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::info;

use super::super::models::{SkillsResponse, UpdateSkillsRequest};
use super::super::validators::SkillsValidator;
use crate::auth::AuthedUser;
use crate::common::helpers::normalize_skill_list;
use crate::common::{ApiError, AppState, Validator};

/// GET /api/profile/skills - Saved skills in the order they were saved
pub async fn get_skills(
    Extension(state_lock): Extension<Arc<RwLock<AppState>>>,
    authed: AuthedUser,
) -> Result<Json<SkillsResponse>, ApiError> {
    let db = state_lock.read().await.db.clone();

    let skills: Vec<String> =
        sqlx::query_scalar("SELECT skill FROM saved_skills WHERE user_id = ? ORDER BY rowid")
            .bind(&authed.id)
            .fetch_all(&db)
            .await?;

    Ok(Json(SkillsResponse { skills }))
}

/// PUT /api/profile/skills - Replace the saved skill list
pub async fn replace_skills(
    Extension(state_lock): Extension<Arc<RwLock<AppState>>>,
    authed: AuthedUser,
    Json(request): Json<UpdateSkillsRequest>,
) -> Result<Json<SkillsResponse>, ApiError> {
    SkillsValidator.validate(&request).into_api_result()?;

    let db = state_lock.read().await.db.clone();
    let skills = normalize_skill_list(request.skills);

    let mut tx = db.begin().await?;

    sqlx::query("DELETE FROM saved_skills WHERE user_id = ?")
        .bind(&authed.id)
        .execute(&mut *tx)
        .await?;

    for skill in &skills {
        sqlx::query("INSERT INTO saved_skills (user_id, skill) VALUES (?, ?)")
            .bind(&authed.id)
            .bind(skill)
            .execute(&mut *tx)
            .await?;
    }

    tx.commit().await?;

    info!(user_id = %authed.id, skills = skills.len(), "Saved skills replaced");

    Ok(Json(SkillsResponse { skills }))
}
