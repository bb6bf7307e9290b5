// src/services/saved_blueprints.rs
use sqlx::SqlitePool;
use tracing::{info, warn};

use crate::analysis::models::BlueprintTemplate;
use crate::blueprints::models::{CreateBlueprintRequest, SavedBlueprint, SavedBlueprintRow};
use crate::common::helpers::now_timestamp;
use crate::common::{generate_blueprint_id, ApiError};

const SELECT_COLUMNS: &str = "SELECT id, user_id, title, target_role, skills_used, missing_skills, blueprint_data, created_at FROM saved_blueprints";

/// Saved blueprints of one user. Rows are written once and never updated.
pub struct SavedBlueprintsService {
    db: SqlitePool,
}

impl SavedBlueprintsService {
    pub fn new(db: SqlitePool) -> Self {
        Self { db }
    }

    /// All of the user's blueprints, newest first
    pub async fn list(&self, user_id: &str) -> Result<Vec<SavedBlueprint>, ApiError> {
        let rows = sqlx::query_as::<_, SavedBlueprintRow>(&format!(
            "{} WHERE user_id = ? ORDER BY created_at DESC, rowid DESC",
            SELECT_COLUMNS
        ))
        .bind(user_id)
        .fetch_all(&self.db)
        .await?;

        Ok(rows.into_iter().map(SavedBlueprint::from).collect())
    }

    pub async fn create(
        &self,
        user_id: &str,
        request: CreateBlueprintRequest,
    ) -> Result<SavedBlueprint, ApiError> {
        let id = generate_blueprint_id();
        let title = request
            .title
            .as_deref()
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .unwrap_or(&request.blueprint_data.title)
            .to_string();

        let encode = |value: serde_json::Result<String>| {
            value.map_err(|e| ApiError::InternalServer(format!("Failed to encode blueprint: {}", e)))
        };
        let skills_used = encode(serde_json::to_string(&request.skills_used))?;
        let missing_skills = encode(serde_json::to_string(&request.missing_skills))?;
        let blueprint_data = encode(serde_json::to_string(&request.blueprint_data))?;

        sqlx::query(
            r#"
            INSERT INTO saved_blueprints (id, user_id, title, target_role, skills_used, missing_skills, blueprint_data, created_at)
            VALUES (?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(&id)
        .bind(user_id)
        .bind(&title)
        .bind(request.target_role.trim())
        .bind(&skills_used)
        .bind(&missing_skills)
        .bind(&blueprint_data)
        .bind(now_timestamp())
        .execute(&self.db)
        .await?;

        info!(blueprint_id = %id, user_id = %user_id, title = %title, "Saved blueprint");

        self.get(user_id, &id).await
    }

    /// One blueprint; another user's id is reported as not found
    pub async fn get(&self, user_id: &str, id: &str) -> Result<SavedBlueprint, ApiError> {
        self.fetch_row(user_id, id).await.map(SavedBlueprint::from)
    }

    /// Stored template and target role, ready for export
    pub async fn template(
        &self,
        user_id: &str,
        id: &str,
    ) -> Result<(BlueprintTemplate, String), ApiError> {
        let row = self.fetch_row(user_id, id).await?;
        let template = serde_json::from_str(&row.blueprint_data).map_err(|e| {
            warn!(blueprint_id = %id, error = %e, "Saved blueprint data is not a template");
            ApiError::ExportError("Saved blueprint data cannot be exported".to_string())
        })?;
        Ok((template, row.target_role))
    }

    pub async fn delete(&self, user_id: &str, id: &str) -> Result<(), ApiError> {
        let result = sqlx::query("DELETE FROM saved_blueprints WHERE id = ? AND user_id = ?")
            .bind(id)
            .bind(user_id)
            .execute(&self.db)
            .await?;

        if result.rows_affected() == 0 {
            return Err(ApiError::NotFound("Blueprint not found".to_string()));
        }

        info!(blueprint_id = %id, user_id = %user_id, "Deleted saved blueprint");
        Ok(())
    }

    async fn fetch_row(&self, user_id: &str, id: &str) -> Result<SavedBlueprintRow, ApiError> {
        sqlx::query_as::<_, SavedBlueprintRow>(&format!(
            "{} WHERE id = ? AND user_id = ?",
            SELECT_COLUMNS
        ))
        .bind(id)
        .bind(user_id)
        .fetch_optional(&self.db)
        .await?
        .ok_or_else(|| ApiError::NotFound("Blueprint not found".to_string()))
    }
}
