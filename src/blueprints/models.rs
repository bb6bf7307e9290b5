// src/blueprints/models.rs

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::analysis::models::BlueprintTemplate;
use crate::common::helpers::decode_json_column;

// ============================================================================
// Saved Blueprint Models
// ============================================================================

/// Raw `saved_blueprints` row; list columns hold JSON text
#[derive(FromRow, Debug, Clone)]
pub struct SavedBlueprintRow {
    pub id: String,
    pub user_id: String,
    pub title: String,
    pub target_role: String,
    pub skills_used: String,
    pub missing_skills: String,
    pub blueprint_data: String,
    pub created_at: String,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct SavedBlueprint {
    pub id: String,
    pub user_id: String,
    pub title: String,
    pub target_role: String,
    pub skills_used: Vec<String>,
    pub missing_skills: Vec<String>,
    pub blueprint_data: serde_json::Value,
    pub created_at: String,
}

impl From<SavedBlueprintRow> for SavedBlueprint {
    fn from(row: SavedBlueprintRow) -> Self {
        Self {
            skills_used: decode_json_column(&row.skills_used),
            missing_skills: decode_json_column(&row.missing_skills),
            blueprint_data: decode_json_column(&row.blueprint_data),
            id: row.id,
            user_id: row.user_id,
            title: row.title,
            target_role: row.target_role,
            created_at: row.created_at,
        }
    }
}

#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct CreateBlueprintRequest {
    /// Falls back to the template title when absent or blank
    pub title: Option<String>,
    pub target_role: String,
    #[serde(default)]
    pub skills_used: Vec<String>,
    #[serde(default)]
    pub missing_skills: Vec<String>,
    pub blueprint_data: BlueprintTemplate,
}

// ============================================================================
// Export Models
// ============================================================================

#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct ExportRequest {
    pub target_role: String,
    /// Exported as given; when absent the catalog template for the role is used
    pub blueprint: Option<BlueprintTemplate>,
}
