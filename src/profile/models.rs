// src/profile/models.rs

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

// ============================================================================
// Profile Models
// ============================================================================

#[derive(FromRow, Serialize, Deserialize, Debug, Clone)]
pub struct Profile {
    #[serde(rename = "userId")]
    pub user_id: String,
    #[serde(rename = "displayName")]
    pub display_name: Option<String>,
    pub email: Option<String>,
    #[serde(rename = "targetRole")]
    pub target_role: Option<String>,
    #[serde(rename = "resumeUrl")]
    pub resume_url: Option<String>,
    #[serde(rename = "createdAt")]
    pub created_at: String,
    #[serde(rename = "updatedAt")]
    pub updated_at: String,
}

#[derive(Deserialize, Debug, Default)]
pub struct UpdateProfileRequest {
    #[serde(rename = "displayName")]
    pub display_name: Option<String>,
    #[serde(rename = "targetRole")]
    pub target_role: Option<String>,
}

// ============================================================================
// Saved Skills Models
// ============================================================================

#[derive(Serialize, Deserialize, Debug)]
pub struct SkillsResponse {
    pub skills: Vec<String>,
}

#[derive(Deserialize, Debug)]
pub struct UpdateSkillsRequest {
    pub skills: Vec<String>,
}

// ============================================================================
// Résumé Models
// ============================================================================

#[derive(Serialize, Debug)]
pub struct ResumeUploadResponse {
    #[serde(rename = "resumeUrl")]
    pub resume_url: String,
    #[serde(rename = "mimeType")]
    pub mime_type: String,
    pub size: usize,
    pub message: String,
}
