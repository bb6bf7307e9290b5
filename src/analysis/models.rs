// src/analysis/models.rs

use serde::{Deserialize, Serialize};

use super::matcher::MatchMode;

// ============================================================================
// Catalog Models
// ============================================================================

/// Skills a role requires, split into must-have and nice-to-have
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RoleRequirements {
    pub required: Vec<String>,
    #[serde(default)]
    pub nice: Vec<String>,
}

impl RoleRequirements {
    /// `required` followed by `nice`, order preserved, overlaps kept
    pub fn all_skills(&self) -> impl Iterator<Item = &String> {
        self.required.iter().chain(self.nice.iter())
    }
}

/// One axis of the radar chart
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RadarCategory {
    pub name: String,
    pub skills: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BlueprintPhase {
    pub title: String,
    pub tasks: Vec<String>,
    pub duration: String,
}

/// Project roadmap offered for a target role
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BlueprintTemplate {
    pub title: String,
    pub problem: String,
    pub tech_stack: Vec<String>,
    pub phases: Vec<BlueprintPhase>,
    pub interview_questions: Vec<String>,
}

// ============================================================================
// Analysis Results
// ============================================================================

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    pub matched: Vec<String>,
    pub missing: Vec<String>,
    pub total: usize,
    pub match_percentage: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RadarDatum {
    pub category: String,
    pub user_skills_pct: f64,
    /// Placeholder figure, drawn at random on every call
    pub market_demand_pct: f64,
}

// ============================================================================
// Request / Response Models
// ============================================================================

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisRequest {
    pub target_role: String,
    #[serde(default)]
    pub skills: Vec<String>,
    pub match_mode: Option<MatchMode>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResponse {
    pub target_role: String,
    /// Role whose requirement table was used (differs on fallback)
    pub requirements_role: String,
    pub match_mode: MatchMode,
    pub analysis: AnalysisResult,
    pub radar: Vec<RadarDatum>,
    pub blueprint: BlueprintTemplate,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogRolesResponse {
    pub default_role: String,
    pub target_roles: Vec<String>,
    pub popular_skills: Vec<String>,
}

#[derive(Debug, Deserialize)]
pub struct TemplateQuery {
    pub role: String,
}
