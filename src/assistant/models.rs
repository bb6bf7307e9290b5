// src/assistant/models.rs

use serde::{Deserialize, Serialize};

pub const DEFAULT_PROJECT_COUNT: u32 = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Beginner,
    Intermediate,
    Advanced,
}

/// A generated practice project
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ProjectIdea {
    pub title: String,
    pub description: String,
    pub difficulty: Difficulty,
    #[serde(default)]
    pub estimated_time: String,
    #[serde(default)]
    pub skills_to_learn: Vec<String>,
    #[serde(default)]
    pub tech_stack: Vec<String>,
    #[serde(default)]
    pub learning_outcomes: Vec<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ExtractSkillsResponse {
    pub skills: Vec<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateProjectsRequest {
    #[serde(default)]
    pub target_role: String,
    #[serde(default)]
    pub current_skills: Option<Vec<String>>,
    #[serde(default)]
    pub missing_skills: Option<Vec<String>>,
    #[serde(default)]
    pub project_count: Option<u32>,
}

impl GenerateProjectsRequest {
    pub fn project_count(&self) -> u32 {
        self.project_count.unwrap_or(DEFAULT_PROJECT_COUNT)
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct GenerateProjectsResponse {
    pub projects: Vec<ProjectIdea>,
}
