// src/analysis/catalog.rs
//! Role catalog: requirement tables, radar categories and blueprint templates.
//!
//! The seed ships inside the binary (`data/catalog.json`); `CATALOG_PATH`
//! swaps in another file with the same shape.

use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;
use tracing::info;

use super::models::{BlueprintTemplate, RadarCategory, RoleRequirements};

const EMBEDDED_CATALOG: &str = include_str!("../../data/catalog.json");

pub const RADAR_CATEGORY_COUNT: usize = 6;
pub const RADAR_SKILLS_PER_CATEGORY: usize = 5;

#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("Failed to read catalog file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Malformed catalog JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid catalog: {0}")]
    Invalid(String),
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Catalog {
    default_role: String,
    #[serde(default)]
    target_roles: Vec<String>,
    #[serde(default)]
    popular_skills: Vec<String>,
    requirements: HashMap<String, RoleRequirements>,
    radar_categories: Vec<RadarCategory>,
    blueprints: HashMap<String, BlueprintTemplate>,
}

impl Catalog {
    /// Catalog compiled into the binary
    pub fn embedded() -> Result<Self, CatalogError> {
        Self::from_json_str(EMBEDDED_CATALOG)
    }

    /// Load from `path` when given, otherwise the embedded seed
    pub fn load(path: Option<&Path>) -> Result<Self, CatalogError> {
        match path {
            Some(path) => {
                let raw = std::fs::read_to_string(path)?;
                let catalog = Self::from_json_str(&raw)?;
                info!(
                    path = %path.display(),
                    roles = catalog.requirements.len(),
                    blueprints = catalog.blueprints.len(),
                    "Loaded catalog from file"
                );
                Ok(catalog)
            }
            None => Self::embedded(),
        }
    }

    pub fn from_json_str(raw: &str) -> Result<Self, CatalogError> {
        let catalog: Catalog = serde_json::from_str(raw)?;
        catalog.validate()?;
        Ok(catalog)
    }

    fn validate(&self) -> Result<(), CatalogError> {
        if !self.requirements.contains_key(&self.default_role) {
            return Err(CatalogError::Invalid(format!(
                "default role '{}' has no requirement table",
                self.default_role
            )));
        }
        if !self.blueprints.contains_key(&self.default_role) {
            return Err(CatalogError::Invalid(format!(
                "default role '{}' has no blueprint template",
                self.default_role
            )));
        }
        if let Some((role, _)) = self
            .requirements
            .iter()
            .find(|(_, req)| req.required.is_empty() && req.nice.is_empty())
        {
            return Err(CatalogError::Invalid(format!(
                "role '{}' lists no skills",
                role
            )));
        }
        if self.radar_categories.len() != RADAR_CATEGORY_COUNT {
            return Err(CatalogError::Invalid(format!(
                "expected {} radar categories, found {}",
                RADAR_CATEGORY_COUNT,
                self.radar_categories.len()
            )));
        }
        if let Some(category) = self
            .radar_categories
            .iter()
            .find(|c| c.skills.len() != RADAR_SKILLS_PER_CATEGORY)
        {
            return Err(CatalogError::Invalid(format!(
                "radar category '{}' must list exactly {} skills",
                category.name, RADAR_SKILLS_PER_CATEGORY
            )));
        }
        Ok(())
    }

    pub fn default_role(&self) -> &str {
        &self.default_role
    }

    pub fn target_roles(&self) -> &[String] {
        &self.target_roles
    }

    pub fn popular_skills(&self) -> &[String] {
        &self.popular_skills
    }

    pub fn radar_categories(&self) -> &[RadarCategory] {
        &self.radar_categories
    }

    /// Requirement table for `role`, or the default role's table.
    ///
    /// Returns the role name actually used alongside the table.
    pub fn requirements_for(&self, role: &str) -> (&str, &RoleRequirements) {
        match self.requirements.get_key_value(role) {
            Some((name, req)) => (name.as_str(), req),
            None => (
                self.default_role.as_str(),
                &self.requirements[&self.default_role],
            ),
        }
    }

    /// Exact-match template lookup, no fallback
    pub fn blueprint(&self, role: &str) -> Option<&BlueprintTemplate> {
        self.blueprints.get(role)
    }

    pub fn default_blueprint(&self) -> &BlueprintTemplate {
        &self.blueprints[&self.default_role]
    }
}
