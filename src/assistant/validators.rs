// src/assistant/validators.rs

use super::models::GenerateProjectsRequest;
use crate::common::{ValidationResult, Validator};

pub const MIN_PROJECT_COUNT: u32 = 1;
pub const MAX_PROJECT_COUNT: u32 = 10;
pub const MAX_LISTED_SKILLS: usize = 200;

pub struct GenerateProjectsValidator;

impl Validator<GenerateProjectsRequest> for GenerateProjectsValidator {
    fn validate(&self, data: &GenerateProjectsRequest) -> ValidationResult {
        let mut result = ValidationResult::new();

        result.check_text("targetRole", &data.target_role, "Target role", 255);

        let count = data.project_count();
        if !(MIN_PROJECT_COUNT..=MAX_PROJECT_COUNT).contains(&count) {
            result.add_error(
                "projectCount",
                &format!(
                    "Project count must be between {} and {}",
                    MIN_PROJECT_COUNT, MAX_PROJECT_COUNT
                ),
            );
        }

        for (field, list) in [
            ("currentSkills", &data.current_skills),
            ("missingSkills", &data.missing_skills),
        ] {
            if list.as_ref().map_or(0, Vec::len) > MAX_LISTED_SKILLS {
                result.add_error(
                    field,
                    &format!("At most {} skills can be listed", MAX_LISTED_SKILLS),
                );
            }
        }

        result
    }
}
