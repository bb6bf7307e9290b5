// src/analysis/validators.rs

use super::models::AnalysisRequest;
use crate::common::{ValidationResult, Validator};

pub const MAX_SKILLS: usize = 200;
pub const MAX_SKILL_LENGTH: usize = 100;

pub struct AnalysisValidator;

impl Validator<AnalysisRequest> for AnalysisValidator {
    fn validate(&self, data: &AnalysisRequest) -> ValidationResult {
        let mut result = ValidationResult::new();

        result.check_text("targetRole", &data.target_role, "Target role", 255);

        if data.skills.len() > MAX_SKILLS {
            result.add_error(
                "skills",
                &format!("At most {} skills can be analysed", MAX_SKILLS),
            );
        }
        if data.skills.iter().any(|s| s.len() > MAX_SKILL_LENGTH) {
            result.add_error(
                "skills",
                &format!("Each skill must be at most {} characters", MAX_SKILL_LENGTH),
            );
        }

        result
    }
}
