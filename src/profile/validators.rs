// src/profile/validators.rs

use super::models::*;
use crate::common::{ValidationResult, Validator};

pub const MAX_PROFILE_FIELD_LENGTH: usize = 255;
pub const MAX_SAVED_SKILLS: usize = 100;
pub const MAX_SAVED_SKILL_LENGTH: usize = 100;

// ============================================================================
// Profile Validators
// ============================================================================

pub struct ProfileUpdateValidator;

impl Validator<UpdateProfileRequest> for ProfileUpdateValidator {
    fn validate(&self, data: &UpdateProfileRequest) -> ValidationResult {
        let mut result = ValidationResult::new();

        if data.display_name.is_none() && data.target_role.is_none() {
            result.add_error("profile", "At least one field must be provided");
        }

        if let Some(display_name) = &data.display_name {
            result.check_text(
                "displayName",
                display_name,
                "Display name",
                MAX_PROFILE_FIELD_LENGTH,
            );
        }

        if let Some(target_role) = &data.target_role {
            result.check_text(
                "targetRole",
                target_role,
                "Target role",
                MAX_PROFILE_FIELD_LENGTH,
            );
        }

        result
    }
}

pub struct SkillsValidator;

impl Validator<UpdateSkillsRequest> for SkillsValidator {
    fn validate(&self, data: &UpdateSkillsRequest) -> ValidationResult {
        let mut result = ValidationResult::new();

        if data.skills.len() > MAX_SAVED_SKILLS {
            result.add_error(
                "skills",
                &format!("At most {} skills can be saved", MAX_SAVED_SKILLS),
            );
        }

        if data
            .skills
            .iter()
            .any(|s| s.trim().len() > MAX_SAVED_SKILL_LENGTH)
        {
            result.add_error(
                "skills",
                &format!(
                    "Each skill must be at most {} characters",
                    MAX_SAVED_SKILL_LENGTH
                ),
            );
        }

        result
    }
}
