// src/blueprints/validators.rs

use super::models::{CreateBlueprintRequest, ExportRequest};
use crate::analysis::models::BlueprintTemplate;
use crate::common::{ValidationResult, Validator};

pub const MAX_TITLE_LENGTH: usize = 255;
pub const MAX_SKILL_LIST: usize = 200;
pub const MAX_PHASES: usize = 50;
pub const MAX_PHASE_TITLE_LENGTH: usize = 255;
pub const MAX_INTERVIEW_QUESTIONS: usize = 100;

fn check_template(result: &mut ValidationResult, field: &str, template: &BlueprintTemplate) {
    result.check_text(
        &format!("{}.title", field),
        &template.title,
        "Blueprint title",
        MAX_TITLE_LENGTH,
    );

    if template.phases.len() > MAX_PHASES {
        result.add_error(
            &format!("{}.phases", field),
            &format!("At most {} phases are allowed", MAX_PHASES),
        );
    }
    for (index, phase) in template.phases.iter().enumerate() {
        if phase.title.len() > MAX_PHASE_TITLE_LENGTH {
            result.add_error(
                &format!("{}.phases[{}].title", field, index),
                &format!(
                    "Phase title must be at most {} characters",
                    MAX_PHASE_TITLE_LENGTH
                ),
            );
        }
    }
    if template.interview_questions.len() > MAX_INTERVIEW_QUESTIONS {
        result.add_error(
            &format!("{}.interviewQuestions", field),
            &format!(
                "At most {} interview questions are allowed",
                MAX_INTERVIEW_QUESTIONS
            ),
        );
    }
}

pub struct CreateBlueprintValidator;

impl Validator<CreateBlueprintRequest> for CreateBlueprintValidator {
    fn validate(&self, data: &CreateBlueprintRequest) -> ValidationResult {
        let mut result = ValidationResult::new();

        if let Some(title) = &data.title {
            if title.len() > MAX_TITLE_LENGTH {
                result.add_error(
                    "title",
                    &format!("Title must be at most {} characters", MAX_TITLE_LENGTH),
                );
            }
        }
        result.check_text("targetRole", &data.target_role, "Target role", MAX_TITLE_LENGTH);

        for (field, list) in [
            ("skillsUsed", &data.skills_used),
            ("missingSkills", &data.missing_skills),
        ] {
            if list.len() > MAX_SKILL_LIST {
                result.add_error(
                    field,
                    &format!("At most {} skills are allowed", MAX_SKILL_LIST),
                );
            }
        }

        check_template(&mut result, "blueprintData", &data.blueprint_data);

        result
    }
}

pub struct ExportValidator;

impl Validator<ExportRequest> for ExportValidator {
    fn validate(&self, data: &ExportRequest) -> ValidationResult {
        let mut result = ValidationResult::new();

        result.check_text("targetRole", &data.target_role, "Target role", MAX_TITLE_LENGTH);
        if let Some(blueprint) = &data.blueprint {
            check_template(&mut result, "blueprint", blueprint);
        }

        result
    }
}
