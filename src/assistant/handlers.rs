// src/assistant/handlers.rs

use axum::extract::{Extension, Json, Multipart};
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{info, warn};

use super::models::{ExtractSkillsResponse, GenerateProjectsRequest, GenerateProjectsResponse};
use super::parsing::{parse_projects, parse_skills, OnParseFailure};
use super::prompts;
use super::validators::GenerateProjectsValidator;
use crate::common::upload::read_resume_field;
use crate::common::{ApiError, AppState, Validator};

/// Unparseable extraction replies yield an empty skill list
const SKILLS_ON_PARSE_FAILURE: OnParseFailure = OnParseFailure::Empty;
/// Unparseable generation replies are surfaced as errors
const PROJECTS_ON_PARSE_FAILURE: OnParseFailure = OnParseFailure::Fail;

/// POST /extract-skills - Technical skills found in an uploaded résumé
pub async fn extract_skills_handler(
    Extension(state_lock): Extension<Arc<RwLock<AppState>>>,
    mut multipart: Multipart,
) -> Result<Json<ExtractSkillsResponse>, ApiError> {
    let resume = read_resume_field(&mut multipart).await?;
    let llm = state_lock.read().await.llm_service.clone();

    info!(
        file_name = %resume.file_name,
        mime_type = %resume.mime_type,
        size = resume.bytes.len(),
        "Extracting skills from resume"
    );

    let request = prompts::extraction_request(llm.config(), &resume);
    let completion = llm.chat(&request).await?;

    if completion.tool_arguments.is_none() {
        warn!("Extraction reply has no tool call, falling back to content");
    }

    let skills = SKILLS_ON_PARSE_FAILURE.resolve(parse_skills(&completion), "skills")?;

    info!(skills = skills.len(), "Resume skill extraction completed");

    Ok(Json(ExtractSkillsResponse { skills }))
}

/// POST /generate-projects - Practice project ideas for a skill gap
pub async fn generate_projects_handler(
    Extension(state_lock): Extension<Arc<RwLock<AppState>>>,
    Json(request): Json<GenerateProjectsRequest>,
) -> Result<Json<GenerateProjectsResponse>, ApiError> {
    GenerateProjectsValidator
        .validate(&request)
        .into_api_result()?;

    let llm = state_lock.read().await.llm_service.clone();
    let count = request.project_count();

    info!(
        target_role = %request.target_role,
        project_count = count,
        "Generating project ideas"
    );

    let chat = prompts::generation_request(
        llm.config(),
        &request.target_role,
        request.current_skills.as_deref(),
        request.missing_skills.as_deref(),
        count,
    );
    let completion = llm.chat(&chat).await?;

    let mut projects = PROJECTS_ON_PARSE_FAILURE.resolve(parse_projects(&completion), "projects")?;

    if projects.is_empty() {
        return Err(ApiError::ResponseParseError(
            "AI response contained no projects".to_string(),
        ));
    }
    if projects.len() > count as usize {
        warn!(
            requested = count,
            received = projects.len(),
            "Model returned extra projects, truncating"
        );
        projects.truncate(count as usize);
    }

    info!(projects = projects.len(), "Project idea generation completed");

    Ok(Json(GenerateProjectsResponse { projects }))
}
