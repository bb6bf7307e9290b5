// src/assistant/prompts.rs
//! Chat requests sent to the LLM gateway.

use serde_json::json;

use crate::common::upload::UploadedFile;
use crate::services::llm::{
    ChatCompletionRequest, ChatMessage, ContentPart, FileData, LlmConfig, Tool,
};

pub const EXTRACT_SKILLS_TOOL: &str = "extract_skills";

const EXTRACTION_SYSTEM_PROMPT: &str = "You are a resume parser specialized in extracting technical skills.
Extract all technical skills, programming languages, frameworks, tools, and technologies from the resume.
Return ONLY a JSON object with a \"skills\" array containing the skill names.
Be comprehensive but only include actual technical/professional skills.
Example response: {\"skills\": [\"JavaScript\", \"React\", \"Node.js\", \"PostgreSQL\", \"Docker\", \"AWS\"]}";

const EXTRACTION_USER_PROMPT: &str =
    "Extract all technical skills from this resume. Return only a JSON object with a skills array.";

const GENERATION_SYSTEM_PROMPT: &str = "You are an expert career mentor and technical architect. Your role is to generate unique, practical project ideas that help developers bridge their skill gaps and prepare for their target roles.

Each project should:
- Be specific and actionable (not generic like \"build a todo app\")
- Directly address the missing skills
- Be realistic to complete within the estimated time
- Provide meaningful portfolio value
- Include modern, industry-relevant technologies

You must respond with valid JSON only, no markdown or extra text.";

fn skills_or(list: Option<&[String]>, fallback: &str) -> String {
    match list {
        Some(skills) if !skills.is_empty() => skills.join(", "),
        _ => fallback.to_string(),
    }
}

/// Résumé attached as a base64 data URL with a forced `extract_skills` call
pub fn extraction_request(config: &LlmConfig, resume: &UploadedFile) -> ChatCompletionRequest {
    use base64::Engine as _;

    let encoded = base64::engine::general_purpose::STANDARD.encode(&resume.bytes);

    ChatCompletionRequest {
        model: config.extraction_model.clone(),
        messages: vec![
            ChatMessage::system(EXTRACTION_SYSTEM_PROMPT),
            ChatMessage::user_parts(vec![
                ContentPart::Text {
                    text: EXTRACTION_USER_PROMPT.to_string(),
                },
                ContentPart::File {
                    file: FileData {
                        filename: resume.file_name.clone(),
                        file_data: format!("data:{};base64,{}", resume.mime_type, encoded),
                    },
                },
            ]),
        ],
        temperature: None,
        tools: Some(vec![Tool::function(
            EXTRACT_SKILLS_TOOL,
            "Extract technical skills from a resume",
            json!({
                "type": "object",
                "properties": {
                    "skills": {
                        "type": "array",
                        "items": { "type": "string" },
                        "description": "List of technical skills found in the resume"
                    }
                },
                "required": ["skills"],
                "additionalProperties": false
            }),
        )]),
        tool_choice: Some(json!({
            "type": "function",
            "function": { "name": EXTRACT_SKILLS_TOOL }
        })),
    }
}

pub fn generation_user_prompt(
    target_role: &str,
    current_skills: Option<&[String]>,
    missing_skills: Option<&[String]>,
    project_count: u32,
) -> String {
    format!(
        r#"Generate {count} unique project ideas for someone targeting the role of "{role}".

Current Skills: {current}
Missing Skills to Address: {missing}

Return a JSON array of project objects with this exact structure:
{{
  "projects": [
    {{
      "title": "Project Name",
      "description": "2-3 sentence description of what the project does and why it's valuable",
      "difficulty": "beginner" | "intermediate" | "advanced",
      "estimatedTime": "e.g., 2-3 weeks",
      "skillsToLearn": ["skill1", "skill2"],
      "techStack": ["tech1", "tech2"],
      "learningOutcomes": ["outcome1", "outcome2", "outcome3"]
    }}
  ]
}}

Make each project unique, creative, and directly relevant to the {role} role. Focus on projects that would impress in an interview."#,
        count = project_count,
        role = target_role,
        current = skills_or(current_skills, "Not specified"),
        missing = skills_or(missing_skills, "Various skills needed"),
    )
}

pub fn generation_request(
    config: &LlmConfig,
    target_role: &str,
    current_skills: Option<&[String]>,
    missing_skills: Option<&[String]>,
    project_count: u32,
) -> ChatCompletionRequest {
    ChatCompletionRequest {
        model: config.generation_model.clone(),
        messages: vec![
            ChatMessage::system(GENERATION_SYSTEM_PROMPT),
            ChatMessage::user(generation_user_prompt(
                target_role,
                current_skills,
                missing_skills,
                project_count,
            )),
        ],
        temperature: Some(config.generation_temperature),
        tools: None,
        tool_choice: None,
    }
}
