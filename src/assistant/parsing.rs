// src/assistant/parsing.rs
//! Lenient decoding of model replies.
//!
//! Models wrap JSON in prose or markdown fences, so replies are scanned for
//! the first balanced JSON value instead of being parsed whole.

use serde::Deserialize;
use serde_json::Value;
use tracing::warn;

use super::models::ProjectIdea;
use crate::common::helpers::normalize_skill_list;
use crate::common::ApiError;
use crate::services::llm::Completion;

/// What a call site does when a reply cannot be decoded
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OnParseFailure {
    /// Answer with an empty result, logged at warn
    Empty,
    /// Surface `ApiError::ResponseParseError`
    Fail,
}

impl OnParseFailure {
    pub fn resolve<T: Default>(self, result: Result<T, String>, what: &str) -> Result<T, ApiError> {
        match (result, self) {
            (Ok(value), _) => Ok(value),
            (Err(reason), OnParseFailure::Empty) => {
                warn!(reason = %reason, what = %what, "Unparseable model reply, returning empty result");
                Ok(T::default())
            }
            (Err(reason), OnParseFailure::Fail) => {
                warn!(reason = %reason, what = %what, "Unparseable model reply");
                Err(ApiError::ResponseParseError(format!(
                    "Failed to parse AI response: {}",
                    reason
                )))
            }
        }
    }
}

/// Balanced block at the start of `text`, which must begin with `{` or `[`.
///
/// Brackets inside string literals are ignored. A value that never closes
/// yields `None`.
fn balanced_prefix(text: &str) -> Option<&str> {
    let mut depth = 0usize;
    let mut in_string = false;
    let mut escaped = false;

    for (offset, c) in text.char_indices() {
        if in_string {
            match c {
                _ if escaped => escaped = false,
                '\\' => escaped = true,
                '"' => in_string = false,
                _ => {}
            }
            continue;
        }

        match c {
            '"' => in_string = true,
            '{' | '[' => depth += 1,
            '}' | ']' => {
                depth = depth.saturating_sub(1);
                if depth == 0 {
                    return Some(&text[..offset + c.len_utf8()]);
                }
            }
            _ => {}
        }
    }

    None
}

/// First balanced `{...}` in `text`
pub fn find_json_object(text: &str) -> Option<&str> {
    let start = text.find('{')?;
    balanced_prefix(&text[start..])
}

/// Top-level JSON objects and arrays in `text`, in order of appearance.
///
/// Bracketed prose such as `[Python, SQL]` is not valid JSON and is skipped,
/// as is anything that never closes. Values nested inside a yielded value are
/// not yielded again.
pub fn json_values(text: &str) -> impl Iterator<Item = Value> + '_ {
    let mut pos = 0;
    std::iter::from_fn(move || {
        while let Some(offset) = text[pos..].find(|c: char| c == '{' || c == '[') {
            let start = pos + offset;
            if let Some(block) = balanced_prefix(&text[start..]) {
                if let Ok(value) = serde_json::from_str::<Value>(block) {
                    pos = start + block.len();
                    return Some(value);
                }
            }
            pos = start + 1;
        }
        None
    })
}

#[derive(Deserialize)]
struct SkillsPayload {
    #[serde(default)]
    skills: Vec<String>,
}

/// Skills from an extraction reply: tool-call arguments first, then the
/// first JSON object in the free-text content.
pub fn parse_skills(completion: &Completion) -> Result<Vec<String>, String> {
    if let Some(arguments) = &completion.tool_arguments {
        let payload: SkillsPayload = serde_json::from_str(arguments)
            .map_err(|e| format!("invalid tool arguments: {}", e))?;
        return Ok(normalize_skill_list(payload.skills));
    }

    let content = match completion.content.as_deref() {
        Some(c) if !c.trim().is_empty() => c,
        _ => return Ok(Vec::new()),
    };

    let block = find_json_object(content).ok_or("no JSON object in content")?;
    let payload: SkillsPayload =
        serde_json::from_str(block).map_err(|e| format!("invalid JSON in content: {}", e))?;
    Ok(normalize_skill_list(payload.skills))
}

/// Project ideas from a generation reply: the `projects` array of the first
/// JSON object, or a bare top-level array when the reply holds no object
pub fn parse_projects(completion: &Completion) -> Result<Vec<ProjectIdea>, String> {
    let content = completion
        .content
        .as_deref()
        .filter(|c| !c.trim().is_empty())
        .ok_or("no content in AI response")?;

    let values: Vec<Value> = json_values(content).collect();

    // an object wins over any array; a bare array is the fallback
    let projects = match values.iter().find_map(Value::as_object) {
        Some(object) => object
            .get("projects")
            .filter(|v| v.is_array())
            .cloned()
            .ok_or("response object has no projects array")?,
        None => values
            .into_iter()
            .find(Value::is_array)
            .ok_or("no JSON found in response")?,
    };

    serde_json::from_value(projects).map_err(|e| format!("invalid project idea: {}", e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assistant::models::Difficulty;

    fn content(text: &str) -> Completion {
        Completion {
            content: Some(text.to_string()),
            tool_arguments: None,
        }
    }

    const IDEA: &str = r#"{"title":"Stream Lab","description":"Kafka pipeline.","difficulty":"intermediate","estimatedTime":"2-3 weeks","skillsToLearn":["Kafka"],"techStack":["Kafka","Python"],"learningOutcomes":["Backpressure"]}"#;

    #[test]
    fn test_find_json_object_skips_prose_and_fences() {
        let text = "Sure! Here you go:\n```json\n{\"skills\": [\"Rust\"]}\n```\nAnything else?";
        assert_eq!(find_json_object(text), Some("{\"skills\": [\"Rust\"]}"));
    }

    #[test]
    fn test_find_json_object_ignores_braces_in_strings() {
        let text = r#"{"a": "curly } brace", "b": "quote \" and {"} trailing }"#;
        assert_eq!(
            find_json_object(text),
            Some(r#"{"a": "curly } brace", "b": "quote \" and {"}"#)
        );
    }

    #[test]
    fn test_find_json_object_stops_at_first_object() {
        let text = r#"{"skills":["A"]} and also {"skills":["B"]}"#;
        assert_eq!(find_json_object(text), Some(r#"{"skills":["A"]}"#));
    }

    #[test]
    fn test_find_json_object_unbalanced() {
        assert_eq!(find_json_object("{\"skills\": [\"Rust\""), None);
        assert_eq!(find_json_object("no json here"), None);
        assert_eq!(find_json_object("[1, 2]"), None);
    }

    #[test]
    fn test_json_values_skip_bracketed_prose() {
        let text = r#"Skills [Python, SQL] give [1, [2]] then {"a": [3]} and {"b": 4"#;
        let values: Vec<Value> = json_values(text).collect();
        assert_eq!(values, vec![serde_json::json!([1, [2]]), serde_json::json!({"a": [3]})]);
    }

    #[test]
    fn test_parse_skills_prefers_tool_arguments() {
        let completion = Completion {
            content: Some("{\"skills\": [\"Ignored\"]}".to_string()),
            tool_arguments: Some("{\"skills\": [\"Rust\", \" rust \", \"\", \"Docker\"]}".to_string()),
        };
        assert_eq!(
            parse_skills(&completion).unwrap(),
            vec!["Rust".to_string(), "Docker".to_string()]
        );
    }

    #[test]
    fn test_parse_skills_falls_back_to_content() {
        let completion = content("I found: {\"skills\": [\"Go\", \"gRPC\"]}");
        assert_eq!(
            parse_skills(&completion).unwrap(),
            vec!["Go".to_string(), "gRPC".to_string()]
        );
    }

    #[test]
    fn test_parse_skills_unparseable_content_is_an_error() {
        assert!(parse_skills(&content("The resume lists Python and SQL.")).is_err());
        assert!(parse_skills(&content("{\"skills\": \"Python\"}")).is_err());
    }

    #[test]
    fn test_malformed_tool_arguments_resolve_to_empty_list() {
        let completion = Completion {
            content: Some("{\"skills\": [\"Ignored\"]}".to_string()),
            tool_arguments: Some("{\"skills\": [\"Rust\"".to_string()),
        };
        let parsed = parse_skills(&completion);
        assert!(parsed.is_err());
        assert_eq!(
            OnParseFailure::Empty.resolve(parsed, "skills").unwrap(),
            Vec::<String>::new()
        );
    }

    #[test]
    fn test_parse_skills_without_any_payload_is_empty() {
        assert_eq!(parse_skills(&Completion::default()).unwrap(), Vec::<String>::new());
    }

    #[test]
    fn test_parse_projects_object_and_bare_array() {
        let wrapped = content(&format!("```json\n{{\"projects\": [{}]}}\n```", IDEA));
        let projects = parse_projects(&wrapped).unwrap();
        assert_eq!(projects.len(), 1);
        assert_eq!(projects[0].difficulty, Difficulty::Intermediate);
        assert_eq!(projects[0].tech_stack, vec!["Kafka", "Python"]);

        let bare = content(&format!("[{}, {}]", IDEA, IDEA));
        assert_eq!(parse_projects(&bare).unwrap().len(), 2);
    }

    #[test]
    fn test_parse_projects_ignores_bracketed_prose_before_object() {
        let reply = content(&format!(
            "Based on your skills [Python, SQL], here you go: {{\"projects\": [{}]}}",
            IDEA
        ));
        let projects = parse_projects(&reply).unwrap();
        assert_eq!(projects.len(), 1);
        assert_eq!(projects[0].title, "Stream Lab");

        let bare = content(&format!("You know [Python, SQL]. Try these: [{}]", IDEA));
        assert_eq!(parse_projects(&bare).unwrap().len(), 1);
    }

    #[test]
    fn test_parse_projects_missing_lists_default_to_empty() {
        let reply = content(
            r#"{"projects":[{"title":"T","description":"D","difficulty":"beginner"}]}"#,
        );
        let projects = parse_projects(&reply).unwrap();
        assert!(projects[0].skills_to_learn.is_empty());
        assert!(projects[0].learning_outcomes.is_empty());
    }

    #[test]
    fn test_parse_projects_failures() {
        assert!(parse_projects(&Completion::default()).is_err());
        assert!(parse_projects(&content("Here are some ideas: build a blog")).is_err());
        assert!(parse_projects(&content(r#"{"ideas": []}"#)).is_err());
        assert!(parse_projects(&content(r#"{"ideas": []} and [1, 2]"#)).is_err());
        assert!(parse_projects(&content(r#"{"projects": ["#)).is_err());
        assert!(parse_projects(&content(
            r#"{"projects":[{"title":"T","description":"D","difficulty":"expert"}]}"#
        ))
        .is_err());
    }

    #[test]
    fn test_policy_resolution() {
        let failed: Result<Vec<String>, String> = Err("bad".to_string());
        assert_eq!(
            OnParseFailure::Empty.resolve(failed.clone(), "skills").unwrap(),
            Vec::<String>::new()
        );

        let err = OnParseFailure::Fail.resolve(failed, "projects").unwrap_err();
        assert_eq!(err.code(), "RESPONSE_PARSE_ERROR");
    }
}
