// src/services/llm.rs
//! Chat-completions client for the LLM gateway.
//!
//! Upstream failures are classified, never retried: 429 and 402 keep their
//! own variants, every other non-2xx status is a gateway error.

use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};
use std::env;
use tracing::{debug, error, info};

const DEFAULT_BASE_URL: &str = "https://ai.gateway.lovable.dev";
const DEFAULT_EXTRACTION_MODEL: &str = "google/gemini-2.5-flash";
const DEFAULT_GENERATION_MODEL: &str = "google/gemini-3-flash-preview";
const DEFAULT_GENERATION_TEMPERATURE: f32 = 0.8;
const REQUEST_TIMEOUT_SECS: u64 = 180;

#[derive(Debug, thiserror::Error)]
pub enum LlmError {
    #[error("LLM API key not configured")]
    NotConfigured,

    #[error("Upstream rate limit exceeded")]
    RateLimited,

    #[error("Upstream payment required")]
    PaymentRequired,

    #[error("Upstream gateway error: HTTP {status}")]
    Gateway { status: u16, body: String },

    #[error("Upstream request failed: {0}")]
    Transport(String),

    #[error("Invalid upstream response: {0}")]
    InvalidResponse(String),
}

#[derive(Debug, Clone)]
pub struct LlmConfig {
    pub api_key: Option<String>,
    pub base_url: String,
    pub extraction_model: String,
    pub generation_model: String,
    pub generation_temperature: f32,
}

impl Default for LlmConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: DEFAULT_BASE_URL.to_string(),
            extraction_model: DEFAULT_EXTRACTION_MODEL.to_string(),
            generation_model: DEFAULT_GENERATION_MODEL.to_string(),
            generation_temperature: DEFAULT_GENERATION_TEMPERATURE,
        }
    }
}

impl LlmConfig {
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            api_key: env::var("LLM_API_KEY").ok().filter(|k| !k.trim().is_empty()),
            base_url: env::var("LLM_BASE_URL").unwrap_or(defaults.base_url),
            extraction_model: env::var("LLM_MODEL_EXTRACTION")
                .unwrap_or(defaults.extraction_model),
            generation_model: env::var("LLM_MODEL_GENERATION")
                .unwrap_or(defaults.generation_model),
            generation_temperature: env::var("LLM_GENERATION_TEMPERATURE")
                .ok()
                .and_then(|t| t.parse().ok())
                .unwrap_or(defaults.generation_temperature),
        }
    }
}

// ============================================================================
// Wire types
// ============================================================================

#[derive(Debug, Clone, Serialize)]
pub struct ChatCompletionRequest {
    pub model: String,
    pub messages: Vec<ChatMessage>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tools: Option<Vec<Tool>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tool_choice: Option<serde_json::Value>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ChatMessage {
    pub role: String,
    pub content: MessageContent,
}

impl ChatMessage {
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: "system".to_string(),
            content: MessageContent::Text(content.into()),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: "user".to_string(),
            content: MessageContent::Text(content.into()),
        }
    }

    pub fn user_parts(parts: Vec<ContentPart>) -> Self {
        Self {
            role: "user".to_string(),
            content: MessageContent::Parts(parts),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum MessageContent {
    Text(String),
    Parts(Vec<ContentPart>),
}

#[derive(Debug, Clone, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ContentPart {
    Text { text: String },
    File { file: FileData },
}

#[derive(Debug, Clone, Serialize)]
pub struct FileData {
    pub filename: String,
    /// `data:<mime>;base64,<payload>`
    pub file_data: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct Tool {
    #[serde(rename = "type")]
    pub tool_type: String,
    pub function: FunctionDefinition,
}

#[derive(Debug, Clone, Serialize)]
pub struct FunctionDefinition {
    pub name: String,
    pub description: String,
    pub parameters: serde_json::Value,
}

impl Tool {
    pub fn function(name: &str, description: &str, parameters: serde_json::Value) -> Self {
        Self {
            tool_type: "function".to_string(),
            function: FunctionDefinition {
                name: name.to_string(),
                description: description.to_string(),
                parameters,
            },
        }
    }
}

#[derive(Debug, Deserialize)]
struct ChatCompletionResponse {
    #[serde(default)]
    choices: Vec<ChatChoice>,
    usage: Option<Usage>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ResponseMessage,
}

#[derive(Debug, Deserialize)]
struct ResponseMessage {
    content: Option<String>,
    tool_calls: Option<Vec<ToolCall>>,
}

#[derive(Debug, Deserialize)]
struct ToolCall {
    function: FunctionCall,
}

#[derive(Debug, Deserialize)]
struct FunctionCall {
    arguments: Option<String>,
}

#[derive(Debug, Deserialize)]
struct Usage {
    #[serde(default)]
    total_tokens: u32,
}

/// The first choice of a completion, reduced to what callers read
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Completion {
    pub content: Option<String>,
    /// Raw JSON arguments of the first tool call
    pub tool_arguments: Option<String>,
}

// ============================================================================
// Service
// ============================================================================

#[derive(Debug)]
pub struct LlmService {
    config: LlmConfig,
    client: Client,
}

impl LlmService {
    pub fn new(config: LlmConfig) -> Self {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()
            .unwrap_or_else(|_| Client::new());

        Self { config, client }
    }

    pub fn config(&self) -> &LlmConfig {
        &self.config
    }

    pub fn is_configured(&self) -> bool {
        self.config.api_key.is_some()
    }

    /// Send one chat-completions request
    pub async fn chat(&self, request: &ChatCompletionRequest) -> Result<Completion, LlmError> {
        let api_key = self
            .config
            .api_key
            .as_deref()
            .ok_or(LlmError::NotConfigured)?;

        let url = format!(
            "{}/v1/chat/completions",
            self.config.base_url.trim_end_matches('/')
        );

        debug!(
            model = %request.model,
            messages = request.messages.len(),
            tools = request.tools.as_ref().map(|t| t.len()).unwrap_or(0),
            "Sending LLM chat completion request"
        );

        let response = self
            .client
            .post(&url)
            .bearer_auth(api_key)
            .json(request)
            .send()
            .await
            .map_err(|e| {
                error!(error = %e, "LLM gateway unreachable");
                LlmError::Transport(e.to_string())
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(classify_failure(status, response.text().await.unwrap_or_default()));
        }

        let body = response
            .json::<ChatCompletionResponse>()
            .await
            .map_err(|e| LlmError::InvalidResponse(e.to_string()))?;

        if let Some(usage) = &body.usage {
            info!(
                model = %request.model,
                tokens_used = usage.total_tokens,
                "LLM chat completion finished"
            );
        }

        Ok(first_completion(body))
    }
}

fn classify_failure(status: StatusCode, body: String) -> LlmError {
    match status {
        StatusCode::TOO_MANY_REQUESTS => LlmError::RateLimited,
        StatusCode::PAYMENT_REQUIRED => LlmError::PaymentRequired,
        _ => {
            error!(status = %status, error = %body, "LLM gateway error");
            LlmError::Gateway {
                status: status.as_u16(),
                body,
            }
        }
    }
}

fn first_completion(body: ChatCompletionResponse) -> Completion {
    let Some(choice) = body.choices.into_iter().next() else {
        return Completion::default();
    };

    let tool_arguments = choice
        .message
        .tool_calls
        .and_then(|calls| calls.into_iter().next())
        .and_then(|call| call.function.arguments)
        .filter(|args| !args.trim().is_empty());

    Completion {
        content: choice.message.content,
        tool_arguments,
    }
}
