// Error handling types for the API

use axum::{http::StatusCode, response::IntoResponse, Json};
use serde::Serialize;
use std::fmt;
use tracing::error;

use super::validation::ValidationResult;
use crate::services::llm::LlmError;
use crate::services::pdf::PdfError;

/// API error types
#[derive(Debug)]
pub enum ApiError {
    Unauthorized(String),
    NotFound(String),
    InternalServer(String),
    LlmNotConfigured(String),
    ValidationError(String),
    UpstreamRateLimited(String),
    UpstreamPaymentRequired(String),
    UpstreamGatewayError(String),
    ResponseParseError(String),
    StorageError(sqlx::Error),
    FileStorageError(std::io::Error),
    ExportError(String),
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Unauthorized(msg) => write!(f, "Unauthorized: {}", msg),
            ApiError::NotFound(msg) => write!(f, "Not Found: {}", msg),
            ApiError::InternalServer(msg) => write!(f, "Internal Server Error: {}", msg),
            ApiError::LlmNotConfigured(msg) => write!(f, "LLM Not Configured: {}", msg),
            ApiError::ValidationError(msg) => write!(f, "Validation Error: {}", msg),
            ApiError::UpstreamRateLimited(msg) => write!(f, "Upstream Rate Limited: {}", msg),
            ApiError::UpstreamPaymentRequired(msg) => {
                write!(f, "Upstream Payment Required: {}", msg)
            }
            ApiError::UpstreamGatewayError(msg) => write!(f, "Upstream Gateway Error: {}", msg),
            ApiError::ResponseParseError(msg) => write!(f, "Response Parse Error: {}", msg),
            ApiError::StorageError(e) => write!(f, "Storage Error: {}", e),
            ApiError::FileStorageError(e) => write!(f, "File Storage Error: {}", e),
            ApiError::ExportError(msg) => write!(f, "Export Error: {}", msg),
        }
    }
}

/// JSON error response structure
#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: String,
}

impl ApiError {
    /// Machine-checkable identifier sent as `code` in the JSON body
    pub fn code(&self) -> &'static str {
        match self {
            ApiError::Unauthorized(_) => "UNAUTHORIZED",
            ApiError::NotFound(_) => "NOT_FOUND",
            ApiError::InternalServer(_) => "INTERNAL_SERVER_ERROR",
            ApiError::LlmNotConfigured(_) => "LLM_NOT_CONFIGURED",
            ApiError::ValidationError(_) => "VALIDATION_ERROR",
            ApiError::UpstreamRateLimited(_) => "UPSTREAM_RATE_LIMITED",
            ApiError::UpstreamPaymentRequired(_) => "UPSTREAM_PAYMENT_REQUIRED",
            ApiError::UpstreamGatewayError(_) => "UPSTREAM_GATEWAY_ERROR",
            ApiError::ResponseParseError(_) => "RESPONSE_PARSE_ERROR",
            ApiError::StorageError(_) | ApiError::FileStorageError(_) => "STORAGE_ERROR",
            ApiError::ExportError(_) => "EXPORT_ERROR",
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            ApiError::ValidationError(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::LlmNotConfigured(_) => StatusCode::SERVICE_UNAVAILABLE,
            ApiError::UpstreamRateLimited(_) => StatusCode::TOO_MANY_REQUESTS,
            ApiError::UpstreamPaymentRequired(_) => StatusCode::PAYMENT_REQUIRED,
            ApiError::InternalServer(_)
            | ApiError::UpstreamGatewayError(_)
            | ApiError::ResponseParseError(_)
            | ApiError::StorageError(_)
            | ApiError::FileStorageError(_)
            | ApiError::ExportError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        let status = self.status();
        let code = self.code();

        let error_message = match self {
            ApiError::StorageError(e) => {
                error!(error = %e, "Database error occurred");
                "Storage operation failed".to_string()
            }
            ApiError::FileStorageError(e) => {
                error!(error = %e, "File storage error occurred");
                "Storage operation failed".to_string()
            }
            ApiError::Unauthorized(msg)
            | ApiError::NotFound(msg)
            | ApiError::InternalServer(msg)
            | ApiError::LlmNotConfigured(msg)
            | ApiError::ValidationError(msg)
            | ApiError::UpstreamRateLimited(msg)
            | ApiError::UpstreamPaymentRequired(msg)
            | ApiError::UpstreamGatewayError(msg)
            | ApiError::ResponseParseError(msg)
            | ApiError::ExportError(msg) => msg,
        };

        let error_response = ErrorResponse {
            error: error_message,
            code: code.to_string(),
        };

        (status, Json(error_response)).into_response()
    }
}

impl From<sqlx::Error> for ApiError {
    fn from(e: sqlx::Error) -> Self {
        ApiError::StorageError(e)
    }
}

impl From<LlmError> for ApiError {
    fn from(e: LlmError) -> Self {
        match e {
            LlmError::NotConfigured => {
                ApiError::LlmNotConfigured("LLM API key is not configured".to_string())
            }
            LlmError::RateLimited => ApiError::UpstreamRateLimited(
                "Rate limit exceeded. Please try again later.".to_string(),
            ),
            LlmError::PaymentRequired => ApiError::UpstreamPaymentRequired(
                "AI credits exhausted. Please add credits to continue.".to_string(),
            ),
            LlmError::Gateway { status, .. } => {
                ApiError::UpstreamGatewayError(format!("AI gateway error: {}", status))
            }
            LlmError::Transport(msg) => {
                ApiError::UpstreamGatewayError(format!("AI gateway unreachable: {}", msg))
            }
            LlmError::InvalidResponse(msg) => ApiError::ResponseParseError(msg),
        }
    }
}

impl From<PdfError> for ApiError {
    fn from(e: PdfError) -> Self {
        ApiError::ExportError(e.to_string())
    }
}

/// Helper function to convert ValidationResult to ApiError
impl From<ValidationResult> for ApiError {
    fn from(result: ValidationResult) -> Self {
        if result.is_valid {
            ApiError::InternalServer(
                "Validation result was valid but converted to error".to_string(),
            )
        } else {
            let error_messages: Vec<String> = result
                .errors
                .iter()
                .map(|e| format!("{}: {}", e.field, e.message))
                .collect();
            ApiError::ValidationError(error_messages.join(", "))
        }
    }
}
