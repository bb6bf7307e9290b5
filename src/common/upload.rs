// Multipart résumé upload shared by the extractor proxy and profile storage

use axum::extract::Multipart;
use bytes::Bytes;
use tracing::warn;

use super::error::ApiError;

/// Multipart field carrying the résumé
pub const RESUME_FIELD: &str = "resume";
/// Largest accepted résumé
pub const MAX_RESUME_BYTES: usize = 10 * 1024 * 1024;
/// Request body limit for résumé routes; leaves room for multipart framing
pub const RESUME_BODY_LIMIT: usize = MAX_RESUME_BYTES + 64 * 1024;

const DEFAULT_MIME: &str = "application/pdf";

#[derive(Debug, Clone)]
pub struct UploadedFile {
    pub file_name: String,
    pub mime_type: String,
    pub bytes: Bytes,
}

impl UploadedFile {
    /// Lower-cased extension from the client file name, `pdf` when absent
    pub fn extension(&self) -> String {
        std::path::Path::new(&self.file_name)
            .extension()
            .and_then(|e| e.to_str())
            .filter(|e| !e.is_empty() && e.chars().all(|c| c.is_ascii_alphanumeric()))
            .map(|e| e.to_ascii_lowercase())
            .unwrap_or_else(|| "pdf".to_string())
    }
}

/// Sniff the MIME type from content; PDF when unknown
pub fn sniff_mime(bytes: &[u8]) -> String {
    infer::get(bytes)
        .map(|kind| kind.mime_type().to_string())
        .unwrap_or_else(|| DEFAULT_MIME.to_string())
}

/// Read the `resume` field; other fields are skipped.
///
/// A missing or empty field is a validation error, as is a file over
/// [`MAX_RESUME_BYTES`].
pub async fn read_resume_field(multipart: &mut Multipart) -> Result<UploadedFile, ApiError> {
    while let Some(field) = multipart.next_field().await.map_err(|e| {
        warn!(error = %e, "Malformed multipart body");
        ApiError::ValidationError(format!("Invalid multipart body: {}", e.body_text()))
    })? {
        if field.name() != Some(RESUME_FIELD) {
            continue;
        }

        let file_name = field.file_name().unwrap_or("resume.pdf").to_string();
        let bytes = field.bytes().await.map_err(|e| {
            warn!(error = %e, "Failed to read resume field");
            ApiError::ValidationError("Resume file could not be read or is too large".to_string())
        })?;

        if bytes.is_empty() {
            break;
        }
        if bytes.len() > MAX_RESUME_BYTES {
            return Err(ApiError::ValidationError(format!(
                "Resume file must be at most {} MB",
                MAX_RESUME_BYTES / (1024 * 1024)
            )));
        }

        return Ok(UploadedFile {
            mime_type: sniff_mime(&bytes),
            file_name,
            bytes,
        });
    }

    Err(ApiError::ValidationError(
        "No resume file provided".to_string(),
    ))
}
