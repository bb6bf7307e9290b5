// Request validation types shared by the domain validators

use super::error::ApiError;

#[derive(Debug)]
pub struct ValidationError {
    pub field: String,
    pub message: String,
}

#[derive(Debug)]
pub struct ValidationResult {
    pub is_valid: bool,
    pub errors: Vec<ValidationError>,
}

impl ValidationResult {
    pub fn new() -> Self {
        Self {
            is_valid: true,
            errors: Vec::new(),
        }
    }

    pub fn add_error(&mut self, field: &str, message: &str) {
        self.is_valid = false;
        self.errors.push(ValidationError {
            field: field.to_string(),
            message: message.to_string(),
        });
    }

    /// Require a non-blank string no longer than `max_len` bytes
    pub fn check_text(&mut self, field: &str, value: &str, label: &str, max_len: usize) {
        if value.trim().is_empty() {
            self.add_error(field, &format!("{} is required", label));
        } else if value.len() > max_len {
            self.add_error(
                field,
                &format!("{} must be at most {} characters", label, max_len),
            );
        }
    }

    /// Turn an invalid result into an `ApiError::ValidationError`
    pub fn into_api_result(self) -> Result<(), ApiError> {
        if self.is_valid {
            Ok(())
        } else {
            Err(self.into())
        }
    }
}

impl Default for ValidationResult {
    fn default() -> Self {
        Self::new()
    }
}

pub trait Validator<T> {
    fn validate(&self, data: &T) -> ValidationResult;
}
