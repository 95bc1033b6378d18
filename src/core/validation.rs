//! Validation error shared by argument parsing and configuration loading

use crate::core::error_handling::ContextualError;

/// A user-facing validation failure (bad flag value, malformed config file)
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct ValidationError {
    message: String,
}

impl ValidationError {
    pub fn new(message: &str) -> Self {
        Self {
            message: message.to_string(),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl ContextualError for ValidationError {
    fn is_user_actionable(&self) -> bool {
        true
    }

    fn user_message(&self) -> Option<&str> {
        Some(&self.message)
    }
}

/// Reject empty or whitespace-only path values
pub fn validate_non_empty_path(
    option: &str,
    path: &std::path::Path,
) -> Result<(), ValidationError> {
    if path.as_os_str().is_empty() || path.to_string_lossy().trim().is_empty() {
        return Err(ValidationError::new(&format!(
            "Option {} must not be empty",
            option
        )));
    }
    Ok(())
}
