//! CLI argument validation utilities

use crate::core::validation::{validate_non_empty_path, ValidationError};

use super::args::Args;

impl Args {
    /// Validate CLI arguments for consistency and constraints
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.validate_paths()?;
        self.validate_output_mode()?;
        Ok(())
    }

    fn validate_paths(&self) -> Result<(), ValidationError> {
        if let Some(output) = &self.output {
            validate_non_empty_path("--output", output)?;
        }
        if let Some(repository) = &self.repository {
            validate_non_empty_path("--repo", repository)?;
        }
        if let Some(base_dir) = &self.base_dir {
            validate_non_empty_path("--base-dir", base_dir)?;
        }
        if let Some(template) = &self.template {
            validate_non_empty_path("--template", template)?;
            if !template.is_file() {
                return Err(ValidationError::new(&format!(
                    "Template file does not exist: '{}'",
                    template.display()
                )));
            }
        }
        Ok(())
    }

    fn validate_output_mode(&self) -> Result<(), ValidationError> {
        if self.stdout {
            return Ok(());
        }
        if let Some(output) = &self.output {
            if output.is_dir() {
                return Err(ValidationError::new(&format!(
                    "Output path is a directory: '{}'",
                    output.display()
                )));
            }
        }
        Ok(())
    }
}
