//! Input configuration

use serde::Deserialize;
use std::path::PathBuf;

use super::error::ValidationError;

/// Input configuration
#[derive(Debug, Clone, Deserialize, Default)]
pub struct InputConfig {
    /// YAML answers file for a non-interactive run
    pub answers_file: Option<PathBuf>,
}

impl InputConfig {
    /// Validate input configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        match &self.answers_file {
            Some(path) if !path.is_file() => Err(ValidationError::AnswersFileNotFound(
                path.display().to_string(),
            )),
            _ => Ok(()),
        }
    }
}
