//! Validation notice configuration

use serde::Deserialize;

use super::error::ValidationError;
use crate::domain::questionnaire::DEFAULT_NOTICE_TTL_SECS;

/// Validation notice configuration
#[derive(Debug, Clone, Deserialize)]
pub struct NoticeConfig {
    /// Seconds a validation notice stays visible
    #[serde(default = "default_ttl")]
    pub ttl_secs: u64,
}

impl NoticeConfig {
    /// Validate notice configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.ttl_secs == 0 || self.ttl_secs > 60 {
            return Err(ValidationError::InvalidNoticeTtl);
        }
        Ok(())
    }
}

impl Default for NoticeConfig {
    fn default() -> Self {
        Self {
            ttl_secs: default_ttl(),
        }
    }
}

fn default_ttl() -> u64 {
    DEFAULT_NOTICE_TTL_SECS
}
