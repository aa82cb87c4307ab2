//! Navigation error types.

use thiserror::Error;

use super::step::Step;
use crate::domain::foundation::{ErrorCode, ValidationError};

/// Reasons a step transition was refused.
///
/// In every case the navigator state is left exactly as it was.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NavigationError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("Already at the first step")]
    AtFirstStep,

    #[error("No step follows {0}")]
    AtFinalStep(Step),

    #[error("Cannot act on {requested} while on {current}")]
    NotCurrentStep { requested: Step, current: Step },
}

impl NavigationError {
    pub fn code(&self) -> ErrorCode {
        match self {
            NavigationError::Validation(err) => err.code(),
            NavigationError::AtFirstStep => ErrorCode::AtFirstStep,
            NavigationError::AtFinalStep(_) => ErrorCode::AtFinalStep,
            NavigationError::NotCurrentStep { .. } => ErrorCode::NotCurrentStep,
        }
    }

    /// Returns the user-facing notice text for missing required fields.
    pub fn notice_message(&self) -> Option<String> {
        match self {
            NavigationError::Validation(err @ ValidationError::MissingRequired { .. }) => {
                Some(err.to_string())
            }
            _ => None,
        }
    }
}
