//! Error types for the domain layer.

use std::fmt;
use thiserror::Error;

/// Errors raised while checking questionnaire inputs.
///
/// `MissingRequired` is the only kind the navigator produces; it carries the
/// user-facing notice text. The other variants come from parsing raw control
/// values in the adapters and from state machine guards.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("{message}")]
    MissingRequired { field: String, message: String },

    #[error("Field '{field}' cannot be empty")]
    EmptyField { field: String },

    #[error("Field '{field}' does not accept '{value}'")]
    InvalidToken { field: String, value: String },

    #[error("Cannot transition from {from} to {to}")]
    InvalidTransition { from: String, to: String },
}

impl ValidationError {
    /// Creates a missing required field error with its user-facing message.
    pub fn missing_required(field: impl Into<String>, message: impl Into<String>) -> Self {
        ValidationError::MissingRequired {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Creates an empty field validation error.
    pub fn empty_field(field: impl Into<String>) -> Self {
        ValidationError::EmptyField { field: field.into() }
    }

    /// Creates an invalid token error for a value outside a fixed option set.
    pub fn invalid_token(field: impl Into<String>, value: impl Into<String>) -> Self {
        ValidationError::InvalidToken {
            field: field.into(),
            value: value.into(),
        }
    }

    /// Creates an invalid state transition error.
    pub fn invalid_transition(from: impl fmt::Debug, to: impl fmt::Debug) -> Self {
        ValidationError::InvalidTransition {
            from: format!("{:?}", from),
            to: format!("{:?}", to),
        }
    }

    /// Returns the field this error refers to, if any.
    pub fn field(&self) -> Option<&str> {
        match self {
            ValidationError::MissingRequired { field, .. }
            | ValidationError::EmptyField { field }
            | ValidationError::InvalidToken { field, .. } => Some(field),
            ValidationError::InvalidTransition { .. } => None,
        }
    }

    /// Returns the stable error code for this error.
    pub fn code(&self) -> ErrorCode {
        match self {
            ValidationError::MissingRequired { .. } => ErrorCode::MissingRequired,
            ValidationError::EmptyField { .. } => ErrorCode::EmptyField,
            ValidationError::InvalidToken { .. } => ErrorCode::InvalidToken,
            ValidationError::InvalidTransition { .. } => ErrorCode::InvalidStateTransition,
        }
    }
}

/// Error codes organized by category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // Validation errors
    MissingRequired,
    EmptyField,
    InvalidToken,

    // Navigation errors
    InvalidStateTransition,
    AtFirstStep,
    AtFinalStep,
    NotCurrentStep,

    // Presentation errors
    PresentationFailed,
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ErrorCode::MissingRequired => "MISSING_REQUIRED",
            ErrorCode::EmptyField => "EMPTY_FIELD",
            ErrorCode::InvalidToken => "INVALID_TOKEN",
            ErrorCode::InvalidStateTransition => "INVALID_STATE_TRANSITION",
            ErrorCode::AtFirstStep => "AT_FIRST_STEP",
            ErrorCode::AtFinalStep => "AT_FINAL_STEP",
            ErrorCode::NotCurrentStep => "NOT_CURRENT_STEP",
            ErrorCode::PresentationFailed => "PRESENTATION_FAILED",
        };
        write!(f, "{}", s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_required_displays_only_the_message() {
        let err = ValidationError::missing_required("sector", "Please select your primary sector.");
        assert_eq!(format!("{}", err), "Please select your primary sector.");
    }

    #[test]
    fn empty_field_displays_correctly() {
        let err = ValidationError::empty_field("organization_size");
        assert_eq!(format!("{}", err), "Field 'organization_size' cannot be empty");
    }

    #[test]
    fn invalid_token_displays_correctly() {
        let err = ValidationError::invalid_token("sector", "space");
        assert_eq!(format!("{}", err), "Field 'sector' does not accept 'space'");
    }

    #[test]
    fn invalid_transition_uses_debug_names() {
        let err = ValidationError::invalid_transition(1u8, 3u8);
        assert_eq!(format!("{}", err), "Cannot transition from 1 to 3");
        assert_eq!(err.field(), None);
    }

    #[test]
    fn codes_match_variants() {
        assert_eq!(
            ValidationError::missing_required("a", "b").code(),
            ErrorCode::MissingRequired
        );
        assert_eq!(ValidationError::empty_field("a").code(), ErrorCode::EmptyField);
        assert_eq!(
            ValidationError::invalid_token("a", "b").code(),
            ErrorCode::InvalidToken
        );
    }

    #[test]
    fn error_code_display_formats_correctly() {
        assert_eq!(format!("{}", ErrorCode::MissingRequired), "MISSING_REQUIRED");
        assert_eq!(format!("{}", ErrorCode::NotCurrentStep), "NOT_CURRENT_STEP");
    }
}
