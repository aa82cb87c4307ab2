//! Foundation module - Shared domain primitives.
//!
//! Contains value objects, identifiers, the state machine trait and the
//! error types that form the vocabulary of the assessment domain.

mod errors;
mod ids;
mod state_machine;
mod timestamp;

pub use errors::{ErrorCode, ValidationError};
pub use ids::AssessmentId;
pub use state_machine::StateMachine;
pub use timestamp::Timestamp;
