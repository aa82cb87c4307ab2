//! Application layer - Orchestration of one assessment session.
//!
//! Coordinates the questionnaire navigator, the classifier and the
//! presentation/clock ports.

mod assessment_session;

pub use assessment_session::AssessmentSession;
