//! Domain layer containing the assessment logic.
//!
//! # Module Organization
//!
//! - `foundation` - Shared primitives (ids, timestamps, state machine, errors)
//! - `questionnaire` - Steps, form inputs, answers and the step navigator
//! - `classification` - Ordered rule table, risk tiers and tier content

pub mod classification;
pub mod foundation;
pub mod questionnaire;
