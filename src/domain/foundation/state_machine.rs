//! State machine trait for step-like enums.
//!
//! Gives the questionnaire steps (and anything else with a fixed set of
//! legal moves) one shape for checking and performing transitions.

use super::ValidationError;

/// Trait for enums that represent state machines.
///
/// Implementors define which moves are legal and get a checked
/// `transition_to` for free.
///
/// # Example
///
/// ```ignore
/// impl StateMachine for Step {
///     fn can_transition_to(&self, target: &Self) -> bool {
///         self.next() == Some(*target) || self.previous() == Some(*target)
///     }
/// }
///
/// let step = Step::OrganizationProfile.transition_to(Step::ServiceInventory)?;
/// ```
pub trait StateMachine: Sized + Copy + PartialEq + std::fmt::Debug {
    /// Returns true if transition from self to target is valid.
    fn can_transition_to(&self, target: &Self) -> bool;

    /// Performs transition with validation, returning error if invalid.
    fn transition_to(&self, target: Self) -> Result<Self, ValidationError> {
        if self.can_transition_to(&target) {
            Ok(target)
        } else {
            Err(ValidationError::invalid_transition(self, target))
        }
    }
}
