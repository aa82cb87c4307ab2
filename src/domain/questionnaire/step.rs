//! Step - the four screens of the assessment and their ordering.
//!
//! # Step Order
//!
//! 1. OrganizationProfile → 2. ServiceInventory → 3. SystemCharacteristics →
//! 4. Result
//!
//! Steps 1 and 3 carry required fields; step 2 and the result screen do not.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::inputs::FormInputs;
use crate::domain::foundation::{StateMachine, ValidationError};

/// One screen of the questionnaire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Step {
    OrganizationProfile,
    ServiceInventory,
    SystemCharacteristics,
    Result,
}

/// A field that must hold a value before its step can be left forwards.
#[derive(Clone, Copy)]
pub struct RequiredField {
    pub field: &'static str,
    pub message: &'static str,
    present: fn(&FormInputs) -> bool,
}

impl RequiredField {
    /// Returns true if the form currently holds a value for this field.
    pub fn is_present(&self, inputs: &FormInputs) -> bool {
        (self.present)(inputs)
    }
}

impl fmt::Debug for RequiredField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RequiredField")
            .field("field", &self.field)
            .field("message", &self.message)
            .finish_non_exhaustive()
    }
}

const ORGANIZATION_PROFILE_FIELDS: &[RequiredField] = &[
    RequiredField {
        field: "organization_size",
        message: "Please select your organization size.",
        present: |inputs| inputs.organization_size().is_some(),
    },
    RequiredField {
        field: "sector",
        message: "Please select your primary sector.",
        present: |inputs| inputs.sector().is_some(),
    },
];

const SYSTEM_CHARACTERISTICS_FIELDS: &[RequiredField] = &[
    RequiredField {
        field: "ai_system_type",
        message: "Please specify your AI system category.",
        present: |inputs| inputs.ai_system_type().is_some(),
    },
    RequiredField {
        field: "autonomy_level",
        message: "Please specify the decision-making autonomy level.",
        present: |inputs| inputs.autonomy_level().is_some(),
    },
];

impl Step {
    /// The canonical order of steps.
    pub const ORDER: [Step; 4] = [
        Step::OrganizationProfile,
        Step::ServiceInventory,
        Step::SystemCharacteristics,
        Step::Result,
    ];

    /// Number of steps in the questionnaire.
    pub const COUNT: usize = Self::ORDER.len();

    /// Returns all steps in order.
    pub fn all() -> &'static [Step; 4] {
        &Self::ORDER
    }

    /// Returns the first step.
    pub fn first() -> Step {
        Step::OrganizationProfile
    }

    /// Returns the 1-based step number shown to the user.
    pub fn number(&self) -> u8 {
        match self {
            Step::OrganizationProfile => 1,
            Step::ServiceInventory => 2,
            Step::SystemCharacteristics => 3,
            Step::Result => 4,
        }
    }

    /// Looks up a step by its 1-based number.
    pub fn from_number(number: u8) -> Option<Step> {
        Self::ORDER.iter().copied().find(|s| s.number() == number)
    }

    /// Returns the next step, or None on the result screen.
    pub fn next(&self) -> Option<Step> {
        Step::from_number(self.number() + 1)
    }

    /// Returns the previous step, or None on the first step.
    pub fn previous(&self) -> Option<Step> {
        self.number().checked_sub(1).and_then(Step::from_number)
    }

    /// Returns true if this step comes before `other`.
    pub fn is_before(&self, other: Step) -> bool {
        self.number() < other.number()
    }

    /// Returns the screen heading.
    pub fn title(&self) -> &'static str {
        match self {
            Step::OrganizationProfile => "Organization profile",
            Step::ServiceInventory => "AI services in use",
            Step::SystemCharacteristics => "AI system characteristics",
            Step::Result => "Risk assessment result",
        }
    }

    /// Required fields in the order they are checked.
    pub fn required_fields(&self) -> &'static [RequiredField] {
        match self {
            Step::OrganizationProfile => ORGANIZATION_PROFILE_FIELDS,
            Step::SystemCharacteristics => SYSTEM_CHARACTERISTICS_FIELDS,
            Step::ServiceInventory | Step::Result => &[],
        }
    }

    /// Checks the form against this step's required fields.
    ///
    /// Reports only the first missing field.
    pub fn validate(&self, inputs: &FormInputs) -> Result<(), ValidationError> {
        match self
            .required_fields()
            .iter()
            .find(|required| !required.is_present(inputs))
        {
            Some(missing) => Err(ValidationError::missing_required(
                missing.field,
                missing.message,
            )),
            None => Ok(()),
        }
    }
}

impl StateMachine for Step {
    fn can_transition_to(&self, target: &Self) -> bool {
        self.next() == Some(*target) || self.previous() == Some(*target)
    }
}

impl Default for Step {
    fn default() -> Self {
        Step::first()
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "step {} ({})", self.number(), self.title())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::questionnaire::{AiSystemType, InputEvent, Sector};

    #[test]
    fn numbers_follow_order() {
        for (idx, step) in Step::all().iter().enumerate() {
            assert_eq!(step.number() as usize, idx + 1);
            assert_eq!(Step::from_number(step.number()), Some(*step));
        }
        assert_eq!(Step::from_number(0), None);
        assert_eq!(Step::from_number(5), None);
    }

    #[test]
    fn next_and_previous_stop_at_the_ends() {
        assert_eq!(Step::OrganizationProfile.previous(), None);
        assert_eq!(Step::OrganizationProfile.next(), Some(Step::ServiceInventory));
        assert_eq!(Step::Result.next(), None);
        assert_eq!(Step::Result.previous(), Some(Step::SystemCharacteristics));
    }

    #[test]
    fn transitions_only_move_one_step() {
        assert!(Step::ServiceInventory.can_transition_to(&Step::SystemCharacteristics));
        assert!(Step::ServiceInventory.can_transition_to(&Step::OrganizationProfile));
        assert!(!Step::OrganizationProfile.can_transition_to(&Step::Result));
        assert!(Step::OrganizationProfile
            .transition_to(Step::SystemCharacteristics)
            .is_err());
    }

    #[test]
    fn step_one_reports_size_before_sector() {
        let inputs = FormInputs::default();
        let err = Step::OrganizationProfile.validate(&inputs).unwrap_err();
        assert_eq!(err.to_string(), "Please select your organization size.");
    }

    #[test]
    fn step_one_reports_missing_sector() {
        let mut inputs = FormInputs::default();
        inputs.apply(InputEvent::organization_size("sme"));
        let err = Step::OrganizationProfile.validate(&inputs).unwrap_err();
        assert_eq!(err.to_string(), "Please select your primary sector.");
        assert_eq!(err.field(), Some("sector"));

        inputs.apply(InputEvent::Sector(Sector::Finance));
        assert!(Step::OrganizationProfile.validate(&inputs).is_ok());
    }

    #[test]
    fn step_three_reports_missing_autonomy() {
        let mut inputs = FormInputs::default();
        assert_eq!(
            Step::SystemCharacteristics.validate(&inputs).unwrap_err().to_string(),
            "Please specify your AI system category."
        );
        inputs.apply(InputEvent::AiSystemType(AiSystemType::General));
        assert_eq!(
            Step::SystemCharacteristics.validate(&inputs).unwrap_err().to_string(),
            "Please specify the decision-making autonomy level."
        );
    }

    #[test]
    fn service_step_and_result_have_no_rules() {
        let inputs = FormInputs::default();
        assert!(Step::ServiceInventory.validate(&inputs).is_ok());
        assert!(Step::Result.validate(&inputs).is_ok());
    }

    #[test]
    fn display_includes_number_and_title() {
        assert_eq!(
            Step::ServiceInventory.to_string(),
            "step 2 (AI services in use)"
        );
    }
}
