//! Answer tokens and the per-session AnswerSet.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

use super::inputs::FormInputs;
use super::macros::answer_options;
use super::step::Step;
use crate::domain::classification::SystemProfile;
use crate::domain::foundation::ValidationError;

/// Organization size as selected in the size dropdown.
///
/// Kept as a free token: the classifier never looks at it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct OrganizationSize(String);

impl OrganizationSize {
    /// Parses a dropdown value; blank values are rejected.
    pub fn parse(raw: impl AsRef<str>) -> Result<Self, ValidationError> {
        let value = raw.as_ref().trim();
        if value.is_empty() {
            return Err(ValidationError::empty_field("organization_size"));
        }
        Ok(Self(value.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for OrganizationSize {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

impl From<OrganizationSize> for String {
    fn from(size: OrganizationSize) -> Self {
        size.0
    }
}

impl fmt::Display for OrganizationSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

answer_options! {
    /// Primary business sector (single choice).
    Sector, field = "sector" {
        Finance => ("finance", "Finance & banking"),
        Insurance => ("insurance", "Insurance"),
        Healthcare => ("healthcare", "Healthcare"),
        Legal => ("legal", "Legal services"),
        PublicSector => ("public-sector", "Public sector"),
        Education => ("education", "Education"),
        Manufacturing => ("manufacturing", "Manufacturing"),
        Retail => ("retail", "Retail & e-commerce"),
        Technology => ("technology", "Technology"),
        Other => ("other", "Other"),
    }
}

answer_options! {
    /// AI-backed services the organization uses or offers (multiple choice).
    Service, field = "services" {
        Biometric => ("biometric", "Biometric identification or categorisation"),
        AutomatedDecision => ("automated-decision", "Automated decisions about individuals"),
        RiskAssessment => ("risk-assessment", "Credit, insurance or access risk assessment"),
        ContentGeneration => ("content-generation", "Text, image or media generation"),
        CustomerSupport => ("customer-support", "Chatbots and customer support"),
        DataAnalytics => ("data-analytics", "Data analytics and forecasting"),
        DocumentProcessing => ("document-processing", "Document processing"),
        Recommendation => ("recommendation", "Recommendation engines"),
    }
}

answer_options! {
    /// Category of the AI system in use.
    AiSystemType, field = "ai_system_type" {
        None => ("none", "No AI system yet"),
        General => ("general", "General-purpose AI tools"),
        Specialized => ("specialized", "Specialized or custom AI system"),
        Prohibited => ("prohibited", "Social scoring, manipulation or other prohibited practice"),
    }
}

answer_options! {
    /// How much the AI system decides without a human.
    AutonomyLevel, field = "autonomy_level" {
        Advisory => ("advisory", "Advisory only, humans decide"),
        HumanReview => ("human-review", "Outputs reviewed by a human before use"),
        Automated => ("automated", "Fully automated decisions"),
    }
}

/// All questionnaire answers committed so far in one session.
///
/// Only [`StepNavigator`](super::StepNavigator) writes to it, one step's
/// fields at a time, when that step is advanced.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnswerSet {
    organization_size: Option<OrganizationSize>,
    sector: Option<Sector>,
    services: BTreeSet<Service>,
    ai_system_type: Option<AiSystemType>,
    autonomy_level: Option<AutonomyLevel>,
}

impl AnswerSet {
    /// Creates an empty answer set.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn organization_size(&self) -> Option<&OrganizationSize> {
        self.organization_size.as_ref()
    }

    pub fn sector(&self) -> Option<Sector> {
        self.sector
    }

    pub fn services(&self) -> &BTreeSet<Service> {
        &self.services
    }

    pub fn ai_system_type(&self) -> Option<AiSystemType> {
        self.ai_system_type
    }

    pub fn autonomy_level(&self) -> Option<AutonomyLevel> {
        self.autonomy_level
    }

    /// Returns true if nothing has been committed yet.
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Returns the classifier input, available once step 3 has been committed.
    pub fn system_profile(&self) -> Option<SystemProfile> {
        Some(SystemProfile::new(
            self.ai_system_type?,
            self.autonomy_level?,
            self.services.iter().copied(),
        ))
    }

    /// Copies the fields owned by `step` from the form into the answer set.
    ///
    /// Fields belonging to other steps are left untouched.
    pub(crate) fn commit(&mut self, step: Step, inputs: &FormInputs) {
        match step {
            Step::OrganizationProfile => {
                self.organization_size = inputs.organization_size().cloned();
                self.sector = inputs.sector();
            }
            Step::ServiceInventory => {
                self.services = inputs.services().clone();
            }
            Step::SystemCharacteristics => {
                self.ai_system_type = inputs.ai_system_type();
                self.autonomy_level = inputs.autonomy_level();
            }
            Step::Result => {}
        }
    }
}
