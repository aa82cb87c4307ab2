//! Non-interactive answers loaded from a YAML file.
//!
//! ```yaml
//! organization_size: sme
//! sector: finance
//! services: [biometric, data-analytics]
//! ai_system_type: specialized
//! autonomy_level: automated
//! ```

use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;
use tracing::info;

use crate::application::AssessmentSession;
use crate::domain::classification::RiskResult;
use crate::domain::questionnaire::{
    AiSystemType, AutonomyLevel, InputEvent, NavigationError, Sector, Service, Step,
};

#[derive(Debug, Error)]
pub enum AnswersFileError {
    #[error("Failed to read answers file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid answers file: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

/// Every questionnaire control, as a file.
///
/// Missing values are left blank so that the usual required-field notice
/// stops the run at the step that needs them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AnswersFile {
    pub organization_size: Option<String>,
    pub sector: Option<Sector>,
    #[serde(default)]
    pub services: Vec<Service>,
    pub ai_system_type: Option<AiSystemType>,
    pub autonomy_level: Option<AutonomyLevel>,
}

impl AnswersFile {
    pub fn load(path: impl AsRef<Path>) -> Result<Self, AnswersFileError> {
        let raw = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&raw)
    }

    pub fn from_yaml_str(raw: &str) -> Result<Self, AnswersFileError> {
        Ok(serde_yaml::from_str(raw)?)
    }

    /// The control changes a user would make to enter these answers.
    pub fn input_events(&self) -> Vec<InputEvent> {
        let mut events = Vec::new();
        if let Some(size) = &self.organization_size {
            events.push(InputEvent::organization_size(size));
        }
        events.extend(self.sector.map(InputEvent::Sector));
        events.extend(self.services.iter().map(|s| InputEvent::service(*s, true)));
        events.extend(self.ai_system_type.map(InputEvent::AiSystemType));
        events.extend(self.autonomy_level.map(InputEvent::AutonomyLevel));
        events
    }

    /// Fills in the form and presses Next until the result step.
    ///
    /// # Errors
    ///
    /// Returns the first refused step change; the session keeps the notice.
    pub fn run(&self, session: &mut AssessmentSession) -> Result<Option<RiskResult>, NavigationError> {
        for event in self.input_events() {
            session.record_input(event);
        }
        while session.current_step() != Step::Result {
            session.next(session.current_step())?;
        }
        info!(assessment_id = %session.id(), "Answers file replayed");
        Ok(session.result().copied())
    }
}
