//! Cached form control values and the events that change them.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use super::answers::{AiSystemType, AutonomyLevel, OrganizationSize, Sector, Service};

/// A change made by the user to one questionnaire control.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "control", content = "value", rename_all = "snake_case")]
pub enum InputEvent {
    /// Size dropdown; `None` is the empty placeholder option.
    OrganizationSize(Option<OrganizationSize>),
    Sector(Sector),
    Service { service: Service, checked: bool },
    AiSystemType(AiSystemType),
    AutonomyLevel(AutonomyLevel),
}

impl InputEvent {
    /// Checkbox toggle for one service.
    pub fn service(service: Service, checked: bool) -> Self {
        InputEvent::Service { service, checked }
    }

    /// Dropdown selection from a raw value; blank selects the placeholder.
    pub fn organization_size(raw: &str) -> Self {
        InputEvent::OrganizationSize(OrganizationSize::parse(raw).ok())
    }
}

/// Current values of every questionnaire control.
///
/// This is what validation looks at. Values only reach the
/// [`AnswerSet`](super::AnswerSet) when their step is advanced.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormInputs {
    organization_size: Option<OrganizationSize>,
    sector: Option<Sector>,
    services: BTreeSet<Service>,
    ai_system_type: Option<AiSystemType>,
    autonomy_level: Option<AutonomyLevel>,
}

impl FormInputs {
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

    /// Applies a control change.
    pub fn apply(&mut self, event: InputEvent) {
        match event {
            InputEvent::OrganizationSize(size) => self.organization_size = size,
            InputEvent::Sector(sector) => self.sector = Some(sector),
            InputEvent::Service { service, checked } => {
                if checked {
                    self.services.insert(service);
                } else {
                    self.services.remove(&service);
                }
            }
            InputEvent::AiSystemType(kind) => self.ai_system_type = Some(kind),
            InputEvent::AutonomyLevel(level) => self.autonomy_level = Some(level),
        }
    }

    /// Unchecks and deselects everything.
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}
