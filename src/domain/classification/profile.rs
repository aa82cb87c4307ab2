//! SystemProfile - the answers the classifier actually reads.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use crate::domain::questionnaire::{AiSystemType, AutonomyLevel, Service};

/// Services that on their own place a system in the high-risk tier.
pub const HIGH_RISK_SERVICES: [Service; 3] = [
    Service::Biometric,
    Service::AutomatedDecision,
    Service::RiskAssessment,
];

/// Classifier input.
///
/// Only constructible with an AI system type and an autonomy level, so a
/// profile always satisfies the classifier's preconditions.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SystemProfile {
    ai_system_type: AiSystemType,
    autonomy_level: AutonomyLevel,
    services: BTreeSet<Service>,
}

impl SystemProfile {
    pub fn new(
        ai_system_type: AiSystemType,
        autonomy_level: AutonomyLevel,
        services: impl IntoIterator<Item = Service>,
    ) -> Self {
        Self {
            ai_system_type,
            autonomy_level,
            services: services.into_iter().collect(),
        }
    }

    pub fn ai_system_type(&self) -> AiSystemType {
        self.ai_system_type
    }

    pub fn autonomy_level(&self) -> AutonomyLevel {
        self.autonomy_level
    }

    pub fn services(&self) -> &BTreeSet<Service> {
        &self.services
    }

    pub fn uses(&self, service: Service) -> bool {
        self.services.contains(&service)
    }

    /// True if any selected service is in [`HIGH_RISK_SERVICES`].
    pub fn has_high_risk_service(&self) -> bool {
        HIGH_RISK_SERVICES.iter().any(|s| self.uses(*s))
    }

    pub fn is_automated(&self) -> bool {
        self.autonomy_level == AutonomyLevel::Automated
    }
}
