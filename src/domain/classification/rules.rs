//! Ordered classification rules.
//!
//! Rules are evaluated top to bottom and the first match decides the
//! outcome. The table is data so the precedence can be read and tested
//! directly; [`FALLBACK_RULE`] applies when nothing in [`RULES`] matches.
//!
//! Rule 3's service clause overlaps rule 2 only for automated systems; it
//! still catches high-risk services under human oversight.

use serde::Serialize;
use std::fmt;

use super::profile::SystemProfile;
use super::result::RiskCategory;
use super::tier::RiskTier;
use crate::domain::questionnaire::{AiSystemType, Service};

/// One entry in the rule table.
#[derive(Clone, Copy, Serialize)]
pub struct ClassificationRule {
    pub name: &'static str,
    pub tier: RiskTier,
    pub category: RiskCategory,
    #[serde(skip)]
    applies: fn(&SystemProfile) -> bool,
}

impl ClassificationRule {
    /// Returns true if this rule matches the profile.
    pub fn matches(&self, profile: &SystemProfile) -> bool {
        (self.applies)(profile)
    }
}

impl fmt::Debug for ClassificationRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClassificationRule")
            .field("name", &self.name)
            .field("tier", &self.tier)
            .field("category", &self.category)
            .finish_non_exhaustive()
    }
}

/// Rule table in precedence order.
pub static RULES: [ClassificationRule; 7] = [
    ClassificationRule {
        name: "prohibited-practice",
        tier: RiskTier::High,
        category: RiskCategory::ProhibitedPractice,
        applies: |p| p.ai_system_type() == AiSystemType::Prohibited,
    },
    ClassificationRule {
        name: "automated-high-risk-service",
        tier: RiskTier::High,
        category: RiskCategory::HighRiskSystem,
        applies: |p| p.has_high_risk_service() && p.is_automated(),
    },
    ClassificationRule {
        name: "high-risk-service-or-automated-specialized",
        tier: RiskTier::High,
        category: RiskCategory::HighRiskSystem,
        applies: |p| {
            p.has_high_risk_service()
                || (p.ai_system_type() == AiSystemType::Specialized && p.is_automated())
        },
    },
    ClassificationRule {
        name: "automated-content-generation",
        tier: RiskTier::Limited,
        category: RiskCategory::LimitedRiskTransparency,
        applies: |p| p.uses(Service::ContentGeneration) && p.is_automated(),
    },
    ClassificationRule {
        name: "specialized-or-broad-service-use",
        tier: RiskTier::Limited,
        category: RiskCategory::LimitedRisk,
        applies: |p| p.ai_system_type() == AiSystemType::Specialized || p.services().len() > 2,
    },
    ClassificationRule {
        name: "supervised-general-purpose",
        tier: RiskTier::Minimal,
        category: RiskCategory::MinimalRisk,
        applies: |p| p.ai_system_type() == AiSystemType::General && !p.is_automated(),
    },
    ClassificationRule {
        name: "no-ai-system",
        tier: RiskTier::Minimal,
        category: RiskCategory::MinimalRiskPreventive,
        applies: |p| p.ai_system_type() == AiSystemType::None,
    },
];

/// Outcome when no rule in [`RULES`] matches.
pub static FALLBACK_RULE: ClassificationRule = ClassificationRule {
    name: "fallback",
    tier: RiskTier::Limited,
    category: RiskCategory::LimitedRisk,
    applies: |_| true,
};

/// Returns the first matching rule, or the fallback.
pub fn first_match(profile: &SystemProfile) -> &'static ClassificationRule {
    RULES
        .iter()
        .find(|rule| rule.matches(profile))
        .unwrap_or(&FALLBACK_RULE)
}
