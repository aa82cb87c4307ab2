//! RiskResult - the outcome of one classification.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::content::ContentBundle;
use super::tier::RiskTier;

/// Human-readable category decided together with the tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskCategory {
    ProhibitedPractice,
    HighRiskSystem,
    LimitedRiskTransparency,
    LimitedRisk,
    MinimalRisk,
    MinimalRiskPreventive,
}

impl RiskCategory {
    pub fn label(&self) -> &'static str {
        match self {
            RiskCategory::ProhibitedPractice => "Prohibited Practice or High Risk",
            RiskCategory::HighRiskSystem => "High-Risk AI System",
            RiskCategory::LimitedRiskTransparency => "Limited Risk (Transparency Required)",
            RiskCategory::LimitedRisk => "Limited Risk",
            RiskCategory::MinimalRisk => "Minimal Risk",
            RiskCategory::MinimalRiskPreventive => "Minimal Risk (Preventive)",
        }
    }
}

impl fmt::Display for RiskCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Immutable classification outcome.
///
/// `content` depends on `tier` alone; `rule` names the rule that matched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RiskResult {
    pub tier: RiskTier,
    pub category: RiskCategory,
    pub rule: &'static str,
    pub content: &'static ContentBundle,
}

impl RiskResult {
    /// Category label as shown to the user.
    pub fn category_label(&self) -> &'static str {
        self.category.label()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_labels_match_result_screen() {
        assert_eq!(RiskCategory::HighRiskSystem.to_string(), "High-Risk AI System");
        assert_eq!(
            RiskCategory::LimitedRiskTransparency.label(),
            "Limited Risk (Transparency Required)"
        );
        assert_eq!(
            RiskCategory::MinimalRiskPreventive.label(),
            "Minimal Risk (Preventive)"
        );
    }

    #[test]
    fn category_serializes_snake_case() {
        assert_eq!(
            serde_json::to_string(&RiskCategory::ProhibitedPractice).unwrap(),
            "\"prohibited_practice\""
        );
    }
}
