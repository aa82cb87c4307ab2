//! RiskClassifier - pure mapping from answers to a RiskResult.

use tracing::debug;

use super::content::ContentTable;
use super::profile::SystemProfile;
use super::result::RiskResult;
use super::rules::{first_match, ClassificationRule};
use crate::domain::questionnaire::AnswerSet;

/// Stateless classifier over the rule table.
pub struct RiskClassifier;

impl RiskClassifier {
    /// Classifies a profile. Total: the fallback rule covers every input.
    pub fn classify(profile: &SystemProfile) -> RiskResult {
        let rule = Self::matching_rule(profile);
        debug!(rule = rule.name, tier = rule.tier.token(), "Classified system profile");
        RiskResult {
            tier: rule.tier,
            category: rule.category,
            rule: rule.name,
            content: ContentTable::for_tier(rule.tier),
        }
    }

    /// Classifies committed answers, or returns None before step 3 is committed.
    pub fn classify_answers(answers: &AnswerSet) -> Option<RiskResult> {
        answers.system_profile().map(|profile| Self::classify(&profile))
    }

    /// Returns the rule that decides this profile.
    pub fn matching_rule(profile: &SystemProfile) -> &'static ClassificationRule {
        first_match(profile)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::classification::{RiskCategory, RiskTier};
    use crate::domain::questionnaire::{AiSystemType, AutonomyLevel, Service};

    fn classify(
        ai: AiSystemType,
        autonomy: AutonomyLevel,
        services: &[Service],
    ) -> RiskResult {
        RiskClassifier::classify(&SystemProfile::new(ai, autonomy, services.iter().copied()))
    }

    #[test]
    fn no_ai_system_is_preventive_minimal() {
        let result = classify(AiSystemType::None, AutonomyLevel::HumanReview, &[]);
        assert_eq!(result.tier, RiskTier::Minimal);
        assert_eq!(result.category, RiskCategory::MinimalRiskPreventive);
    }

    #[test]
    fn automated_biometric_is_high_risk_via_rule_two() {
        let result = classify(
            AiSystemType::Specialized,
            AutonomyLevel::Automated,
            &[Service::Biometric],
        );
        assert_eq!(result.tier, RiskTier::High);
        assert_eq!(result.category, RiskCategory::HighRiskSystem);
        assert_eq!(result.rule, "automated-high-risk-service");
    }

    #[test]
    fn automated_content_generation_requires_transparency() {
        let result = classify(
            AiSystemType::General,
            AutonomyLevel::Automated,
            &[Service::ContentGeneration],
        );
        assert_eq!(result.tier, RiskTier::Limited);
        assert_eq!(result.category_label(), "Limited Risk (Transparency Required)");
    }

    #[test]
    fn prohibited_short_circuits_everything() {
        for autonomy in AutonomyLevel::all() {
            let result = classify(
                AiSystemType::Prohibited,
                *autonomy,
                &[Service::Biometric, Service::ContentGeneration],
            );
            assert_eq!(result.tier, RiskTier::High);
            assert_eq!(result.category_label(), "Prohibited Practice or High Risk");
        }
    }

    #[test]
    fn rule_two_beats_rule_five() {
        // specialized + high-risk service + automated matches both
        let result = classify(
            AiSystemType::Specialized,
            AutonomyLevel::Automated,
            &[Service::RiskAssessment, Service::DataAnalytics, Service::Recommendation],
        );
        assert_eq!(result.rule, "automated-high-risk-service");
        assert_eq!(result.tier, RiskTier::High);
    }

    #[test]
    fn supervised_high_risk_service_is_still_high() {
        let result = classify(
            AiSystemType::General,
            AutonomyLevel::Advisory,
            &[Service::AutomatedDecision],
        );
        assert_eq!(result.tier, RiskTier::High);
        assert_eq!(result.rule, "high-risk-service-or-automated-specialized");
    }

    #[test]
    fn more_than_two_services_is_limited() {
        let result = classify(
            AiSystemType::General,
            AutonomyLevel::HumanReview,
            &[Service::CustomerSupport, Service::DataAnalytics, Service::Recommendation],
        );
        assert_eq!(result.tier, RiskTier::Limited);
        assert_eq!(result.category, RiskCategory::LimitedRisk);
    }

    #[test]
    fn supervised_general_purpose_is_minimal() {
        let result = classify(
            AiSystemType::General,
            AutonomyLevel::Advisory,
            &[Service::CustomerSupport],
        );
        assert_eq!(result.category, RiskCategory::MinimalRisk);
    }

    #[test]
    fn automated_general_purpose_falls_back_to_limited() {
        let result = classify(AiSystemType::General, AutonomyLevel::Automated, &[]);
        assert_eq!(result.rule, "fallback");
        assert_eq!(result.tier, RiskTier::Limited);
    }

    #[test]
    fn content_follows_tier_only() {
        let transparency = classify(
            AiSystemType::General,
            AutonomyLevel::Automated,
            &[Service::ContentGeneration],
        );
        let fallback = classify(AiSystemType::General, AutonomyLevel::Automated, &[]);
        assert_ne!(transparency.category, fallback.category);
        assert_eq!(transparency.content, fallback.content);
    }

    #[test]
    fn classify_answers_needs_step_three() {
        assert!(RiskClassifier::classify_answers(&AnswerSet::new()).is_none());
    }
}
