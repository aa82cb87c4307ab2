//! Fixed explanatory content shown for each risk tier.

use serde::Serialize;

use super::tier::RiskTier;

/// The four-part explanation attached to a tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ContentBundle {
    pub legal_text: &'static str,
    pub obligations: &'static [&'static str],
    pub governance_text: &'static str,
    pub strategic_text: &'static str,
}

static MINIMAL: ContentBundle = ContentBundle {
    legal_text: "Your AI deployment falls under the minimal risk category per Article 6 of \
        Regulation (EU) 2024/1689. You are not subject to high-risk system obligations but \
        must comply with basic transparency requirements (Article 52) if utilizing chatbots \
        or AI-generated content.",
    obligations: &[
        "Transparency obligations regarding AI interaction (chatbots, deepfakes)",
        "Copyright and training data compliance",
        "Internal AI usage documentation",
        "Regulatory monitoring for future amendments",
    ],
    governance_text: "Low governance exposure. No conformity assessment required. However, \
        management must ensure AI usage remains within this category and does not migrate to \
        high-risk applications without board authorization.",
    strategic_text: "Recommended: Utilize this period to establish voluntary ethical \
        governance. Anticipate regulatory evolution through process documentation. This is \
        the optimal window to structure AI policy before obligations intensify.",
};

static LIMITED: ContentBundle = ContentBundle {
    legal_text: "Your exposure is classified as limited risk (Article 52). You likely utilize \
        General Purpose AI (GPAI) or specialized tools with human oversight. Transparency \
        obligations apply, particularly regarding user notification and documentation of \
        system capabilities and limitations.",
    obligations: &[
        "Clear notification to users regarding AI interaction",
        "Technical documentation of deployed systems",
        "Labeling of AI-generated content (deepfakes, text)",
        "Implementation of effective human oversight",
        "Fundamental rights impact assessment",
    ],
    governance_text: "Moderate board-level exposure. Management must validate use cases and \
        ensure traceability. A compliance officer should be designated, even formally. AI \
        tool procurement requires systematic legal review.",
    strategic_text: "Structuring opportunity. You are positioned where proactive governance \
        investment becomes competitive advantage. Clients increasingly demand compliance \
        evidence. Structure now to avoid urgent compliance costs later.",
};

static HIGH: ContentBundle = ContentBundle {
    legal_text: "REGULATORY ALERT: You are likely subject to high-risk AI systems (Article 6 \
        and Annex III). This includes biometric systems, risk assessments for access to \
        essential services, or automated decision-making with significant legal impact. \
        Strict pre-market obligations apply.",
    obligations: &[
        "Conformity assessment mandatory prior to deployment",
        "Quality management and documentation system",
        "Meaningful human oversight (human-in-the-loop)",
        "Transparency and information provision to users",
        "Registration in EU AI database",
        "Incident management and non-conformity remediation",
        "Log retention minimum 6 months",
    ],
    governance_text: "CRITICAL BOARD-LEVEL EXPOSURE. Directors face personal liability for \
        non-compliance. Mandatory robust governance system with compliance officer, regular \
        internal audits, and mandatory quarterly board review. Civil liability exposure is \
        significant.",
    strategic_text: "IMMEDIATE ACTION REQUIRED. You must allocate significant resources for \
        compliance before August 2026. Non-compliance exposes to penalties up to 7% global \
        turnover. However, demonstrable compliance becomes major competitive advantage \
        against unprepared competitors.",
};

/// Lookup table from tier to content.
pub struct ContentTable;

impl ContentTable {
    /// Returns the bundle for a tier.
    pub fn for_tier(tier: RiskTier) -> &'static ContentBundle {
        match tier {
            RiskTier::Minimal => &MINIMAL,
            RiskTier::Limited => &LIMITED,
            RiskTier::High => &HIGH,
        }
    }

    /// Returns the bundle for a tier token; unknown tokens get the minimal entry.
    pub fn for_token(token: &str) -> &'static ContentBundle {
        Self::for_tier(RiskTier::from_token(token).unwrap_or(RiskTier::Minimal))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_tier_has_distinct_content() {
        assert_ne!(ContentTable::for_tier(RiskTier::Minimal), ContentTable::for_tier(RiskTier::Limited));
        assert_ne!(ContentTable::for_tier(RiskTier::Limited), ContentTable::for_tier(RiskTier::High));
    }

    #[test]
    fn obligation_counts_match_severity() {
        assert_eq!(ContentTable::for_tier(RiskTier::Minimal).obligations.len(), 4);
        assert_eq!(ContentTable::for_tier(RiskTier::Limited).obligations.len(), 5);
        assert_eq!(ContentTable::for_tier(RiskTier::High).obligations.len(), 7);
    }

    #[test]
    fn obligations_keep_their_order() {
        let high = ContentTable::for_tier(RiskTier::High);
        assert_eq!(high.obligations[0], "Conformity assessment mandatory prior to deployment");
        assert_eq!(high.obligations[6], "Log retention minimum 6 months");
    }

    #[test]
    fn unknown_token_falls_back_to_minimal() {
        assert_eq!(ContentTable::for_token("catastrophic"), ContentTable::for_tier(RiskTier::Minimal));
        assert_eq!(ContentTable::for_token("high"), ContentTable::for_tier(RiskTier::High));
    }

    #[test]
    fn line_continuations_leave_single_spaces() {
        let legal = ContentTable::for_tier(RiskTier::Minimal).legal_text;
        assert!(!legal.contains("  "));
        assert!(legal.starts_with("Your AI deployment falls under the minimal risk category"));
    }
}
