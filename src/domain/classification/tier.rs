//! Risk tier definitions.

use serde::{Deserialize, Serialize};

/// Ordinal risk tier; `High > Limited > Minimal`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskTier {
    Minimal,
    Limited,
    High,
}

impl RiskTier {
    /// Every tier, least severe first.
    pub const ALL: [RiskTier; 3] = [RiskTier::Minimal, RiskTier::Limited, RiskTier::High];

    /// Returns the token used for style selection.
    pub fn token(&self) -> &'static str {
        match self {
            RiskTier::Minimal => "minimal",
            RiskTier::Limited => "limited",
            RiskTier::High => "high",
        }
    }

    /// Looks up a tier by its token.
    pub fn from_token(token: &str) -> Option<RiskTier> {
        Self::ALL.iter().copied().find(|t| t.token() == token)
    }

    /// Returns the display name shown on the result badge.
    pub fn display_name(&self) -> &'static str {
        match self {
            RiskTier::Minimal => "Minimal Risk",
            RiskTier::Limited => "Limited Risk",
            RiskTier::High => "High Risk",
        }
    }
}

impl std::fmt::Display for RiskTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}
