//! Classification module - rule-based risk tiering.
//!
//! `RiskClassifier::classify` walks the ordered rule table in `rules` and
//! attaches the tier's fixed content from `ContentTable`.

mod classifier;
mod content;
mod deadline;
mod profile;
mod result;
mod rules;
mod tier;

pub use classifier::RiskClassifier;
pub use content::{ContentBundle, ContentTable};
pub use deadline::{regulatory_deadline, REGULATORY_DEADLINE};
pub use profile::{SystemProfile, HIGH_RISK_SERVICES};
pub use result::{RiskCategory, RiskResult};
pub use rules::{first_match, ClassificationRule, FALLBACK_RULE, RULES};
pub use tier::RiskTier;
