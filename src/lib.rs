//! AI Act Risk Assessment
//!
//! A step-by-step questionnaire that classifies an organization's use of AI
//! into the risk tiers of Regulation (EU) 2024/1689 and explains what each
//! tier means in legal, governance and strategic terms.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
