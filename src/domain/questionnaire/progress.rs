//! Progress indicator derived from the current step.

use serde::{Deserialize, Serialize};

use super::step::Step;

/// Decoration of one step in the progress bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ProgressStatus {
    #[default]
    Upcoming,
    Active,
    Completed,
}

/// Read-only snapshot of the progress bar.
///
/// Steps before the current one are completed, the current one is active,
/// and later ones carry no decoration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProgressIndicator {
    current: Step,
}

impl ProgressIndicator {
    /// Creates the indicator for the given current step.
    pub fn at(current: Step) -> Self {
        Self { current }
    }

    /// Returns the active step.
    pub fn current(&self) -> Step {
        self.current
    }

    /// Returns the decoration of a specific step.
    pub fn status(&self, step: Step) -> ProgressStatus {
        if step == self.current {
            ProgressStatus::Active
        } else if step.is_before(self.current) {
            ProgressStatus::Completed
        } else {
            ProgressStatus::Upcoming
        }
    }

    /// Returns every step with its decoration, in order.
    pub fn step_statuses(&self) -> Vec<(Step, ProgressStatus)> {
        Step::all().iter().map(|s| (*s, self.status(*s))).collect()
    }
}

impl Default for ProgressIndicator {
    fn default() -> Self {
        Self::at(Step::first())
    }
}
