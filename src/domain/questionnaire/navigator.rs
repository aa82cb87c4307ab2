//! StepNavigator - owns the current step, the form and the committed answers.

use tracing::debug;

use super::answers::AnswerSet;
use super::errors::NavigationError;
use super::inputs::{FormInputs, InputEvent};
use super::progress::ProgressIndicator;
use super::step::Step;
use crate::domain::foundation::{StateMachine, ValidationError};

/// State machine over the questionnaire steps.
///
/// Every failed operation leaves the step, the form and the answers
/// untouched.
#[derive(Debug, Clone, Default)]
pub struct StepNavigator {
    current: Step,
    inputs: FormInputs,
    answers: AnswerSet,
}

impl StepNavigator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current_step(&self) -> Step {
        self.current
    }

    pub fn answers(&self) -> &AnswerSet {
        &self.answers
    }

    pub fn inputs(&self) -> &FormInputs {
        &self.inputs
    }

    pub fn progress(&self) -> ProgressIndicator {
        ProgressIndicator::at(self.current)
    }

    /// Records a change to one of the form controls.
    pub fn record_input(&mut self, event: InputEvent) {
        self.inputs.apply(event);
    }

    /// Checks the required fields of `step` against the current form.
    pub fn validate(&self, step: Step) -> Result<(), ValidationError> {
        step.validate(&self.inputs)
    }

    /// Commits `step`'s answers and moves to the following step.
    ///
    /// # Errors
    ///
    /// - `NotCurrentStep` if `step` is not the active step
    /// - `AtFinalStep` on the result screen
    /// - `Validation` if a required field of `step` is missing
    pub fn advance(&mut self, step: Step) -> Result<Step, NavigationError> {
        self.ensure_current(step)?;
        let next = step.next().ok_or(NavigationError::AtFinalStep(step))?;
        self.validate(step)?;
        let next = self.current.transition_to(next)?;

        self.answers.commit(step, &self.inputs);
        self.current = next;
        debug!(from = step.number(), to = next.number(), "Advanced step");
        Ok(next)
    }

    /// Moves back one step without re-validating or erasing answers.
    ///
    /// # Errors
    ///
    /// - `NotCurrentStep` if `step` is not the active step
    /// - `AtFirstStep` on step 1
    pub fn retreat(&mut self, step: Step) -> Result<Step, NavigationError> {
        self.ensure_current(step)?;
        let previous = step.previous().ok_or(NavigationError::AtFirstStep)?;
        let previous = self.current.transition_to(previous)?;

        self.current = previous;
        debug!(from = step.number(), to = previous.number(), "Retreated step");
        Ok(previous)
    }

    /// Clears answers and form values and returns to step 1.
    pub fn reset(&mut self) {
        self.answers = AnswerSet::new();
        self.inputs.clear();
        self.current = Step::first();
        debug!("Navigator reset");
    }

    fn ensure_current(&self, step: Step) -> Result<(), NavigationError> {
        if step == self.current {
            Ok(())
        } else {
            Err(NavigationError::NotCurrentStep {
                requested: step,
                current: self.current,
            })
        }
    }
}
