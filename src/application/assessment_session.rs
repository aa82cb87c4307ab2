//! AssessmentSession - one user's pass through the questionnaire.
//!
//! Owns the navigator and the notice board, turns UI events into navigator
//! calls, runs the classifier when the result step is reached, and pushes
//! everything the user should see through the presentation sink.

use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::domain::classification::{RiskClassifier, RiskResult};
use crate::domain::foundation::AssessmentId;
use crate::domain::questionnaire::{
    AnswerSet, InputEvent, NavigationError, NoticeBoard, ProgressIndicator, Step,
    StepNavigator, ValidationNotice, DEFAULT_NOTICE_TTL_SECS,
};
use crate::ports::{Clock, PresentationSink, SinkError};

/// Session state plus its output handles.
pub struct AssessmentSession {
    id: AssessmentId,
    navigator: StepNavigator,
    notices: NoticeBoard,
    result: Option<RiskResult>,
    sink: Arc<dyn PresentationSink>,
    clock: Arc<dyn Clock>,
}

impl AssessmentSession {
    pub fn new(sink: Arc<dyn PresentationSink>, clock: Arc<dyn Clock>) -> Self {
        Self::with_notice_ttl(sink, clock, DEFAULT_NOTICE_TTL_SECS)
    }

    pub fn with_notice_ttl(
        sink: Arc<dyn PresentationSink>,
        clock: Arc<dyn Clock>,
        notice_ttl_secs: u64,
    ) -> Self {
        Self {
            id: AssessmentId::new(),
            navigator: StepNavigator::new(),
            notices: NoticeBoard::new(notice_ttl_secs),
            result: None,
            sink,
            clock,
        }
    }

    pub fn id(&self) -> AssessmentId {
        self.id
    }

    pub fn current_step(&self) -> Step {
        self.navigator.current_step()
    }

    pub fn answers(&self) -> &AnswerSet {
        self.navigator.answers()
    }

    pub fn progress(&self) -> ProgressIndicator {
        self.navigator.progress()
    }

    /// The latest classification, present only while on the result step.
    pub fn result(&self) -> Option<&RiskResult> {
        self.result.as_ref()
    }

    pub fn visible_notice(&self) -> Option<&ValidationNotice> {
        self.notices.visible(&self.clock.now())
    }

    /// Renders the initial progress bar.
    pub fn start(&self) {
        info!(assessment_id = %self.id, "Assessment started");
        report(&self.id, "show_progress", self.sink.show_progress(&self.progress()));
    }

    /// Records a control change on the current form.
    pub fn record_input(&mut self, event: InputEvent) {
        debug!(assessment_id = %self.id, ?event, "Input recorded");
        self.navigator.record_input(event);
    }

    /// Moves forward from `step`.
    ///
    /// A missing required field raises a notice and leaves the session
    /// unchanged. Reaching the result step runs the classifier.
    pub fn next(&mut self, step: Step) -> Result<Step, NavigationError> {
        match self.navigator.advance(step) {
            Ok(next) => {
                self.dismiss_notice();
                if next == Step::Result {
                    self.classify();
                }
                self.after_step_change();
                Ok(next)
            }
            Err(err) => {
                self.refuse(step, &err);
                Err(err)
            }
        }
    }

    /// Moves back from `step` without touching committed answers.
    pub fn back(&mut self, step: Step) -> Result<Step, NavigationError> {
        match self.navigator.retreat(step) {
            Ok(previous) => {
                self.result = None;
                self.dismiss_notice();
                self.after_step_change();
                Ok(previous)
            }
            Err(err) => {
                self.refuse(step, &err);
                Err(err)
            }
        }
    }

    /// Enter-key submission: advances from any step except the result.
    pub fn submit(&mut self, step: Step) -> Result<Step, NavigationError> {
        if step == Step::Result {
            return Ok(self.current_step());
        }
        self.next(step)
    }

    /// Starts over with an empty form.
    pub fn restart(&mut self) {
        self.navigator.reset();
        self.result = None;
        self.dismiss_notice();
        info!(assessment_id = %self.id, "Assessment restarted");
        self.after_step_change();
    }

    /// Dismisses the notice once its display time is over.
    ///
    /// Returns true if a notice was dismissed.
    pub fn tick(&mut self) -> bool {
        match self.notices.expire(&self.clock.now()) {
            Some(expired) => {
                debug!(assessment_id = %self.id, message = %expired.message, "Notice expired");
                report(&self.id, "show_notice", self.sink.show_notice(None));
                true
            }
            None => false,
        }
    }

    fn classify(&mut self) {
        match RiskClassifier::classify_answers(self.navigator.answers()) {
            Some(result) => {
                info!(
                    assessment_id = %self.id,
                    tier = result.tier.token(),
                    category = result.category_label(),
                    rule = result.rule,
                    "Assessment classified"
                );
                report(&self.id, "show_result", self.sink.show_result(&result));
                self.result = Some(result);
            }
            None => {
                warn!(assessment_id = %self.id, "Result step reached without system characteristics");
            }
        }
    }

    fn refuse(&mut self, step: Step, err: &NavigationError) {
        debug!(assessment_id = %self.id, step = step.number(), code = %err.code(), "Step change refused");
        if let Some(message) = err.notice_message() {
            let notice = self.notices.raise(message, self.clock.now());
            report(&self.id, "show_notice", self.sink.show_notice(Some(notice)));
        }
    }

    fn dismiss_notice(&mut self) {
        if self.notices.clear().is_some() {
            report(&self.id, "show_notice", self.sink.show_notice(None));
        }
    }

    fn after_step_change(&self) {
        report(&self.id, "show_progress", self.sink.show_progress(&self.progress()));
        report(&self.id, "scroll_to_top", self.sink.scroll_to_top());
    }
}

fn report(id: &AssessmentId, call: &'static str, outcome: Result<(), SinkError>) {
    if let Err(err) = outcome {
        warn!(assessment_id = %id, call, error = %err, "Presentation sink failed");
    }
}
