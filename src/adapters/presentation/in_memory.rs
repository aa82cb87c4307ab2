//! In-memory presentation sink for tests.
//!
//! Records everything the session pushes so tests can assert on the exact
//! sequence of rendering calls.
//!
//! # Panics
//!
//! Methods panic if the internal lock is poisoned. This adapter is meant
//! for tests and should not back a real UI.

use std::sync::RwLock;

use crate::domain::classification::RiskResult;
use crate::domain::questionnaire::{ProgressIndicator, ValidationNotice};
use crate::ports::{PresentationSink, SinkError};

/// One call received by the sink.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SinkEvent {
    Progress(ProgressIndicator),
    Notice(Option<String>),
    Result(RiskResult),
    ScrollToTop,
}

/// Sink that stores every call.
pub struct RecordingSink {
    events: RwLock<Vec<SinkEvent>>,
    fail: bool,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self {
            events: RwLock::new(Vec::new()),
            fail: false,
        }
    }

    /// A sink that records calls but reports every one as failed.
    pub fn failing() -> Self {
        Self {
            events: RwLock::new(Vec::new()),
            fail: true,
        }
    }

    // === Test Helpers ===

    pub fn events(&self) -> Vec<SinkEvent> {
        self.events
            .read()
            .expect("RecordingSink: events lock poisoned")
            .clone()
    }

    pub fn results(&self) -> Vec<RiskResult> {
        self.events()
            .into_iter()
            .filter_map(|e| match e {
                SinkEvent::Result(result) => Some(result),
                _ => None,
            })
            .collect()
    }

    pub fn last_progress(&self) -> Option<ProgressIndicator> {
        self.events().into_iter().rev().find_map(|e| match e {
            SinkEvent::Progress(progress) => Some(progress),
            _ => None,
        })
    }

    /// Notice messages in order; `None` entries are dismissals.
    pub fn notices(&self) -> Vec<Option<String>> {
        self.events()
            .into_iter()
            .filter_map(|e| match e {
                SinkEvent::Notice(notice) => Some(notice),
                _ => None,
            })
            .collect()
    }

    pub fn scroll_count(&self) -> usize {
        self.events()
            .iter()
            .filter(|e| matches!(e, SinkEvent::ScrollToTop))
            .count()
    }

    pub fn clear(&self) {
        self.events
            .write()
            .expect("RecordingSink: events write lock poisoned")
            .clear();
    }

    fn record(&self, event: SinkEvent) -> Result<(), SinkError> {
        self.events
            .write()
            .expect("RecordingSink: events write lock poisoned")
            .push(event);
        if self.fail {
            Err(SinkError::Unavailable("recording sink set to fail".to_string()))
        } else {
            Ok(())
        }
    }
}

impl Default for RecordingSink {
    fn default() -> Self {
        Self::new()
    }
}

impl PresentationSink for RecordingSink {
    fn show_progress(&self, progress: &ProgressIndicator) -> Result<(), SinkError> {
        self.record(SinkEvent::Progress(*progress))
    }

    fn show_notice(&self, notice: Option<&ValidationNotice>) -> Result<(), SinkError> {
        self.record(SinkEvent::Notice(notice.map(|n| n.message.clone())))
    }

    fn show_result(&self, result: &RiskResult) -> Result<(), SinkError> {
        self.record(SinkEvent::Result(*result))
    }

    fn scroll_to_top(&self) -> Result<(), SinkError> {
        self.record(SinkEvent::ScrollToTop)
    }
}
