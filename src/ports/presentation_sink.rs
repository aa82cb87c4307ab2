//! PresentationSink port - Output-only interface to the rendering layer.
//!
//! The assessment core never draws anything itself. It pushes progress,
//! notices, scroll directives and results through this port; adapters
//! decide how (or whether) to show them.

use thiserror::Error;

use crate::domain::classification::RiskResult;
use crate::domain::foundation::ErrorCode;
use crate::domain::questionnaire::{ProgressIndicator, ValidationNotice};

/// Errors a sink may report while rendering.
///
/// The session logs them and carries on; they never change assessment state.
#[derive(Debug, Error)]
pub enum SinkError {
    #[error("Failed to write output: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to encode output: {0}")]
    Encode(String),

    #[error("Output handle unavailable: {0}")]
    Unavailable(String),
}

impl SinkError {
    pub fn encode(err: impl std::fmt::Display) -> Self {
        SinkError::Encode(err.to_string())
    }

    pub fn code(&self) -> ErrorCode {
        ErrorCode::PresentationFailed
    }
}

/// Port for rendering assessment output.
///
/// Implementations must not call back into the session.
pub trait PresentationSink: Send + Sync {
    /// The current step changed (or the assessment started or was reset).
    fn show_progress(&self, progress: &ProgressIndicator) -> Result<(), SinkError>;

    /// A notice was raised, or `None` when the visible one was dismissed.
    fn show_notice(&self, notice: Option<&ValidationNotice>) -> Result<(), SinkError>;

    /// Classification finished.
    fn show_result(&self, result: &RiskResult) -> Result<(), SinkError>;

    /// Presentation directive issued after every successful step change.
    fn scroll_to_top(&self) -> Result<(), SinkError>;
}
