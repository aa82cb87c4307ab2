//! Questionnaire module - step navigation over the assessment form.
//!
//! # Key Types
//!
//! - `Step` - The four screens and their required fields
//! - `FormInputs` / `InputEvent` - Current control values and changes to them
//! - `AnswerSet` - Answers committed step by step
//! - `StepNavigator` - Validates, advances, retreats and resets
//! - `ProgressIndicator` - Per-step decoration derived from the current step
//! - `NoticeBoard` - At most one auto-dismissing validation notice

mod macros;

mod answers;
mod errors;
mod inputs;
mod navigator;
mod notice;
mod progress;
mod step;

pub use answers::{AiSystemType, AnswerSet, AutonomyLevel, OrganizationSize, Sector, Service};
pub use errors::NavigationError;
pub use inputs::{FormInputs, InputEvent};
pub use navigator::StepNavigator;
pub use notice::{NoticeBoard, ValidationNotice, DEFAULT_NOTICE_TTL_SECS};
pub use progress::{ProgressIndicator, ProgressStatus};
pub use step::{RequiredField, Step};
