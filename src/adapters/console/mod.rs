//! Console adapters - terminal rendering and input.
//!
//! - `ConsoleRenderer` - `PresentationSink` writing text, JSON or YAML
//! - `ConsoleDriver` - Line-based interactive questionnaire
//! - `AnswersFile` - Scripted run from a YAML file
//! - `Countdown` - Time left before the regulatory deadline

mod answers_file;
mod countdown;
mod driver;
mod renderer;

pub use answers_file::{AnswersFile, AnswersFileError};
pub use countdown::Countdown;
pub use driver::{ConsoleDriver, DriverError, DriverOutcome};
pub use renderer::{ConsoleRenderer, ResultReport};
