//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the assessment core to the outside world:
//! - `clock` - Wall clock and a manually driven clock for tests
//! - `presentation` - Recording sink for tests
//! - `console` - Terminal renderer, interactive driver and answers file

mod clock;
pub mod console;
pub mod presentation;

pub use clock::{ManualClock, SystemClock};
pub use console::{
    AnswersFile, AnswersFileError, ConsoleDriver, ConsoleRenderer, Countdown, DriverError,
    DriverOutcome, ResultReport,
};
pub use presentation::{RecordingSink, SinkEvent};
