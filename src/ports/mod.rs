//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the assessment core and the outside world. Adapters implement these ports.
//!
//! - `PresentationSink` - Output-only rendering of progress, notices and results
//! - `Clock` - Current time for notice expiry

mod clock;
mod presentation_sink;

pub use clock::Clock;
pub use presentation_sink::{PresentationSink, SinkError};
