//! Clock port - Source of the current time.
//!
//! Notice expiry is decided against this clock so the session stays
//! synchronous and testable without timers.

use crate::domain::foundation::Timestamp;

/// Port for reading the current time.
pub trait Clock: Send + Sync {
    fn now(&self) -> Timestamp;
}
