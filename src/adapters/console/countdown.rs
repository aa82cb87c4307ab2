//! Countdown to the regulatory deadline.

use chrono::{NaiveDate, NaiveTime};
use std::fmt;

use crate::domain::foundation::Timestamp;

/// Time left until a deadline, in 30-day months and leftover days.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Countdown {
    pub months: i64,
    pub days: i64,
}

impl Countdown {
    /// Returns the countdown from `now` to the start (00:00 UTC) of the
    /// deadline day, or None once that instant is reached.
    ///
    /// Only whole days count; a partial day is dropped.
    pub fn until(deadline: NaiveDate, now: Timestamp) -> Option<Self> {
        let deadline_start = Timestamp::from_datetime(deadline.and_time(NaiveTime::MIN).and_utc());
        if !now.is_before(&deadline_start) {
            return None;
        }

        let whole_days = deadline_start.duration_since(&now).num_days();
        Some(Self {
            months: whole_days / 30,
            days: whole_days % 30,
        })
    }
}

impl fmt::Display for Countdown {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} months and {} days remaining", self.months, self.days)
    }
}
