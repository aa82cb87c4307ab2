//! Regulatory deadline consumed by the countdown display.

use chrono::NaiveDate;
use once_cell::sync::Lazy;

/// Date from which the high-risk obligations apply.
pub static REGULATORY_DEADLINE: Lazy<NaiveDate> = Lazy::new(|| {
    NaiveDate::from_ymd_opt(2026, 8, 2).expect("2026-08-02 is a valid calendar date")
});

/// Returns the regulatory deadline.
pub fn regulatory_deadline() -> NaiveDate {
    *REGULATORY_DEADLINE
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Datelike;

    #[test]
    fn deadline_is_second_of_august_2026() {
        let deadline = regulatory_deadline();
        assert_eq!((deadline.year(), deadline.month(), deadline.day()), (2026, 8, 2));
    }
}
