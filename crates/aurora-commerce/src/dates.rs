//! Stay dates and night counting.
//!
//! Check-in and check-out are calendar dates (`chrono::NaiveDate`), which
//! serialize as ISO `YYYY-MM-DD` strings.

use crate::error::BookingError;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Number of calendar nights between two dates.
///
/// Commutative by construction: the absolute difference in whole days is
/// used, so an inverted range (check-out before check-in) yields the same
/// positive count rather than a negative one, and equal dates yield 0.
/// Callers that want to reject inverted ranges use [`StayDates::is_valid`]
/// at the form layer instead.
pub fn nights_between(a: NaiveDate, b: NaiveDate) -> i64 {
    (b - a).num_days().abs()
}

/// A check-in/check-out date pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct StayDates {
    /// Check-in date.
    pub check_in: NaiveDate,
    /// Check-out date.
    pub check_out: NaiveDate,
}

impl StayDates {
    /// Create a new stay date pair.
    pub fn new(check_in: NaiveDate, check_out: NaiveDate) -> Self {
        Self {
            check_in,
            check_out,
        }
    }

    /// Number of billable nights for this stay.
    pub fn nights(&self) -> i64 {
        nights_between(self.check_in, self.check_out)
    }

    /// Check that check-out is strictly after check-in.
    pub fn is_valid(&self) -> bool {
        self.check_out > self.check_in
    }

    /// Form-layer validation: reject inverted or zero-night stays.
    ///
    /// The cart itself never calls this; it accepts whatever the form
    /// passed and prices leniently (see [`nights_between`]).
    pub fn validate(&self) -> Result<(), BookingError> {
        if self.is_valid() {
            Ok(())
        } else {
            Err(BookingError::InvalidStay {
                check_in: self.check_in.to_string(),
                check_out: self.check_out.to_string(),
            })
        }
    }

    /// Check whether two stays share at least one night.
    ///
    /// Check-out day is exclusive: a stay ending on the day another begins
    /// does not overlap it.
    pub fn overlaps(&self, other: &StayDates) -> bool {
        self.check_in < other.check_out && other.check_in < self.check_out
    }
}
