//! Half-open stay interval used by every availability rule.

use chrono::{Duration, NaiveDate};

use crate::server::error::AppError;

/// A stay interval `[start, end)` where `end` is strictly after `start`.
///
/// `start` is the check-in day and `end` the check-out day. The check-out day itself is
/// not part of the stay, so back-to-back bookings sharing a turnover day never overlap.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    start: NaiveDate,
    end: NaiveDate,
}

impl DateRange {
    /// Creates a validated date range.
    ///
    /// # Returns
    /// - `Ok(DateRange)` - `end` is after `start`
    /// - `Err(AppError::Validation)` - `end` is on or before `start`
    pub fn new(start: NaiveDate, end: NaiveDate) -> Result<Self, AppError> {
        if end <= start {
            return Err(AppError::Validation(format!(
                "Check-out date {} must be after check-in date {}",
                end, start
            )));
        }
        Ok(Self { start, end })
    }

    pub fn start(&self) -> NaiveDate {
        self.start
    }

    pub fn end(&self) -> NaiveDate {
        self.end
    }

    /// Two ranges overlap when `a.start < b.end && a.end > b.start`.
    pub fn overlaps(&self, other: &DateRange) -> bool {
        self.start < other.end && self.end > other.start
    }

    /// Number of nights billed for the stay.
    pub fn nights(&self) -> i64 {
        (self.end - self.start).num_days()
    }

    /// Whether a guest is in-house on `date` (check-in day included, check-out day not).
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date < self.end
    }

    /// Returns the same range with a later end date.
    pub fn extended_to(&self, end: NaiveDate) -> Result<Self, AppError> {
        Self::new(self.start, end)
    }

    /// Every night of the stay, in order.
    pub fn days(&self) -> impl Iterator<Item = NaiveDate> {
        let start = self.start;
        (0..self.nights()).map(move |offset| start + Duration::days(offset))
    }
}
