//! Reporting periods.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::error::LedgerError;

/// An inclusive `[start_date, end_date]` reporting window.
///
/// Construction rejects `start_date > end_date`, including when
/// deserialized.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawDateRange")]
pub struct DateRange {
    start_date: NaiveDate,
    end_date: NaiveDate,
}

#[derive(Deserialize)]
struct RawDateRange {
    start_date: NaiveDate,
    end_date: NaiveDate,
}

impl TryFrom<RawDateRange> for DateRange {
    type Error = LedgerError;

    fn try_from(raw: RawDateRange) -> Result<Self, Self::Error> {
        Self::new(raw.start_date, raw.end_date)
    }
}

impl DateRange {
    /// Creates a range, rejecting a start after the end.
    pub fn new(start_date: NaiveDate, end_date: NaiveDate) -> Result<Self, LedgerError> {
        if start_date > end_date {
            return Err(LedgerError::InvalidDateRange {
                start: start_date,
                end: end_date,
            });
        }
        Ok(Self {
            start_date,
            end_date,
        })
    }

    /// A single-day range.
    #[must_use]
    pub const fn single_day(date: NaiveDate) -> Self {
        Self {
            start_date: date,
            end_date: date,
        }
    }

    /// First day of the range.
    #[must_use]
    pub const fn start_date(&self) -> NaiveDate {
        self.start_date
    }

    /// Last day of the range.
    #[must_use]
    pub const fn end_date(&self) -> NaiveDate {
        self.end_date
    }

    /// Returns true if the given date falls within this range.
    #[must_use]
    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.start_date && date <= self.end_date
    }
}
