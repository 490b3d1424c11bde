//! Ledger error types.

use chrono::NaiveDate;
use thiserror::Error;

/// Errors raised while building ledger inputs for report generation.
#[derive(Debug, Error)]
pub enum LedgerError {
    /// Invalid date range.
    #[error("Invalid date range: start {start} is after end {end}")]
    InvalidDateRange {
        /// Start date.
        start: NaiveDate,
        /// End date.
        end: NaiveDate,
    },

    /// Ledger snapshot could not be parsed.
    #[error("Invalid ledger snapshot: {0}")]
    Snapshot(#[from] serde_json::Error),
}
