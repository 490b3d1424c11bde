//! Report error types.
//!
//! Generators themselves never fail: a missing special account is a
//! [`super::ReportOutcome::MissingAccount`] and an imbalance is an advisory
//! flag. These errors cover building report parameters.

use rust_decimal::Decimal;
use thiserror::Error;

use crate::ledger::LedgerError;

/// Errors that can occur while preparing report generation.
#[derive(Debug, Error)]
pub enum ReportError {
    /// Tax rate outside 0..=100 percent.
    #[error("Tax rate must be between 0 and 100 percent, got {0}")]
    InvalidTaxRate(Decimal),

    /// Unrecognized report kind name.
    #[error("Unknown report kind: {0}")]
    UnknownReportKind(String),

    /// Invalid ledger input (date range, snapshot).
    #[error(transparent)]
    Ledger(#[from] LedgerError),
}
