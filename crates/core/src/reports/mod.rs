//! Financial report generation.
//!
//! This module provides pure business logic for generating financial reports:
//! - Trial Balance
//! - Income Statement
//! - Balance Sheet (with opening retained earnings inference)
//! - Cash Flow Statement
//! - General Ledger and Journal
//! - Expense and Revenue Analysis
//! - Payables and Receivables Aging
//! - Tax Summary

pub mod aging;
pub mod cash_flow;
pub mod error;
pub mod journal;
pub mod pack;
pub mod params;
pub mod reconcile;
pub mod service;
pub mod types;

#[cfg(test)]
mod scenarios;
#[cfg(test)]
mod test_support;

pub use error::ReportError;
pub use pack::{GeneratedReport, ReportKind, ReportPack};
pub use params::{ReportParams, TaxRate};
pub use reconcile::{EquityReconciliation, IMBALANCE_MESSAGE, reconcile_equity};
pub use service::{ReportService, TAX_DISCLAIMER};
pub use types::*;
