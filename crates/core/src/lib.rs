//! Core business logic for Folio.
//!
//! This crate derives financial reports from a double-entry ledger. It has
//! no storage or transport dependencies: callers hand it an immutable
//! snapshot of accounts and posted entries and get plain report values back.
//!
//! # Modules
//!
//! - `ledger` - Ledger model, balances and sign conventions
//! - `activity` - Cash-flow activity classification
//! - `aging` - Aging buckets for payables and receivables
//! - `reports` - Report generators

pub mod activity;
pub mod aging;
pub mod ledger;
pub mod reports;
