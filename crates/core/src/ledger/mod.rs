//! Double-entry ledger model and balance primitives.
//!
//! This module implements the read-only side of the ledger:
//! - Accounts, journal entries and lines as supplied by the ledger store
//! - Reporting periods
//! - Balance calculations (cumulative, as-of, ranged, running)
//! - Sign conventions per account category
//! - Account lookups and special-account heuristics

pub mod balance;
pub mod error;
pub mod lookup;
pub mod normal;
pub mod range;
pub mod types;

pub use balance::{BalanceTotals, RunningBalance, compute_balance, compute_balance_in_range};
pub use error::LedgerError;
pub use lookup::{
    AccountIndex, AccountRole, find_by_code, find_cash_account, find_payables_account,
    find_receivables_account,
};
pub use normal::{NormalBalance, ResolvedBalance, TrialColumn, resolve};
pub use range::DateRange;
pub use types::{Account, AccountType, JournalEntry, JournalLine, LedgerSnapshot};
