//! Account balance calculations.
//!
//! Balances here are raw: `balance = total_debit - total_credit`, whatever
//! the account category. Category-specific presentation lives in
//! [`super::normal`].

use chrono::NaiveDate;
use folio_shared::types::AccountId;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::range::DateRange;
use super::types::{JournalEntry, JournalLine};

/// Debit/credit totals for one account.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BalanceTotals {
    /// Total debit amount.
    pub total_debit: Decimal,
    /// Total credit amount.
    pub total_credit: Decimal,
    /// Net balance (debit - credit).
    pub balance: Decimal,
}

impl BalanceTotals {
    /// Adds a debit amount.
    pub fn add_debit(&mut self, amount: Decimal) {
        self.total_debit += amount;
        self.balance = self.total_debit - self.total_credit;
    }

    /// Adds a credit amount.
    pub fn add_credit(&mut self, amount: Decimal) {
        self.total_credit += amount;
        self.balance = self.total_debit - self.total_credit;
    }

    /// Adds both sides of a journal line.
    pub fn add_line(&mut self, line: &JournalLine) {
        self.add_debit(line.debit_amount);
        self.add_credit(line.credit_amount);
    }

    /// Credit minus debit, the natural sign for credit-normal accounts.
    #[must_use]
    pub fn credit_balance(&self) -> Decimal {
        -self.balance
    }
}

/// Computes totals for an account over entries accepted by `include`.
fn accumulate<F>(account_id: AccountId, entries: &[JournalEntry], include: F) -> BalanceTotals
where
    F: Fn(&JournalEntry) -> bool,
{
    let mut totals = BalanceTotals::default();
    for entry in entries.iter().filter(|e| include(e)) {
        for line in entry.lines_for(account_id) {
            totals.add_line(line);
        }
    }
    totals
}

/// Computes an account's totals, optionally up to and including `as_of`.
///
/// With `as_of = None` every entry counts (cumulative since inception).
/// An account with no matching lines yields all-zero totals.
#[must_use]
pub fn compute_balance(
    account_id: AccountId,
    entries: &[JournalEntry],
    as_of: Option<NaiveDate>,
) -> BalanceTotals {
    match as_of {
        Some(as_of) => accumulate(account_id, entries, |e| e.entry_date <= as_of),
        None => accumulate(account_id, entries, |_| true),
    }
}

/// Computes an account's totals for entries dated inside `range` (inclusive).
#[must_use]
pub fn compute_balance_in_range(
    account_id: AccountId,
    entries: &[JournalEntry],
    range: DateRange,
) -> BalanceTotals {
    accumulate(account_id, entries, |e| range.contains(e.entry_date))
}

/// Running balance information for a ledger line.
///
/// - `sequence`: 1-based position in the account's sorted history
/// - `previous_balance`: balance before this line
/// - `current_balance`: balance after this line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunningBalance {
    /// Position in the account history (monotonically increasing).
    pub sequence: u64,
    /// Balance before this line.
    pub previous_balance: Decimal,
    /// Balance after this line.
    pub current_balance: Decimal,
}

impl RunningBalance {
    /// Creates the running balance for the first line on an account.
    #[must_use]
    pub fn first_entry(balance_change: Decimal) -> Self {
        Self {
            sequence: 1,
            previous_balance: Decimal::ZERO,
            current_balance: balance_change,
        }
    }

    /// Creates the running balance following `previous`.
    ///
    /// - current_balance[N] = previous_balance[N] + balance_change
    /// - previous_balance[N] = current_balance[N-1]
    #[must_use]
    pub fn next_entry(previous: &Self, balance_change: Decimal) -> Self {
        Self {
            sequence: previous.sequence + 1,
            previous_balance: previous.current_balance,
            current_balance: previous.current_balance + balance_change,
        }
    }

    /// Advances from an optional previous state.
    #[must_use]
    pub fn advance(previous: Option<&Self>, balance_change: Decimal) -> Self {
        match previous {
            Some(previous) => Self::next_entry(previous, balance_change),
            None => Self::first_entry(balance_change),
        }
    }
}
