//! Payables and receivables aging.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use tracing::{debug, warn};

use super::service::ReportService;
use super::types::{AccountRef, AgingKind, AgingReport, ReportOutcome};
use crate::aging::AgingBuckets;
use crate::ledger::{Account, JournalEntry, JournalLine, compute_balance};

/// Open amount a line adds on the aged account.
fn open_amount(kind: AgingKind, line: &JournalLine) -> Decimal {
    match kind {
        AgingKind::Payables => line.credit_amount - line.debit_amount,
        AgingKind::Receivables => line.net_debit(),
    }
}

impl ReportService {
    /// Generates an aging report for accounts payable or receivable.
    ///
    /// Every line on the account whose net amount increases the open
    /// balance is bucketed by the age of its entry at `reference_date`.
    /// Lines that reduce it are not matched against earlier ones, so bucket
    /// sums can exceed `total` when there were payments.
    ///
    /// Receivables with a zero or credit cumulative balance report a zero
    /// total and empty buckets.
    #[must_use]
    pub fn generate_aging(
        accounts: &[Account],
        entries: &[JournalEntry],
        kind: AgingKind,
        reference_date: NaiveDate,
    ) -> ReportOutcome<AgingReport> {
        let role = kind.role();
        let Some(account) = role.locate(accounts) else {
            warn!(%role, "Aging skipped: account not found");
            return ReportOutcome::missing(role);
        };

        let mut buckets = AgingBuckets::default();
        for entry in entries {
            for line in entry.lines_for(account.id) {
                buckets.add_dated(open_amount(kind, line), entry.entry_date, reference_date);
            }
        }

        let cumulative = compute_balance(account.id, entries, None);
        let mut total = match kind {
            AgingKind::Payables => cumulative.credit_balance(),
            AgingKind::Receivables => cumulative.balance,
        };
        if kind == AgingKind::Receivables && total <= Decimal::ZERO {
            total = Decimal::ZERO;
            buckets = AgingBuckets::default();
        }

        debug!(%role, account = %account.code, %total, "Generated aging report");
        ReportOutcome::Ready(AgingReport {
            kind,
            account: AccountRef::from(account),
            reference_date,
            buckets,
            total,
        })
    }

    /// Accounts payable aging.
    #[must_use]
    pub fn generate_payables_aging(
        accounts: &[Account],
        entries: &[JournalEntry],
        reference_date: NaiveDate,
    ) -> ReportOutcome<AgingReport> {
        Self::generate_aging(accounts, entries, AgingKind::Payables, reference_date)
    }

    /// Accounts receivable aging.
    #[must_use]
    pub fn generate_receivables_aging(
        accounts: &[Account],
        entries: &[JournalEntry],
        reference_date: NaiveDate,
    ) -> ReportOutcome<AgingReport> {
        Self::generate_aging(accounts, entries, AgingKind::Receivables, reference_date)
    }
}
