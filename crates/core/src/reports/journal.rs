//! General ledger and journal listings.

use rayon::prelude::*;
use rust_decimal::Decimal;
use tracing::debug;

use super::service::{ReportService, by_code};
use super::types::{AccountLedger, GeneralLedgerReport, JournalReport, LedgerPosting};
use crate::ledger::{Account, BalanceTotals, DateRange, JournalEntry, RunningBalance};

/// Entries sorted by (entry date, created at). Exact ties keep input order.
fn chronological<'a>(entries: impl Iterator<Item = &'a JournalEntry>) -> Vec<&'a JournalEntry> {
    let mut sorted: Vec<&JournalEntry> = entries.collect();
    sorted.sort_by_key(|e| e.chronological_key());
    sorted
}

fn account_ledger(account: &Account, ordered: &[&JournalEntry]) -> Option<AccountLedger> {
    let mut running: Option<RunningBalance> = None;
    let mut totals = BalanceTotals::default();
    let mut postings = Vec::new();

    for entry in ordered {
        for line in entry.lines_for(account.id) {
            let next = RunningBalance::advance(running.as_ref(), line.net_debit());
            totals.add_line(line);
            postings.push(LedgerPosting {
                entry_id: entry.id,
                entry_date: entry.entry_date,
                created_at: entry.created_at,
                description: entry.description.clone(),
                reference_number: entry.reference_number.clone(),
                debit: line.debit_amount,
                credit: line.credit_amount,
                running_balance: next.current_balance,
            });
            running = Some(next);
        }
    }

    let closing = running?;
    Some(AccountLedger {
        account_id: account.id,
        code: account.code.clone(),
        name: account.name.clone(),
        account_type: account.account_type,
        postings,
        total_debit: totals.total_debit,
        total_credit: totals.total_credit,
        closing_balance: closing.current_balance,
    })
}

impl ReportService {
    /// Generates the general ledger over the full history.
    ///
    /// Each account with at least one posting gets its postings in
    /// chronological order with a running debit-minus-credit balance.
    /// Accounts are built in parallel; output order is by code.
    #[must_use]
    pub fn generate_general_ledger(
        accounts: &[Account],
        entries: &[JournalEntry],
    ) -> GeneralLedgerReport {
        let ordered = chronological(entries.iter());
        let ledgers: Vec<AccountLedger> = by_code(accounts)
            .par_iter()
            .filter_map(|account| account_ledger(account, &ordered))
            .collect();

        debug!(accounts = ledgers.len(), "Generated general ledger");
        GeneralLedgerReport { accounts: ledgers }
    }

    /// Lists the entries dated within a period, unmodified, in chronological order.
    #[must_use]
    pub fn generate_journal(entries: &[JournalEntry], period: DateRange) -> JournalReport {
        let listed: Vec<JournalEntry> = chronological(
            entries.iter().filter(|e| period.contains(e.entry_date)),
        )
        .into_iter()
        .cloned()
        .collect();

        let total_debit: Decimal = listed.iter().map(JournalEntry::total_debit).sum();
        let total_credit: Decimal = listed.iter().map(JournalEntry::total_credit).sum();
        debug!(entries = listed.len(), "Generated journal");

        JournalReport {
            period,
            entries: listed,
            total_debit,
            total_credit,
        }
    }
}
