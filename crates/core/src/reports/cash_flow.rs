//! Cash flow statement.

use rust_decimal::Decimal;
use tracing::{debug, warn};

use super::service::ReportService;
use super::types::{AccountRef, CashFlowReport, CashMovement, ReportOutcome};
use crate::activity::{ActivityCategory, classify};
use crate::ledger::{
    Account, AccountIndex, AccountRole, DateRange, JournalEntry, JournalLine, find_cash_account,
};

impl ReportService {
    /// Generates a cash flow statement for a period.
    ///
    /// The cash account is the first asset whose name contains "cash". Each
    /// in-period movement on it is classified by the other accounts in the
    /// same entry. Counterpart ids missing from the chart are ignored.
    #[must_use]
    pub fn generate_cash_flow(
        accounts: &[Account],
        entries: &[JournalEntry],
        period: DateRange,
    ) -> ReportOutcome<CashFlowReport> {
        let Some(cash) = find_cash_account(accounts) else {
            warn!("Cash flow skipped: no cash account");
            return ReportOutcome::missing(AccountRole::Cash);
        };

        let opening_balance: Decimal = entries
            .iter()
            .filter(|e| e.entry_date < period.start_date())
            .flat_map(|e| e.lines_for(cash.id))
            .map(JournalLine::net_debit)
            .sum();

        let mut in_period: Vec<&JournalEntry> = entries
            .iter()
            .filter(|e| period.contains(e.entry_date) && e.touches(cash.id))
            .collect();
        in_period.sort_by_key(|e| e.chronological_key());

        let index = AccountIndex::new(accounts);
        let mut operating = Decimal::ZERO;
        let mut investing = Decimal::ZERO;
        let mut financing = Decimal::ZERO;
        let mut movements = Vec::new();

        for entry in in_period {
            let counterparts: Vec<&Account> = entry
                .lines
                .iter()
                .filter(|l| l.account_id != cash.id)
                .filter_map(|l| index.get(l.account_id))
                .collect();
            let category = classify(&counterparts);

            for line in entry.lines_for(cash.id) {
                let amount = line.net_debit();
                match category {
                    ActivityCategory::Operating => operating += amount,
                    ActivityCategory::Investing => investing += amount,
                    ActivityCategory::Financing => financing += amount,
                }
                movements.push(CashMovement {
                    entry_id: entry.id,
                    entry_date: entry.entry_date,
                    description: entry.description.clone(),
                    reference_number: entry.reference_number.clone(),
                    amount,
                    category,
                });
            }
        }

        let net_change = operating + investing + financing;
        debug!(
            cash_account = %cash.code,
            movements = movements.len(),
            %net_change,
            "Generated cash flow statement"
        );

        ReportOutcome::Ready(CashFlowReport {
            period,
            cash_account: AccountRef::from(cash),
            opening_balance,
            operating_activities: operating,
            investing_activities: investing,
            financing_activities: financing,
            net_change,
            closing_balance: opening_balance + net_change,
            movements,
        })
    }
}
