//! Report kinds and multi-report generation.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use folio_shared::types::{BusinessId, Currency};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::error::ReportError;
use super::params::ReportParams;
use super::service::ReportService;
use super::types::{
    AccountAnalysisReport, AgingReport, AnalysisKind, BalanceSheetReport, CashFlowReport,
    GeneralLedgerReport, IncomeStatementReport, JournalReport, ReportOutcome, TaxSummaryReport,
    TrialBalanceReport,
};
use crate::ledger::{DateRange, LedgerSnapshot};

/// The reports the engine can produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReportKind {
    /// Trial balance as of the period end.
    TrialBalance,
    /// Income statement for the period.
    IncomeStatement,
    /// Balance sheet as of the period end.
    BalanceSheet,
    /// Cash flow statement for the period.
    CashFlow,
    /// General ledger over the full history.
    GeneralLedger,
    /// Journal for the period.
    Journal,
    /// Expense analysis for the period.
    ExpenseAnalysis,
    /// Revenue analysis for the period.
    RevenueAnalysis,
    /// Accounts payable aging at the reference date.
    PayablesAging,
    /// Accounts receivable aging at the reference date.
    ReceivablesAging,
    /// Tax summary for the period.
    TaxSummary,
}

impl ReportKind {
    /// Every report kind.
    pub const ALL: [Self; 11] = [
        Self::TrialBalance,
        Self::IncomeStatement,
        Self::BalanceSheet,
        Self::CashFlow,
        Self::GeneralLedger,
        Self::Journal,
        Self::ExpenseAnalysis,
        Self::RevenueAnalysis,
        Self::PayablesAging,
        Self::ReceivablesAging,
        Self::TaxSummary,
    ];

    /// Snake-case name used in config and output.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::TrialBalance => "trial_balance",
            Self::IncomeStatement => "income_statement",
            Self::BalanceSheet => "balance_sheet",
            Self::CashFlow => "cash_flow",
            Self::GeneralLedger => "general_ledger",
            Self::Journal => "journal",
            Self::ExpenseAnalysis => "expense_analysis",
            Self::RevenueAnalysis => "revenue_analysis",
            Self::PayablesAging => "payables_aging",
            Self::ReceivablesAging => "receivables_aging",
            Self::TaxSummary => "tax_summary",
        }
    }
}

impl fmt::Display for ReportKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ReportKind {
    type Err = ReportError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase().replace('-', "_");
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str() == wanted)
            .ok_or_else(|| ReportError::UnknownReportKind(s.to_string()))
    }
}

/// One generated report, tagged with its kind.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "report_type", content = "report", rename_all = "snake_case")]
pub enum GeneratedReport {
    /// Trial balance.
    TrialBalance(TrialBalanceReport),
    /// Income statement.
    IncomeStatement(IncomeStatementReport),
    /// Balance sheet.
    BalanceSheet(BalanceSheetReport),
    /// Cash flow statement, unless no cash account exists.
    CashFlow(ReportOutcome<CashFlowReport>),
    /// General ledger.
    GeneralLedger(GeneralLedgerReport),
    /// Journal.
    Journal(JournalReport),
    /// Expense analysis.
    ExpenseAnalysis(AccountAnalysisReport),
    /// Revenue analysis.
    RevenueAnalysis(AccountAnalysisReport),
    /// Payables aging, unless no payables account exists.
    PayablesAging(ReportOutcome<AgingReport>),
    /// Receivables aging, unless no receivables account exists.
    ReceivablesAging(ReportOutcome<AgingReport>),
    /// Tax summary.
    TaxSummary(TaxSummaryReport),
}

impl GeneratedReport {
    /// Kind of this report.
    #[must_use]
    pub const fn kind(&self) -> ReportKind {
        match self {
            Self::TrialBalance(_) => ReportKind::TrialBalance,
            Self::IncomeStatement(_) => ReportKind::IncomeStatement,
            Self::BalanceSheet(_) => ReportKind::BalanceSheet,
            Self::CashFlow(_) => ReportKind::CashFlow,
            Self::GeneralLedger(_) => ReportKind::GeneralLedger,
            Self::Journal(_) => ReportKind::Journal,
            Self::ExpenseAnalysis(_) => ReportKind::ExpenseAnalysis,
            Self::RevenueAnalysis(_) => ReportKind::RevenueAnalysis,
            Self::PayablesAging(_) => ReportKind::PayablesAging,
            Self::ReceivablesAging(_) => ReportKind::ReceivablesAging,
            Self::TaxSummary(_) => ReportKind::TaxSummary,
        }
    }

    /// Returns true if a special account needed by this report was missing.
    #[must_use]
    pub const fn is_missing_account(&self) -> bool {
        match self {
            Self::CashFlow(outcome) => outcome.is_missing_account(),
            Self::PayablesAging(outcome) | Self::ReceivablesAging(outcome) => {
                outcome.is_missing_account()
            }
            _ => false,
        }
    }
}

impl ReportService {
    /// Generates one report of the given kind from a snapshot.
    ///
    /// Cumulative reports are taken as of the period end.
    #[must_use]
    pub fn generate(
        kind: ReportKind,
        snapshot: &LedgerSnapshot,
        params: &ReportParams,
    ) -> GeneratedReport {
        let accounts = snapshot.accounts.as_slice();
        let entries = snapshot.entries.as_slice();
        let period = params.period;
        let as_of = period.end_date();

        match kind {
            ReportKind::TrialBalance => GeneratedReport::TrialBalance(
                Self::generate_trial_balance(accounts, entries, as_of),
            ),
            ReportKind::IncomeStatement => GeneratedReport::IncomeStatement(
                Self::generate_income_statement(accounts, entries, period),
            ),
            ReportKind::BalanceSheet => GeneratedReport::BalanceSheet(
                Self::generate_balance_sheet(accounts, entries, as_of),
            ),
            ReportKind::CashFlow => {
                GeneratedReport::CashFlow(Self::generate_cash_flow(accounts, entries, period))
            }
            ReportKind::GeneralLedger => {
                GeneratedReport::GeneralLedger(Self::generate_general_ledger(accounts, entries))
            }
            ReportKind::Journal => {
                GeneratedReport::Journal(Self::generate_journal(entries, period))
            }
            ReportKind::ExpenseAnalysis => GeneratedReport::ExpenseAnalysis(
                Self::generate_account_analysis(accounts, entries, period, AnalysisKind::Expense),
            ),
            ReportKind::RevenueAnalysis => GeneratedReport::RevenueAnalysis(
                Self::generate_account_analysis(accounts, entries, period, AnalysisKind::Revenue),
            ),
            ReportKind::PayablesAging => GeneratedReport::PayablesAging(
                Self::generate_payables_aging(accounts, entries, params.reference_date),
            ),
            ReportKind::ReceivablesAging => GeneratedReport::ReceivablesAging(
                Self::generate_receivables_aging(accounts, entries, params.reference_date),
            ),
            ReportKind::TaxSummary => GeneratedReport::TaxSummary(Self::generate_tax_summary(
                accounts,
                entries,
                period,
                params.tax_rate,
                params.sales_tax_account_code.as_deref(),
            )),
        }
    }
}

/// A set of reports generated from one snapshot with one set of parameters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportPack {
    /// Business the ledger belongs to.
    pub business_id: BusinessId,
    /// Currency amounts are expressed in.
    pub currency: Currency,
    /// Reporting period.
    pub period: DateRange,
    /// Reference date used for aging.
    pub reference_date: NaiveDate,
    /// Reports in the requested order.
    pub reports: Vec<GeneratedReport>,
}

impl ReportPack {
    /// Generates the requested reports in parallel.
    ///
    /// Generators share the snapshot read-only; the output keeps the order
    /// of `kinds`.
    #[must_use]
    pub fn generate(
        snapshot: &LedgerSnapshot,
        params: &ReportParams,
        kinds: &[ReportKind],
    ) -> Self {
        let reports: Vec<GeneratedReport> = kinds
            .par_iter()
            .map(|kind| ReportService::generate(*kind, snapshot, params))
            .collect();

        debug!(
            business_id = %snapshot.business_id,
            reports = reports.len(),
            "Generated report pack"
        );

        Self {
            business_id: snapshot.business_id,
            currency: params.currency,
            period: params.period,
            reference_date: params.reference_date,
            reports,
        }
    }

    /// First report of the given kind, if it was requested.
    #[must_use]
    pub fn get(&self, kind: ReportKind) -> Option<&GeneratedReport> {
        self.reports.iter().find(|r| r.kind() == kind)
    }
}
