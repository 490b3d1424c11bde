//! Report data types.
//!
//! Every report is a plain value built fresh on each call and never
//! mutated afterwards.

use chrono::{DateTime, NaiveDate, Utc};
use folio_shared::types::{AccountId, JournalEntryId};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::activity::ActivityCategory;
use crate::aging::AgingBuckets;
use crate::ledger::{Account, AccountRole, AccountType, DateRange, JournalEntry};

/// Tolerance used for the trial balance and balance sheet checks (0.01).
pub const BALANCE_TOLERANCE: Decimal = Decimal::from_parts(1, 0, 0, false, 2);

/// Default tax rate for the tax summary, in percent.
pub const DEFAULT_TAX_RATE_PERCENT: u32 = 30;

/// Reference to an account in report headers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountRef {
    /// Account ID.
    pub account_id: AccountId,
    /// Account code.
    pub code: String,
    /// Account name.
    pub name: String,
}

impl From<&Account> for AccountRef {
    fn from(account: &Account) -> Self {
        Self {
            account_id: account.id,
            code: account.code.clone(),
            name: account.name.clone(),
        }
    }
}

/// Result of a report that depends on locating a special account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum ReportOutcome<T> {
    /// The account was found and the report generated.
    Ready(T),
    /// The account could not be located by its name heuristic.
    MissingAccount {
        /// Which special account is missing.
        role: AccountRole,
        /// Message for the caller to show, e.g. "No cash account found".
        message: String,
    },
}

impl<T> ReportOutcome<T> {
    /// Builds the missing-account outcome for a role.
    #[must_use]
    pub fn missing(role: AccountRole) -> Self {
        Self::MissingAccount {
            role,
            message: role.not_found_message().to_string(),
        }
    }

    /// Returns the report if it was generated.
    #[must_use]
    pub const fn ready(&self) -> Option<&T> {
        match self {
            Self::Ready(report) => Some(report),
            Self::MissingAccount { .. } => None,
        }
    }

    /// Consumes the outcome, returning the report if it was generated.
    #[must_use]
    pub fn into_ready(self) -> Option<T> {
        match self {
            Self::Ready(report) => Some(report),
            Self::MissingAccount { .. } => None,
        }
    }

    /// Returns true if the special account was not found.
    #[must_use]
    pub const fn is_missing_account(&self) -> bool {
        matches!(self, Self::MissingAccount { .. })
    }
}

// ============================================================================
// Trial Balance
// ============================================================================

/// One row of the trial balance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrialBalanceRow {
    /// Account ID.
    pub account_id: AccountId,
    /// Account code.
    pub code: String,
    /// Account name.
    pub name: String,
    /// Account type.
    pub account_type: AccountType,
    /// Debit column (zero when the balance is a credit).
    pub debit: Decimal,
    /// Credit column (zero when the balance is a debit).
    pub credit: Decimal,
}

/// Trial balance totals.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrialBalanceTotals {
    /// Sum of the debit column.
    pub total_debit: Decimal,
    /// Sum of the credit column.
    pub total_credit: Decimal,
    /// Debit total minus credit total.
    pub difference: Decimal,
    /// Whether the columns agree within [`BALANCE_TOLERANCE`].
    pub is_balanced: bool,
}

/// Trial balance report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrialBalanceReport {
    /// As of date.
    pub as_of: NaiveDate,
    /// Accounts with a nonzero balance, by code.
    pub accounts: Vec<TrialBalanceRow>,
    /// Totals.
    pub totals: TrialBalanceTotals,
}

// ============================================================================
// Statement sections (income statement, balance sheet)
// ============================================================================

/// An account line on a financial statement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatementLine {
    /// Account ID.
    pub account_id: AccountId,
    /// Account code.
    pub code: String,
    /// Account name.
    pub name: String,
    /// Account type.
    pub account_type: AccountType,
    /// Amount shown on the statement.
    pub amount: Decimal,
    /// Raw debit-minus-credit balance behind `amount`.
    pub raw_balance: Decimal,
    /// Whether the raw balance sits on the abnormal side for the category.
    pub is_abnormal: bool,
}

/// A statement section with its accounts and total.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatementSection {
    /// Section total.
    pub total: Decimal,
    /// Accounts in this section.
    pub accounts: Vec<StatementLine>,
}

impl StatementSection {
    /// Adds a line, counting `contribution` toward the section total.
    pub fn push(&mut self, line: StatementLine, contribution: Decimal) {
        self.total += contribution;
        self.accounts.push(line);
    }
}

// ============================================================================
// Income Statement
// ============================================================================

/// Income statement report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IncomeStatementReport {
    /// Reporting period.
    pub period: DateRange,
    /// Revenue section.
    pub revenue: StatementSection,
    /// Cost of goods sold section.
    pub cost_of_goods_sold: StatementSection,
    /// Gross profit (revenue - COGS).
    pub gross_profit: Decimal,
    /// Operating expenses section.
    pub expenses: StatementSection,
    /// Net income (gross profit - expenses).
    pub net_income: Decimal,
}

// ============================================================================
// Balance Sheet
// ============================================================================

/// Retained earnings as reconstructed by the balance sheet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RetainedEarnings {
    /// Inferred opening retained earnings (the imbalance plug).
    pub opening: Decimal,
    /// Net income to date.
    pub net_income: Decimal,
    /// Opening plus net income.
    pub total: Decimal,
}

/// Imbalance advisory surfaced with the balance sheet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImbalanceAdvisory {
    /// Assets minus (liabilities + equity accounts + net income) before the plug.
    pub amount: Decimal,
    /// Whether `|amount|` exceeds [`BALANCE_TOLERANCE`].
    pub has_imbalance: bool,
    /// Explanation shown to the caller when `has_imbalance` is set.
    pub message: Option<String>,
}

/// Balance sheet report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BalanceSheetReport {
    /// As of date.
    pub as_of: NaiveDate,
    /// Assets section (debit-normal; negative balances kept and flagged).
    pub assets: StatementSection,
    /// Liabilities section (credit-normal magnitudes; debit balances flagged).
    pub liabilities: StatementSection,
    /// Equity accounts carrying a credit balance.
    pub equity: StatementSection,
    /// Total assets.
    pub total_assets: Decimal,
    /// Total liabilities, credit-positive.
    pub total_liabilities: Decimal,
    /// Equity from the equity accounts alone.
    pub equity_from_accounts: Decimal,
    /// Net income to date: revenue minus expenses, excluding COGS.
    pub net_income: Decimal,
    /// Reconstructed retained earnings.
    pub retained_earnings: RetainedEarnings,
    /// Equity accounts plus retained earnings.
    pub total_equity: Decimal,
    /// Liabilities plus equity.
    pub liabilities_and_equity: Decimal,
    /// Imbalance plug advisory.
    pub imbalance: ImbalanceAdvisory,
}

// ============================================================================
// Cash Flow Statement
// ============================================================================

/// A cash movement within the period.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CashMovement {
    /// Entry the movement comes from.
    pub entry_id: JournalEntryId,
    /// Entry date.
    pub entry_date: NaiveDate,
    /// Entry description.
    pub description: String,
    /// Entry reference number.
    pub reference_number: Option<String>,
    /// Net change in cash (debit - credit on the cash line).
    pub amount: Decimal,
    /// Activity the movement was classified as.
    pub category: ActivityCategory,
}

/// Cash flow statement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CashFlowReport {
    /// Reporting period.
    pub period: DateRange,
    /// The account treated as cash.
    pub cash_account: AccountRef,
    /// Cash before the period start.
    pub opening_balance: Decimal,
    /// Net operating cash flow.
    pub operating_activities: Decimal,
    /// Net investing cash flow.
    pub investing_activities: Decimal,
    /// Net financing cash flow.
    pub financing_activities: Decimal,
    /// Sum of the three activity totals.
    pub net_change: Decimal,
    /// Opening balance plus net change.
    pub closing_balance: Decimal,
    /// Classified movements in chronological order.
    pub movements: Vec<CashMovement>,
}

// ============================================================================
// General Ledger & Journal
// ============================================================================

/// One posting in an account's ledger.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LedgerPosting {
    /// Entry the posting belongs to.
    pub entry_id: JournalEntryId,
    /// Entry date.
    pub entry_date: NaiveDate,
    /// Entry creation time (tie-break).
    pub created_at: DateTime<Utc>,
    /// Entry description.
    pub description: String,
    /// Entry reference number.
    pub reference_number: Option<String>,
    /// Debit amount.
    pub debit: Decimal,
    /// Credit amount.
    pub credit: Decimal,
    /// Balance after this posting (debit - credit, cumulative).
    pub running_balance: Decimal,
}

/// Ledger for a single account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountLedger {
    /// Account ID.
    pub account_id: AccountId,
    /// Account code.
    pub code: String,
    /// Account name.
    pub name: String,
    /// Account type.
    pub account_type: AccountType,
    /// Postings sorted by (entry date, created at).
    pub postings: Vec<LedgerPosting>,
    /// Total debits.
    pub total_debit: Decimal,
    /// Total credits.
    pub total_credit: Decimal,
    /// Final running balance.
    pub closing_balance: Decimal,
}

/// General ledger report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneralLedgerReport {
    /// Accounts with at least one posting, by code.
    pub accounts: Vec<AccountLedger>,
}

/// Journal report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JournalReport {
    /// Reporting period.
    pub period: DateRange,
    /// Entries in the period, unmodified, in (entry date, created at) order.
    pub entries: Vec<JournalEntry>,
    /// Sum of debits across the listed entries.
    pub total_debit: Decimal,
    /// Sum of credits across the listed entries.
    pub total_credit: Decimal,
}

// ============================================================================
// Expense / Revenue Analysis
// ============================================================================

/// Which accounts an analysis covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AnalysisKind {
    /// Expense accounts.
    Expense,
    /// Revenue accounts.
    Revenue,
}

impl AnalysisKind {
    /// Account type analysed.
    #[must_use]
    pub const fn account_type(self) -> AccountType {
        match self {
            Self::Expense => AccountType::Expense,
            Self::Revenue => AccountType::Revenue,
        }
    }
}

/// One account in an analysis.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisRow {
    /// Account ID.
    pub account_id: AccountId,
    /// Account code.
    pub code: String,
    /// Account name.
    pub name: String,
    /// Absolute ranged balance.
    pub amount: Decimal,
    /// Share of the total, in percent, rounded to 2 dp.
    pub percent_of_total: Decimal,
}

/// Expense or revenue analysis.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountAnalysisReport {
    /// Which accounts are analysed.
    pub kind: AnalysisKind,
    /// Reporting period.
    pub period: DateRange,
    /// Accounts, largest amount first.
    pub accounts: Vec<AnalysisRow>,
    /// Sum of amounts.
    pub total: Decimal,
}

// ============================================================================
// Aging
// ============================================================================

/// Payables or receivables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AgingKind {
    /// Accounts payable: open amount grows on credit.
    Payables,
    /// Accounts receivable: open amount grows on debit.
    Receivables,
}

impl AgingKind {
    /// Special account the report is built on.
    #[must_use]
    pub const fn role(self) -> AccountRole {
        match self {
            Self::Payables => AccountRole::AccountsPayable,
            Self::Receivables => AccountRole::AccountsReceivable,
        }
    }
}

/// Accounts payable or receivable aging.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgingReport {
    /// Payables or receivables.
    pub kind: AgingKind,
    /// The aged account.
    pub account: AccountRef,
    /// Date ages are measured against.
    pub reference_date: NaiveDate,
    /// Open amounts by age.
    pub buckets: AgingBuckets,
    /// Cumulative outstanding balance of the account.
    ///
    /// Payables: credit - debit. Receivables: debit - credit, clamped at zero.
    pub total: Decimal,
}

// ============================================================================
// Tax Summary
// ============================================================================

/// Tax summary. An estimate, not a filing-grade computation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxSummaryReport {
    /// Reporting period.
    pub period: DateRange,
    /// Total revenue.
    pub total_revenue: Decimal,
    /// Total cost of goods sold.
    pub total_cogs: Decimal,
    /// Revenue minus COGS.
    pub gross_profit: Decimal,
    /// Total expenses.
    pub total_expenses: Decimal,
    /// Gross profit minus expenses.
    pub taxable_income: Decimal,
    /// Rate applied, in percent.
    pub tax_rate_percent: Decimal,
    /// Taxable income times the rate, or zero when there is no taxable income.
    pub estimated_tax: Decimal,
    /// Credit-minus-debit movement on the sales-tax account, if there is one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sales_tax_collected: Option<Decimal>,
    /// Always true.
    pub is_estimate: bool,
    /// Caveat shown with the estimate.
    pub disclaimer: String,
}
