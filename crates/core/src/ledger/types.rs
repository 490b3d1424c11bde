//! Ledger domain types consumed by the report generators.
//!
//! These mirror what the ledger store supplies for one business entity:
//! the chart of accounts and the posted journal entries. The engine never
//! mutates them.

use chrono::{DateTime, NaiveDate, Utc};
use folio_shared::types::{AccountId, BusinessId, JournalEntryId};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::error::LedgerError;

/// Account category in the chart of accounts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AccountType {
    /// Resources owned (debit-normal).
    Asset,
    /// Obligations owed (credit-normal).
    Liability,
    /// Owner's residual interest (credit-normal).
    Equity,
    /// Income earned (credit-normal).
    Revenue,
    /// Cost of goods sold (debit-normal).
    #[serde(rename = "cogs", alias = "COGS")]
    Cogs,
    /// Operating expenses (debit-normal).
    Expense,
}

impl AccountType {
    /// Returns true for the income-statement categories.
    #[must_use]
    pub fn is_income_statement(self) -> bool {
        matches!(self, Self::Revenue | Self::Cogs | Self::Expense)
    }
}

impl std::fmt::Display for AccountType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Asset => write!(f, "Asset"),
            Self::Liability => write!(f, "Liability"),
            Self::Equity => write!(f, "Equity"),
            Self::Revenue => write!(f, "Revenue"),
            Self::Cogs => write!(f, "COGS"),
            Self::Expense => write!(f, "Expense"),
        }
    }
}

/// An entry in the chart of accounts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Account {
    /// Unique identifier within the business.
    pub id: AccountId,
    /// Short display code (e.g. "2210"), unique per business.
    pub code: String,
    /// Display name.
    pub name: String,
    /// Account category.
    pub account_type: AccountType,
}

impl Account {
    /// Creates an account with a fresh id.
    #[must_use]
    pub fn new(
        code: impl Into<String>,
        name: impl Into<String>,
        account_type: AccountType,
    ) -> Self {
        Self {
            id: AccountId::new(),
            code: code.into(),
            name: name.into(),
            account_type,
        }
    }

    /// Case-insensitive substring match on the account name.
    #[must_use]
    pub fn name_contains(&self, needle: &str) -> bool {
        self.name.to_lowercase().contains(&needle.to_lowercase())
    }
}

/// One line of a journal entry.
///
/// Conventionally exactly one of the amounts is nonzero; when both are
/// set they are summed algebraically.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JournalLine {
    /// The account this line posts to.
    pub account_id: AccountId,
    /// Debit amount (>= 0).
    #[serde(default)]
    pub debit_amount: Decimal,
    /// Credit amount (>= 0).
    #[serde(default)]
    pub credit_amount: Decimal,
}

impl JournalLine {
    /// Creates a debit line.
    #[must_use]
    pub fn debit(account_id: AccountId, amount: Decimal) -> Self {
        Self {
            account_id,
            debit_amount: amount,
            credit_amount: Decimal::ZERO,
        }
    }

    /// Creates a credit line.
    #[must_use]
    pub fn credit(account_id: AccountId, amount: Decimal) -> Self {
        Self {
            account_id,
            debit_amount: Decimal::ZERO,
            credit_amount: amount,
        }
    }

    /// Debit minus credit.
    #[must_use]
    pub fn net_debit(&self) -> Decimal {
        self.debit_amount - self.credit_amount
    }
}

/// A posted journal entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JournalEntry {
    /// Unique identifier.
    pub id: JournalEntryId,
    /// Accounting date of the entry.
    pub entry_date: NaiveDate,
    /// Description.
    pub description: String,
    /// Optional reference number (e.g. invoice number).
    #[serde(default)]
    pub reference_number: Option<String>,
    /// Creation timestamp, used only to break ties between same-day entries.
    pub created_at: DateTime<Utc>,
    /// Whether the entry is posted. The ledger store only supplies posted entries.
    #[serde(default = "default_posted")]
    pub is_posted: bool,
    /// Ordered lines.
    pub lines: Vec<JournalLine>,
}

const fn default_posted() -> bool {
    true
}

impl JournalEntry {
    /// Sum of debit amounts across all lines.
    #[must_use]
    pub fn total_debit(&self) -> Decimal {
        self.lines.iter().map(|l| l.debit_amount).sum()
    }

    /// Sum of credit amounts across all lines.
    #[must_use]
    pub fn total_credit(&self) -> Decimal {
        self.lines.iter().map(|l| l.credit_amount).sum()
    }

    /// Lines posting to the given account.
    pub fn lines_for(&self, account_id: AccountId) -> impl Iterator<Item = &JournalLine> {
        self.lines.iter().filter(move |l| l.account_id == account_id)
    }

    /// Returns true if any line posts to the given account.
    #[must_use]
    pub fn touches(&self, account_id: AccountId) -> bool {
        self.lines.iter().any(|l| l.account_id == account_id)
    }

    /// Ordering key for chronological listings: date, then creation time.
    #[must_use]
    pub fn chronological_key(&self) -> (NaiveDate, DateTime<Utc>) {
        (self.entry_date, self.created_at)
    }
}

/// Everything the ledger store supplies for one business.
///
/// Callers hand the engine an immutable snapshot for the duration of a
/// report computation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LedgerSnapshot {
    /// The business this ledger belongs to.
    pub business_id: BusinessId,
    /// Chart of accounts.
    #[serde(default)]
    pub accounts: Vec<Account>,
    /// Posted journal entries.
    #[serde(default)]
    pub entries: Vec<JournalEntry>,
}

impl LedgerSnapshot {
    /// Parses a snapshot from JSON.
    pub fn from_json(json: &str) -> Result<Self, LedgerError> {
        Ok(serde_json::from_str(json)?)
    }
}
