//! Sign conventions per account category.
//!
//! - Asset/COGS/Expense: debit-normal, healthy balance has debit > credit
//! - Liability/Equity/Revenue: credit-normal, healthy balance has credit > debit
//!
//! Everything here is a total function over [`AccountType`]; nothing fails.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::types::AccountType;

/// Which side of the ledger an account category normally carries its balance on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NormalBalance {
    /// Debit-normal accounts (Asset, COGS, Expense).
    DebitNormal,
    /// Credit-normal accounts (Liability, Equity, Revenue).
    CreditNormal,
}

impl NormalBalance {
    /// Determines the normal side for an account category.
    #[must_use]
    pub const fn for_type(account_type: AccountType) -> Self {
        match account_type {
            AccountType::Asset | AccountType::Cogs | AccountType::Expense => Self::DebitNormal,
            AccountType::Liability | AccountType::Equity | AccountType::Revenue => {
                Self::CreditNormal
            }
        }
    }

    /// Returns true if a raw (debit - credit) balance sits on the wrong side.
    #[must_use]
    pub fn is_abnormal(self, raw_balance: Decimal) -> bool {
        match self {
            Self::DebitNormal => raw_balance < Decimal::ZERO,
            Self::CreditNormal => raw_balance > Decimal::ZERO,
        }
    }
}

/// A balance resolved for display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolvedBalance {
    /// Magnitude to display (always >= 0).
    pub amount: Decimal,
    /// Whether the raw balance sits on the side opposite the category's normal side.
    pub is_abnormal: bool,
}

/// Resolves a raw (debit - credit) balance into a display magnitude and an abnormal flag.
#[must_use]
pub fn resolve(account_type: AccountType, raw_balance: Decimal) -> ResolvedBalance {
    ResolvedBalance {
        amount: raw_balance.abs(),
        is_abnormal: NormalBalance::for_type(account_type).is_abnormal(raw_balance),
    }
}

/// Trial balance column for a raw balance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "side", content = "amount", rename_all = "snake_case")]
pub enum TrialColumn {
    /// Positive balance, listed in the debit column.
    Debit(Decimal),
    /// Negative balance, listed in the credit column as a magnitude.
    Credit(Decimal),
    /// Zero balance; left off the trial balance.
    Omitted,
}

impl TrialColumn {
    /// Places a raw balance: `> 0` debit, `< 0` credit, `== 0` omitted.
    #[must_use]
    pub fn for_balance(raw_balance: Decimal) -> Self {
        if raw_balance > Decimal::ZERO {
            Self::Debit(raw_balance)
        } else if raw_balance < Decimal::ZERO {
            Self::Credit(-raw_balance)
        } else {
            Self::Omitted
        }
    }

    /// Debit column amount (zero if not a debit).
    #[must_use]
    pub fn debit(self) -> Decimal {
        match self {
            Self::Debit(amount) => amount,
            Self::Credit(_) | Self::Omitted => Decimal::ZERO,
        }
    }

    /// Credit column amount (zero if not a credit).
    #[must_use]
    pub fn credit(self) -> Decimal {
        match self {
            Self::Credit(amount) => amount,
            Self::Debit(_) | Self::Omitted => Decimal::ZERO,
        }
    }
}
