//! Account lookups, including the name heuristics used to find special accounts.
//!
//! Cash, payables and receivables are located by a case-insensitive
//! substring match on the account name, restricted to the expected
//! category. When several accounts match, the first one in chart order
//! (as supplied by the ledger store) wins.

use std::collections::HashMap;

use folio_shared::types::AccountId;
use serde::{Deserialize, Serialize};

use super::types::{Account, AccountType};

/// Special accounts some reports need to locate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AccountRole {
    /// An asset account whose name contains "cash".
    Cash,
    /// A liability account whose name contains "payable".
    AccountsPayable,
    /// An asset account whose name contains "receivable".
    AccountsReceivable,
}

impl AccountRole {
    /// Message shown to callers when the account cannot be located.
    #[must_use]
    pub const fn not_found_message(self) -> &'static str {
        match self {
            Self::Cash => "No cash account found",
            Self::AccountsPayable => "No accounts payable account found",
            Self::AccountsReceivable => "No accounts receivable account found",
        }
    }

    /// Locates the account for this role.
    #[must_use]
    pub fn locate(self, accounts: &[Account]) -> Option<&Account> {
        match self {
            Self::Cash => find_cash_account(accounts),
            Self::AccountsPayable => find_payables_account(accounts),
            Self::AccountsReceivable => find_receivables_account(accounts),
        }
    }
}

impl std::fmt::Display for AccountRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Cash => write!(f, "cash"),
            Self::AccountsPayable => write!(f, "accounts payable"),
            Self::AccountsReceivable => write!(f, "accounts receivable"),
        }
    }
}

/// Id-keyed view over a chart of accounts.
#[derive(Debug, Clone)]
pub struct AccountIndex<'a> {
    by_id: HashMap<AccountId, &'a Account>,
}

impl<'a> AccountIndex<'a> {
    /// Indexes the given accounts by id.
    #[must_use]
    pub fn new(accounts: &'a [Account]) -> Self {
        Self {
            by_id: accounts.iter().map(|a| (a.id, a)).collect(),
        }
    }

    /// Looks up an account. Unknown ids return `None`.
    #[must_use]
    pub fn get(&self, id: AccountId) -> Option<&'a Account> {
        self.by_id.get(&id).copied()
    }
}

/// Finds an account by its display code.
#[must_use]
pub fn find_by_code<'a>(accounts: &'a [Account], code: &str) -> Option<&'a Account> {
    accounts.iter().find(|a| a.code == code)
}

fn find_by_name<'a>(
    accounts: &'a [Account],
    account_type: AccountType,
    needle: &str,
) -> Option<&'a Account> {
    accounts
        .iter()
        .find(|a| a.account_type == account_type && a.name_contains(needle))
}

/// Finds the cash account: the first asset whose name contains "cash".
#[must_use]
pub fn find_cash_account(accounts: &[Account]) -> Option<&Account> {
    find_by_name(accounts, AccountType::Asset, "cash")
}

/// Finds the payables account.
///
/// Prefers a liability named "accounts payable" so that e.g. "Sales Tax
/// Payable" is not picked over it, then falls back to any liability whose
/// name contains "payable".
#[must_use]
pub fn find_payables_account(accounts: &[Account]) -> Option<&Account> {
    find_by_name(accounts, AccountType::Liability, "accounts payable")
        .or_else(|| find_by_name(accounts, AccountType::Liability, "payable"))
}

/// Finds the receivables account.
///
/// Prefers an asset named "accounts receivable", then any asset whose name
/// contains "receivable".
#[must_use]
pub fn find_receivables_account(accounts: &[Account]) -> Option<&Account> {
    find_by_name(accounts, AccountType::Asset, "accounts receivable")
        .or_else(|| find_by_name(accounts, AccountType::Asset, "receivable"))
}
