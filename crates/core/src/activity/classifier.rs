//! Cash-flow activity classification.

use serde::{Deserialize, Serialize};

use crate::ledger::{Account, AccountType};

/// Cash-flow statement section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActivityCategory {
    /// Day-to-day trading.
    Operating,
    /// Purchase or sale of long-lived assets.
    Investing,
    /// Owner contributions, draws and borrowing.
    Financing,
}

fn is_investing(account: &Account) -> bool {
    account.name_contains("equipment") || account.name_contains("property")
}

fn is_financing(account: &Account) -> bool {
    account.account_type == AccountType::Equity || account.name_contains("loan")
}

/// Classifies a cash movement by the accounts on the other side of its entry.
///
/// `counterparts` are the accounts of the entry's non-cash lines. The rules
/// run as independent passes over all of them, in priority order:
///
/// 1. any Revenue or Expense account -> operating
/// 2. any account named like "equipment" or "property" -> investing
/// 3. any Equity account, or one named like "loan" -> financing
/// 4. otherwise -> operating
///
/// Line order therefore never matters.
#[must_use]
pub fn classify(counterparts: &[&Account]) -> ActivityCategory {
    if counterparts
        .iter()
        .any(|a| matches!(a.account_type, AccountType::Revenue | AccountType::Expense))
    {
        ActivityCategory::Operating
    } else if counterparts.iter().any(|a| is_investing(a)) {
        ActivityCategory::Investing
    } else if counterparts.iter().any(|a| is_financing(a)) {
        ActivityCategory::Financing
    } else {
        ActivityCategory::Operating
    }
}
