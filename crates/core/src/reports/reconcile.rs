//! Opening retained earnings inference for the balance sheet.
//!
//! Ledgers that start mid-life often lack opening-balance entries, so the
//! recorded liabilities, equity and income do not add up to the recorded
//! assets. The balance sheet closes that gap with an explicit plug labelled
//! as opening retained earnings and flags it to the caller.

use rust_decimal::Decimal;

use super::types::{BALANCE_TOLERANCE, ImbalanceAdvisory, RetainedEarnings};

/// Advisory shown when the plug is material.
pub const IMBALANCE_MESSAGE: &str = "Assets do not equal liabilities plus equity from the recorded \
     entries. The difference has been shown as opening retained earnings; this usually means \
     opening-balance journal entries are missing.";

/// Output of the reconciliation step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EquityReconciliation {
    /// Retained earnings with the inferred opening amount.
    pub retained_earnings: RetainedEarnings,
    /// Equity accounts plus retained earnings.
    pub total_equity: Decimal,
    /// Advisory describing the plug.
    pub imbalance: ImbalanceAdvisory,
}

/// Infers opening retained earnings so that assets equal liabilities plus equity.
///
/// ```text
/// imbalance        = assets - (liabilities + equity_from_accounts + net_income)
/// opening RE       = imbalance
/// total RE         = opening RE + net_income
/// total equity     = equity_from_accounts + total RE
/// ```
///
/// `liabilities + total_equity == total_assets` holds exactly afterwards.
#[must_use]
pub fn reconcile_equity(
    total_assets: Decimal,
    total_liabilities: Decimal,
    equity_from_accounts: Decimal,
    net_income: Decimal,
) -> EquityReconciliation {
    let preliminary_total = total_liabilities + equity_from_accounts + net_income;
    let imbalance = total_assets - preliminary_total;
    let has_imbalance = imbalance.abs() > BALANCE_TOLERANCE;

    let retained_earnings = RetainedEarnings {
        opening: imbalance,
        net_income,
        total: imbalance + net_income,
    };
    let total_equity = equity_from_accounts + retained_earnings.total;

    EquityReconciliation {
        retained_earnings,
        total_equity,
        imbalance: ImbalanceAdvisory {
            amount: imbalance,
            has_imbalance,
            message: has_imbalance.then(|| IMBALANCE_MESSAGE.to_string()),
        },
    }
}
