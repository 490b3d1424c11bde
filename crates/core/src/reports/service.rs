//! Report generation service.
//!
//! Every generator is a pure function of the accounts and entries it is
//! given. Generators never mutate their inputs and never read another
//! generator's output, so any number of them can run concurrently over the
//! same snapshot.

use chrono::NaiveDate;
use folio_shared::types::round_money;
use rust_decimal::Decimal;
use tracing::{debug, warn};

use super::params::TaxRate;
use super::reconcile::reconcile_equity;
use super::types::{
    AccountAnalysisReport, AnalysisKind, AnalysisRow, BALANCE_TOLERANCE, BalanceSheetReport,
    IncomeStatementReport, StatementLine, StatementSection, TaxSummaryReport,
    TrialBalanceReport, TrialBalanceRow, TrialBalanceTotals,
};
use crate::ledger::{
    Account, AccountType, DateRange, JournalEntry, TrialColumn, compute_balance,
    compute_balance_in_range, find_by_code, resolve,
};

/// Caveat attached to every tax summary.
pub const TAX_DISCLAIMER: &str =
    "Estimated tax only. This is not a filing-grade computation; consult a tax professional.";

/// Service for generating financial reports.
pub struct ReportService;

/// Accounts sorted by code. The sort is stable, so duplicate codes keep
/// their supplied order.
pub(crate) fn by_code(accounts: &[Account]) -> Vec<&Account> {
    let mut sorted: Vec<&Account> = accounts.iter().collect();
    sorted.sort_by(|a, b| a.code.cmp(&b.code));
    sorted
}

fn statement_line(account: &Account, raw_balance: Decimal, amount: Decimal) -> StatementLine {
    StatementLine {
        account_id: account.id,
        code: account.code.clone(),
        name: account.name.clone(),
        account_type: account.account_type,
        amount,
        raw_balance,
        is_abnormal: resolve(account.account_type, raw_balance).is_abnormal,
    }
}

/// Sum of absolute ranged balances over accounts of one type.
fn sum_abs_in_range(
    accounts: &[Account],
    entries: &[JournalEntry],
    period: DateRange,
    account_type: AccountType,
) -> Decimal {
    accounts
        .iter()
        .filter(|a| a.account_type == account_type)
        .map(|a| compute_balance_in_range(a.id, entries, period).balance.abs())
        .sum()
}

/// Sum of absolute cumulative balances over accounts of one type.
fn sum_abs_as_of(
    accounts: &[Account],
    entries: &[JournalEntry],
    as_of: NaiveDate,
    account_type: AccountType,
) -> Decimal {
    accounts
        .iter()
        .filter(|a| a.account_type == account_type)
        .map(|a| compute_balance(a.id, entries, Some(as_of)).balance.abs())
        .sum()
}

impl ReportService {
    /// Generates a trial balance as of a date.
    ///
    /// Every account's cumulative balance goes to the debit column when
    /// positive and the credit column when negative; zero balances are left
    /// off, so the two columns agree by construction on a well-formed ledger.
    /// A mismatch therefore signals a data problem and is reported through
    /// `is_balanced` rather than hidden.
    #[must_use]
    pub fn generate_trial_balance(
        accounts: &[Account],
        entries: &[JournalEntry],
        as_of: NaiveDate,
    ) -> TrialBalanceReport {
        let mut rows = Vec::new();
        let mut total_debit = Decimal::ZERO;
        let mut total_credit = Decimal::ZERO;

        for account in by_code(accounts) {
            let totals = compute_balance(account.id, entries, Some(as_of));
            let column = TrialColumn::for_balance(totals.balance);
            if column == TrialColumn::Omitted {
                continue;
            }

            total_debit += column.debit();
            total_credit += column.credit();
            rows.push(TrialBalanceRow {
                account_id: account.id,
                code: account.code.clone(),
                name: account.name.clone(),
                account_type: account.account_type,
                debit: column.debit(),
                credit: column.credit(),
            });
        }

        let difference = total_debit - total_credit;
        let is_balanced = difference.abs() < BALANCE_TOLERANCE;
        if !is_balanced {
            warn!(
                %as_of,
                %total_debit,
                %total_credit,
                %difference,
                "Trial balance is out of balance"
            );
        }
        debug!(%as_of, accounts = rows.len(), "Generated trial balance");

        TrialBalanceReport {
            as_of,
            accounts: rows,
            totals: TrialBalanceTotals {
                total_debit,
                total_credit,
                difference,
                is_balanced,
            },
        }
    }

    /// Generates an income statement for a period.
    ///
    /// Revenue, COGS and expense accounts are listed at the absolute value
    /// of their ranged balance; accounts with no net movement are dropped.
    #[must_use]
    pub fn generate_income_statement(
        accounts: &[Account],
        entries: &[JournalEntry],
        period: DateRange,
    ) -> IncomeStatementReport {
        let mut revenue = StatementSection::default();
        let mut cogs = StatementSection::default();
        let mut expenses = StatementSection::default();

        for account in by_code(accounts) {
            if !account.account_type.is_income_statement() {
                continue;
            }
            let balance = compute_balance_in_range(account.id, entries, period).balance;
            if balance.is_zero() {
                continue;
            }

            let amount = balance.abs();
            let line = statement_line(account, balance, amount);
            match account.account_type {
                AccountType::Revenue => revenue.push(line, amount),
                AccountType::Cogs => cogs.push(line, amount),
                AccountType::Expense => expenses.push(line, amount),
                AccountType::Asset | AccountType::Liability | AccountType::Equity => {}
            }
        }

        let gross_profit = revenue.total - cogs.total;
        let net_income = gross_profit - expenses.total;
        debug!(
            start = %period.start_date(),
            end = %period.end_date(),
            %net_income,
            "Generated income statement"
        );

        IncomeStatementReport {
            period,
            revenue,
            cost_of_goods_sold: cogs,
            gross_profit,
            expenses,
            net_income,
        }
    }

    /// Generates a balance sheet as of a date (cumulative since inception).
    ///
    /// - Assets: raw balance, negative balances kept and flagged abnormal.
    /// - Liabilities: magnitude shown, debit balances flagged abnormal; the
    ///   section total is credit-positive (credit - debit).
    /// - Equity: only accounts with a credit balance.
    ///
    /// Net income here is revenue minus expenses to date and leaves COGS
    /// out, unlike the income statement. Opening retained earnings are then
    /// inferred so that liabilities plus equity equal assets; a material
    /// plug is flagged in `imbalance`.
    #[must_use]
    pub fn generate_balance_sheet(
        accounts: &[Account],
        entries: &[JournalEntry],
        as_of: NaiveDate,
    ) -> BalanceSheetReport {
        let mut assets = StatementSection::default();
        let mut liabilities = StatementSection::default();
        let mut equity = StatementSection::default();

        for account in by_code(accounts) {
            let balance = compute_balance(account.id, entries, Some(as_of)).balance;
            match account.account_type {
                AccountType::Asset if !balance.is_zero() => {
                    assets.push(statement_line(account, balance, balance), balance);
                }
                AccountType::Liability if !balance.is_zero() => {
                    liabilities.push(statement_line(account, balance, balance.abs()), -balance);
                }
                AccountType::Equity if balance < Decimal::ZERO => {
                    equity.push(statement_line(account, balance, balance.abs()), balance.abs());
                }
                _ => {}
            }
        }

        let net_income = sum_abs_as_of(accounts, entries, as_of, AccountType::Revenue)
            - sum_abs_as_of(accounts, entries, as_of, AccountType::Expense);

        let total_assets = assets.total;
        let total_liabilities = liabilities.total;
        let equity_from_accounts = equity.total;
        let reconciliation =
            reconcile_equity(total_assets, total_liabilities, equity_from_accounts, net_income);

        if reconciliation.imbalance.has_imbalance {
            warn!(
                %as_of,
                imbalance = %reconciliation.imbalance.amount,
                "Balance sheet plugged with opening retained earnings"
            );
        }
        debug!(%as_of, %total_assets, "Generated balance sheet");

        BalanceSheetReport {
            as_of,
            assets,
            liabilities,
            equity,
            total_assets,
            total_liabilities,
            equity_from_accounts,
            net_income,
            total_equity: reconciliation.total_equity,
            liabilities_and_equity: total_liabilities + reconciliation.total_equity,
            retained_earnings: reconciliation.retained_earnings,
            imbalance: reconciliation.imbalance,
        }
    }

    /// Generates an expense or revenue analysis for a period.
    ///
    /// Accounts are listed at the absolute value of their ranged balance,
    /// largest first, with their share of the total.
    #[must_use]
    pub fn generate_account_analysis(
        accounts: &[Account],
        entries: &[JournalEntry],
        period: DateRange,
        kind: AnalysisKind,
    ) -> AccountAnalysisReport {
        let account_type = kind.account_type();
        let mut rows: Vec<AnalysisRow> = by_code(accounts)
            .into_iter()
            .filter(|a| a.account_type == account_type)
            .filter_map(|account| {
                let amount = compute_balance_in_range(account.id, entries, period)
                    .balance
                    .abs();
                (!amount.is_zero()).then(|| AnalysisRow {
                    account_id: account.id,
                    code: account.code.clone(),
                    name: account.name.clone(),
                    amount,
                    percent_of_total: Decimal::ZERO,
                })
            })
            .collect();

        rows.sort_by(|a, b| b.amount.cmp(&a.amount));

        let total: Decimal = rows.iter().map(|r| r.amount).sum();
        if !total.is_zero() {
            for row in &mut rows {
                row.percent_of_total = round_money(row.amount / total * Decimal::ONE_HUNDRED);
            }
        }

        AccountAnalysisReport {
            kind,
            period,
            accounts: rows,
            total,
        }
    }

    /// Generates a tax summary for a period.
    ///
    /// Totals are computed the same way as the income statement. The
    /// estimate is `taxable_income * rate` when taxable income is positive
    /// and zero otherwise. When `sales_tax_account_code` names an existing
    /// account, its credit-minus-debit movement over the period is reported
    /// as sales tax collected.
    #[must_use]
    pub fn generate_tax_summary(
        accounts: &[Account],
        entries: &[JournalEntry],
        period: DateRange,
        tax_rate: TaxRate,
        sales_tax_account_code: Option<&str>,
    ) -> TaxSummaryReport {
        let total_revenue = sum_abs_in_range(accounts, entries, period, AccountType::Revenue);
        let total_cogs = sum_abs_in_range(accounts, entries, period, AccountType::Cogs);
        let total_expenses = sum_abs_in_range(accounts, entries, period, AccountType::Expense);

        let gross_profit = total_revenue - total_cogs;
        let taxable_income = gross_profit - total_expenses;
        let estimated_tax = if taxable_income > Decimal::ZERO {
            tax_rate.apply(taxable_income)
        } else {
            Decimal::ZERO
        };

        let sales_tax_collected = sales_tax_account_code
            .and_then(|code| find_by_code(accounts, code))
            .map(|account| compute_balance_in_range(account.id, entries, period).credit_balance());

        TaxSummaryReport {
            period,
            total_revenue,
            total_cogs,
            gross_profit,
            total_expenses,
            taxable_income,
            tax_rate_percent: tax_rate.percent(),
            estimated_tax,
            sales_tax_collected,
            is_estimate: true,
            disclaimer: TAX_DISCLAIMER.to_string(),
        }
    }
}
