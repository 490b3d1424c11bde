//! Worked examples over small hand-built ledgers.

use chrono::Days;
use rstest::{fixture, rstest};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use super::pack::{GeneratedReport, ReportKind, ReportPack};
use super::params::{ReportParams, TaxRate};
use super::reconcile::IMBALANCE_MESSAGE;
use super::service::ReportService;
use super::test_support::{
    CAPITAL, CASH, COGS, EQUIPMENT, LOAN, PAYABLES, RECEIVABLES, RENT, SALES, SALES_TAX, account,
    chart, cr, date, dr, entry, id, january_2024, range, snapshot,
};
use super::types::{AgingKind, AnalysisKind};
use crate::activity::ActivityCategory;
use crate::aging::AgingBucket;
use crate::ledger::{AccountRole, AccountType, JournalEntry};

/// A month of trading on the standard chart.
#[fixture]
fn trading_month() -> Vec<JournalEntry> {
    vec![
        entry(
            1,
            date(2024, 1, 2),
            "Owner contribution",
            vec![dr(CASH, dec!(20000)), cr(CAPITAL, dec!(20000))],
        ),
        entry(
            2,
            date(2024, 1, 5),
            "Invoice 001",
            vec![
                dr(RECEIVABLES, dec!(5500)),
                cr(SALES, dec!(5000)),
                cr(SALES_TAX, dec!(500)),
            ],
        ),
        entry(
            3,
            date(2024, 1, 10),
            "Stock purchase",
            vec![dr(COGS, dec!(2000)), cr(PAYABLES, dec!(2000))],
        ),
        entry(
            4,
            date(2024, 1, 15),
            "Rent",
            vec![dr(RENT, dec!(1500)), cr(CASH, dec!(1500))],
        ),
        entry(
            5,
            date(2024, 1, 20),
            "Customer payment",
            vec![dr(CASH, dec!(3000)), cr(RECEIVABLES, dec!(3000))],
        ),
    ]
}

// ============================================================================
// Scenario A: income statement with a single sale
// ============================================================================

#[test]
fn test_single_sale_income_statement() {
    let accounts = vec![account(SALES, "4000", "Sales", AccountType::Revenue)];
    let entries = vec![
        entry(1, date(2024, 1, 15), "Sale", vec![cr(SALES, dec!(1000))]),
    ];

    let report = ReportService::generate_income_statement(&accounts, &entries, january_2024());

    assert_eq!(report.revenue.total, dec!(1000));
    assert_eq!(report.cost_of_goods_sold.total, Decimal::ZERO);
    assert_eq!(report.expenses.total, Decimal::ZERO);
    assert_eq!(report.gross_profit, dec!(1000));
    assert_eq!(report.net_income, dec!(1000));
    assert_eq!(report.revenue.accounts[0].raw_balance, dec!(-1000));
    assert!(!report.revenue.accounts[0].is_abnormal);
}

#[rstest]
fn test_income_statement_sections(trading_month: Vec<JournalEntry>) {
    let report = ReportService::generate_income_statement(&chart(), &trading_month, january_2024());

    assert_eq!(report.revenue.total, dec!(5000));
    assert_eq!(report.cost_of_goods_sold.total, dec!(2000));
    assert_eq!(report.gross_profit, dec!(3000));
    assert_eq!(report.expenses.total, dec!(1500));
    assert_eq!(report.net_income, dec!(1500));
}

#[rstest]
#[case(range(date(2024, 1, 1), date(2024, 1, 9)), dec!(5000), dec!(0))]
#[case(range(date(2024, 1, 10), date(2024, 1, 31)), dec!(0), dec!(1500))]
#[case(range(date(2024, 2, 1), date(2024, 2, 29)), dec!(0), dec!(0))]
fn test_income_statement_respects_period(
    trading_month: Vec<JournalEntry>,
    #[case] period: crate::ledger::DateRange,
    #[case] revenue: Decimal,
    #[case] expenses: Decimal,
) {
    let report = ReportService::generate_income_statement(&chart(), &trading_month, period);
    assert_eq!(report.revenue.total, revenue);
    assert_eq!(report.expenses.total, expenses);
}

// ============================================================================
// Scenario B: cash flow classification
// ============================================================================

#[test]
fn test_cash_flow_financing_and_investing() {
    let entries = vec![
        entry(
            1,
            date(2023, 12, 20),
            "Prior sale",
            vec![dr(CASH, dec!(1000)), cr(SALES, dec!(1000))],
        ),
        entry(
            2,
            date(2024, 1, 3),
            "Capital contribution",
            vec![dr(CASH, dec!(5000)), cr(CAPITAL, dec!(5000))],
        ),
        entry(
            3,
            date(2024, 1, 8),
            "Buy equipment",
            vec![dr(EQUIPMENT, dec!(2000)), cr(CASH, dec!(2000))],
        ),
    ];

    let outcome = ReportService::generate_cash_flow(&chart(), &entries, january_2024());
    let report = outcome.ready().unwrap();

    assert_eq!(report.opening_balance, dec!(1000));
    assert_eq!(report.financing_activities, dec!(5000));
    assert_eq!(report.investing_activities, dec!(-2000));
    assert_eq!(report.operating_activities, Decimal::ZERO);
    assert_eq!(report.net_change, dec!(3000));
    assert_eq!(report.closing_balance, report.opening_balance + dec!(3000));
    assert_eq!(report.cash_account.code, "1000");

    let categories: Vec<ActivityCategory> = report.movements.iter().map(|m| m.category).collect();
    assert_eq!(categories, vec![ActivityCategory::Financing, ActivityCategory::Investing]);
}

#[test]
fn test_cash_flow_loan_is_financing_and_unknown_counterpart_is_operating() {
    let entries = vec![
        entry(
            1,
            date(2024, 1, 4),
            "Loan drawdown",
            vec![dr(CASH, dec!(8000)), cr(LOAN, dec!(8000))],
        ),
        entry(
            2,
            date(2024, 1, 9),
            "Mystery receipt",
            vec![dr(CASH, dec!(300)), cr(999, dec!(300))],
        ),
    ];

    let report = ReportService::generate_cash_flow(&chart(), &entries, january_2024())
        .into_ready()
        .unwrap();

    assert_eq!(report.financing_activities, dec!(8000));
    assert_eq!(report.operating_activities, dec!(300));
    assert_eq!(report.closing_balance, dec!(8300));
}

#[test]
fn test_cash_flow_without_cash_account() {
    let accounts = vec![account(SALES, "4000", "Sales", AccountType::Revenue)];
    let outcome = ReportService::generate_cash_flow(&accounts, &[], january_2024());

    assert!(outcome.is_missing_account());
    let json = serde_json::to_value(&outcome).unwrap();
    assert_eq!(json["status"], "missing_account");
    assert_eq!(json["message"], "No cash account found");
}

// ============================================================================
// Scenario C: payables aging
// ============================================================================

#[test]
fn test_payable_45_days_old_lands_in_31_to_60() {
    let reference = date(2024, 3, 1);
    let billed = reference.checked_sub_days(Days::new(45)).unwrap();
    let entries = vec![
        entry(
            1,
            billed,
            "Supplier bill",
            vec![dr(COGS, dec!(500)), cr(PAYABLES, dec!(500))],
        ),
    ];

    let report = ReportService::generate_payables_aging(&chart(), &entries, reference)
        .into_ready()
        .unwrap();

    assert_eq!(report.kind, AgingKind::Payables);
    assert_eq!(report.buckets.days30, dec!(500));
    for bucket in [
        AgingBucket::Current,
        AgingBucket::Days60,
        AgingBucket::Days90,
        AgingBucket::Over90,
    ] {
        assert_eq!(report.buckets.get(bucket), Decimal::ZERO);
    }
    assert_eq!(report.total, dec!(500));
}

#[test]
fn test_payables_payment_reduces_total_but_not_buckets() {
    let reference = date(2024, 6, 30);
    let entries = vec![
        entry(
            1,
            date(2024, 1, 15),
            "Supplier bill",
            vec![dr(COGS, dec!(800)), cr(PAYABLES, dec!(800))],
        ),
        entry(
            2,
            date(2024, 6, 20),
            "Part payment",
            vec![dr(PAYABLES, dec!(300)), cr(CASH, dec!(300))],
        ),
    ];

    let report = ReportService::generate_payables_aging(&chart(), &entries, reference)
        .into_ready()
        .unwrap();

    assert_eq!(report.buckets.over90, dec!(800));
    assert_eq!(report.buckets.current, Decimal::ZERO);
    assert_eq!(report.total, dec!(500));
}

#[test]
fn test_aging_without_payables_account() {
    let accounts = vec![account(CASH, "1000", "Cash", AccountType::Asset)];
    let outcome = ReportService::generate_payables_aging(&accounts, &[], date(2024, 1, 1));
    assert!(matches!(
        outcome,
        super::types::ReportOutcome::MissingAccount { role: AccountRole::AccountsPayable, .. }
    ));
}

// ============================================================================
// Scenario D: balance sheet imbalance plug
// ============================================================================

#[test]
fn test_balance_sheet_plugs_missing_opening_balance() {
    let entries = vec![
        entry(
            1,
            date(2024, 1, 2),
            "Funding",
            vec![
                dr(CASH, dec!(6000)),
                cr(CAPITAL, dec!(4000)),
                cr(LOAN, dec!(2000)),
            ],
        ),
        // Migrated without its opening balance: only 2000 of the equipment is explained.
        entry(
            2,
            date(2024, 1, 5),
            "Equipment on hand",
            vec![dr(EQUIPMENT, dec!(4000)), cr(SALES, dec!(2000))],
        ),
    ];

    let report = ReportService::generate_balance_sheet(&chart(), &entries, date(2024, 1, 31));

    assert_eq!(report.total_assets, dec!(10000));
    assert_eq!(report.total_liabilities, dec!(2000));
    assert_eq!(report.equity_from_accounts, dec!(4000));
    assert_eq!(report.net_income, dec!(2000));
    assert_eq!(report.retained_earnings.opening, dec!(2000));
    assert!(report.imbalance.has_imbalance);
    assert_eq!(report.imbalance.message.as_deref(), Some(IMBALANCE_MESSAGE));
    assert_eq!(report.total_liabilities + report.total_equity, dec!(10000));
}

#[rstest]
fn test_balance_sheet_of_balanced_books(trading_month: Vec<JournalEntry>) {
    let report = ReportService::generate_balance_sheet(&chart(), &trading_month, date(2024, 1, 31));

    // Cash 21500, receivables 2500.
    assert_eq!(report.total_assets, dec!(24000));
    // Payables 2000, sales tax 500.
    assert_eq!(report.total_liabilities, dec!(2500));
    assert_eq!(report.equity_from_accounts, dec!(20000));
    // Revenue 5000 less rent 1500; COGS is not deducted here.
    assert_eq!(report.net_income, dec!(3500));
    assert_eq!(report.retained_earnings.opening, dec!(-2000));
    assert!(report.imbalance.has_imbalance);
    assert_eq!(report.liabilities_and_equity, report.total_assets);
}

#[test]
fn test_balance_sheet_flags_abnormal_balances() {
    let entries = vec![
        entry(
            1,
            date(2024, 1, 2),
            "Overdrawn",
            vec![dr(RENT, dec!(100)), cr(CASH, dec!(100))],
        ),
        entry(
            2,
            date(2024, 1, 3),
            "Supplier overpaid",
            vec![dr(PAYABLES, dec!(40)), cr(RECEIVABLES, dec!(40))],
        ),
    ];

    let report = ReportService::generate_balance_sheet(&chart(), &entries, date(2024, 1, 31));

    let cash = report.assets.accounts.iter().find(|l| l.account_id == id(CASH)).unwrap();
    assert_eq!(cash.amount, dec!(-100));
    assert!(cash.is_abnormal);

    let payables = &report.liabilities.accounts[0];
    assert_eq!(payables.amount, dec!(40));
    assert!(payables.is_abnormal);
    assert_eq!(report.total_liabilities, dec!(-40));
}

#[test]
fn test_balance_sheet_leaves_out_debit_balance_equity() {
    const DRAWINGS: u128 = 11;
    let mut accounts = chart();
    accounts.push(account(DRAWINGS, "3100", "Owner Drawings", AccountType::Equity));
    let entries = vec![
        entry(
            1,
            date(2024, 1, 2),
            "Owner contribution",
            vec![dr(CASH, dec!(10000)), cr(CAPITAL, dec!(10000))],
        ),
        entry(
            2,
            date(2024, 1, 20),
            "Owner drawings",
            vec![dr(DRAWINGS, dec!(1500)), cr(CASH, dec!(1500))],
        ),
    ];

    let report = ReportService::generate_balance_sheet(&accounts, &entries, date(2024, 1, 31));

    assert_eq!(report.total_assets, dec!(8500));
    assert_eq!(report.equity.accounts.len(), 1);
    assert_eq!(report.equity.accounts[0].account_id, id(CAPITAL));
    assert!(report.equity.accounts.iter().all(|l| l.account_id != id(DRAWINGS)));
    assert_eq!(report.equity_from_accounts, dec!(10000));
    assert_eq!(report.net_income, Decimal::ZERO);
    assert_eq!(report.retained_earnings.opening, dec!(-1500));
    assert!(report.imbalance.has_imbalance);
    assert_eq!(report.total_equity, dec!(8500));
    assert_eq!(report.liabilities_and_equity, report.total_assets);
}

// ============================================================================
// Scenario E: receivables with a credit balance
// ============================================================================

#[test]
fn test_receivables_credit_balance_reports_nothing_outstanding() {
    let entries = vec![
        entry(
            1,
            date(2024, 1, 5),
            "Invoice",
            vec![dr(RECEIVABLES, dec!(100)), cr(SALES, dec!(100))],
        ),
        entry(
            2,
            date(2024, 1, 9),
            "Overpayment",
            vec![dr(CASH, dec!(150)), cr(RECEIVABLES, dec!(150))],
        ),
    ];

    let report = ReportService::generate_receivables_aging(&chart(), &entries, date(2024, 2, 1))
        .into_ready()
        .unwrap();

    assert_eq!(report.total, Decimal::ZERO);
    assert_eq!(report.buckets.total(), Decimal::ZERO);
}

#[rstest]
fn test_receivables_aging_buckets(trading_month: Vec<JournalEntry>) {
    let reference = date(2024, 3, 1);
    let report = ReportService::generate_receivables_aging(&chart(), &trading_month, reference)
        .into_ready()
        .unwrap();

    assert_eq!(report.total, dec!(2500));
    // Invoice dated 2024-01-05 is 56 days old.
    assert_eq!(report.buckets.days30, dec!(5500));
    assert_eq!(report.buckets.current, Decimal::ZERO);
}

// ============================================================================
// Trial balance, analysis, tax
// ============================================================================

#[rstest]
fn test_trial_balance_columns(trading_month: Vec<JournalEntry>) {
    let report = ReportService::generate_trial_balance(&chart(), &trading_month, date(2024, 1, 31));

    let codes: Vec<&str> = report.accounts.iter().map(|r| r.code.as_str()).collect();
    assert_eq!(codes, vec!["1000", "1100", "2000", "2210", "3000", "4000", "5000", "6000"]);

    let cash = &report.accounts[0];
    assert_eq!((cash.debit, cash.credit), (dec!(21500), Decimal::ZERO));
    let sales = &report.accounts[5];
    assert_eq!((sales.debit, sales.credit), (Decimal::ZERO, dec!(5000)));

    assert_eq!(report.totals.total_debit, dec!(27500));
    assert_eq!(report.totals.total_credit, dec!(27500));
    assert!(report.totals.is_balanced);
}

#[test]
fn test_trial_balance_reports_difference() {
    let entries = vec![
        entry(
            1,
            date(2024, 1, 2),
            "Half entry",
            vec![dr(CASH, dec!(75.5))],
        ),
    ];
    let report = ReportService::generate_trial_balance(&chart(), &entries, date(2024, 1, 31));

    assert_eq!(report.totals.difference, dec!(75.5));
    assert!(!report.totals.is_balanced);
}

#[test]
fn test_expense_analysis_shares() {
    let utilities = account(11, "6100", "Utilities", AccountType::Expense);
    let supplies = account(12, "6200", "Supplies", AccountType::Expense);
    let mut accounts = chart();
    accounts.extend([utilities, supplies]);
    let entries = vec![
        entry(
            1,
            date(2024, 1, 3),
            "Rent",
            vec![dr(RENT, dec!(600)), cr(CASH, dec!(600))],
        ),
        entry(
            2,
            date(2024, 1, 4),
            "Power",
            vec![dr(11, dec!(300)), cr(CASH, dec!(300))],
        ),
        entry(
            3,
            date(2024, 1, 5),
            "Paper",
            vec![dr(12, dec!(300)), cr(CASH, dec!(300))],
        ),
        entry(
            4,
            date(2024, 1, 6),
            "Stock",
            vec![dr(COGS, dec!(999)), cr(CASH, dec!(999))],
        ),
    ];

    let (period, kind) = (january_2024(), AnalysisKind::Expense);
    let report = ReportService::generate_account_analysis(&accounts, &entries, period, kind);

    let rows: Vec<(&str, Decimal, Decimal)> = report
        .accounts
        .iter()
        .map(|r| (r.code.as_str(), r.amount, r.percent_of_total))
        .collect();
    assert_eq!(
        rows,
        vec![
            ("6000", dec!(600), dec!(50.00)),
            ("6100", dec!(300), dec!(25.00)),
            ("6200", dec!(300), dec!(25.00)),
        ]
    );
    assert_eq!(report.total, dec!(1200));
}

#[test]
fn test_analysis_percent_rounds_to_cents() {
    let mut accounts = chart();
    accounts.push(account(11, "4100", "Services", AccountType::Revenue));
    let entries = vec![
        entry(
            1,
            date(2024, 1, 3),
            "Goods",
            vec![dr(CASH, dec!(2)), cr(SALES, dec!(2))],
        ),
        entry(
            2,
            date(2024, 1, 4),
            "Service",
            vec![dr(CASH, dec!(1)), cr(11, dec!(1))],
        ),
    ];

    let (period, kind) = (january_2024(), AnalysisKind::Revenue);
    let report = ReportService::generate_account_analysis(&accounts, &entries, period, kind);

    assert_eq!(report.accounts[0].percent_of_total, dec!(66.67));
    assert_eq!(report.accounts[1].percent_of_total, dec!(33.33));
}

#[rstest]
#[case(dec!(30), dec!(450))]
#[case(dec!(0), dec!(0))]
#[case(dec!(12.5), dec!(187.5))]
fn test_tax_summary_rates(
    trading_month: Vec<JournalEntry>,
    #[case] percent: Decimal,
    #[case] expected: Decimal,
) {
    let rate = TaxRate::from_percent(percent).unwrap();
    let period = january_2024();
    let report =
        ReportService::generate_tax_summary(&chart(), &trading_month, period, rate, Some("2210"));

    assert_eq!(report.taxable_income, dec!(1500));
    assert_eq!(report.estimated_tax, expected);
    assert_eq!(report.sales_tax_collected, Some(dec!(500)));
    assert!(report.is_estimate);
}

#[test]
fn test_tax_summary_loss_has_no_tax() {
    let entries = vec![
        entry(
            1,
            date(2024, 1, 3),
            "Rent",
            vec![dr(RENT, dec!(900)), cr(CASH, dec!(900))],
        ),
    ];
    let rate = TaxRate::default();
    let report =
        ReportService::generate_tax_summary(&chart(), &entries, january_2024(), rate, Some("9999"));

    assert_eq!(report.taxable_income, dec!(-900));
    assert_eq!(report.estimated_tax, Decimal::ZERO);
    assert_eq!(report.sales_tax_collected, None);
    let json = serde_json::to_value(&report).unwrap();
    assert!(json.get("sales_tax_collected").is_none());
}

// ============================================================================
// General ledger and journal ordering
// ============================================================================

#[test]
fn test_same_day_entries_ordered_by_creation_time() {
    let day = date(2024, 1, 10);
    let entries = vec![
        entry(
            3,
            day,
            "Later",
            vec![dr(CASH, dec!(30)), cr(SALES, dec!(30))],
        ),
        entry(
            1,
            day,
            "Earlier",
            vec![dr(CASH, dec!(10)), cr(SALES, dec!(10))],
        ),
        entry(
            2,
            date(2024, 1, 5),
            "Before",
            vec![dr(CASH, dec!(5)), cr(SALES, dec!(5))],
        ),
    ];

    let ledger = ReportService::generate_general_ledger(&chart(), &entries);
    let cash = &ledger.accounts[0];
    let descriptions: Vec<&str> = cash.postings.iter().map(|p| p.description.as_str()).collect();
    assert_eq!(descriptions, vec!["Before", "Earlier", "Later"]);
    let running: Vec<Decimal> = cash.postings.iter().map(|p| p.running_balance).collect();
    assert_eq!(running, vec![dec!(5), dec!(15), dec!(45)]);

    let journal = ReportService::generate_journal(&entries, january_2024());
    let descriptions: Vec<&str> = journal.entries.iter().map(|e| e.description.as_str()).collect();
    assert_eq!(descriptions, vec!["Before", "Earlier", "Later"]);
    assert_eq!(journal.total_debit, dec!(45));
    assert_eq!(journal.total_credit, dec!(45));
}

#[rstest]
fn test_journal_filters_to_period(trading_month: Vec<JournalEntry>) {
    let period = range(date(2024, 1, 5), date(2024, 1, 15));
    let journal = ReportService::generate_journal(&trading_month, period);
    assert_eq!(journal.entries.len(), 3);
    assert_eq!(journal.entries[0], trading_month[1]);
}

// ============================================================================
// Report pack
// ============================================================================

#[rstest]
fn test_pack_keeps_requested_order(trading_month: Vec<JournalEntry>) {
    let ledger = snapshot(chart(), trading_month);
    let params = ReportParams::new(january_2024(), date(2024, 2, 15));
    let kinds = [ReportKind::TaxSummary, ReportKind::TrialBalance, ReportKind::CashFlow];

    let pack = ReportPack::generate(&ledger, &params, &kinds);

    let produced: Vec<ReportKind> = pack.reports.iter().map(GeneratedReport::kind).collect();
    assert_eq!(produced, kinds);
    assert!(matches!(pack.get(ReportKind::TrialBalance), Some(GeneratedReport::TrialBalance(_))));
    assert!(pack.get(ReportKind::Journal).is_none());

    let json = serde_json::to_value(&pack).unwrap();
    assert_eq!(json["reports"][0]["report_type"], "tax_summary");
    assert_eq!(json["reports"][2]["report"]["status"], "ready");
}

#[test]
fn test_pack_reports_missing_accounts() {
    let ledger = snapshot(vec![account(SALES, "4000", "Sales", AccountType::Revenue)], vec![]);
    let params = ReportParams::new(january_2024(), date(2024, 2, 15));

    let pack = ReportPack::generate(&ledger, &params, &ReportKind::ALL);

    let missing: Vec<ReportKind> = pack
        .reports
        .iter()
        .filter(|r| r.is_missing_account())
        .map(GeneratedReport::kind)
        .collect();
    assert_eq!(
        missing,
        vec![
            ReportKind::CashFlow,
            ReportKind::PayablesAging,
            ReportKind::ReceivablesAging,
        ]
    );
}

#[rstest]
#[case("trial_balance", ReportKind::TrialBalance)]
#[case("Balance-Sheet", ReportKind::BalanceSheet)]
#[case(" receivables_aging ", ReportKind::ReceivablesAging)]
fn test_report_kind_parse(#[case] input: &str, #[case] expected: ReportKind) {
    assert_eq!(input.parse::<ReportKind>().unwrap(), expected);
}

#[test]
fn test_report_kind_parse_rejects_unknown() {
    let err = "profit_and_loss".parse::<ReportKind>().unwrap_err();
    assert_eq!(err.to_string(), "Unknown report kind: profit_and_loss");
    for kind in ReportKind::ALL {
        assert_eq!(kind.to_string().parse::<ReportKind>().unwrap(), kind);
    }
}
