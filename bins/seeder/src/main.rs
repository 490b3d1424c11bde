//! Demo ledger seeder for Folio development and testing.
//!
//! Writes a small trading business ledger to the configured snapshot path.
//! Entry dates are relative to today so the aging reports have something
//! in every bucket. One equipment entry is deliberately missing its opening
//! balance so the balance sheet shows the imbalance advisory.
//!
//! Usage: cargo run --bin seeder

use std::path::Path;

use anyhow::Context;
use chrono::{DateTime, Duration, NaiveDate, Utc};
use rust_decimal::Decimal;

use folio_core::ledger::{Account, AccountType, JournalEntry, JournalLine, LedgerSnapshot};
use folio_shared::AppConfig;
use folio_shared::types::{AccountId, BusinessId, JournalEntryId};

fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let config = AppConfig::load().context("Failed to load configuration")?;
    let path = config.ledger.snapshot_path.as_path();

    if path.exists() {
        println!("  Snapshot {} already exists, skipping...", path.display());
        return Ok(());
    }

    println!("Building demo ledger...");
    let snapshot = demo_snapshot(Utc::now());

    println!("Writing snapshot to {}...", path.display());
    write_snapshot(path, &snapshot)?;

    println!(
        "Seeding complete! {} accounts, {} entries",
        snapshot.accounts.len(),
        snapshot.entries.len()
    );
    Ok(())
}

fn write_snapshot(path: &Path, snapshot: &LedgerSnapshot) -> anyhow::Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create {}", parent.display()))?;
    }
    let json = serde_json::to_string_pretty(snapshot)?;
    std::fs::write(path, json).with_context(|| format!("Failed to write {}", path.display()))?;
    Ok(())
}

/// Chart of accounts for the demo business.
struct Chart {
    cash: Account,
    receivables: Account,
    equipment: Account,
    payables: Account,
    sales_tax: Account,
    loan: Account,
    capital: Account,
    sales: Account,
    cogs: Account,
    rent: Account,
    utilities: Account,
}

impl Chart {
    fn new() -> Self {
        Self {
            cash: Account::new("1000", "Cash at Bank", AccountType::Asset),
            receivables: Account::new("1100", "Accounts Receivable", AccountType::Asset),
            equipment: Account::new("1500", "Office Equipment", AccountType::Asset),
            payables: Account::new("2000", "Accounts Payable", AccountType::Liability),
            sales_tax: Account::new("2210", "Sales Tax Payable", AccountType::Liability),
            loan: Account::new("2500", "Bank Loan", AccountType::Liability),
            capital: Account::new("3000", "Owner's Capital", AccountType::Equity),
            sales: Account::new("4000", "Sales Revenue", AccountType::Revenue),
            cogs: Account::new("5000", "Cost of Goods Sold", AccountType::Cogs),
            rent: Account::new("6000", "Rent Expense", AccountType::Expense),
            utilities: Account::new("6100", "Utilities Expense", AccountType::Expense),
        }
    }

    fn into_accounts(self) -> Vec<Account> {
        vec![
            self.cash,
            self.receivables,
            self.equipment,
            self.payables,
            self.sales_tax,
            self.loan,
            self.capital,
            self.sales,
            self.cogs,
            self.rent,
            self.utilities,
        ]
    }
}

/// Builds entries dated `days_ago` before `now`.
struct EntryWriter {
    now: DateTime<Utc>,
    entries: Vec<JournalEntry>,
}

impl EntryWriter {
    fn post(
        &mut self,
        days_ago: i64,
        description: &str,
        reference: Option<&str>,
        lines: Vec<JournalLine>,
    ) {
        let sequence = i64::try_from(self.entries.len()).unwrap_or_default();
        let created_at = self.now - Duration::days(days_ago) + Duration::seconds(sequence);
        let entry_date: NaiveDate = created_at.date_naive();
        self.entries.push(JournalEntry {
            id: JournalEntryId::new(),
            entry_date,
            description: description.to_string(),
            reference_number: reference.map(str::to_string),
            created_at,
            is_posted: true,
            lines,
        });
    }
}

fn dr(account: AccountId, amount: i64) -> JournalLine {
    JournalLine::debit(account, Decimal::from(amount))
}

fn cr(account: AccountId, amount: i64) -> JournalLine {
    JournalLine::credit(account, Decimal::from(amount))
}

/// Builds the demo ledger as of `now`.
fn demo_snapshot(now: DateTime<Utc>) -> LedgerSnapshot {
    let chart = Chart::new();
    let mut writer = EntryWriter {
        now,
        entries: Vec::new(),
    };

    writer.post(
        150,
        "Owner contribution",
        None,
        vec![dr(chart.cash.id, 25_000), cr(chart.capital.id, 25_000)],
    );
    // Brought forward from the previous system without its opening-balance entry.
    writer.post(
        150,
        "Equipment brought forward",
        None,
        vec![dr(chart.equipment.id, 3_000)],
    );
    writer.post(
        140,
        "Bank loan drawdown",
        Some("LN-001"),
        vec![dr(chart.cash.id, 10_000), cr(chart.loan.id, 10_000)],
    );
    writer.post(
        130,
        "Purchase delivery van",
        Some("PO-0001"),
        vec![dr(chart.equipment.id, 8_000), cr(chart.cash.id, 8_000)],
    );
    writer.post(
        125,
        "Stock from Acme Wholesale",
        Some("BILL-0417"),
        vec![dr(chart.cogs.id, 4_000), cr(chart.payables.id, 4_000)],
    );
    writer.post(
        60,
        "Invoice to Northwind",
        Some("INV-0001"),
        vec![
            dr(chart.receivables.id, 11_000),
            cr(chart.sales.id, 10_000),
            cr(chart.sales_tax.id, 1_000),
        ],
    );
    writer.post(
        45,
        "Stock from Globex",
        Some("BILL-0502"),
        vec![dr(chart.cogs.id, 1_500), cr(chart.payables.id, 1_500)],
    );
    writer.post(
        40,
        "Office rent",
        None,
        vec![dr(chart.rent.id, 2_000), cr(chart.cash.id, 2_000)],
    );
    writer.post(
        20,
        "Northwind part payment",
        Some("INV-0001"),
        vec![dr(chart.cash.id, 6_000), cr(chart.receivables.id, 6_000)],
    );
    writer.post(
        12,
        "Invoice to Contoso",
        Some("INV-0002"),
        vec![
            dr(chart.receivables.id, 2_200),
            cr(chart.sales.id, 2_000),
            cr(chart.sales_tax.id, 200),
        ],
    );
    writer.post(
        10,
        "Electricity",
        None,
        vec![dr(chart.utilities.id, 350), cr(chart.cash.id, 350)],
    );
    writer.post(
        5,
        "Pay Globex",
        Some("BILL-0502"),
        vec![dr(chart.payables.id, 1_500), cr(chart.cash.id, 1_500)],
    );

    LedgerSnapshot {
        business_id: BusinessId::new(),
        accounts: chart.into_accounts(),
        entries: writer.entries,
    }
}
