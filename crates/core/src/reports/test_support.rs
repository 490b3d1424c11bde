//! Ledger builders shared by the report tests.

use chrono::{NaiveDate, TimeZone, Utc};
use folio_shared::types::{AccountId, BusinessId, JournalEntryId};
use rust_decimal::Decimal;
use uuid::Uuid;

use crate::ledger::{Account, AccountType, DateRange, JournalEntry, JournalLine, LedgerSnapshot};

pub(crate) const CASH: u128 = 1;
pub(crate) const RECEIVABLES: u128 = 2;
pub(crate) const EQUIPMENT: u128 = 3;
pub(crate) const PAYABLES: u128 = 4;
pub(crate) const SALES_TAX: u128 = 5;
pub(crate) const LOAN: u128 = 6;
pub(crate) const CAPITAL: u128 = 7;
pub(crate) const SALES: u128 = 8;
pub(crate) const COGS: u128 = 9;
pub(crate) const RENT: u128 = 10;

pub(crate) fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

pub(crate) fn range(start: NaiveDate, end: NaiveDate) -> DateRange {
    DateRange::new(start, end).unwrap()
}

pub(crate) fn january_2024() -> DateRange {
    range(date(2024, 1, 1), date(2024, 1, 31))
}

pub(crate) fn id(n: u128) -> AccountId {
    AccountId::from_uuid(Uuid::from_u128(n))
}

pub(crate) fn account(n: u128, code: &str, name: &str, account_type: AccountType) -> Account {
    Account {
        id: id(n),
        code: code.to_string(),
        name: name.to_string(),
        account_type,
    }
}

/// A small trading business chart, deliberately listed out of code order.
pub(crate) fn chart() -> Vec<Account> {
    vec![
        account(RENT, "6000", "Rent Expense", AccountType::Expense),
        account(CASH, "1000", "Cash at Bank", AccountType::Asset),
        account(RECEIVABLES, "1100", "Accounts Receivable", AccountType::Asset),
        account(EQUIPMENT, "1500", "Office Equipment", AccountType::Asset),
        account(SALES_TAX, "2210", "Sales Tax Payable", AccountType::Liability),
        account(PAYABLES, "2000", "Accounts Payable", AccountType::Liability),
        account(LOAN, "2500", "Bank Loan", AccountType::Liability),
        account(CAPITAL, "3000", "Owner's Capital", AccountType::Equity),
        account(SALES, "4000", "Sales", AccountType::Revenue),
        account(COGS, "5000", "Cost of Goods Sold", AccountType::Cogs),
    ]
}

/// Builds an entry whose id and creation time derive from `seq`.
pub(crate) fn entry(
    seq: i64,
    entry_date: NaiveDate,
    description: &str,
    lines: Vec<JournalLine>,
) -> JournalEntry {
    JournalEntry {
        id: JournalEntryId::from_uuid(Uuid::from_u128(10_000 + u128::from(seq.unsigned_abs()))),
        entry_date,
        description: description.to_string(),
        reference_number: None,
        created_at: Utc.timestamp_opt(1_700_000_000 + seq, 0).unwrap(),
        is_posted: true,
        lines,
    }
}

pub(crate) fn dr(n: u128, amount: Decimal) -> JournalLine {
    JournalLine::debit(id(n), amount)
}

pub(crate) fn cr(n: u128, amount: Decimal) -> JournalLine {
    JournalLine::credit(id(n), amount)
}

pub(crate) fn snapshot(accounts: Vec<Account>, entries: Vec<JournalEntry>) -> LedgerSnapshot {
    LedgerSnapshot {
        business_id: BusinessId::from_uuid(Uuid::from_u128(42)),
        accounts,
        entries,
    }
}
