//! Aging buckets for payables and receivables.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Age band of an open amount, by days elapsed since the transaction.
///
/// Bucket names follow the report columns: `days30` holds 31-60 days,
/// `days60` 61-90, `days90` 91-120 and `over90` anything older.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AgingBucket {
    /// 0-30 days.
    Current,
    /// 31-60 days.
    Days30,
    /// 61-90 days.
    Days60,
    /// 91-120 days.
    Days90,
    /// More than 120 days.
    Over90,
}

impl AgingBucket {
    /// All buckets, youngest first.
    pub const ALL: [Self; 5] = [
        Self::Current,
        Self::Days30,
        Self::Days60,
        Self::Days90,
        Self::Over90,
    ];

    /// Picks the bucket for an age in days.
    ///
    /// Negative ages (transactions dated after the reference date) count as current.
    #[must_use]
    pub const fn for_days(days: i64) -> Self {
        match days {
            i64::MIN..=30 => Self::Current,
            31..=60 => Self::Days30,
            61..=90 => Self::Days60,
            91..=120 => Self::Days90,
            _ => Self::Over90,
        }
    }
}

/// Whole days from `transaction_date` to `reference_date`.
#[must_use]
pub fn days_between(transaction_date: NaiveDate, reference_date: NaiveDate) -> i64 {
    (reference_date - transaction_date).num_days()
}

/// Picks the bucket for a transaction relative to a reference date.
#[must_use]
pub fn bucket_for(transaction_date: NaiveDate, reference_date: NaiveDate) -> AgingBucket {
    AgingBucket::for_days(days_between(transaction_date, reference_date))
}

/// Amounts per aging bucket.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgingBuckets {
    /// 0-30 days.
    pub current: Decimal,
    /// 31-60 days.
    pub days30: Decimal,
    /// 61-90 days.
    pub days60: Decimal,
    /// 91-120 days.
    pub days90: Decimal,
    /// More than 120 days.
    pub over90: Decimal,
}

impl AgingBuckets {
    /// Adds an amount to a bucket.
    ///
    /// Only positive amounts are bucketed; zero and negative amounts are skipped.
    pub fn add(&mut self, bucket: AgingBucket, amount: Decimal) {
        if amount <= Decimal::ZERO {
            return;
        }
        *self.slot_mut(bucket) += amount;
    }

    /// Buckets an amount dated `transaction_date` against `reference_date`.
    pub fn add_dated(
        &mut self,
        amount: Decimal,
        transaction_date: NaiveDate,
        reference_date: NaiveDate,
    ) {
        self.add(bucket_for(transaction_date, reference_date), amount);
    }

    /// Amount held in a bucket.
    #[must_use]
    pub const fn get(&self, bucket: AgingBucket) -> Decimal {
        match bucket {
            AgingBucket::Current => self.current,
            AgingBucket::Days30 => self.days30,
            AgingBucket::Days60 => self.days60,
            AgingBucket::Days90 => self.days90,
            AgingBucket::Over90 => self.over90,
        }
    }

    /// Sum across all buckets.
    #[must_use]
    pub fn total(&self) -> Decimal {
        AgingBucket::ALL.iter().map(|b| self.get(*b)).sum()
    }

    fn slot_mut(&mut self, bucket: AgingBucket) -> &mut Decimal {
        match bucket {
            AgingBucket::Current => &mut self.current,
            AgingBucket::Days30 => &mut self.days30,
            AgingBucket::Days60 => &mut self.days60,
            AgingBucket::Days90 => &mut self.days90,
            AgingBucket::Over90 => &mut self.over90,
        }
    }
}
