//! Report parameters.

use chrono::NaiveDate;
use folio_shared::types::Currency;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::error::ReportError;
use super::types::DEFAULT_TAX_RATE_PERCENT;
use crate::ledger::DateRange;

/// A tax rate in percent, validated to lie within 0..=100.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Decimal", into = "Decimal")]
pub struct TaxRate(Decimal);

impl TaxRate {
    /// Creates a rate from a percentage such as `30` or `12.5`.
    pub fn from_percent(percent: Decimal) -> Result<Self, ReportError> {
        if percent < Decimal::ZERO || percent > Decimal::ONE_HUNDRED {
            return Err(ReportError::InvalidTaxRate(percent));
        }
        Ok(Self(percent))
    }

    /// The rate in percent.
    #[must_use]
    pub const fn percent(self) -> Decimal {
        self.0
    }

    /// Applies the rate to an amount.
    #[must_use]
    pub fn apply(self, amount: Decimal) -> Decimal {
        amount * self.0 / Decimal::ONE_HUNDRED
    }
}

impl Default for TaxRate {
    fn default() -> Self {
        Self(Decimal::from(DEFAULT_TAX_RATE_PERCENT))
    }
}

impl TryFrom<Decimal> for TaxRate {
    type Error = ReportError;

    fn try_from(percent: Decimal) -> Result<Self, Self::Error> {
        Self::from_percent(percent)
    }
}

impl From<TaxRate> for Decimal {
    fn from(rate: TaxRate) -> Self {
        rate.0
    }
}

/// Everything a report run needs besides the ledger itself.
///
/// The reference date is explicit so that aging stays a pure function of
/// its inputs; callers pass today's date when they want "now".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportParams {
    /// Period for ranged reports; its end date is the as-of date for
    /// cumulative ones.
    pub period: DateRange,
    /// Date aging is measured against.
    pub reference_date: NaiveDate,
    /// Rate for the tax summary.
    #[serde(default)]
    pub tax_rate: TaxRate,
    /// Code of the sales-tax liability account, if any.
    #[serde(default)]
    pub sales_tax_account_code: Option<String>,
    /// Currency all amounts are expressed in.
    #[serde(default)]
    pub currency: Currency,
}

impl ReportParams {
    /// Parameters with the default tax rate and no sales-tax account.
    #[must_use]
    pub fn new(period: DateRange, reference_date: NaiveDate) -> Self {
        Self {
            period,
            reference_date,
            tax_rate: TaxRate::default(),
            sales_tax_account_code: None,
            currency: Currency::default(),
        }
    }

    /// Sets the tax rate.
    #[must_use]
    pub fn with_tax_rate(mut self, tax_rate: TaxRate) -> Self {
        self.tax_rate = tax_rate;
        self
    }

    /// Sets the reporting currency.
    #[must_use]
    pub fn with_currency(mut self, currency: Currency) -> Self {
        self.currency = currency;
        self
    }

    /// Sets the sales-tax account code.
    #[must_use]
    pub fn with_sales_tax_account(mut self, code: impl Into<String>) -> Self {
        self.sales_tax_account_code = Some(code.into());
        self
    }
}
