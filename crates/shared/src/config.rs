//! Application configuration management.

use std::path::PathBuf;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Deserialize;

use crate::types::Currency;

/// Application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Where the ledger snapshot comes from.
    #[serde(default)]
    pub ledger: LedgerSourceConfig,
    /// Report selection and parameters.
    #[serde(default)]
    pub reporting: ReportingConfig,
    /// Output formatting.
    #[serde(default)]
    pub output: OutputConfig,
}

/// Ledger snapshot source.
#[derive(Debug, Clone, Deserialize)]
pub struct LedgerSourceConfig {
    /// Path to a JSON ledger snapshot.
    #[serde(default = "default_snapshot_path")]
    pub snapshot_path: PathBuf,
}

impl Default for LedgerSourceConfig {
    fn default() -> Self {
        Self {
            snapshot_path: default_snapshot_path(),
        }
    }
}

fn default_snapshot_path() -> PathBuf {
    PathBuf::from("data/ledger.json")
}

/// Report selection and parameters.
#[derive(Debug, Clone, Deserialize)]
pub struct ReportingConfig {
    /// Reporting currency. All amounts are assumed to be in it.
    #[serde(default)]
    pub currency: Currency,
    /// Tax rate used by the tax summary, in percent.
    #[serde(default = "default_tax_rate_percent")]
    pub default_tax_rate_percent: Decimal,
    /// Code of the sales-tax liability account.
    #[serde(default = "default_sales_tax_account_code")]
    pub sales_tax_account_code: String,
    /// First day of the reporting period (defaults to January 1st of the period end's year).
    #[serde(default)]
    pub period_start: Option<NaiveDate>,
    /// Last day of the reporting period (defaults to the reference date).
    #[serde(default)]
    pub period_end: Option<NaiveDate>,
    /// Date aging is measured against (defaults to today).
    #[serde(default)]
    pub reference_date: Option<NaiveDate>,
    /// Report kinds to generate; empty means all of them.
    #[serde(default)]
    pub reports: Vec<String>,
}

impl Default for ReportingConfig {
    fn default() -> Self {
        Self {
            currency: Currency::default(),
            default_tax_rate_percent: default_tax_rate_percent(),
            sales_tax_account_code: default_sales_tax_account_code(),
            period_start: None,
            period_end: None,
            reference_date: None,
            reports: Vec::new(),
        }
    }
}

fn default_tax_rate_percent() -> Decimal {
    Decimal::from(30)
}

fn default_sales_tax_account_code() -> String {
    "2210".to_string()
}

/// Output formatting.
#[derive(Debug, Clone, Deserialize)]
pub struct OutputConfig {
    /// Pretty-print JSON output.
    #[serde(default = "default_pretty")]
    pub pretty: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            pretty: default_pretty(),
        }
    }
}

const fn default_pretty() -> bool {
    true
}

impl ReportingConfig {
    /// Resolves the reference date, falling back to `today`.
    #[must_use]
    pub fn reference_date_or(&self, today: NaiveDate) -> NaiveDate {
        self.reference_date.unwrap_or(today)
    }

    /// Resolves the reporting period.
    ///
    /// A missing end defaults to `reference`. A missing start defaults to
    /// January 1st of the resolved end's year.
    #[must_use]
    pub fn period_or(&self, reference: NaiveDate) -> (NaiveDate, NaiveDate) {
        use chrono::Datelike;

        let end = self.period_end.unwrap_or(reference);
        let start = self
            .period_start
            .unwrap_or_else(|| NaiveDate::from_ymd_opt(end.year(), 1, 1).unwrap_or(end));
        (start, end)
    }
}

impl AppConfig {
    /// Loads configuration from environment and config files.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be loaded.
    pub fn load() -> Result<Self, config::ConfigError> {
        let run_mode = std::env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());

        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{run_mode}")).required(false))
            .add_source(
                config::Environment::with_prefix("FOLIO")
                    .separator("__")
                    .list_separator(",")
                    .with_list_parse_key("reporting.reports")
                    .try_parsing(true),
            )
            .build()?;

        config.try_deserialize()
    }
}
