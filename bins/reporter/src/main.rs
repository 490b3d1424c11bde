//! Folio report generator
//!
//! Reads a ledger snapshot, generates the configured reports and prints them
//! as JSON on stdout. Logs go to stderr.
//!
//! Usage: cargo run --bin folio-report

use std::path::Path;

use anyhow::Context;
use chrono::{NaiveDate, Utc};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use folio_core::ledger::{DateRange, LedgerSnapshot};
use folio_core::reports::{GeneratedReport, ReportKind, ReportPack, ReportParams, TaxRate};
use folio_shared::types::round_money;
use folio_shared::{AppConfig, AppError, AppResult, ReportingConfig};

fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "folio=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    // Load configuration
    let config = AppConfig::load().map_err(AppError::from)?;

    let snapshot_path = &config.ledger.snapshot_path;
    let raw = read_snapshot(snapshot_path)?;
    let snapshot = LedgerSnapshot::from_json(&raw)
        .with_context(|| format!("Invalid ledger snapshot {}", snapshot_path.display()))?;
    info!(
        business_id = %snapshot.business_id,
        accounts = snapshot.accounts.len(),
        entries = snapshot.entries.len(),
        "Loaded ledger snapshot"
    );

    let params = build_params(&config.reporting, Utc::now().date_naive())?;
    let kinds = parse_kinds(&config.reporting.reports)?;

    let pack = ReportPack::generate(&snapshot, &params, &kinds);
    for report in &pack.reports {
        log_summary(report);
    }

    println!("{}", render(&pack, config.output.pretty)?);

    Ok(())
}

fn read_snapshot(path: &Path) -> AppResult<String> {
    if !path.exists() {
        return Err(AppError::NotFound(format!("ledger snapshot {}", path.display())));
    }
    Ok(std::fs::read_to_string(path)?)
}

fn render(pack: &ReportPack, pretty: bool) -> AppResult<String> {
    let json = if pretty {
        serde_json::to_string_pretty(pack)?
    } else {
        serde_json::to_string(pack)?
    };
    Ok(json)
}

/// Builds report parameters from configuration.
///
/// `today` is the fallback reference date.
fn build_params(reporting: &ReportingConfig, today: NaiveDate) -> AppResult<ReportParams> {
    let reference_date = reporting.reference_date_or(today);
    let (start, end) = reporting.period_or(reference_date);
    let period = DateRange::new(start, end).map_err(|e| AppError::Validation(e.to_string()))?;
    let tax_rate = TaxRate::from_percent(reporting.default_tax_rate_percent)
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let mut params = ReportParams::new(period, reference_date)
        .with_tax_rate(tax_rate)
        .with_currency(reporting.currency);
    if !reporting.sales_tax_account_code.is_empty() {
        params = params.with_sales_tax_account(reporting.sales_tax_account_code.clone());
    }
    Ok(params)
}

/// Parses report names; an empty list selects every report.
fn parse_kinds(names: &[String]) -> AppResult<Vec<ReportKind>> {
    if names.is_empty() {
        return Ok(ReportKind::ALL.to_vec());
    }
    names
        .iter()
        .map(|name| {
            name.parse::<ReportKind>()
                .map_err(|e| AppError::Validation(e.to_string()))
        })
        .collect()
}

fn log_summary(report: &GeneratedReport) {
    let kind = report.kind();
    match report {
        GeneratedReport::TrialBalance(tb) => info!(
            %kind,
            total_debit = %round_money(tb.totals.total_debit),
            total_credit = %round_money(tb.totals.total_credit),
            is_balanced = tb.totals.is_balanced,
            "Report ready"
        ),
        GeneratedReport::IncomeStatement(is) => {
            info!(%kind, net_income = %round_money(is.net_income), "Report ready");
        }
        GeneratedReport::BalanceSheet(bs) => {
            info!(%kind, total_assets = %round_money(bs.total_assets), "Report ready");
            if let Some(message) = &bs.imbalance.message {
                warn!(amount = %round_money(bs.imbalance.amount), "{message}");
            }
        }
        GeneratedReport::TaxSummary(tax) => info!(
            %kind,
            estimated_tax = %round_money(tax.estimated_tax),
            "Report ready (estimate only)"
        ),
        other if other.is_missing_account() => {
            warn!(%kind, "Report skipped: special account not found");
        }
        _ => info!(%kind, "Report ready"),
    }
}
