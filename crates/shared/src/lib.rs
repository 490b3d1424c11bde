//! Shared types, errors, and configuration for Folio.
//!
//! This crate provides common types used across all other crates:
//! - Typed IDs for type-safe entity references
//! - Reporting currency and presentation rounding
//! - Application-wide error types
//! - Configuration management

pub mod config;
pub mod error;
pub mod types;

pub use config::{AppConfig, LedgerSourceConfig, OutputConfig, ReportingConfig};
pub use error::{AppError, AppResult};
