//! Shared types, errors, configuration and currency data for Tender.
//!
//! This crate provides the pieces every other crate builds on:
//! - The supported-currency enumeration, declared once in [`for_each_currency!`]
//! - Locale identifiers
//! - The Currency Registry: minor units, symbols, names and formatting
//! - Library-wide error types
//! - Configuration management

pub mod config;
pub mod error;
pub mod registry;
pub mod types;

pub use config::TenderConfig;
pub use error::{MoneyError, MoneyResult};
pub use types::{CurrencyCode, Locale};
