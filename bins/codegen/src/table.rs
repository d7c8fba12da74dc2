//! Currency table loading, validation and rendering.

use std::collections::BTreeMap;
use std::fmt::Write;
use std::path::Path;

use anyhow::{bail, ensure};
use config::{Config, ConfigError, File, FileFormat};
use serde::Deserialize;
use tender_shared::CurrencyCode;
use tender_shared::types::DEFAULT_MINOR_UNIT_DIGITS;
use tracing::debug;

/// Currencies whose minor unit is not two digits.
const MINOR_UNIT_OVERRIDES: &[(&str, u32)] = &[
    ("BHD", 3),
    ("BIF", 0),
    ("CLF", 4),
    ("CLP", 0),
    ("DJF", 0),
    ("GNF", 0),
    ("IQD", 3),
    ("ISK", 0),
    ("JOD", 3),
    ("JPY", 0),
    ("KMF", 0),
    ("KRW", 0),
    ("KWD", 3),
    ("LYD", 3),
    ("OMR", 3),
    ("PYG", 0),
    ("RWF", 0),
    ("TND", 3),
    ("UGX", 0),
    ("UYI", 0),
    ("UYW", 4),
    ("VND", 0),
    ("VUV", 0),
    ("XAF", 0),
    ("XOF", 0),
];

/// Indentation of rows inside `for_each_currency!`.
const ROW_INDENT: &str = "            ";

/// Raw contents of a currency table file.
#[derive(Debug, Deserialize)]
pub struct CurrencyTable {
    currencies: Vec<CurrencyEntry>,
}

/// One `[[currencies]]` entry.
#[derive(Debug, Clone, Deserialize)]
pub struct CurrencyEntry {
    code: String,
    name: String,
    plural: Option<String>,
    symbol: Option<String>,
    minor_unit_digits: Option<u32>,
}

/// A validated currency, ready to render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CurrencyRow {
    pub variant: String,
    pub code: String,
    pub minor_unit_digits: u32,
    pub symbol: String,
    pub name: String,
    pub plural: String,
}

impl CurrencyTable {
    /// Loads a TOML table from disk.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        Config::builder()
            .add_source(File::new(&path.to_string_lossy(), FileFormat::Toml))
            .build()?
            .try_deserialize()
    }

    /// Parses a TOML table held in memory.
    pub fn parse(text: &str) -> Result<Self, ConfigError> {
        Config::builder()
            .add_source(File::from_str(text, FileFormat::Toml))
            .build()?
            .try_deserialize()
    }

    /// Validates the entries and returns them sorted by code.
    pub fn into_rows(self) -> anyhow::Result<Vec<CurrencyRow>> {
        let mut rows = BTreeMap::new();

        for entry in self.currencies {
            let code = entry.code.trim().to_string();
            ensure!(
                code.len() == 3 && code.bytes().all(|b| b.is_ascii_uppercase()),
                "Invalid currency code {code:?}: expected three upper-case ASCII letters"
            );
            if rows.contains_key(&code) {
                bail!("Duplicate currency code {code}");
            }

            let minor_unit_digits = entry.minor_unit_digits.unwrap_or_else(|| minor_unit_digits(&code));
            debug!(code, minor_unit_digits, "Accepted currency");

            rows.insert(
                code.clone(),
                CurrencyRow {
                    variant: variant_name(&code),
                    symbol: entry.symbol.unwrap_or_else(|| code.clone()),
                    plural: entry.plural.unwrap_or_else(|| entry.name.clone()),
                    name: entry.name,
                    minor_unit_digits,
                    code,
                },
            );
        }

        Ok(rows.into_values().collect())
    }
}

/// Minor-unit digits from the override table, two otherwise.
pub fn minor_unit_digits(code: &str) -> u32 {
    MINOR_UNIT_OVERRIDES
        .iter()
        .find(|(c, _)| *c == code)
        .map_or(DEFAULT_MINOR_UNIT_DIGITS, |(_, digits)| *digits)
}

/// `EUR` becomes `Eur`.
fn variant_name(code: &str) -> String {
    let mut chars = code.chars();
    chars.next().map_or_else(String::new, |first| {
        first.to_ascii_uppercase().to_string() + &chars.as_str().to_ascii_lowercase()
    })
}

/// Renders rows in the `for_each_currency!` format.
pub fn render(rows: &[CurrencyRow]) -> String {
    let mut out = String::new();
    for row in rows {
        let _ = writeln!(
            out,
            "{ROW_INDENT}({}, {:?}, {}, {:?}, {:?}, {:?}),",
            row.variant, row.code, row.minor_unit_digits, row.symbol, row.name, row.plural
        );
    }
    out
}

/// Differences between `rows` and the compiled-in currency list.
pub fn drift(rows: &[CurrencyRow]) -> Vec<String> {
    let table: BTreeMap<&str, &CurrencyRow> = rows.iter().map(|row| (row.code.as_str(), row)).collect();
    let mut differences = Vec::new();

    for &currency in CurrencyCode::ALL {
        match table.get(currency.as_str()) {
            None => differences.push(format!("{currency}: missing from table")),
            Some(row) if row.minor_unit_digits != currency.minor_unit_digits() => differences.push(format!(
                "{currency}: table has {} minor-unit digits, compiled list has {}",
                row.minor_unit_digits,
                currency.minor_unit_digits()
            )),
            Some(_) => {}
        }
    }

    for row in rows {
        if CurrencyCode::from_code(&row.code).is_none() {
            differences.push(format!("{}: not in compiled list", row.code));
        }
    }

    differences
}
