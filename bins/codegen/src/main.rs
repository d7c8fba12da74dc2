//! Currency declaration generator.
//!
//! Reads a currency table and prints the rows of `for_each_currency!` in
//! `tender-shared`, sorted by code, with the minor-unit overrides applied.
//!
//! Usage:
//!   currency-gen currencies.toml > rows.rs
//!   currency-gen --check currencies.toml

mod table;

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "currency-gen")]
#[command(about = "Generates the supported-currency rows of tender-shared")]
struct Cli {
    /// TOML file with one `[[currencies]]` entry per currency
    table: PathBuf,

    /// Compare the table against the compiled-in currency list instead of
    /// printing rows
    #[arg(long)]
    check: bool,
}

fn main() -> anyhow::Result<()> {
    // Logs go to stderr so generated source on stdout stays clean
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "tender=info,currency_gen=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    let table = table::CurrencyTable::load(&cli.table)
        .with_context(|| format!("Failed to load currency table {}", cli.table.display()))?;
    let rows = table.into_rows()?;
    info!(count = rows.len(), "Loaded currency table");

    if cli.check {
        let drift = table::drift(&rows);
        if drift.is_empty() {
            info!("Currency table matches the compiled-in list");
            return Ok(());
        }
        for line in &drift {
            eprintln!("{line}");
        }
        anyhow::bail!("{} currencies differ from the compiled-in list", drift.len());
    }

    print!("{}", table::render(&rows));
    Ok(())
}
