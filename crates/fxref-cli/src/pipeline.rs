//! The one pipeline this binary runs: fetch both feeds, reduce to the
//! target currencies, render, write.

use std::path::{Path, PathBuf};

use log::debug;

use fxref_core::{compute_means, render, FeedClient, RatesSnapshot, TARGET_CURRENCIES};

use crate::error::CliError;

/// Report file, relative to the working directory. Overwritten on every
/// successful run; never touched on a failed one.
const REPORT_PATH: &str = "exchange_rates.md";

pub fn run() -> Result<PathBuf, CliError> {
    let client = FeedClient::new()?;

    let daily = client.load_daily()?;
    let historical = client.load_historical()?;

    let daily = daily.select(&TARGET_CURRENCIES);
    let historical: Vec<RatesSnapshot> = historical
        .iter()
        .map(|snapshot| snapshot.select(&TARGET_CURRENCIES))
        .collect();
    debug!("selected {} historical snapshots", historical.len());

    let means = compute_means(&historical, &TARGET_CURRENCIES);
    let report = render(&daily, &means, &TARGET_CURRENCIES);

    let path = PathBuf::from(REPORT_PATH);
    write_report(&path, &report)?;
    Ok(path)
}

/// Writes the rendered report as UTF-8, replacing any previous file.
fn write_report(path: &Path, report: &str) -> Result<(), CliError> {
    std::fs::write(path, report)?;
    Ok(())
}
