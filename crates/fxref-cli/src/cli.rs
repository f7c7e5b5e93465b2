//! CLI argument surface.
//!
//! The report run takes no flags or arguments; clap only provides
//! `--help` and `--version`. The currency set and feed endpoints are
//! configuration constants in `fxref-core`.

use clap::Parser;

/// Fetch ECB EUR reference rates and write the Markdown report.
#[derive(Debug, Parser)]
#[command(
    name = "fxref",
    version,
    about = "EUR reference-rate report generator"
)]
pub struct Cli {}
