//! Markdown report rendering.

use std::collections::BTreeMap;

use crate::domain::RatesSnapshot;

/// Renders the daily snapshot plus historical means as the fixed Markdown
/// report.
///
/// Pure and deterministic: the same inputs produce byte-identical output.
/// Codes are rendered in the caller-supplied order; a code with no daily
/// rate or no historical mean gets `N/A` in that cell.
pub fn render(daily: &RatesSnapshot, means: &BTreeMap<String, f64>, codes: &[&str]) -> String {
    let mut out = String::new();

    out.push_str("# ECB Exchange Rates (EUR base)\n\n");
    out.push_str(&format!("**Daily rates date:** {}\n\n", daily.as_of()));
    out.push_str("| Currency Code | Rate | Mean Historical Rate |\n");
    out.push_str("|---|---:|---:|\n");

    for code in codes {
        let rate = rate_cell(daily.rate(code));
        let mean = rate_cell(means.get(*code).copied());
        out.push_str(&format!("| {code} | {rate} | {mean} |\n"));
    }

    out
}

fn rate_cell(value: Option<f64>) -> String {
    match value {
        Some(value) => format!("{value:.6}"),
        None => String::from("N/A"),
    }
}
