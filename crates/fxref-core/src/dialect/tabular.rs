//! Comma-delimited dialect: a header row of currency codes plus a date
//! column, one calendar date per data row.

use std::collections::BTreeMap;

use csv::StringRecord;

use super::{parse_rate, RateDialect};
use crate::domain::{RateDate, RatesSnapshot};
use crate::error::FeedError;

/// Parser for the tabular dialect.
///
/// The daily sheet uses only its first data row, whatever else the feed
/// ships. The historical sheet yields one snapshot per row; rows without a
/// date value are skipped. Cells that are empty or not a usable number are
/// dropped, and duplicate normalized headers overwrite earlier values.
pub struct TabularDialect;

impl RateDialect for TabularDialect {
    fn parse_daily(&self, content: &[u8]) -> Result<RatesSnapshot, FeedError> {
        let text = decode_text(content);
        let mut reader = csv_reader(&text);
        let headers = reader.headers()?.clone();

        let Some(first_row) = reader.records().next() else {
            return Err(FeedError::NoData { feed: "daily" });
        };
        let row = first_row?;

        let date_text = date_cell(&headers, &row).ok_or(FeedError::MissingDateColumn)?;
        let as_of = RateDate::parse(date_text)?;

        Ok(RatesSnapshot::new(as_of, row_rates(&headers, &row)))
    }

    fn parse_series(&self, content: &[u8]) -> Result<Vec<RatesSnapshot>, FeedError> {
        let text = decode_text(content);
        let mut reader = csv_reader(&text);
        let headers = reader.headers()?.clone();

        let mut snapshots = Vec::new();
        for record in reader.records() {
            let row = record?;

            // Rows without a date value are skipped, not an error.
            let Some(date_text) = date_cell(&headers, &row) else {
                continue;
            };
            let as_of = RateDate::parse(date_text)?;

            snapshots.push(RatesSnapshot::new(as_of, row_rates(&headers, &row)));
        }

        snapshots.sort_by(|a, b| a.as_of().cmp(&b.as_of()));
        Ok(snapshots)
    }
}

fn csv_reader(text: &str) -> csv::Reader<&[u8]> {
    csv::ReaderBuilder::new()
        .flexible(true)
        .from_reader(text.as_bytes())
}

/// The feeds ship UTF-8 with an occasional byte-order-mark prefix.
fn decode_text(content: &[u8]) -> String {
    let text = String::from_utf8_lossy(content);
    match text.strip_prefix('\u{feff}') {
        Some(stripped) => stripped.to_owned(),
        None => text.into_owned(),
    }
}

/// Date cell of `row`: the column named exactly `Date`, then `DATE`.
/// Empty cells count as missing.
fn date_cell<'r>(headers: &StringRecord, row: &'r StringRecord) -> Option<&'r str> {
    for name in ["Date", "DATE"] {
        let Some(index) = headers.iter().position(|header| header.trim() == name) else {
            continue;
        };

        if let Some(value) = row.get(index) {
            let value = value.trim();
            if !value.is_empty() {
                return Some(value);
            }
        }
    }

    None
}

/// Every non-date column is a currency code; headers are trimmed and
/// upper-cased, blank headers and unusable cells are dropped, later
/// duplicate columns win.
fn row_rates(headers: &StringRecord, row: &StringRecord) -> BTreeMap<String, f64> {
    let mut rates = BTreeMap::new();

    for (header, cell) in headers.iter().zip(row.iter()) {
        let code = header.trim().to_uppercase();
        if code.is_empty() || code == "DATE" {
            continue;
        }

        if cell.trim().is_empty() {
            continue;
        }

        if let Some(rate) = parse_rate(cell) {
            rates.insert(code, rate);
        }
    }

    rates
}
