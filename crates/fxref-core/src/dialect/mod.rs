//! The two file formats a feed archive can carry, behind one parsing
//! capability selected by entry name.

mod tabular;
mod xml;

pub use tabular::TabularDialect;
pub use xml::XmlDialect;

use crate::domain::RatesSnapshot;
use crate::error::FeedError;

/// One data-file format the feeds publish.
///
/// Both implementations turn raw entry bytes into snapshots; the caller
/// picks daily (one snapshot) or series (every snapshot) semantics.
pub trait RateDialect {
    /// Parses the entry as the daily sheet, yielding exactly one snapshot.
    fn parse_daily(&self, content: &[u8]) -> Result<RatesSnapshot, FeedError>;

    /// Parses the entry as a historical sheet, yielding every snapshot in
    /// ascending date order. An empty result is legitimate at this level;
    /// callers decide whether that is an error.
    fn parse_series(&self, content: &[u8]) -> Result<Vec<RatesSnapshot>, FeedError>;
}

/// Resolves the dialect for a chosen archive entry by extension.
pub fn dialect_for_entry(name: &str) -> Result<&'static dyn RateDialect, FeedError> {
    let lower = name.to_ascii_lowercase();

    if lower.ends_with(".xml") {
        Ok(&XmlDialect)
    } else if lower.ends_with(".csv") {
        Ok(&TabularDialect)
    } else {
        Err(FeedError::UnsupportedFormat {
            name: name.to_owned(),
        })
    }
}

/// Numeric cells that do not parse, or parse to something a reference rate
/// cannot be, are dropped rather than defaulted.
pub(crate) fn parse_rate(text: &str) -> Option<f64> {
    let value: f64 = text.trim().parse().ok()?;
    (value.is_finite() && value >= 0.0).then_some(value)
}
