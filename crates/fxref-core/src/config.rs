//! Feed endpoints and the fixed report configuration.

use std::time::Duration;

/// Canonical daily feed archive.
pub const DAILY_FEED_URL: &str = "https://www.ecb.europa.eu/stats/eurofxref/eurofxref.zip";

/// Canonical historical feed archive.
pub const HISTORICAL_FEED_URL: &str =
    "https://www.ecb.europa.eu/stats/eurofxref/eurofxref-hist.zip";

/// Currencies the report covers, in render order.
pub const TARGET_CURRENCIES: [&str; 4] = ["USD", "SEK", "GBP", "JPY"];

/// Endpoints and transport budget for one pipeline run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedConfig {
    pub daily_url: String,
    pub historical_url: String,
    pub timeout: Duration,
}

impl Default for FeedConfig {
    fn default() -> Self {
        Self {
            daily_url: DAILY_FEED_URL.to_owned(),
            historical_url: HISTORICAL_FEED_URL.to_owned(),
            timeout: Duration::from_secs(30),
        }
    }
}
