//! Feed orchestration: fetch an archive, pick its data file, parse it.

use std::sync::Arc;

use log::{debug, info};

use crate::archive;
use crate::config::FeedConfig;
use crate::dialect;
use crate::domain::RatesSnapshot;
use crate::error::FeedError;
use crate::http::{HttpClient, HttpError, ReqwestHttpClient};

/// Fetches and parses the daily and historical rate feeds.
///
/// The two loads are independent, blocking, and retry-free; the first
/// failing step aborts the run.
pub struct FeedClient {
    config: FeedConfig,
    http: Arc<dyn HttpClient>,
}

impl FeedClient {
    /// Production client with the default endpoints and timeout.
    pub fn new() -> Result<Self, HttpError> {
        let config = FeedConfig::default();
        let http = Arc::new(ReqwestHttpClient::new(config.timeout)?);
        Ok(Self { config, http })
    }

    /// Client over an injected transport, for tests and embedding.
    pub fn with_http_client(config: FeedConfig, http: Arc<dyn HttpClient>) -> Self {
        Self { config, http }
    }

    /// Latest daily snapshot.
    pub fn load_daily(&self) -> Result<RatesSnapshot, FeedError> {
        let archive_bytes = self.http.fetch(&self.config.daily_url)?;
        debug!("daily archive: {} bytes", archive_bytes.len());

        let (name, content) = archive::select_entry(&archive_bytes)?;
        let snapshot = dialect::dialect_for_entry(&name)?.parse_daily(&content)?;

        info!(
            "daily rates as of {} ({} currencies)",
            snapshot.as_of(),
            snapshot.len()
        );
        Ok(snapshot)
    }

    /// Full historical series, ascending by date.
    pub fn load_historical(&self) -> Result<Vec<RatesSnapshot>, FeedError> {
        let archive_bytes = self.http.fetch(&self.config.historical_url)?;
        debug!("historical archive: {} bytes", archive_bytes.len());

        let (name, content) = archive::select_entry(&archive_bytes)?;
        let series = dialect::dialect_for_entry(&name)?.parse_series(&content)?;

        if series.is_empty() {
            return Err(FeedError::NoData { feed: "historical" });
        }

        info!("historical series: {} snapshots", series.len());
        Ok(series)
    }
}
