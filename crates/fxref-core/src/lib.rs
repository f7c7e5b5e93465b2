//! Core pipeline for fxref.
//!
//! This crate contains:
//! - Immutable rate-snapshot domain values and calendar-date parsing
//! - Archive inspection (which data file inside a feed zip to read)
//! - The two feed dialects (Cube XML, tabular CSV) behind one parsing trait
//! - Historical aggregation and the Markdown report renderer
//! - The blocking feed client and its HTTP seam

pub mod aggregate;
pub mod archive;
pub mod config;
pub mod dialect;
pub mod domain;
pub mod error;
pub mod feed;
pub mod http;
pub mod report;

pub use aggregate::{compute_means, select_currencies};
pub use archive::select_entry;
pub use config::{FeedConfig, DAILY_FEED_URL, HISTORICAL_FEED_URL, TARGET_CURRENCIES};
pub use dialect::{dialect_for_entry, RateDialect, TabularDialect, XmlDialect};
pub use domain::{RateDate, RatesSnapshot};
pub use error::FeedError;
pub use feed::FeedClient;
pub use http::{HttpClient, HttpError, ReqwestHttpClient, StaticHttpClient};
pub use report::render;
