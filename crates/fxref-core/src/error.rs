use thiserror::Error;

use crate::http::HttpError;

/// Failure modes of a single feed pipeline run.
///
/// Every variant is fatal for the run that raised it. Dirty individual data
/// points inside an otherwise valid file (a bad numeric cell, a row without
/// a date) are skipped during parsing and never surface here.
#[derive(Debug, Error)]
pub enum FeedError {
    /// Date text matched neither accepted encoding.
    #[error("unrecognized date: '{value}'")]
    DateFormat { value: String },

    /// The daily sheet carries no usable `Date` column.
    #[error("tabular data is missing a 'Date' column")]
    MissingDateColumn,

    /// The fetched archive lists zero entries.
    #[error("archive contains no files")]
    EmptyArchive,

    /// The archive has entries, but none is a recognizable data file.
    #[error("no supported data file in archive; entries: {entries:?}")]
    UnsupportedArchive { entries: Vec<String> },

    /// The selected entry has an extension no dialect handles.
    #[error("unsupported data file format: '{name}'")]
    UnsupportedFormat { name: String },

    /// Parsing succeeded structurally but yielded zero snapshots.
    #[error("no rate snapshots found in {feed} feed")]
    NoData { feed: &'static str },

    #[error(transparent)]
    Transport(#[from] HttpError),

    #[error("archive decode failed: {0}")]
    Archive(#[from] zip::result::ZipError),

    #[error("malformed tabular data: {0}")]
    Tabular(#[from] csv::Error),

    #[error("malformed xml: {0}")]
    Xml(#[from] quick_xml::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
