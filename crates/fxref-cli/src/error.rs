use thiserror::Error;

/// Errors surfaced at the process boundary.
///
/// Every variant exits with status 1; the message is printed as
/// `Error: <message>` on stderr.
#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Feed(#[from] fxref_core::FeedError),

    #[error(transparent)]
    Transport(#[from] fxref_core::HttpError),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
