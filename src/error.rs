use thiserror::Error;

/// Convenience result type for ingestion operations.
pub type IngestionResult<T> = Result<T, IngestionError>;

/// Error type returned by ingestion functions.
///
/// Shared by remote (HTTP) and local (file/reader) ingestion. Any of these aborts the whole
/// ingestion: no partial row set is ever returned.
#[derive(Debug, Error)]
pub enum IngestionError {
    /// Underlying I/O error (e.g. file not found, permission denied).
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV decode error.
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),

    /// HTTP transport error (connect, timeout, body read).
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),

    /// The upstream answered with a non-success status.
    #[error("http status {status} from {url}")]
    HttpStatus { status: u16, url: String },

    /// The payload is not the expected table (none of the expected columns are present).
    #[error("schema mismatch: {message}")]
    SchemaMismatch { message: String },

    /// A cell could not be parsed into its column type.
    #[error("failed to parse value at row {row} column '{column}': {message} (raw='{raw}')")]
    ParseError {
        row: usize,
        column: String,
        raw: String,
        message: String,
    },
}

/// Error type returned by query evaluation.
///
/// Both variants are expected outcomes of a well-behaved caller; neither changes any state.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum QueryError {
    /// Malformed query parameters (`page`/`pageSize` < 1, unknown `sortBy`, ...).
    #[error("invalid query: {message}")]
    Validation { message: String },

    /// At least one filter was supplied and nothing matched.
    #[error("No matching results found.")]
    NoMatch,
}

impl QueryError {
    pub(crate) fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    /// Suggested HTTP status for transport layers.
    pub fn status_hint(&self) -> u16 {
        match self {
            QueryError::Validation { .. } => 400,
            QueryError::NoMatch => 404,
        }
    }
}
