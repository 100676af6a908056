use thiserror::Error;

/// Failures at the loader boundary. Logged and swallowed; the table stays empty.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LoadError {
    #[error("API returned status: {status}")]
    Transport { status: u16 },
    #[error("Request failed: {0}")]
    Request(String),
    #[error("Failed to parse records: {0}")]
    Parse(String),
}

impl From<serde_json::Error> for LoadError {
    fn from(err: serde_json::Error) -> Self {
        Self::Parse(err.to_string())
    }
}

/// Rejected requests against the table state.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TableError {
    #[error("Row {index} is out of range (table has {len} rows)")]
    RowOutOfRange { index: usize, len: usize },
    #[error("Unknown field: {0:?}")]
    UnknownField(String),
    #[error("Unsupported page size: {0}")]
    UnsupportedPageSize(usize),
}

pub type TableResult<T> = Result<T, TableError>;
