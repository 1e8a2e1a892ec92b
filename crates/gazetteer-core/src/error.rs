// crates/gazetteer-core/src/error.rs
use thiserror::Error;

pub type Result<T> = std::result::Result<T, GazetteerError>;

/// A single row that failed validation.
///
/// Each variant carries the offending raw field value, a snapshot of the
/// full row, and the 1-based data-row number (the header row is not
/// counted). Errors are accumulated per source and reported together; the
/// first one collected becomes the run's failure.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("invalid latitude {value:?} at row {line}: {row:?}")]
    InvalidLatitude {
        value: String,
        row: Vec<String>,
        line: usize,
    },

    #[error("invalid longitude {value:?} at row {line}: {row:?}")]
    InvalidLongitude {
        value: String,
        row: Vec<String>,
        line: usize,
    },

    #[error("invalid capital status {value:?} at row {line}: {row:?}")]
    InvalidCapitalStatus {
        value: String,
        row: Vec<String>,
        line: usize,
    },

    #[error("invalid population {value:?} at row {line}: {row:?}")]
    InvalidPopulation {
        value: String,
        row: Vec<String>,
        line: usize,
    },
}

/// Failure while decoding a binary artifact.
#[derive(Debug, Error)]
pub enum DecodeError {
    #[error("artifact truncated while reading {0}")]
    Truncated(&'static str),

    #[error("string field is not valid UTF-8")]
    InvalidUtf8(#[from] std::string::FromUtf8Error),

    #[error("unknown capital status tag {0}")]
    InvalidCapitalTag(u8),

    #[error("trailing bytes after the last record")]
    TrailingBytes,
}

/// Umbrella error for the build pipeline.
#[derive(Debug, Error)]
pub enum GazetteerError {
    #[error("{0}")]
    NotFound(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Csv(#[from] csv::Error),

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Decode(#[from] DecodeError),
}
