use crate::data::DataError;
use crate::peak::PeakError;

/// Errors that can occur while reading or writing GC-MS tables and reports
#[derive(Debug, thiserror::Error)]
pub enum IoError {
    /// I/O error on the underlying file or stream
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV parsing or writing error
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// JSON serialization error
    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    /// The parsed values do not form a valid run or matrix
    #[error("Invalid data: {0}")]
    Data(#[from] DataError),

    /// A peak could not be placed on the matrix
    #[error("Invalid peak: {0}")]
    Peak(#[from] PeakError),

    /// A required column is absent from the header
    #[error("Missing required column: {0}")]
    MissingColumn(String),

    /// A field could not be parsed as a number
    #[error("Invalid value {value:?} in column {column} of line {line}")]
    InvalidValue {
        /// Line number in the input, header included
        line: u64,
        /// Column name
        column: String,
        /// Raw field text
        value: String,
    },

    /// The table structure is not what the reader expects
    #[error("Invalid format: {0}")]
    InvalidFormat(String),
}
