use crate::data::DataError;

/// Errors that can occur during peak boundary search and integration
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum PeakError {
    /// Lookup in the intensity matrix failed
    #[error("Data error: {0}")]
    Data(#[from] DataError),

    /// A boundary search was asked to walk an empty series
    #[error("Cannot search a boundary in an empty intensity profile")]
    EmptyProfile,

    /// The apex index does not address a point of the channel
    #[error("Apex index {apex} out of range for a channel of {len} points")]
    ApexOutOfRange {
        /// Requested apex index
        apex: usize,
        /// Channel length
        len: usize,
    },

    /// The tolerance percentage is NaN, infinite or negative
    #[error("Tolerance must be a finite, non-negative percentage, got {0}")]
    InvalidTolerance(f64),

    /// The peak spectrum was not taken from a matrix with the same mass axis
    #[error("Peak spectrum has {spectrum} bins but the matrix has {matrix} mass columns")]
    SpectrumMismatch {
        /// Bins in the peak spectrum
        spectrum: usize,
        /// Mass columns in the matrix
        matrix: usize,
    },
}
