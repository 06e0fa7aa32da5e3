/// Errors raised while building or querying the GC-MS data model
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum DataError {
    /// A required list was empty
    #[error("Empty input: {0}")]
    EmptyInput(&'static str),

    /// Two parallel arrays disagree in length
    #[error("Length mismatch for {what}: expected {expected}, got {actual}")]
    LengthMismatch {
        /// Which array was checked
        what: &'static str,
        /// Length it should have had
        expected: usize,
        /// Length it actually had
        actual: usize,
    },

    /// A NaN or infinite value where a number was required
    #[error("Non-finite value in {what} at index {index}")]
    NonFinite {
        /// Which array held the value
        what: &'static str,
        /// Position of the offending value
        index: usize,
    },

    /// A retention time outside the stored time axis
    #[error("time {time:.2} is out of bounds (min: {min:.2}, max: {max:.2})")]
    TimeOutOfRange {
        /// Queried time in seconds
        time: f64,
        /// First stored time
        min: f64,
        /// Last stored time
        max: f64,
    },

    /// A mass outside the stored mass axis
    #[error("mass {mass} is out of range (min: {min}, max: {max})")]
    MassOutOfRange {
        /// Queried mass
        mass: f64,
        /// Smallest stored mass
        min: f64,
        /// Largest stored mass
        max: f64,
    },

    /// An index at or beyond the end of an axis
    #[error("{what} index {index} out of range (length {len})")]
    IndexOutOfRange {
        /// Which axis was indexed
        what: &'static str,
        /// Requested index
        index: usize,
        /// Axis length
        len: usize,
    },

    /// A list that must be ascending was not
    #[error("{0} is not sorted in ascending order")]
    Unsorted(&'static str),

    /// The rounded masses span more unit bins than a matrix may hold
    #[error("mass range {min}..{max} is too wide to bin (at most {limit} unit bins)")]
    MassRangeTooWide {
        /// Smallest measured mass
        min: f64,
        /// Largest measured mass
        max: f64,
        /// Largest allowed number of bins
        limit: usize,
    },

    /// The binned matrix would hold more cells than allowed
    #[error("{rows} x {cols} intensity matrix exceeds {limit} cells")]
    MatrixTooLarge {
        /// Scans
        rows: usize,
        /// Mass bins
        cols: usize,
        /// Largest allowed number of cells
        limit: usize,
    },
}
