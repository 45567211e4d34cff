//! Error types for swalign

use std::fmt;

/// Result type alias for swalign operations
pub type Result<T> = std::result::Result<T, SwalignError>;

/// Error types that can occur in swalign
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SwalignError {
    /// Scoring parameter outside its valid range
    InvalidScoring {
        /// Name of the offending parameter
        param: &'static str,
        /// The rejected value
        value: i32,
    },

    /// Score matrix would exceed the cell-count cap
    MatrixTooLarge {
        /// Query length in symbols
        query_len: usize,
        /// Reference length in symbols
        ref_len: usize,
        /// Maximum allowed number of matrix cells
        limit: usize,
    },
}

impl fmt::Display for SwalignError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SwalignError::InvalidScoring { param, value } => {
                write!(f, "Invalid scoring parameter {}: {} (must be positive)", param, value)
            }
            SwalignError::MatrixTooLarge { query_len, ref_len, limit } => {
                write!(
                    f,
                    "Score matrix for {} x {} sequences exceeds the {} cell limit",
                    query_len, ref_len, limit
                )
            }
        }
    }
}

impl std::error::Error for SwalignError {}
