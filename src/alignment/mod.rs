//! Smith-Waterman local sequence alignment
//!
//! This module implements local pairwise alignment with dynamic
//! programming: score matrix construction, optimum location and traceback,
//! with fixed tie-breaking conventions so the same inputs always produce
//! the same alignment.
//!
//! # Core Components
//!
//! - [`Scoring`]: match reward and per-symbol gap cost (mismatches score
//!   the negated match reward)
//! - [`ScoreMatrix`]: the dense `(m+1) x (n+1)` dynamic-programming table
//! - [`SmithWaterman`]: the engine owning one matrix and one result
//! - [`Alignment`]: aligned sequences, offsets, counters and CIGAR
//! - [`smith_waterman`]: one-call entry point for callers that do not need
//!   the matrix
//!
//! # Examples
//!
//! ```
//! use swalign::alignment::{smith_waterman, Scoring};
//!
//! # fn main() -> swalign::Result<()> {
//! let query = b"ACGTACGT";
//! let reference = b"ACGTACGT";
//!
//! let alignment = smith_waterman(query, reference, Scoring::default())?;
//! assert_eq!(alignment.score, 24); // 8 matches x 3
//! assert_eq!(alignment.matches, 8);
//! # Ok(())
//! # }
//! ```

pub mod cigar;
pub mod matrix;
pub mod scoring;
pub mod smith_waterman;

// Re-export public API
pub use cigar::{Cigar, CigarOp};
pub use matrix::{ScoreMatrix, MAX_MATRIX_CELLS};
pub use scoring::Scoring;
pub use smith_waterman::{smith_waterman, Alignment, SmithWaterman, GAP};
