//! swalign: Smith-Waterman local sequence alignment
//!
//! # Overview
//!
//! swalign computes the optimal local alignment between two symbol
//! sequences (DNA bases, or any other bytes) with the Smith-Waterman
//! dynamic-programming algorithm. The alignment is a pure function of the
//! two inputs and the scoring parameters; results are reproducible
//! byte-for-byte, including which co-optimal alignment gets reported when
//! several share the best score.
//!
//! ## Key Properties
//!
//! - **Local**: finds the best-scoring contiguous (gapped) subregions,
//!   ignoring leading and trailing noise
//! - **Deterministic**: fixed row-major optimum selection and fixed
//!   traceback branch priority, pinned by tests
//! - **Self-contained**: no I/O, no global state; one engine instance per
//!   comparison
//!
//! ## Quick Start
//!
//! ```
//! use swalign::{smith_waterman, Scoring};
//!
//! # fn main() -> swalign::Result<()> {
//! // Default scoring: match +3, mismatch -3, gap cost 2 per symbol
//! let alignment = smith_waterman(b"GGTTGACTA", b"TGTTACGG", Scoring::default())?;
//!
//! assert_eq!(alignment.score, 13);
//! assert_eq!(alignment.query_aligned, b"GTTGAC");
//! assert_eq!(alignment.ref_aligned, b"GTT-AC");
//! assert_eq!(alignment.cigar_string(), "3M1I2M");
//! # Ok(())
//! # }
//! ```
//!
//! Keep the [`SmithWaterman`] engine instead when the full score matrix is
//! needed for inspection:
//!
//! ```
//! use swalign::{Scoring, SmithWaterman};
//!
//! # fn main() -> swalign::Result<()> {
//! let engine = SmithWaterman::new(b"ACGT", b"ACGT", Scoring::default())?;
//! assert_eq!(engine.matrix().get(4, 4), 12);
//! # Ok(())
//! # }
//! ```
//!
//! ## Module Organization
//!
//! - [`alignment`]: the algorithm (scoring, matrix, engine, CIGAR)
//! - [`error`]: error types and the crate [`Result`] alias

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod alignment;
pub mod error;

// Re-export commonly used types
pub use alignment::{
    smith_waterman, Alignment, Cigar, CigarOp, ScoreMatrix, Scoring, SmithWaterman, GAP,
    MAX_MATRIX_CELLS,
};
pub use error::{Result, SwalignError};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
