//! Dense dynamic-programming score matrix
//!
//! Smith-Waterman fills a `(query_len + 1) x (ref_len + 1)` table of local
//! alignment scores. Row 0 and column 0 form the zero boundary; every other
//! cell holds the best score of a local alignment ending exactly at that
//! position pair, never below zero.
//!
//! Cells are `i64` in a single flat row-major allocation. With `i32` scoring
//! parameters and the [`MAX_MATRIX_CELLS`] cap, accumulated scores stay far
//! below `i64::MAX`, so cell arithmetic cannot overflow.

use crate::error::{Result, SwalignError};

/// Maximum number of cells a score matrix may hold.
///
/// `1 << 28` cells of `i64` is 2 GiB, enough for two sequences of ~16 kb
/// each. Construction fails with [`SwalignError::MatrixTooLarge`] beyond
/// this, before any allocation happens. Sequence pairs that need more than
/// this call for a banded or streaming aligner, not a bigger full matrix.
pub const MAX_MATRIX_CELLS: usize = 1 << 28;

/// Score matrix for one query/reference pair.
///
/// Indexed as `(i, j)` where `i` ranges over `0..=query_len` (rows) and `j`
/// over `0..=ref_len` (columns). Index 0 on either axis is the "before
/// sequence start" boundary and always holds 0.
///
/// # Example
///
/// ```
/// use swalign::{Scoring, SmithWaterman};
///
/// # fn main() -> swalign::Result<()> {
/// let engine = SmithWaterman::new(b"ACGT", b"ACGT", Scoring::default())?;
/// let matrix = engine.matrix();
///
/// assert_eq!(matrix.rows(), 5);
/// assert_eq!(matrix.cols(), 5);
/// assert_eq!(matrix.get(0, 0), 0);
/// assert_eq!(matrix.get(4, 4), 12); // 4 matches x 3
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoreMatrix {
    rows: usize,
    cols: usize,
    cells: Vec<i64>,
}

impl ScoreMatrix {
    /// Allocate a zeroed matrix for the given sequence lengths.
    ///
    /// Fails with [`SwalignError::MatrixTooLarge`] when the cell count would
    /// exceed [`MAX_MATRIX_CELLS`]. The count is computed with checked
    /// arithmetic, so absurd lengths cannot wrap around the check.
    pub(crate) fn new(query_len: usize, ref_len: usize) -> Result<Self> {
        let cell_count = query_len
            .checked_add(1)
            .and_then(|rows| ref_len.checked_add(1).and_then(|cols| rows.checked_mul(cols)));

        match cell_count {
            Some(count) if count <= MAX_MATRIX_CELLS => Ok(Self {
                rows: query_len + 1,
                cols: ref_len + 1,
                cells: vec![0; count],
            }),
            _ => Err(SwalignError::MatrixTooLarge {
                query_len,
                ref_len,
                limit: MAX_MATRIX_CELLS,
            }),
        }
    }

    /// Number of rows (query length + 1)
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns (reference length + 1)
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Score at row `i`, column `j`
    ///
    /// # Panics
    ///
    /// Panics if `i >= rows()` or `j >= cols()`.
    #[inline]
    pub fn get(&self, i: usize, j: usize) -> i64 {
        assert!(i < self.rows && j < self.cols, "matrix index out of bounds");
        self.cells[i * self.cols + j]
    }

    #[inline]
    pub(crate) fn set(&mut self, i: usize, j: usize, value: i64) {
        self.cells[i * self.cols + j] = value;
    }

    /// Row `i` as a slice of `cols()` scores
    pub fn row(&self, i: usize) -> &[i64] {
        let start = i * self.cols;
        &self.cells[start..start + self.cols]
    }
}

impl std::ops::Index<(usize, usize)> for ScoreMatrix {
    type Output = i64;

    fn index(&self, (i, j): (usize, usize)) -> &i64 {
        assert!(i < self.rows && j < self.cols, "matrix index out of bounds");
        &self.cells[i * self.cols + j]
    }
}
