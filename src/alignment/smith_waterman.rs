//! Smith-Waterman local sequence alignment
//!
//! # Algorithm
//!
//! Smith-Waterman finds the optimal **local** alignment between two
//! sequences using dynamic programming. Unlike global alignment
//! (Needleman-Wunsch), it aligns the best-scoring subregions and discards
//! leading/trailing noise.
//!
//! The score matrix is filled row by row:
//!
//! ```text
//! H(i,j) = max(
//!     H(i-1, j-1) + score(query[i-1], ref[j-1]),  // Match/mismatch
//!     H(i-1, j) - gap_cost,                        // Insertion (gap in ref)
//!     H(i, j-1) - gap_cost,                        // Deletion (gap in query)
//!     0                                            // Local alignment floor
//! )
//! ```
//!
//! Row 0 and column 0 stay at 0. The zero floor is what makes the alignment
//! local: any cell may restart an alignment from scratch.
//!
//! Two conventions keep the output byte-for-byte reproducible when several
//! alignments share the optimal score:
//!
//! - the traceback starts from the **first** maximum cell in row-major scan
//!   order (lowest `i`, then lowest `j`), and
//! - at each backward step, candidate predecessors are tested in a fixed
//!   priority: insertion, then deletion, then diagonal. With degenerate
//!   parameters (for example `gap_cost == match_score`) more than one
//!   predecessor can reconstruct the cell's score; the first match wins.
//!
//! Neither convention is forced by the mathematics; changing either changes
//! which co-optimal alignment is reported, so both are fixed and tested.
//!
//! # Examples
//!
//! ```
//! use swalign::{smith_waterman, Scoring};
//!
//! # fn main() -> swalign::Result<()> {
//! let alignment = smith_waterman(b"GGTTGACTA", b"TGTTACGG", Scoring::default())?;
//!
//! assert_eq!(alignment.score, 13);
//! assert_eq!(alignment.query_aligned, b"GTTGAC");
//! assert_eq!(alignment.ref_aligned, b"GTT-AC");
//! assert_eq!(alignment.cigar_string(), "3M1I2M");
//! # Ok(())
//! # }
//! ```

use crate::alignment::{Cigar, CigarOp, ScoreMatrix, Scoring};
use crate::error::Result;

/// Gap sentinel written into aligned output sequences.
///
/// Input sequences are expected not to contain this symbol; the engine does
/// not check for it.
pub const GAP: u8 = b'-';

/// Alignment result from Smith-Waterman
///
/// Both aligned sequences have the same length (the number of alignment
/// columns); gap positions hold [`GAP`]. Start/end offsets are 0-indexed
/// into the original sequences with exclusive ends, so
/// `&query[query_start..query_end]` is exactly the query subrange the
/// alignment consumed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alignment {
    /// Maximum alignment score achieved
    pub score: i64,
    /// Start position in query sequence (0-indexed)
    pub query_start: usize,
    /// End position in query sequence (exclusive)
    pub query_end: usize,
    /// Start position in reference sequence (0-indexed)
    pub ref_start: usize,
    /// End position in reference sequence (exclusive)
    pub ref_end: usize,
    /// Aligned query subsequence, gaps marked with [`GAP`]
    pub query_aligned: Vec<u8>,
    /// Aligned reference subsequence, gaps marked with [`GAP`]
    pub ref_aligned: Vec<u8>,
    /// Number of columns where both symbols are identical
    pub matches: usize,
    /// Number of columns where the symbols differ
    pub mismatches: usize,
    /// Number of gap columns, counting both insertions and deletions
    pub gaps: usize,
    /// Run-length encoded operations describing the alignment
    pub cigar: Cigar,
}

impl Alignment {
    /// Number of alignment columns
    ///
    /// Always equal to `matches + mismatches + gaps` and to the length of
    /// either aligned sequence.
    pub fn len(&self) -> usize {
        self.cigar.len()
    }

    /// Check if the alignment is empty
    pub fn is_empty(&self) -> bool {
        self.cigar.is_empty()
    }

    /// Format the CIGAR for display (for example `"3M1I2M"`)
    pub fn cigar_string(&self) -> String {
        self.cigar.to_string()
    }

    /// Fraction of alignment columns that are exact matches
    ///
    /// Returns `0.0` for an empty alignment.
    pub fn identity(&self) -> f64 {
        let columns = self.len();
        if columns > 0 {
            self.matches as f64 / columns as f64
        } else {
            0.0
        }
    }
}

/// Smith-Waterman alignment engine
///
/// Owns the score matrix for one query/reference pair. Construction eagerly
/// fills the matrix, locates the optimum and runs the traceback; afterwards
/// the engine is immutable and only exposes read-only accessors. A new
/// comparison needs a new engine.
///
/// Callers that only want the [`Alignment`] can use the [`smith_waterman`]
/// function instead and skip the matrix.
///
/// # Example
///
/// ```
/// use swalign::{Scoring, SmithWaterman};
///
/// # fn main() -> swalign::Result<()> {
/// let engine = SmithWaterman::new(b"GGTTGACTA", b"TGTTACGG", Scoring::default())?;
///
/// assert_eq!(engine.score(), 13);
/// assert_eq!(engine.query_aligned(), b"GTTGAC");
/// assert_eq!(engine.ref_aligned(), b"GTT-AC");
/// assert_eq!((engine.query_start(), engine.query_end()), (1, 7));
/// assert_eq!((engine.ref_start(), engine.ref_end()), (1, 6));
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct SmithWaterman {
    scoring: Scoring,
    matrix: ScoreMatrix,
    alignment: Alignment,
}

impl SmithWaterman {
    /// Align `query` against `reference` with the given scoring parameters
    ///
    /// Validates the scoring parameters and the matrix size, then computes
    /// the full alignment. Either sequence may be empty; the result is then
    /// an empty alignment with all offsets 0.
    ///
    /// # Errors
    ///
    /// - [`SwalignError::InvalidScoring`](crate::SwalignError::InvalidScoring)
    ///   when `match_score` or `gap_cost` is not positive.
    /// - [`SwalignError::MatrixTooLarge`](crate::SwalignError::MatrixTooLarge)
    ///   when `(query.len() + 1) * (reference.len() + 1)` exceeds
    ///   [`MAX_MATRIX_CELLS`](crate::MAX_MATRIX_CELLS).
    pub fn new(query: &[u8], reference: &[u8], scoring: Scoring) -> Result<Self> {
        scoring.validate()?;
        let mut matrix = ScoreMatrix::new(query.len(), reference.len())?;
        let (max_score, max_i, max_j) = fill(&mut matrix, query, reference, scoring);
        let alignment = traceback(&matrix, query, reference, scoring, max_score, max_i, max_j);
        Ok(Self {
            scoring,
            matrix,
            alignment,
        })
    }

    /// The full score matrix, for inspection and testing
    pub fn matrix(&self) -> &ScoreMatrix {
        &self.matrix
    }

    /// The computed alignment
    pub fn alignment(&self) -> &Alignment {
        &self.alignment
    }

    /// Consume the engine, returning the alignment and dropping the matrix
    pub fn into_alignment(self) -> Alignment {
        self.alignment
    }

    /// The scoring parameters the engine was constructed with
    pub fn scoring(&self) -> Scoring {
        self.scoring
    }

    /// Maximum alignment score achieved
    pub fn score(&self) -> i64 {
        self.alignment.score
    }

    /// Aligned query subsequence, gaps marked with [`GAP`]
    pub fn query_aligned(&self) -> &[u8] {
        &self.alignment.query_aligned
    }

    /// Aligned reference subsequence, gaps marked with [`GAP`]
    pub fn ref_aligned(&self) -> &[u8] {
        &self.alignment.ref_aligned
    }

    /// Start of the aligned query subrange (0-indexed, inclusive)
    pub fn query_start(&self) -> usize {
        self.alignment.query_start
    }

    /// End of the aligned query subrange (exclusive)
    pub fn query_end(&self) -> usize {
        self.alignment.query_end
    }

    /// Start of the aligned reference subrange (0-indexed, inclusive)
    pub fn ref_start(&self) -> usize {
        self.alignment.ref_start
    }

    /// End of the aligned reference subrange (exclusive)
    pub fn ref_end(&self) -> usize {
        self.alignment.ref_end
    }
}

/// Smith-Waterman local alignment
///
/// Convenience entry point for callers that do not need the score matrix:
/// builds a [`SmithWaterman`] engine and returns just its [`Alignment`].
///
/// # Example
///
/// ```
/// use swalign::{smith_waterman, Scoring};
///
/// # fn main() -> swalign::Result<()> {
/// let alignment = smith_waterman(b"ACGTACGT", b"ACGTACGT", Scoring::default())?;
/// assert_eq!(alignment.score, 24); // 8 matches x 3
/// # Ok(())
/// # }
/// ```
pub fn smith_waterman(query: &[u8], reference: &[u8], scoring: Scoring) -> Result<Alignment> {
    Ok(SmithWaterman::new(query, reference, scoring)?.into_alignment())
}

/// Fill the score matrix and track the optimum cell.
///
/// Cells are computed in increasing `i`, increasing `j` order; each cell
/// only depends on its diagonal, upper and left neighbors. The maximum is
/// tracked with a strict `>`, which under this fill order picks the first
/// maximum in row-major scan order. When every cell is 0 the optimum stays
/// at `(0, 0)`.
fn fill(
    matrix: &mut ScoreMatrix,
    query: &[u8],
    reference: &[u8],
    scoring: Scoring,
) -> (i64, usize, usize) {
    let gap = i64::from(scoring.gap_cost);

    let mut max_score = 0i64;
    let mut max_i = 0;
    let mut max_j = 0;

    for i in 1..=query.len() {
        for j in 1..=reference.len() {
            let diagonal =
                matrix.get(i - 1, j - 1) + i64::from(scoring.score(query[i - 1], reference[j - 1]));
            let up = matrix.get(i - 1, j) - gap;
            let left = matrix.get(i, j - 1) - gap;

            let best = diagonal.max(up).max(left).max(0);
            matrix.set(i, j, best);

            if best > max_score {
                max_score = best;
                max_i = i;
                max_j = j;
            }
        }
    }

    (max_score, max_i, max_j)
}

/// Walk backward from the optimum cell until a zero cell, reconstructing
/// the aligned sequences, the counters and the CIGAR.
///
/// At each step the predecessor is identified by exact score
/// reconstruction, tested in fixed priority order:
///
/// 1. insertion: `H[i][j] == H[i-1][j] - gap_cost` consumes `query[i-1]`
///    against a gap;
/// 2. deletion: `H[i][j] == H[i][j-1] - gap_cost` consumes a gap against
///    `reference[j-1]`;
/// 3. diagonal: `H[i][j] == H[i-1][j-1] ± match_score` consumes both
///    symbols.
///
/// Every nonzero cell satisfies at least one of the three (its value was
/// produced by one of those source terms), so the walk always reaches a
/// zero cell; each step decreases `i + j`. The cell where it stops gives
/// the begin offsets.
fn traceback(
    matrix: &ScoreMatrix,
    query: &[u8],
    reference: &[u8],
    scoring: Scoring,
    score: i64,
    end_i: usize,
    end_j: usize,
) -> Alignment {
    let gap = i64::from(scoring.gap_cost);
    let match_score = i64::from(scoring.match_score);

    let mut query_aligned = Vec::new();
    let mut ref_aligned = Vec::new();
    let mut cigar = Cigar::new();
    let mut matches = 0;
    let mut mismatches = 0;
    let mut gaps = 0;

    let mut i = end_i;
    let mut j = end_j;

    // Row 0 and column 0 are all zero, so i > 0 and j > 0 inside the loop.
    while matrix.get(i, j) != 0 {
        let current = matrix.get(i, j);

        if current == matrix.get(i - 1, j) - gap {
            query_aligned.push(query[i - 1]);
            ref_aligned.push(GAP);
            cigar.push(CigarOp::Insertion);
            gaps += 1;
            i -= 1;
        } else if current == matrix.get(i, j - 1) - gap {
            query_aligned.push(GAP);
            ref_aligned.push(reference[j - 1]);
            cigar.push(CigarOp::Deletion);
            gaps += 1;
            j -= 1;
        } else {
            debug_assert!(
                current == matrix.get(i - 1, j - 1) + match_score
                    || current == matrix.get(i - 1, j - 1) - match_score,
                "nonzero cell ({}, {}) has no explaining predecessor",
                i,
                j
            );
            let query_base = query[i - 1];
            let ref_base = reference[j - 1];
            query_aligned.push(query_base);
            ref_aligned.push(ref_base);
            cigar.push(CigarOp::Match);
            if query_base == ref_base {
                matches += 1;
            } else {
                mismatches += 1;
            }
            i -= 1;
            j -= 1;
        }
    }

    // The walk collected columns back-to-front.
    query_aligned.reverse();
    ref_aligned.reverse();
    cigar.reverse();

    Alignment {
        score,
        query_start: i,
        query_end: end_i,
        ref_start: j,
        ref_end: end_j,
        query_aligned,
        ref_aligned,
        matches,
        mismatches,
        gaps,
        cigar,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SwalignError;

    #[test]
    fn test_perfect_match() {
        let alignment = smith_waterman(b"ACGT", b"ACGT", Scoring::default()).unwrap();

        assert_eq!(alignment.score, 12); // 4 matches x 3
        assert_eq!(alignment.query_start, 0);
        assert_eq!(alignment.query_end, 4);
        assert_eq!(alignment.ref_start, 0);
        assert_eq!(alignment.ref_end, 4);
        assert_eq!(alignment.query_aligned, b"ACGT");
        assert_eq!(alignment.ref_aligned, b"ACGT");
        assert_eq!(alignment.matches, 4);
        assert_eq!(alignment.mismatches, 0);
        assert_eq!(alignment.gaps, 0);
        assert_eq!(alignment.cigar_string(), "4M");
        assert!((alignment.identity() - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_complete_mismatch_is_empty() {
        // No shared symbols: every cell stays 0, alignment is empty.
        let alignment = smith_waterman(b"AAAA", b"TTTT", Scoring::default()).unwrap();

        assert_eq!(alignment.score, 0);
        assert!(alignment.is_empty());
        assert_eq!(alignment.len(), 0);
        assert_eq!((alignment.query_start, alignment.query_end), (0, 0));
        assert_eq!((alignment.ref_start, alignment.ref_end), (0, 0));
        assert_eq!(alignment.query_aligned, b"");
        assert_eq!(alignment.ref_aligned, b"");
        assert_eq!(alignment.identity(), 0.0);
    }

    #[test]
    fn test_embedded_match() {
        let alignment = smith_waterman(b"ACGTACGT", b"TTACGTACGTTT", Scoring::default()).unwrap();

        assert_eq!(alignment.score, 24);
        assert_eq!((alignment.query_start, alignment.query_end), (0, 8));
        assert_eq!((alignment.ref_start, alignment.ref_end), (2, 10));
        assert_eq!(alignment.cigar_string(), "8M");
    }

    #[test]
    fn test_with_insertion() {
        // Extra T in the query aligns against a gap in the reference.
        let alignment = smith_waterman(b"ACGTTACC", b"ACGTACC", Scoring::default()).unwrap();

        assert_eq!(alignment.score, 19);
        assert_eq!(alignment.query_aligned, b"ACGTTACC");
        assert_eq!(alignment.ref_aligned, b"ACGT-ACC");
        assert_eq!(alignment.cigar_string(), "4M1I3M");
        assert_eq!(alignment.matches, 7);
        assert_eq!(alignment.mismatches, 0);
        assert_eq!(alignment.gaps, 1);
    }

    #[test]
    fn test_with_deletion() {
        let alignment = smith_waterman(b"ACGTACC", b"ACGTTACC", Scoring::default()).unwrap();

        assert_eq!(alignment.score, 19);
        assert_eq!(alignment.query_aligned, b"ACGT-ACC");
        assert_eq!(alignment.ref_aligned, b"ACGTTACC");
        assert_eq!(alignment.cigar_string(), "4M1D3M");
        assert_eq!(alignment.gaps, 1);
    }

    #[test]
    fn test_mixed_gap_directions() {
        let alignment = smith_waterman(b"ATCGAT", b"ATGCAT", Scoring::default()).unwrap();

        assert_eq!(alignment.score, 11);
        assert_eq!(alignment.query_aligned, b"AT-CGAT");
        assert_eq!(alignment.ref_aligned, b"ATGC-AT");
        assert_eq!(alignment.cigar_string(), "2M1D1M1I2M");
        assert_eq!(alignment.matches, 5);
        assert_eq!(alignment.mismatches, 0);
        assert_eq!(alignment.gaps, 2);
        assert_eq!(alignment.len(), 7);
    }

    #[test]
    fn test_empty_query() {
        let alignment = smith_waterman(b"", b"ACGT", Scoring::default()).unwrap();

        assert_eq!(alignment.score, 0);
        assert!(alignment.is_empty());
        assert_eq!((alignment.query_start, alignment.query_end), (0, 0));
        assert_eq!((alignment.ref_start, alignment.ref_end), (0, 0));
    }

    #[test]
    fn test_empty_reference() {
        let alignment = smith_waterman(b"ACGT", b"", Scoring::default()).unwrap();

        assert_eq!(alignment.score, 0);
        assert!(alignment.is_empty());
    }

    #[test]
    fn test_both_empty() {
        let alignment = smith_waterman(b"", b"", Scoring::default()).unwrap();

        assert_eq!(alignment.score, 0);
        assert!(alignment.is_empty());
        assert_eq!((alignment.query_start, alignment.query_end), (0, 0));
        assert_eq!((alignment.ref_start, alignment.ref_end), (0, 0));
    }

    #[test]
    fn test_matrix_boundary_is_zero() {
        let engine = SmithWaterman::new(b"GGTTGACTA", b"TGTTACGG", Scoring::default()).unwrap();
        let matrix = engine.matrix();

        for i in 0..matrix.rows() {
            assert_eq!(matrix.get(i, 0), 0);
        }
        for j in 0..matrix.cols() {
            assert_eq!(matrix.get(0, j), 0);
        }
    }

    #[test]
    fn test_matrix_nonnegative() {
        let engine = SmithWaterman::new(b"GGTTGACTA", b"TGTTACGG", Scoring::default()).unwrap();
        let matrix = engine.matrix();

        for i in 0..matrix.rows() {
            for j in 0..matrix.cols() {
                assert!(matrix.get(i, j) >= 0, "H[{}][{}] is negative", i, j);
            }
        }
    }

    #[test]
    fn test_score_is_matrix_maximum() {
        let engine = SmithWaterman::new(b"GGTTGACTA", b"TGTTACGG", Scoring::default()).unwrap();
        let matrix = engine.matrix();

        let mut max = 0;
        for i in 0..matrix.rows() {
            for j in 0..matrix.cols() {
                max = max.max(matrix.get(i, j));
            }
        }
        assert_eq!(engine.score(), max);
    }

    #[test]
    fn test_optimum_ties_take_first_in_row_major_order() {
        // "AT" occurs twice in "ATAT": H[2][2] == H[2][4] == 6. The first
        // maximum in row-major order wins, so the reported region is the
        // left occurrence.
        let alignment = smith_waterman(b"AT", b"ATAT", Scoring::default()).unwrap();

        assert_eq!(alignment.score, 6);
        assert_eq!((alignment.query_start, alignment.query_end), (0, 2));
        assert_eq!((alignment.ref_start, alignment.ref_end), (0, 2));
        assert_eq!(alignment.cigar_string(), "2M");
    }

    #[test]
    fn test_traceback_prefers_insertion_over_diagonal() {
        // At the ambiguous cell both the insertion and the diagonal
        // reconstruction hold; insertion is checked first, so the extra G
        // is reported as a gap column, not as a mismatch.
        let alignment = smith_waterman(b"ACGA", b"ACA", Scoring::default()).unwrap();

        assert_eq!(alignment.score, 7);
        assert_eq!(alignment.query_aligned, b"ACGA");
        assert_eq!(alignment.ref_aligned, b"AC-A");
        assert_eq!(alignment.cigar_string(), "2M1I1M");
        assert_eq!(alignment.matches, 3);
        assert_eq!(alignment.mismatches, 0);
        assert_eq!(alignment.gaps, 1);
    }

    #[test]
    fn test_traceback_prefers_deletion_over_diagonal() {
        let alignment = smith_waterman(b"ACA", b"ACGA", Scoring::default()).unwrap();

        assert_eq!(alignment.score, 7);
        assert_eq!(alignment.query_aligned, b"AC-A");
        assert_eq!(alignment.ref_aligned, b"ACGA");
        assert_eq!(alignment.cigar_string(), "2M1D1M");
        assert_eq!(alignment.matches, 3);
        assert_eq!(alignment.mismatches, 0);
        assert_eq!(alignment.gaps, 1);
    }

    #[test]
    fn test_gap_cost_equal_to_match_score() {
        // Degenerate parameters make several reconstructions numerically
        // true at once; the fixed branch order keeps the result stable.
        let alignment = smith_waterman(b"GCAG", b"GAAG", Scoring::new(2, 2)).unwrap();

        assert_eq!(alignment.score, 4);
        assert_eq!((alignment.query_start, alignment.query_end), (2, 4));
        assert_eq!((alignment.ref_start, alignment.ref_end), (2, 4));
        assert_eq!(alignment.query_aligned, b"AG");
        assert_eq!(alignment.ref_aligned, b"AG");
        assert_eq!(alignment.cigar_string(), "2M");
    }

    #[test]
    fn test_rejects_nonpositive_match_score() {
        let err = SmithWaterman::new(b"ACGT", b"ACGT", Scoring::new(0, 2)).unwrap_err();
        assert_eq!(
            err,
            SwalignError::InvalidScoring {
                param: "match_score",
                value: 0,
            }
        );
    }

    #[test]
    fn test_rejects_nonpositive_gap_cost() {
        let err = SmithWaterman::new(b"ACGT", b"ACGT", Scoring::new(3, 0)).unwrap_err();
        assert_eq!(
            err,
            SwalignError::InvalidScoring {
                param: "gap_cost",
                value: 0,
            }
        );
    }

    #[test]
    fn test_rejects_oversized_matrix() {
        // Lengths rejected by the cell-count cap before any allocation.
        let query = vec![b'A'; 1 << 20];
        let reference = vec![b'A'; 1 << 10];
        let err = SmithWaterman::new(&query, &reference, Scoring::default()).unwrap_err();
        assert!(matches!(err, SwalignError::MatrixTooLarge { .. }));
    }

    #[test]
    fn test_engine_accessors_agree_with_alignment() {
        let engine = SmithWaterman::new(b"ACGTTACC", b"ACGTACC", Scoring::default()).unwrap();

        assert_eq!(engine.score(), engine.alignment().score);
        assert_eq!(engine.query_aligned(), &engine.alignment().query_aligned[..]);
        assert_eq!(engine.ref_aligned(), &engine.alignment().ref_aligned[..]);
        assert_eq!(engine.query_start(), engine.alignment().query_start);
        assert_eq!(engine.query_end(), engine.alignment().query_end);
        assert_eq!(engine.ref_start(), engine.alignment().ref_start);
        assert_eq!(engine.ref_end(), engine.alignment().ref_end);
        assert_eq!(engine.scoring(), Scoring::default());
        assert_eq!(engine.matrix().rows(), 9);
        assert_eq!(engine.matrix().cols(), 8);
    }

    #[test]
    fn test_convenience_function_matches_engine() {
        let engine = SmithWaterman::new(b"ATCGAT", b"ATGCAT", Scoring::default()).unwrap();
        let alignment = smith_waterman(b"ATCGAT", b"ATGCAT", Scoring::default()).unwrap();

        assert_eq!(alignment, engine.into_alignment());
    }

    #[test]
    fn test_custom_scoring_changes_alignment() {
        // With a cheap gap the extra C is bridged by a deletion; with an
        // expensive gap a mismatch column is cheaper than any gap.
        let cheap_gap = smith_waterman(b"AAAATTTT", b"AAAACTTTT", Scoring::new(3, 1)).unwrap();
        assert_eq!(cheap_gap.cigar_string(), "4M1D4M");
        assert_eq!(cheap_gap.score, 23); // 8 matches x 3 - 1 gap

        let costly_gap = smith_waterman(b"AAAATTTT", b"AAAACTTTT", Scoring::new(3, 6)).unwrap();
        assert_eq!(costly_gap.cigar_string(), "8M");
        assert_eq!(costly_gap.score, 18); // 7 matches - 1 mismatch, x 3
        assert_eq!(costly_gap.mismatches, 1);
        assert_eq!(costly_gap.gaps, 0);
    }
}
