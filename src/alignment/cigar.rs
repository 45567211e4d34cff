//! CIGAR (Compact Idiosyncratic Gapped Alignment Report) operations
//!
//! CIGAR strings represent sequence alignments compactly using operation codes.

use std::fmt;

/// CIGAR operation types
///
/// Represents the operations in a sequence alignment:
/// - Match: aligned symbol pair (may be match or mismatch)
/// - Insertion: query symbol against a gap in the reference
/// - Deletion: gap in the query against a reference symbol
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CigarOp {
    /// M: alignment match (could be match or mismatch)
    Match,
    /// I: insertion to the reference
    Insertion,
    /// D: deletion from the reference
    Deletion,
}

impl CigarOp {
    /// Get the operation code as a character
    pub fn code(&self) -> char {
        match self {
            CigarOp::Match => 'M',
            CigarOp::Insertion => 'I',
            CigarOp::Deletion => 'D',
        }
    }
}

impl fmt::Display for CigarOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Run-length encoded CIGAR
///
/// Stores `(operation, length)` runs; consecutive pushes of the same
/// operation extend the trailing run, so the encoding is always compressed.
///
/// # Example
///
/// ```
/// use swalign::{Cigar, CigarOp};
///
/// let mut cigar = Cigar::new();
/// cigar.push(CigarOp::Match);
/// cigar.push(CigarOp::Match);
/// cigar.push(CigarOp::Insertion);
///
/// assert_eq!(cigar.runs(), &[(CigarOp::Match, 2), (CigarOp::Insertion, 1)]);
/// assert_eq!(cigar.to_string(), "2M1I");
/// assert_eq!(cigar.len(), 3);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Cigar {
    runs: Vec<(CigarOp, usize)>,
}

impl Cigar {
    /// Create an empty CIGAR
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one operation, extending the trailing run when it matches
    pub fn push(&mut self, op: CigarOp) {
        match self.runs.last_mut() {
            Some((last, len)) if *last == op => *len += 1,
            _ => self.runs.push((op, 1)),
        }
    }

    /// Reverse the run order. Traceback emits operations back-to-front;
    /// run lengths are unaffected.
    pub(crate) fn reverse(&mut self) {
        self.runs.reverse();
    }

    /// The `(operation, length)` runs in alignment order
    pub fn runs(&self) -> &[(CigarOp, usize)] {
        &self.runs
    }

    /// Total operation length (the number of alignment columns)
    pub fn len(&self) -> usize {
        self.runs.iter().map(|(_, len)| len).sum()
    }

    /// Check if the CIGAR contains no operations
    pub fn is_empty(&self) -> bool {
        self.runs.is_empty()
    }
}

impl fmt::Display for Cigar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (op, len) in &self.runs {
            write!(f, "{}{}", len, op.code())?;
        }
        Ok(())
    }
}
