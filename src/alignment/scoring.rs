//! Scoring parameters for local alignment

use crate::error::{Result, SwalignError};

/// Scoring parameters for Smith-Waterman alignment
///
/// Two parameters drive the recurrence: identical symbols score
/// `+match_score`, differing symbols score `-match_score`, and every gap
/// symbol costs `gap_cost`. There is no independent mismatch penalty; the
/// mismatch score is the negated match reward, which keeps results stable
/// for callers that depend on the exact cell values. Both parameters must
/// be positive.
///
/// # Example
///
/// ```
/// use swalign::Scoring;
///
/// // Default scoring (match=3, gap_cost=2)
/// let scoring = Scoring::default();
/// assert_eq!(scoring.match_score, 3);
///
/// // Custom scoring
/// let custom = Scoring::new(5, 4);
/// assert_eq!(custom.score(b'A', b'A'), 5);
/// assert_eq!(custom.score(b'A', b'C'), -5);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Scoring {
    /// Reward for identical symbols (positive); differing symbols score
    /// the negation of this value
    pub match_score: i32,
    /// Penalty subtracted per gap symbol (positive)
    pub gap_cost: i32,
}

impl Default for Scoring {
    /// Default scoring parameters
    ///
    /// - Match: +3 (mismatch: -3)
    /// - Gap: 2 per symbol
    fn default() -> Self {
        Self {
            match_score: 3,
            gap_cost: 2,
        }
    }
}

impl Scoring {
    /// Create new scoring parameters
    pub fn new(match_score: i32, gap_cost: i32) -> Self {
        Self {
            match_score,
            gap_cost,
        }
    }

    /// Calculate the score for aligning two symbols
    ///
    /// # Example
    ///
    /// ```
    /// use swalign::Scoring;
    ///
    /// let scoring = Scoring::default();
    /// assert_eq!(scoring.score(b'A', b'A'), 3);  // Match
    /// assert_eq!(scoring.score(b'A', b'C'), -3); // Mismatch
    /// ```
    #[inline]
    pub fn score(&self, a: u8, b: u8) -> i32 {
        if a == b {
            self.match_score
        } else {
            -self.match_score
        }
    }

    /// Check that both parameters are positive
    ///
    /// Non-positive values would break the local-alignment guarantee (the
    /// zero floor of the recurrence stops bounding anything useful), so
    /// engine construction rejects them up front.
    pub fn validate(&self) -> Result<()> {
        if self.match_score <= 0 {
            return Err(SwalignError::InvalidScoring {
                param: "match_score",
                value: self.match_score,
            });
        }
        if self.gap_cost <= 0 {
            return Err(SwalignError::InvalidScoring {
                param: "gap_cost",
                value: self.gap_cost,
            });
        }
        Ok(())
    }
}
