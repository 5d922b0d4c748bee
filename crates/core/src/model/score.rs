use serde::{Deserialize, Serialize};
use thiserror::Error;

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

/// Violations of the score contract: both sides must be finite and
/// non-negative.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum ScoreError {
    #[error("earned points must be finite and non-negative, got {0}")]
    InvalidEarned(f64),

    #[error("possible points must be finite and non-negative, got {0}")]
    InvalidPossible(f64),
}

//
// ─── SCORE ─────────────────────────────────────────────────────────────────────
//

/// An earned/possible point pair for a single problem or a whole section.
///
/// Scores arrive from the external grading engine and are trusted input:
/// `earned <= possible` is deliberately not enforced. Finiteness and sign
/// are checked at build time via [`Score::validate`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Score {
    pub earned: f64,
    pub possible: f64,
}

impl Score {
    #[must_use]
    pub fn new(earned: f64, possible: f64) -> Self {
        Self { earned, possible }
    }

    /// A zero-point score, substituted when a section's numbers are
    /// withheld after a contract violation.
    #[must_use]
    pub fn zero() -> Self {
        Self::new(0.0, 0.0)
    }

    /// Checks the score contract.
    ///
    /// # Errors
    ///
    /// Returns `ScoreError` if either side is negative, NaN or infinite.
    pub fn validate(&self) -> Result<(), ScoreError> {
        if !self.earned.is_finite() || self.earned < 0.0 {
            return Err(ScoreError::InvalidEarned(self.earned));
        }
        if !self.possible.is_finite() || self.possible < 0.0 {
            return Err(ScoreError::InvalidPossible(self.possible));
        }
        Ok(())
    }

    /// Earned-over-possible ratio, or `None` when no points are possible.
    #[must_use]
    pub fn ratio(&self) -> Option<f64> {
        if self.possible > 0.0 {
            Some(self.earned / self.possible)
        } else {
            None
        }
    }

    /// Ratio for the percentage label.
    ///
    /// Defined only when both sides are positive: a section with points
    /// available but nothing earned shows its raw fraction without a
    /// percentage. The asymmetry is a deliberate product rule.
    #[must_use]
    pub fn percentage_ratio(&self) -> Option<f64> {
        if self.earned > 0.0 { self.ratio() } else { None }
    }

    /// True when either side is non-zero, i.e. there is something worth
    /// rendering.
    #[must_use]
    pub fn has_points(&self) -> bool {
        self.earned > 0.0 || self.possible > 0.0
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validate_accepts_ordinary_scores() {
        assert!(Score::new(0.0, 0.0).validate().is_ok());
        assert!(Score::new(5.0, 10.0).validate().is_ok());
        // earned above possible is trusted input, not an error
        assert!(Score::new(12.0, 10.0).validate().is_ok());
    }

    #[test]
    fn validate_rejects_negative_points() {
        assert_eq!(
            Score::new(-1.0, 10.0).validate().unwrap_err(),
            ScoreError::InvalidEarned(-1.0)
        );
        assert_eq!(
            Score::new(1.0, -10.0).validate().unwrap_err(),
            ScoreError::InvalidPossible(-10.0)
        );
    }

    #[test]
    fn validate_rejects_non_finite_points() {
        assert!(matches!(
            Score::new(f64::NAN, 10.0).validate().unwrap_err(),
            ScoreError::InvalidEarned(_)
        ));
        assert!(matches!(
            Score::new(1.0, f64::INFINITY).validate().unwrap_err(),
            ScoreError::InvalidPossible(_)
        ));
    }

    #[test]
    fn ratio_guards_division_by_zero() {
        assert_eq!(Score::new(3.0, 0.0).ratio(), None);
        assert_eq!(Score::new(5.0, 10.0).ratio(), Some(0.5));
    }

    #[test]
    fn percentage_ratio_requires_both_sides_positive() {
        assert_eq!(Score::new(0.0, 10.0).percentage_ratio(), None);
        assert_eq!(Score::new(5.0, 0.0).percentage_ratio(), None);
        assert_eq!(Score::new(5.0, 10.0).percentage_ratio(), Some(0.5));
    }

    #[test]
    fn has_points_needs_either_side() {
        assert!(!Score::zero().has_points());
        assert!(Score::new(1.0, 0.0).has_points());
        assert!(Score::new(0.0, 10.0).has_points());
    }
}
