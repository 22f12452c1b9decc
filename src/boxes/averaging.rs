//! Windowed-mean box.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::{truncate_score, Score, Weight};

use super::Absorber;

/// Number of recent weights an `AveragingBox` remembers.
pub const WINDOW: usize = 3;

/// Scores the squared mean of the last three absorbed weights.
///
/// ```
/// use box_duel::boxes::{Absorber, AveragingBox};
///
/// let mut avg = AveragingBox::new();
/// for w in [1, 2, 3, 5] {
///     avg.absorb(w);
/// }
/// assert_eq!(avg.window(), &[2, 3, 5]);
/// assert_eq!(avg.score(), 11); // (10/3)^2 = 11.1
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AveragingBox {
    /// Oldest first. Never longer than `WINDOW`, so it stays inline.
    window: SmallVec<[Weight; WINDOW]>,
}

impl AveragingBox {
    /// Create an empty box.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The remembered weights, oldest first.
    #[must_use]
    pub fn window(&self) -> &[Weight] {
        &self.window
    }

    /// Mean of the window, or `None` if nothing has been absorbed.
    ///
    /// The sum is taken in `u64`, so one and two element means are exact.
    #[must_use]
    pub fn mean(&self) -> Option<f64> {
        if self.window.is_empty() {
            return None;
        }
        let sum: u64 = self.window.iter().map(|&w| u64::from(w)).sum();
        Some(sum as f64 / self.window.len() as f64)
    }
}

impl Absorber for AveragingBox {
    fn absorb(&mut self, weight: Weight) -> Weight {
        if self.window.len() == WINDOW {
            self.window.remove(0);
        }
        self.window.push(weight);
        weight
    }

    fn score(&self) -> Score {
        self.mean().map_or(0, |mean| truncate_score(mean * mean))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_scores_zero() {
        let avg = AveragingBox::new();
        assert_eq!(avg.mean(), None);
        assert_eq!(avg.score(), 0);
    }

    #[test]
    fn test_absorb_returns_input() {
        let mut avg = AveragingBox::new();
        assert_eq!(avg.absorb(1), 1);
        assert_eq!(avg.absorb(42), 42);
    }

    #[test]
    fn test_scores_by_window_length() {
        let mut avg = AveragingBox::new();

        avg.absorb(3);
        assert_eq!(avg.score(), 9);

        avg.absorb(4);
        // 3.5^2 = 12.25
        assert_eq!(avg.score(), 12);

        avg.absorb(2);
        assert_eq!(avg.score(), 9);
    }

    #[test]
    fn test_window_evicts_oldest() {
        let mut avg = AveragingBox::new();
        for w in [100, 1, 1, 1] {
            avg.absorb(w);
        }
        assert_eq!(avg.window(), &[1, 1, 1]);
        assert_eq!(avg.score(), 1);
    }

    #[test]
    fn test_window_never_spills() {
        let mut avg = AveragingBox::new();
        for w in 0..50 {
            avg.absorb(w);
            assert!(avg.window().len() <= WINDOW);
            assert!(!avg.window.spilled());
        }
        assert_eq!(avg.window(), &[47, 48, 49]);
    }

    #[test]
    fn test_two_large_weights_do_not_overflow() {
        let mut avg = AveragingBox::new();
        avg.absorb(Weight::MAX);
        avg.absorb(Weight::MAX);
        assert_eq!(avg.mean(), Some(f64::from(Weight::MAX)));
    }

    #[test]
    fn test_serde() {
        let mut avg = AveragingBox::new();
        avg.absorb(5);
        avg.absorb(8);
        let json = serde_json::to_string(&avg).unwrap();
        let deserialized: AveragingBox = serde_json::from_str(&json).unwrap();
        assert_eq!(avg, deserialized);
    }
}
