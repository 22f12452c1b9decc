//! Bounds-tracking box.

use serde::{Deserialize, Serialize};

use crate::core::{cantor_pair, Score, Weight};

use super::Absorber;

/// Tracks the smallest and largest weight seen and scores their pairing.
///
/// Before anything is absorbed `min_seen` is `Weight::MAX` and `max_seen`
/// is 0, and the score is the pairing of those sentinels.
///
/// ```
/// use box_duel::boxes::{Absorber, MinMaxBox};
///
/// let mut bounds = MinMaxBox::new();
/// bounds.absorb(1);
/// assert_eq!(bounds.score(), 4);
/// bounds.absorb(2);
/// assert_eq!(bounds.score(), 7);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MinMaxBox {
    min_seen: Weight,
    max_seen: Weight,
}

impl Default for MinMaxBox {
    fn default() -> Self {
        Self {
            min_seen: Weight::MAX,
            max_seen: 0,
        }
    }
}

impl MinMaxBox {
    /// Create a box in the sentinel state.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Smallest weight absorbed so far (`Weight::MAX` if none).
    #[must_use]
    pub fn min_seen(&self) -> Weight {
        self.min_seen
    }

    /// Largest weight absorbed so far (0 if none).
    #[must_use]
    pub fn max_seen(&self) -> Weight {
        self.max_seen
    }
}

impl Absorber for MinMaxBox {
    fn absorb(&mut self, weight: Weight) -> Weight {
        // Independent updates: the first weight sets both bounds.
        if weight < self.min_seen {
            self.min_seen = weight;
        }
        if weight > self.max_seen {
            self.max_seen = weight;
        }
        weight
    }

    fn score(&self) -> Score {
        cantor_pair(self.min_seen, self.max_seen)
    }
}
