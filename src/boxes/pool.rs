//! The ordered, fixed-size box pool and its selection rule.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::core::PoolError;

use super::ScoreBox;

/// Position of a box in its pool.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BoxId(pub usize);

impl BoxId {
    /// Get the raw index.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0
    }
}

impl std::fmt::Display for BoxId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Box({})", self.0)
    }
}

/// An ordered, non-empty collection of boxes. Boxes are never added or
/// removed.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(try_from = "RawBoxPool")]
pub struct BoxPool {
    boxes: Vec<ScoreBox>,
}

/// Unchecked wire form of a `BoxPool`.
#[derive(Deserialize)]
struct RawBoxPool {
    boxes: Vec<ScoreBox>,
}

impl TryFrom<RawBoxPool> for BoxPool {
    type Error = PoolError;

    fn try_from(raw: RawBoxPool) -> Result<Self, Self::Error> {
        Self::try_new(raw.boxes)
    }
}

impl Default for BoxPool {
    fn default() -> Self {
        Self::standard()
    }
}

impl BoxPool {
    /// The pool every game starts from: two averaging boxes (keys 0.0, 0.1)
    /// followed by two min-max boxes (keys 0.2, 0.3).
    #[must_use]
    pub fn standard() -> Self {
        Self::new([
            ScoreBox::averaging(0.0),
            ScoreBox::averaging(0.1),
            ScoreBox::min_max(0.2),
            ScoreBox::min_max(0.3),
        ])
    }

    /// Build a pool from boxes in order.
    ///
    /// # Panics
    ///
    /// Panics if `boxes` is empty.
    pub fn new(boxes: impl IntoIterator<Item = ScoreBox>) -> Self {
        match Self::try_new(boxes) {
            Ok(pool) => pool,
            Err(err) => panic!("{err}"),
        }
    }

    /// Build a pool from boxes in order, rejecting an empty pool.
    pub fn try_new(boxes: impl IntoIterator<Item = ScoreBox>) -> Result<Self, PoolError> {
        let boxes: Vec<_> = boxes.into_iter().collect();
        if boxes.is_empty() {
            return Err(PoolError::Empty);
        }
        Ok(Self { boxes })
    }

    /// Pick the box with the smallest rank key; the leftmost wins ties.
    ///
    /// Keys are fixed at construction, so this returns the same box for
    /// the pool's whole lifetime.
    #[must_use]
    pub fn select(&self) -> BoxId {
        let mut best = 0;
        for (i, candidate) in self.boxes.iter().enumerate().skip(1) {
            if candidate.cmp_rank(&self.boxes[best]) == Ordering::Less {
                best = i;
            }
        }
        tracing::trace!(box_id = best, rank_key = self.boxes[best].rank_key(), "selected box");
        BoxId(best)
    }

    /// Get a box by id.
    #[must_use]
    pub fn get(&self, id: BoxId) -> &ScoreBox {
        &self.boxes[id.index()]
    }

    /// Get a box mutably by id.
    pub fn get_mut(&mut self, id: BoxId) -> &mut ScoreBox {
        &mut self.boxes[id.index()]
    }

    /// Number of boxes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.boxes.len()
    }

    /// Always false; pools are never empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.boxes.is_empty()
    }

    /// Iterate over (BoxId, &ScoreBox) pairs in pool order.
    pub fn iter(&self) -> impl Iterator<Item = (BoxId, &ScoreBox)> {
        self.boxes.iter().enumerate().map(|(i, b)| (BoxId(i), b))
    }
}
