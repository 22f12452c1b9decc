//! Scoring boxes and the shared pool.
//!
//! A box absorbs weights and exposes a score derived from what it has seen.
//! There are exactly two variants:
//! - **Averaging**: squared mean of the last three weights
//! - **MinMax**: Cantor pairing of the smallest and largest weight seen
//!
//! Each box in a pool also carries a rank key, fixed when the box is built.
//! Selection orders boxes by this key alone; absorbing never changes it.
//!
//! ## Example Usage
//!
//! ```
//! use box_duel::boxes::{BoxId, BoxPool};
//!
//! let mut pool = BoxPool::standard();
//! let chosen = pool.select();
//! assert_eq!(chosen, BoxId(0));
//!
//! pool.get_mut(chosen).absorb(4);
//! assert_eq!(pool.get(chosen).score(), 16);
//! // Still the same box: rank keys never move.
//! assert_eq!(pool.select(), chosen);
//! ```

mod averaging;
mod min_max;
mod pool;

pub use averaging::{AveragingBox, WINDOW};
pub use min_max::MinMaxBox;
pub use pool::{BoxId, BoxPool};

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::core::{PoolError, Score, Weight};

/// The capability every box variant implements.
pub trait Absorber {
    /// Feed a weight into the box. Returns the weight unchanged.
    fn absorb(&mut self, weight: Weight) -> Weight;

    /// The score derived from everything absorbed so far.
    fn score(&self) -> Score;
}

/// The closed set of box variants.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum BoxKind {
    Averaging(AveragingBox),
    MinMax(MinMaxBox),
}

impl BoxKind {
    /// Variant name for display and logs.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            BoxKind::Averaging(_) => "averaging",
            BoxKind::MinMax(_) => "min-max",
        }
    }
}

impl Absorber for BoxKind {
    fn absorb(&mut self, weight: Weight) -> Weight {
        match self {
            BoxKind::Averaging(b) => b.absorb(weight),
            BoxKind::MinMax(b) => b.absorb(weight),
        }
    }

    fn score(&self) -> Score {
        match self {
            BoxKind::Averaging(b) => b.score(),
            BoxKind::MinMax(b) => b.score(),
        }
    }
}

/// A box variant together with its immutable selection key.
///
/// Equality covers both the key and the absorbed state; ordering by key
/// alone is [`ScoreBox::cmp_rank`].
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawScoreBox")]
pub struct ScoreBox {
    rank_key: f64,
    kind: BoxKind,
}

/// Unchecked wire form of a `ScoreBox`.
#[derive(Deserialize)]
struct RawScoreBox {
    rank_key: f64,
    kind: BoxKind,
}

impl TryFrom<RawScoreBox> for ScoreBox {
    type Error = PoolError;

    fn try_from(raw: RawScoreBox) -> Result<Self, Self::Error> {
        Self::try_new(raw.rank_key, raw.kind)
    }
}

impl ScoreBox {
    /// Wrap a variant with a rank key.
    ///
    /// # Panics
    ///
    /// Panics if `rank_key` is NaN.
    #[must_use]
    pub fn new(rank_key: f64, kind: BoxKind) -> Self {
        match Self::try_new(rank_key, kind) {
            Ok(b) => b,
            Err(err) => panic!("{err}"),
        }
    }

    /// Wrap a variant with a rank key, rejecting a NaN key.
    pub fn try_new(rank_key: f64, kind: BoxKind) -> Result<Self, PoolError> {
        if rank_key.is_nan() {
            return Err(PoolError::NanRankKey);
        }
        Ok(Self { rank_key, kind })
    }

    /// An empty averaging box.
    #[must_use]
    pub fn averaging(rank_key: f64) -> Self {
        Self::new(rank_key, BoxKind::Averaging(AveragingBox::new()))
    }

    /// A min-max box in its sentinel state.
    #[must_use]
    pub fn min_max(rank_key: f64) -> Self {
        Self::new(rank_key, BoxKind::MinMax(MinMaxBox::new()))
    }

    /// The selection key fixed at construction.
    #[must_use]
    pub fn rank_key(&self) -> f64 {
        self.rank_key
    }

    /// The underlying variant (read-only; the key cannot be reached mutably).
    #[must_use]
    pub fn kind(&self) -> &BoxKind {
        &self.kind
    }

    /// Feed a weight into the box. Returns the weight unchanged.
    pub fn absorb(&mut self, weight: Weight) -> Weight {
        self.kind.absorb(weight)
    }

    /// The box's current score.
    #[must_use]
    pub fn score(&self) -> Score {
        self.kind.score()
    }

    /// Compare by rank key only, ignoring absorbed state.
    ///
    /// Keys are never NaN, so this is a total order.
    #[must_use]
    pub fn cmp_rank(&self, other: &Self) -> Ordering {
        self.rank_key.partial_cmp(&other.rank_key).unwrap_or(Ordering::Equal)
    }
}
