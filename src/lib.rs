//! # box-duel
//!
//! A two-player, turn-based scoring simulation over a shared pool of boxes.
//!
//! ## Rules
//!
//! 1. **Boxes**: Each box absorbs weights and exposes a score. Averaging
//!    boxes score the squared mean of their last three weights; min-max
//!    boxes score the Cantor pairing of the smallest and largest weight seen.
//!
//! 2. **Selection**: Every turn picks the box with the smallest rank key.
//!    Keys are fixed when the pool is built, so the same box is picked all
//!    game long.
//!
//! 3. **Turns**: Players A and B alternate over an input sequence. Each turn
//!    feeds one weight into the selected box and adds that box's new score
//!    to the acting player's total.
//!
//! ## Modules
//!
//! - `core`: Weights, scores, seats, RNG, configuration, errors
//! - `boxes`: Box variants and the pool's selection rule
//! - `game`: Players, the game driver, per-turn reports

pub mod core;
pub mod boxes;
pub mod game;

// Re-export commonly used types
pub use crate::core::{
    cantor_pair, parse_weights, truncate_score,
    ConfigError, InputError, PoolError,
    Score, Seat, SeatMap, SimulationConfig, Weight,
    WeightRng,
};

pub use crate::boxes::{
    Absorber, AveragingBox, BoxId, BoxKind, BoxPool, MinMaxBox, ScoreBox,
};

pub use crate::game::{
    play, play_observed, simulate,
    Game, GameSnapshot, Player, SimulationResult,
    TurnLog, TurnObserver, TurnOutcome, TurnReport,
};
