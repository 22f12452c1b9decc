//! Error types for the edges of the crate.
//!
//! Gameplay itself is total; only configuration, external input, and
//! deserialized pools can fail.

use thiserror::Error;

/// An invalid `SimulationConfig`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("max_weight must be at least 1")]
    ZeroMaxWeight,
}

/// A box or pool that would break the selection rule.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum PoolError {
    #[error("Rank key must not be NaN")]
    NanRankKey,

    #[error("Pool must hold at least 1 box")]
    Empty,
}

/// Malformed external input.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InputError {
    #[error("invalid weight {value:?} at position {position}: {reason}")]
    InvalidWeight {
        position: usize,
        value: String,
        reason: std::num::ParseIntError,
    },
}
