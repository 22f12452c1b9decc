//! Core types: numeric primitives, seats, RNG, configuration, errors.
//!
//! Everything here is independent of the box variants and the game loop.

pub mod score;
pub mod seat;
pub mod rng;
pub mod config;
pub mod error;
pub mod input;

pub use score::{cantor_pair, truncate_score, Score, Weight};
pub use seat::{Seat, SeatMap};
pub use rng::WeightRng;
pub use config::SimulationConfig;
pub use error::{ConfigError, InputError, PoolError};
pub use input::parse_weights;
