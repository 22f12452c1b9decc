//! Players and the game driver.
//!
//! `Game` owns the box pool and both players. On each turn the acting
//! player borrows the pool mutably, so the pool is shared without either
//! player owning it.
//!
//! ## Example Usage
//!
//! ```
//! use box_duel::core::Seat;
//! use box_duel::game::Game;
//!
//! let mut game = Game::new();
//! let report = game.take_turn(4);
//! assert_eq!(report.seat, Seat::A);
//! assert_eq!(report.box_score, 16);
//!
//! let report = game.take_turn(2);
//! assert_eq!(report.seat, Seat::B);
//! assert_eq!(report.totals.pair(), (16.0, 9.0));
//! ```

mod driver;
mod player;
mod report;

pub use driver::{play, play_observed, simulate, Game, SimulationResult};
pub use player::{Player, TurnOutcome};
pub use report::{BoxSnapshot, GameSnapshot, TurnLog, TurnObserver, TurnReport};
