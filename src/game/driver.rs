//! The game loop: a standard pool, two players, alternating turns.

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::boxes::BoxPool;
use crate::core::{ConfigError, Seat, SeatMap, SimulationConfig, Weight, WeightRng};

use super::player::Player;
use super::report::{BoxSnapshot, GameSnapshot, TurnObserver, TurnReport};

/// A game in progress. Owns the pool and both players.
#[derive(Clone, Debug, Default)]
pub struct Game {
    pool: BoxPool,
    players: SeatMap<Player>,
    turn: usize,
}

impl Game {
    /// A fresh game over the standard pool.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Play the next turn. Even turns belong to A, odd turns to B.
    pub fn take_turn(&mut self, weight: Weight) -> TurnReport {
        let seat = Seat::for_turn(self.turn);
        let outcome = self.players[seat].take_turn(&mut self.pool, weight);
        let report = TurnReport {
            turn: self.turn,
            seat,
            weight,
            box_id: outcome.box_id,
            box_score: outcome.box_score,
            totals: self.scores(),
        };
        debug!(
            turn = report.turn,
            seat = %seat,
            box_id = outcome.box_id.index(),
            weight,
            box_score = %outcome.box_score,
            score_a = report.totals[Seat::A],
            score_b = report.totals[Seat::B],
            "turn played"
        );
        self.turn += 1;
        report
    }

    /// Number of turns played so far.
    #[must_use]
    pub fn turn(&self) -> usize {
        self.turn
    }

    /// Current totals for both seats.
    #[must_use]
    pub fn scores(&self) -> SeatMap<f64> {
        self.players.map(Player::score)
    }

    /// Read-only access to the pool.
    #[must_use]
    pub fn pool(&self) -> &BoxPool {
        &self.pool
    }

    /// A serializable view of the current state.
    #[must_use]
    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot {
            turn: self.turn,
            boxes: self
                .pool
                .iter()
                .map(|(id, b)| BoxSnapshot {
                    id,
                    rank_key: b.rank_key(),
                    kind: b.kind().clone(),
                    score: b.score(),
                })
                .collect(),
            totals: self.scores(),
        }
    }
}

/// Play `inputs` in order and return the final `(A, B)` totals.
///
/// ```
/// assert_eq!(box_duel::play(&[1, 1, 2, 3, 5]), (13.0, 5.0));
/// assert_eq!(box_duel::play(&[]), (0.0, 0.0));
/// ```
#[must_use]
pub fn play(inputs: &[Weight]) -> (f64, f64) {
    play_observed(inputs, &mut |_: &TurnReport| {})
}

/// Like [`play`], handing each turn's report to `observer`.
pub fn play_observed<O>(inputs: &[Weight], observer: &mut O) -> (f64, f64)
where
    O: TurnObserver + ?Sized,
{
    let mut game = Game::new();
    for &weight in inputs {
        let report = game.take_turn(weight);
        observer.on_turn(&report);
    }
    let (a, b) = game.scores().pair();
    info!(turns = game.turn(), score_a = a, score_b = b, "game finished");
    (a, b)
}

/// Result of a seeded random game.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SimulationResult {
    pub config: SimulationConfig,
    pub inputs: Vec<Weight>,
    pub scores: (f64, f64),
}

/// Play a game over a seeded random weight stream.
pub fn simulate<O>(config: &SimulationConfig, observer: &mut O) -> Result<SimulationResult, ConfigError>
where
    O: TurnObserver + ?Sized,
{
    config.validate()?;
    let inputs = WeightRng::new(config.seed).weights(config.turns, config.max_weight);
    debug!(seed = config.seed, turns = config.turns, "generated inputs");
    let scores = play_observed(&inputs, observer);
    Ok(SimulationResult {
        config: config.clone(),
        inputs,
        scores,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::boxes::BoxId;
    use crate::game::report::TurnLog;

    #[test]
    fn test_empty_game() {
        assert_eq!(play(&[]), (0.0, 0.0));
        let game = Game::new();
        assert_eq!(game.turn(), 0);
        assert_eq!(game.scores().pair(), (0.0, 0.0));
    }

    #[test]
    fn test_single_turn_goes_to_a() {
        assert_eq!(play(&[7]), (49.0, 0.0));
    }

    #[test]
    fn test_turns_alternate() {
        let mut game = Game::new();
        let seats: Vec<_> = [1, 2, 3, 4].iter().map(|&w| game.take_turn(w).seat).collect();
        assert_eq!(seats, vec![Seat::A, Seat::B, Seat::A, Seat::B]);
        assert_eq!(game.turn(), 4);
    }

    #[test]
    fn test_every_turn_hits_box_zero() {
        let mut log = TurnLog::default();
        play_observed(&[9, 0, 4, 4, 100, 3], &mut log);
        assert!(log.reports.iter().all(|r| r.box_id == BoxId(0)));
    }

    #[test]
    fn test_observed_matches_unobserved() {
        let inputs = [1, 1, 2, 3, 5, 8, 13, 21];
        let mut log = TurnLog::default();
        assert_eq!(play_observed(&inputs, &mut log), play(&inputs));
        assert_eq!(log.reports.len(), inputs.len());
        assert_eq!(log.reports.last().map(|r| r.totals.pair()), Some(play(&inputs)));
    }

    #[test]
    fn test_snapshot_reflects_pool() {
        let mut game = Game::new();
        game.take_turn(3);
        game.take_turn(5);

        let snapshot = game.snapshot();
        assert_eq!(snapshot.turn, 2);
        assert_eq!(snapshot.boxes.len(), 4);
        assert_eq!(snapshot.boxes[0].score, 16);
        assert_eq!(snapshot.boxes[1].score, 0);
        assert_eq!(snapshot.totals.pair(), (9.0, 16.0));
    }

    #[test]
    fn test_simulate_is_reproducible() {
        let config = SimulationConfig::default().with_seed(3).with_turns(12);
        let first = simulate(&config, &mut |_: &TurnReport| {}).unwrap();
        let second = simulate(&config, &mut |_: &TurnReport| {}).unwrap();

        assert_eq!(first, second);
        assert_eq!(first.inputs.len(), 12);
        assert_eq!(first.scores, play(&first.inputs));
    }

    #[test]
    fn test_simulate_rejects_bad_config() {
        let config = SimulationConfig::default().with_max_weight(0);
        assert_eq!(
            simulate(&config, &mut |_: &TurnReport| {}),
            Err(ConfigError::ZeroMaxWeight)
        );
    }
}
