//! A player's running total and the turn protocol.

use serde::{Deserialize, Serialize};

use crate::boxes::{BoxId, BoxPool};
use crate::core::{Score, Weight};

/// What a single turn did to the pool.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnOutcome {
    /// The box that absorbed the weight.
    pub box_id: BoxId,
    /// That box's score right after absorbing.
    pub box_score: Score,
}

/// One participant. Owns only its cumulative score; the pool is lent to it
/// for the duration of each turn.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Player {
    score: f64,
}

impl Player {
    /// A player with a zero total.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Select a box, feed it `weight`, and add its new score to the total.
    pub fn take_turn(&mut self, pool: &mut BoxPool, weight: Weight) -> TurnOutcome {
        let box_id = pool.select();
        let chosen = pool.get_mut(box_id);
        chosen.absorb(weight);
        let box_score = chosen.score();
        self.score += box_score as f64;
        TurnOutcome { box_id, box_score }
    }

    /// The cumulative total.
    #[must_use]
    pub fn score(&self) -> f64 {
        self.score
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_player_scores_zero() {
        assert_eq!(Player::new().score(), 0.0);
    }

    #[test]
    fn test_take_turn_accumulates() {
        let mut pool = BoxPool::standard();
        let mut player = Player::new();

        let first = player.take_turn(&mut pool, 2);
        assert_eq!(first, TurnOutcome { box_id: BoxId(0), box_score: 4 });
        assert_eq!(player.score(), 4.0);

        // Window [2, 4], mean 3
        let second = player.take_turn(&mut pool, 4);
        assert_eq!(second.box_score, 9);
        assert_eq!(player.score(), 13.0);
    }

    #[test]
    fn test_players_share_pool_state() {
        let mut pool = BoxPool::standard();
        let mut a = Player::new();
        let mut b = Player::new();

        a.take_turn(&mut pool, 10);
        // B sees A's weight in the window: mean of [10, 0] is 5
        b.take_turn(&mut pool, 0);

        assert_eq!(a.score(), 100.0);
        assert_eq!(b.score(), 25.0);
    }

    #[test]
    fn test_score_read_is_idempotent() {
        let mut pool = BoxPool::standard();
        let mut player = Player::new();
        player.take_turn(&mut pool, 3);

        let first = player.score();
        assert_eq!(player.score(), first);
        assert_eq!(player.score(), first);
    }
}
