//! Per-turn reports, the observer hook, and game snapshots.

use serde::{Deserialize, Serialize};

use crate::boxes::{BoxId, BoxKind};
use crate::core::{Score, Seat, SeatMap, Weight};

/// Everything that happened on one turn.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TurnReport {
    /// 0-based turn index.
    pub turn: usize,
    /// Who acted.
    pub seat: Seat,
    /// The weight fed in.
    pub weight: Weight,
    /// The box that absorbed it.
    pub box_id: BoxId,
    /// That box's score after absorbing.
    pub box_score: Score,
    /// Both cumulative totals after the turn.
    pub totals: SeatMap<f64>,
}

impl std::fmt::Display for TurnReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Scores: player A {}, player B {}",
            self.totals[Seat::A],
            self.totals[Seat::B]
        )
    }
}

/// Receives a report after every turn.
///
/// Observers only read; they cannot influence the game.
pub trait TurnObserver {
    fn on_turn(&mut self, report: &TurnReport);
}

impl<F> TurnObserver for F
where
    F: FnMut(&TurnReport),
{
    fn on_turn(&mut self, report: &TurnReport) {
        self(report);
    }
}

/// Observer that keeps every report.
#[derive(Clone, Debug, Default)]
pub struct TurnLog {
    pub reports: Vec<TurnReport>,
}

impl TurnObserver for TurnLog {
    fn on_turn(&mut self, report: &TurnReport) {
        self.reports.push(report.clone());
    }
}

/// Serializable view of one box.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BoxSnapshot {
    pub id: BoxId,
    pub rank_key: f64,
    pub kind: BoxKind,
    pub score: Score,
}

/// Serializable view of a game in progress.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GameSnapshot {
    /// Turns played so far.
    pub turn: usize,
    pub boxes: Vec<BoxSnapshot>,
    pub totals: SeatMap<f64>,
}
