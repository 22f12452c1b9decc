//! Seat identification and per-seat data storage.
//!
//! ## Seat
//!
//! The game always has exactly two seats, `A` and `B`. Turn `i` belongs to
//! `A` when `i` is even and to `B` when it is odd.
//!
//! ## SeatMap
//!
//! Fixed per-seat storage with O(1) access, indexable by `Seat`.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

/// One of the two seats at the table.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Seat {
    A,
    B,
}

impl Seat {
    /// The seat that acts on the given 0-based turn.
    ///
    /// ```
    /// use box_duel::core::Seat;
    ///
    /// assert_eq!(Seat::for_turn(0), Seat::A);
    /// assert_eq!(Seat::for_turn(1), Seat::B);
    /// assert_eq!(Seat::for_turn(4), Seat::A);
    /// ```
    #[must_use]
    pub const fn for_turn(turn: usize) -> Self {
        if turn % 2 == 0 {
            Seat::A
        } else {
            Seat::B
        }
    }

    /// Storage index (0 for `A`, 1 for `B`).
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Seat::A => 0,
            Seat::B => 1,
        }
    }
}

impl std::fmt::Display for Seat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Seat::A => write!(f, "player A"),
            Seat::B => write!(f, "player B"),
        }
    }
}

/// One value per seat.
///
/// ## Example
///
/// ```
/// use box_duel::core::{Seat, SeatMap};
///
/// let mut totals: SeatMap<f64> = SeatMap::with_default();
/// totals[Seat::B] += 4.0;
///
/// assert_eq!(totals[Seat::A], 0.0);
/// assert_eq!(totals.pair(), (0.0, 4.0));
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SeatMap<T> {
    data: [T; 2],
}

impl<T> SeatMap<T> {
    /// Create a map with values from a factory function.
    pub fn new(factory: impl Fn(Seat) -> T) -> Self {
        Self {
            data: [factory(Seat::A), factory(Seat::B)],
        }
    }

    /// Create a map with default values.
    pub fn with_default() -> Self
    where
        T: Default,
    {
        Self::new(|_| T::default())
    }

    /// Get a reference to a seat's data.
    #[must_use]
    pub fn get(&self, seat: Seat) -> &T {
        &self.data[seat.index()]
    }

    /// Get a mutable reference to a seat's data.
    pub fn get_mut(&mut self, seat: Seat) -> &mut T {
        &mut self.data[seat.index()]
    }

    /// Map every entry through `f`.
    pub fn map<U>(&self, f: impl Fn(&T) -> U) -> SeatMap<U> {
        SeatMap::new(|seat| f(self.get(seat)))
    }

    /// The `(A, B)` pair.
    #[must_use]
    pub fn pair(&self) -> (T, T)
    where
        T: Copy,
    {
        (self.data[0], self.data[1])
    }
}

impl<T> Index<Seat> for SeatMap<T> {
    type Output = T;

    fn index(&self, seat: Seat) -> &Self::Output {
        self.get(seat)
    }
}

impl<T> IndexMut<Seat> for SeatMap<T> {
    fn index_mut(&mut self, seat: Seat) -> &mut Self::Output {
        self.get_mut(seat)
    }
}
