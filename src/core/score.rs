//! Numeric primitives shared by every box variant.
//!
//! ## Widths
//!
//! Inputs are `u32` weights. Scores are `u128` so that the Cantor pairing of
//! any two weights is exact: `(a + b)(a + b + 1) / 2 + a` peaks just above
//! `2^65` for `a, b <= u32::MAX`, which would overflow `u64`.
//!
//! ## Real-to-integer conversion
//!
//! Every conversion from a real-valued intermediate to a `Score` goes through
//! [`truncate_score`]. No variant uses a bare `as` cast of its own.

/// An input weight fed into a box.
pub type Weight = u32;

/// A box score.
pub type Score = u128;

/// Convert a real value to a `Score`, truncating toward zero.
///
/// Negative values and NaN map to 0; values beyond `Score::MAX` saturate.
///
/// ```
/// use box_duel::core::truncate_score;
///
/// assert_eq!(truncate_score(1.999), 1);
/// assert_eq!(truncate_score(11.11), 11);
/// assert_eq!(truncate_score(-3.5), 0);
/// assert_eq!(truncate_score(f64::NAN), 0);
/// ```
#[must_use]
pub fn truncate_score(value: f64) -> Score {
    if value.is_nan() || value <= 0.0 {
        return 0;
    }
    // Float-to-int `as` truncates toward zero and saturates at the upper bound.
    value.trunc() as Score
}

/// Cantor pairing of `(a, b)`: `(a + b)(a + b + 1) / 2 + a`.
///
/// Order-sensitive: the second term is always the *first* argument, so
/// `cantor_pair(1, 2)` is 7. The textbook Cantor value 8 for "(1, 2)" adds
/// the second argument instead; here it is `cantor_pair(2, 1)`.
///
/// ```
/// use box_duel::core::cantor_pair;
///
/// assert_eq!(cantor_pair(0, 0), 0);
/// assert_eq!(cantor_pair(1, 2), 7);
/// assert_eq!(cantor_pair(2, 1), 8);
/// ```
#[must_use]
pub fn cantor_pair(a: Weight, b: Weight) -> Score {
    let a = Score::from(a);
    let sum = a + Score::from(b);
    sum * (sum + 1) / 2 + a
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_toward_zero() {
        assert_eq!(truncate_score(0.0), 0);
        assert_eq!(truncate_score(0.999), 0);
        assert_eq!(truncate_score(16.0 / 9.0), 1);
        assert_eq!(truncate_score(100.0 / 9.0), 11);
        assert_eq!(truncate_score(196.0), 196);
    }

    #[test]
    fn test_truncate_edge_values() {
        assert_eq!(truncate_score(-0.0), 0);
        assert_eq!(truncate_score(f64::NEG_INFINITY), 0);
        assert_eq!(truncate_score(f64::INFINITY), Score::MAX);
    }

    #[test]
    fn test_truncate_beyond_u64() {
        assert_eq!(truncate_score(2f64.powi(60)), 1 << 60);
        assert_eq!(truncate_score(2f64.powi(70)), 1 << 70);
    }

    #[test]
    fn test_cantor_pair_closed_form() {
        assert_eq!(cantor_pair(0, 0), 0);
        assert_eq!(cantor_pair(0, 1), 1);
        assert_eq!(cantor_pair(1, 0), 2);
        assert_eq!(cantor_pair(1, 1), 4);
        assert_eq!(cantor_pair(1, 2), 7);
        assert_eq!(cantor_pair(2, 1), 8);
        assert_eq!(cantor_pair(3, 5), 39);
    }

    #[test]
    fn test_cantor_pair_does_not_wrap() {
        assert_eq!(cantor_pair(Weight::MAX, 0), 9_223_372_039_002_259_455);

        let max = Score::from(Weight::MAX);
        let sum = 2 * max;
        assert_eq!(cantor_pair(Weight::MAX, Weight::MAX), sum * (sum + 1) / 2 + max);
    }
}
