//! Parsing of external weight sequences.

use super::error::InputError;
use super::score::Weight;

/// Parse a sequence of decimal weight strings.
///
/// ```
/// use box_duel::core::parse_weights;
///
/// assert_eq!(parse_weights(["1", "1", "2"]).unwrap(), vec![1, 1, 2]);
/// assert!(parse_weights(["1", "-2"]).is_err());
/// ```
pub fn parse_weights<I, S>(values: I) -> Result<Vec<Weight>, InputError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    values
        .into_iter()
        .enumerate()
        .map(|(position, value)| {
            let value = value.as_ref().trim();
            value.parse().map_err(|reason| InputError::InvalidWeight {
                position,
                value: value.to_string(),
                reason,
            })
        })
        .collect()
}
