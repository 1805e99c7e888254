//! Ability score derivation module.
//!
//! Contains the standard tabletop 4d6-drop-lowest scoring rule and the
//! floored-division ability modifier.

use crate::error::RollError;
use crate::roll::RollResult;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Format a value list as a readable comma-separated string.
fn join_values(values: &[u32]) -> String {
    values
        .iter()
        .map(|value| value.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Ability modifier for a score: floor((score − 10) / 2).
///
/// The division is floored, not truncated: it rounds toward negative
/// infinity, so a score of 3 gives −4 rather than −3.
///
/// # Examples
///
/// ```rust
/// use rollstat::ability_modifier;
///
/// assert_eq!(ability_modifier(10), 0);
/// assert_eq!(ability_modifier(3), -4);
/// assert_eq!(ability_modifier(18), 4);
/// ```
pub fn ability_modifier(score: i64) -> i64 {
    (score - 10).div_euclid(2)
}

/// One 4d6-drop-lowest ability score with full breakdown information.
///
/// This is read-only, copyable, and serialization-safe. Contains the
/// rolled values in original order, the descending-sorted copy, the
/// dropped (lowest) value, and the resulting score.
///
/// # Examples
///
/// ```rust
/// use rollstat::AbilityRoll;
///
/// let ability = AbilityRoll::new([6, 4, 5, 2]);
///
/// assert_eq!(ability.sorted, [6, 5, 4, 2]);
/// assert_eq!(ability.dropped, 2);
/// assert_eq!(ability.score, 15);
/// assert_eq!(ability.modifier(), 2);
/// ```
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct AbilityRoll {
    /// The four rolled values, in roll order.
    pub rolls: [u32; 4],

    /// The same four values sorted descending.
    pub sorted: [u32; 4],

    /// The lowest value; it does not count toward the score.
    pub dropped: u32,

    /// Sum of the three highest values.
    ///
    /// Wide enough that three maximum `u32` values sum without wrapping.
    pub score: u64,
}

impl AbilityRoll {
    /// Derive an ability score from four rolled values.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use rollstat::AbilityRoll;
    ///
    /// let ability = AbilityRoll::new([3, 3, 3, 3]);
    /// assert_eq!(ability.score, 9);
    /// ```
    pub fn new(rolls: [u32; 4]) -> Self {
        let mut sorted = rolls;
        sorted.sort_unstable_by(|a, b| b.cmp(a));
        let dropped = sorted[3];
        let score = u64::from(sorted[0]) + u64::from(sorted[1]) + u64::from(sorted[2]);
        Self {
            rolls,
            sorted,
            dropped,
            score,
        }
    }

    /// Derive an ability score from a roll result.
    ///
    /// The result must hold exactly four values. Detailed percentile
    /// elements contribute their combined totals.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use rollstat::{AbilityRoll, RollResult, RollValue};
    ///
    /// let result = RollResult::new(
    ///     "d6",
    ///     vec![
    ///         RollValue::Plain(6),
    ///         RollValue::Plain(4),
    ///         RollValue::Plain(5),
    ///         RollValue::Plain(2),
    ///     ],
    /// );
    /// let ability = AbilityRoll::from_roll(&result).unwrap();
    /// assert_eq!(ability.score, 15);
    /// ```
    pub fn from_roll(result: &RollResult) -> Result<Self, RollError> {
        let amounts: Vec<u32> = result.values.iter().map(|value| value.amount()).collect();
        let rolls: [u32; 4] = amounts.try_into().map_err(|_| RollError::StatCountMismatch {
            found: result.values.len(),
        })?;
        Ok(Self::new(rolls))
    }

    /// Ability modifier for this score.
    pub fn modifier(&self) -> i64 {
        ability_modifier(self.score as i64)
    }
}

impl fmt::Display for AbilityRoll {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Base Result: {}", join_values(&self.rolls))?;
        writeln!(f, "Sorted Result: {}", join_values(&self.sorted))?;
        writeln!(f, "Dropped Value: {}", self.dropped)?;
        write!(f, "Score Result: {}", self.score)
    }
}

/// Derive an ability score from a four-value roll result.
///
/// Sorts a copy of the values descending, drops the lowest, and returns
/// the sum of the remaining three. With `print_to_console`, the full
/// breakdown is written to stdout first; the score is returned either
/// way.
///
/// # Examples
///
/// ```rust
/// use rollstat::{roll_d6, roll_for_stats};
///
/// let result = roll_d6(4, false).unwrap();
/// let score = roll_for_stats(&result, false).unwrap();
/// assert!((3..=18).contains(&score));
/// ```
pub fn roll_for_stats(result: &RollResult, print_to_console: bool) -> Result<u64, RollError> {
    let ability = AbilityRoll::from_roll(result)?;
    if print_to_console {
        println!("{}", ability);
    }
    Ok(ability.score)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::roll::RollValue;

    #[test]
    fn test_modifier_table() {
        let table = [
            (2, -4),
            (3, -4),
            (4, -3),
            (5, -3),
            (6, -2),
            (7, -2),
            (8, -1),
            (9, -1),
            (10, 0),
            (11, 0),
            (12, 1),
            (13, 1),
            (14, 2),
            (15, 2),
            (16, 3),
            (17, 3),
            (18, 4),
        ];
        for (score, expected) in table {
            assert_eq!(ability_modifier(score), expected, "score {}", score);
        }
    }

    #[test]
    fn test_modifier_floors_toward_negative_infinity() {
        assert_eq!(ability_modifier(1), -5); // -9 / 2 floors to -5
        assert_eq!(ability_modifier(0), -5);
        assert_eq!(ability_modifier(-1), -6); // -11 / 2 floors to -6
    }

    #[test]
    fn test_ability_roll_known_values() {
        let ability = AbilityRoll::new([6, 4, 5, 2]);
        assert_eq!(ability.rolls, [6, 4, 5, 2]);
        assert_eq!(ability.sorted, [6, 5, 4, 2]);
        assert_eq!(ability.dropped, 2);
        assert_eq!(ability.score, 15); // 6 + 5 + 4
    }

    #[test]
    fn test_ability_roll_ties() {
        let ability = AbilityRoll::new([3, 3, 3, 3]);
        assert_eq!(ability.sorted, [3, 3, 3, 3]);
        assert_eq!(ability.dropped, 3);
        assert_eq!(ability.score, 9);
    }

    #[test]
    fn test_ability_roll_maximum_values() {
        // The score of three maximum draws passes u32::MAX and must
        // stay exact, as must its modifier.
        let ability = AbilityRoll::new([u32::MAX; 4]);
        assert_eq!(ability.dropped, u32::MAX);
        assert_eq!(ability.score, 3 * u64::from(u32::MAX)); // 12_884_901_885
        assert_eq!(ability.modifier(), 6_442_450_937); // (score - 10) / 2, floored
    }

    #[test]
    fn test_from_roll_rejects_wrong_count() {
        let three = RollResult::new(
            "d6",
            vec![
                RollValue::Plain(1),
                RollValue::Plain(2),
                RollValue::Plain(3),
            ],
        );
        assert_eq!(
            AbilityRoll::from_roll(&three),
            Err(RollError::StatCountMismatch { found: 3 })
        );

        let five = RollResult::new("d6", vec![RollValue::Plain(4); 5]);
        assert_eq!(
            AbilityRoll::from_roll(&five),
            Err(RollError::StatCountMismatch { found: 5 })
        );
    }

    #[test]
    fn test_from_roll_uses_combined_amounts() {
        let result = RollResult::new(
            "d100",
            vec![
                RollValue::Detailed {
                    total: 37,
                    tens: 30,
                    ones: 7,
                },
                RollValue::Plain(12),
                RollValue::Plain(50),
                RollValue::Plain(4),
            ],
        );
        let ability = AbilityRoll::from_roll(&result).unwrap();
        assert_eq!(ability.sorted, [50, 37, 12, 4]);
        assert_eq!(ability.score, 99); // 50 + 37 + 12
    }

    #[test]
    fn test_display_exact() {
        let ability = AbilityRoll::new([6, 4, 5, 2]);
        let expected = "Base Result: 6, 4, 5, 2\n\
                        Sorted Result: 6, 5, 4, 2\n\
                        Dropped Value: 2\n\
                        Score Result: 15";
        assert_eq!(ability.to_string(), expected);
    }

    #[test]
    fn test_roll_for_stats_score() {
        let result = RollResult::new("d6", vec![RollValue::Plain(6); 4]);
        assert_eq!(roll_for_stats(&result, false), Ok(18));
        // The score is produced regardless of the print flag.
        assert_eq!(roll_for_stats(&result, true), Ok(18));
    }

    #[test]
    fn test_roll_for_stats_rejects_wrong_count() {
        let result = RollResult::new("d6", vec![RollValue::Plain(6); 2]);
        assert_eq!(
            roll_for_stats(&result, false),
            Err(RollError::StatCountMismatch { found: 2 })
        );
    }
}
