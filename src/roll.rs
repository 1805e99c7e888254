//! Roll result types.
//!
//! Contains the `RollValue` element enum and the `RollResult` type, which
//! represents the outcome of a single roll request with its values, total,
//! and average.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A single rolled value.
///
/// Most rolls produce `Plain` values. Percentile (d100) rolls requested with
/// the detailed flag produce `Detailed` values that keep the two component
/// draws alongside the combined total: the tens draw is stored scaled
/// (0, 10, ..., 90) and the ones draw is a digit (0-9). The double-zero pair
/// combines to 100, never 0.
///
/// # Examples
///
/// ```rust
/// use rollstat::RollValue;
///
/// let plain = RollValue::Plain(37);
/// let detailed = RollValue::Detailed { total: 37, tens: 30, ones: 7 };
///
/// assert_eq!(plain.amount(), 37);
/// assert_eq!(detailed.amount(), 37);
/// assert_eq!(detailed.to_string(), "37 (30, 7)");
/// ```
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum RollValue {
    /// A single uniform draw, or a combined percentile total.
    Plain(u32),

    /// A percentile draw with its component rolls preserved.
    Detailed {
        /// The combined value (tens + ones, with (0, 0) mapped to 100).
        total: u32,
        /// The scaled tens draw: 0, 10, 20, ..., 90.
        tens: u32,
        /// The ones draw: 0 through 9.
        ones: u32,
    },
}

impl RollValue {
    /// The value this element contributes to a total.
    ///
    /// For `Plain` this is the value itself; for `Detailed` it is the
    /// combined total, not the component draws.
    pub fn amount(&self) -> u32 {
        match self {
            RollValue::Plain(value) => *value,
            RollValue::Detailed { total, .. } => *total,
        }
    }
}

impl fmt::Display for RollValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RollValue::Plain(value) => write!(f, "{}", value),
            RollValue::Detailed { total, tens, ones } => {
                write!(f, "{} ({}, {})", total, tens, ones)
            }
        }
    }
}

/// The outcome of one roll request.
///
/// This is read-only, copyable, and serialization-safe. Contains the die
/// label, every rolled value in order, and the derived total and average.
///
/// # Examples
///
/// ```rust
/// use rollstat::{RollResult, RollValue};
///
/// let result = RollResult::new("d6", vec![RollValue::Plain(3), RollValue::Plain(5)]);
///
/// assert_eq!(result.die, "d6");
/// assert_eq!(result.total, 8);
/// assert_eq!(result.average, 4.0);
/// assert_eq!(result.quantity(), 2);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RollResult {
    /// The die label, like `"d6"` or `"d100"`.
    pub die: String,

    /// Every rolled value, in roll order unless sorting was requested.
    pub values: Vec<RollValue>,

    /// Sum of all values, using the combined total for detailed elements.
    ///
    /// Wide enough that any quantity of `u32` values sums without
    /// wrapping.
    pub total: u64,

    /// `total / quantity` as a real number.
    ///
    /// Defined as 0 for an empty value list, so a hand-built result can
    /// never divide by zero.
    pub average: f64,
}

impl RollResult {
    /// Create a result from a die label and rolled values.
    ///
    /// The total and average are computed here; callers never supply them.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use rollstat::{RollResult, RollValue};
    ///
    /// let result = RollResult::new(
    ///     "d100",
    ///     vec![RollValue::Detailed { total: 100, tens: 0, ones: 0 }],
    /// );
    /// assert_eq!(result.total, 100);
    /// ```
    pub fn new(die: impl Into<String>, values: Vec<RollValue>) -> Self {
        let total: u64 = values.iter().map(|value| u64::from(value.amount())).sum();
        let average = if values.is_empty() {
            0.0
        } else {
            total as f64 / values.len() as f64
        };
        Self {
            die: die.into(),
            values,
            total,
            average,
        }
    }

    /// Number of values in this result.
    pub fn quantity(&self) -> usize {
        self.values.len()
    }
}

impl fmt::Display for RollResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Result of {} {}:", self.values.len(), self.die)?;
        for (index, value) in self.values.iter().enumerate() {
            writeln!(f, "• Roll {}: {}", index + 1, value)?;
        }
        writeln!(f, "---------------")?;
        writeln!(f, "Total: {}", self.total)?;
        write!(f, "Average: {}", self.average)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_roll_value_amount() {
        assert_eq!(RollValue::Plain(7).amount(), 7);
        let detailed = RollValue::Detailed {
            total: 100,
            tens: 0,
            ones: 0,
        };
        assert_eq!(detailed.amount(), 100);
    }

    #[test]
    fn test_roll_value_display() {
        assert_eq!(RollValue::Plain(37).to_string(), "37");
        let detailed = RollValue::Detailed {
            total: 37,
            tens: 30,
            ones: 7,
        };
        assert_eq!(detailed.to_string(), "37 (30, 7)");
    }

    #[test]
    fn test_roll_result_totals() {
        let result = RollResult::new("d6", vec![RollValue::Plain(3), RollValue::Plain(5)]);
        assert_eq!(result.die, "d6");
        assert_eq!(result.total, 8);
        assert_eq!(result.average, 4.0);
        assert_eq!(result.quantity(), 2);
    }

    #[test]
    fn test_roll_result_detailed_totals() {
        let result = RollResult::new(
            "d100",
            vec![
                RollValue::Detailed {
                    total: 37,
                    tens: 30,
                    ones: 7,
                },
                RollValue::Detailed {
                    total: 100,
                    tens: 0,
                    ones: 0,
                },
            ],
        );
        assert_eq!(result.total, 137); // 37 + 100
        assert_eq!(result.average, 68.5);
    }

    #[test]
    fn test_roll_result_empty_average() {
        let result = RollResult::new("d6", Vec::new());
        assert_eq!(result.total, 0);
        assert_eq!(result.average, 0.0);
    }

    #[test]
    fn test_roll_result_total_exceeds_u32() {
        // Three maximum draws sum past u32::MAX; the total must stay exact.
        let result = RollResult::new("d4294967295", vec![RollValue::Plain(u32::MAX); 3]);
        assert_eq!(result.total, 3 * u64::from(u32::MAX)); // 12_884_901_885
        assert_eq!(result.average, u64::from(u32::MAX) as f64);
    }

    #[test]
    fn test_roll_result_display_plain() {
        let result = RollResult::new("d6", vec![RollValue::Plain(3), RollValue::Plain(5)]);
        let expected = "Result of 2 d6:\n\
                        • Roll 1: 3\n\
                        • Roll 2: 5\n\
                        ---------------\n\
                        Total: 8\n\
                        Average: 4";
        assert_eq!(result.to_string(), expected);
    }

    #[test]
    fn test_roll_result_display_detailed() {
        let result = RollResult::new(
            "d100",
            vec![RollValue::Detailed {
                total: 37,
                tens: 30,
                ones: 7,
            }],
        );
        let expected = "Result of 1 d100:\n\
                        • Roll 1: 37 (30, 7)\n\
                        ---------------\n\
                        Total: 37\n\
                        Average: 37";
        assert_eq!(result.to_string(), expected);
    }

    #[test]
    fn test_roll_result_display_fractional_average() {
        let result = RollResult::new("d8", vec![RollValue::Plain(4), RollValue::Plain(5)]);
        assert!(result.to_string().ends_with("Average: 4.5"));
    }
}
