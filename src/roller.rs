//! Dice rolling module.
//!
//! Contains the `RollRequest` builder and the rolling operations: the
//! generic [`roll_dice`] plus fixed-size wrappers for the standard
//! polyhedral set. Percentile (d100) rolls are special-cased per the
//! tabletop convention: a tens draw and a ones draw, with double zero
//! reading as 100.

use crate::error::RollError;
use crate::roll::{RollResult, RollValue};
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Side count that triggers the percentile special case.
const PERCENTILE_SIDES: u32 = 100;

/// Combine a scaled tens draw (0, 10, ..., 90) and a ones draw (0-9)
/// into a percentile value. Double zero reads as 100, never 0, so the
/// result is always in 1..=100.
fn combine_percentile(tens: u32, ones: u32) -> u32 {
    if tens == 0 && ones == 0 {
        100
    } else {
        tens + ones
    }
}

/// A dice roll request.
///
/// Built with [`RollRequest::new`] and the chainable flag methods, then
/// executed with [`RollRequest::roll`] (thread-local RNG) or
/// [`RollRequest::roll_with`] (caller-supplied RNG, which is how tests
/// roll deterministically).
///
/// Quantity and side count are validated when the request is rolled, not
/// when it is built; both must be at least 1.
///
/// # Examples
///
/// ```rust
/// use rollstat::RollRequest;
///
/// let result = RollRequest::new(3, 6).sort(true).roll().unwrap();
/// assert_eq!(result.die, "d6");
/// assert_eq!(result.quantity(), 3);
/// assert!(result.values.iter().all(|v| (1..=6).contains(&v.amount())));
/// ```
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct RollRequest {
    /// How many dice to roll.
    pub quantity: u32,
    /// How many sides each die has.
    pub sides: u32,
    /// Reorder the values descending. Ignored for detailed rolls.
    pub sort: bool,
    /// Keep the component draws of percentile rolls.
    pub detailed: bool,
}

impl RollRequest {
    /// Create a request for `quantity` dice with `sides` sides each.
    ///
    /// Sorting and detail are off until requested.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use rollstat::RollRequest;
    ///
    /// let request = RollRequest::new(4, 6);
    /// assert_eq!(request.quantity, 4);
    /// assert_eq!(request.sides, 6);
    /// assert!(!request.sort);
    /// assert!(!request.detailed);
    /// ```
    pub fn new(quantity: u32, sides: u32) -> Self {
        Self {
            quantity,
            sides,
            sort: false,
            detailed: false,
        }
    }

    /// Request descending ordering of the rolled values.
    ///
    /// Sorting never applies to detailed rolls; their entries stay in
    /// roll order so each line can be matched to its draw.
    pub fn sort(mut self, sort: bool) -> Self {
        self.sort = sort;
        self
    }

    /// Request component draws for percentile rolls.
    ///
    /// Has no effect on side counts other than 100.
    pub fn detailed(mut self, detailed: bool) -> Self {
        self.detailed = detailed;
        self
    }

    /// Roll this request using the thread-local RNG.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use rollstat::RollRequest;
    ///
    /// let result = RollRequest::new(2, 20).roll().unwrap();
    /// assert_eq!(result.quantity(), 2);
    /// ```
    pub fn roll(&self) -> Result<RollResult, RollError> {
        self.roll_with(&mut rand::thread_rng())
    }

    /// Roll this request using a caller-supplied RNG.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use rand::rngs::StdRng;
    /// use rand::SeedableRng;
    /// use rollstat::RollRequest;
    ///
    /// let mut rng = StdRng::seed_from_u64(7);
    /// let result = RollRequest::new(4, 6).roll_with(&mut rng).unwrap();
    /// assert_eq!(result.quantity(), 4);
    /// ```
    pub fn roll_with<R: Rng>(&self, rng: &mut R) -> Result<RollResult, RollError> {
        if self.quantity == 0 || self.sides == 0 {
            return Err(RollError::InvalidDice {
                quantity: self.quantity,
                sides: self.sides,
            });
        }

        let mut values = Vec::with_capacity(self.quantity as usize);
        if self.sides == PERCENTILE_SIDES {
            for _ in 0..self.quantity {
                let tens: u32 = rng.gen_range(0..10) * 10;
                let ones: u32 = rng.gen_range(0..10);
                let total = combine_percentile(tens, ones);
                if self.detailed {
                    values.push(RollValue::Detailed { total, tens, ones });
                } else {
                    values.push(RollValue::Plain(total));
                }
            }
        } else {
            for _ in 0..self.quantity {
                values.push(RollValue::Plain(rng.gen_range(1..=self.sides)));
            }
        }

        if self.sort && !self.detailed {
            values.sort_unstable_by(|a, b| b.amount().cmp(&a.amount()));
        }

        Ok(RollResult::new(format!("d{}", self.sides), values))
    }
}

/// Roll `quantity` dice with `sides` sides each.
///
/// With `sort`, the values are reordered descending; with `detailed`,
/// percentile rolls keep their component draws (and sorting is skipped).
///
/// # Examples
///
/// ```rust
/// use rollstat::roll_dice;
///
/// let result = roll_dice(2, 10, false, false).unwrap();
/// assert_eq!(result.die, "d10");
/// assert!(result.values.iter().all(|v| (1..=10).contains(&v.amount())));
/// ```
pub fn roll_dice(
    quantity: u32,
    sides: u32,
    sort: bool,
    detailed: bool,
) -> Result<RollResult, RollError> {
    RollRequest::new(quantity, sides)
        .sort(sort)
        .detailed(detailed)
        .roll()
}

/// Roll four-sided dice.
pub fn roll_d4(quantity: u32, sort: bool) -> Result<RollResult, RollError> {
    roll_dice(quantity, 4, sort, false)
}

/// Roll six-sided dice.
///
/// # Examples
///
/// ```rust
/// use rollstat::roll_d6;
///
/// let result = roll_d6(4, true).unwrap();
/// assert_eq!(result.die, "d6");
/// assert_eq!(result.quantity(), 4);
/// ```
pub fn roll_d6(quantity: u32, sort: bool) -> Result<RollResult, RollError> {
    roll_dice(quantity, 6, sort, false)
}

/// Roll eight-sided dice.
pub fn roll_d8(quantity: u32, sort: bool) -> Result<RollResult, RollError> {
    roll_dice(quantity, 8, sort, false)
}

/// Roll ten-sided dice.
pub fn roll_d10(quantity: u32, sort: bool) -> Result<RollResult, RollError> {
    roll_dice(quantity, 10, sort, false)
}

/// Roll twelve-sided dice.
pub fn roll_d12(quantity: u32, sort: bool) -> Result<RollResult, RollError> {
    roll_dice(quantity, 12, sort, false)
}

/// Roll twenty-sided dice.
pub fn roll_d20(quantity: u32, sort: bool) -> Result<RollResult, RollError> {
    roll_dice(quantity, 20, sort, false)
}
