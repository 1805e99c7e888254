//! Error types for dice rolling and stat derivation.
//!
//! All errors that can occur in this crate are represented by the
//! `RollError` enum.

use thiserror::Error;

/// Errors that can occur when rolling dice or deriving stats.
///
/// The rendered messages are stable text; consumers that print errors to the
/// console rely on them verbatim. The variants additionally carry the
/// offending arguments so callers can match on them programmatically.
///
/// # Examples
///
/// ```rust
/// use rollstat::RollError;
///
/// let err = RollError::InvalidDice { quantity: 0, sides: 6 };
/// println!("{}", err); // "You must have at least one (1) die with at least one (1) side."
/// ```
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RollError {
    /// A roll was requested with fewer than one die or a die with fewer
    /// than one side.
    ///
    /// Contains the quantity and side count that were asked for.
    #[error("You must have at least one (1) die with at least one (1) side.")]
    InvalidDice { quantity: u32, sides: u32 },

    /// Stat derivation was given a roll result whose value count is not
    /// exactly four.
    ///
    /// Contains the number of values that were actually present.
    #[error("Expected 4 roll values for stat calculation.")]
    StatCountMismatch { found: usize },
}
