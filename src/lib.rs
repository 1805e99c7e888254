//! # rollstat - Tabletop Dice Rolling & Ability Scores
//!
//! A polyhedral dice library for tabletop games that provides:
//! - **Generic rolling** for any quantity and side count
//! - **Percentile detail** (d100 as tens + ones draws, double zero = 100)
//! - **Console rendering** with a stable, consumer-matchable text format
//! - **Ability scores** via the 4d6-drop-lowest rule and floored modifiers
//!
//! ## Core Concepts
//!
//! ### Roll Pipeline
//!
//! Rolls flow through a simple pipeline:
//!
//! ```text
//! [RollRequest] → [RollResult] → console text
//! ```
//!
//! 1. **RollRequest** describes what to roll (quantity, sides, flags)
//! 2. **RollResult** carries every value with its total and average
//! 3. **render/print_roll** turn the whole outcome, error included, into text
//!
//! A four-die result can additionally be fed to the stat side:
//!
//! ```text
//! [RollResult] → [AbilityRoll] → score + modifier
//! ```
//!
//! ### Key Features
//!
//! - **Tagged values**: percentile detail is a `Detailed` variant, not a
//!   dynamically shaped element
//! - **Validated requests**: zero dice or zero sides fail with a typed error
//! - **Pluggable RNG**: every roll has a `roll_with` seam for seeded
//!   generators
//! - **Serializable**: requests and results derive serde traits
//!
//! ## Example
//!
//! ```rust
//! use rollstat::*;
//!
//! // Roll four d6, sorted descending.
//! let result = RollRequest::new(4, 6).sort(true).roll().unwrap();
//! assert_eq!(result.quantity(), 4);
//!
//! // Derive an ability score from the same result.
//! let ability = AbilityRoll::from_roll(&result).unwrap();
//! assert!((3..=18).contains(&ability.score));
//! assert_eq!(ability.score + u64::from(ability.dropped), result.total);
//!
//! // Render for the console; errors go through the same sink.
//! println!("{}", render(&Ok(result)));
//! print_roll(&roll_dice(0, 6, false, false));
//! ```
//!
//! ## Modules
//!
//! - [`roller`] - Roll requests and the rolling operations
//! - [`roll`] - Roll result types
//! - [`stats`] - Ability scores and modifiers
//! - [`console`] - Console rendering
//! - [`error`] - Error types

pub mod console;
pub mod error;
pub mod roll;
pub mod roller;
pub mod stats;

// Re-export main types for convenience
pub use error::RollError;
pub use roll::{RollResult, RollValue};
pub use roller::RollRequest;
pub use stats::AbilityRoll;

// Re-export the rolling operations
pub use roller::{roll_d10, roll_d12, roll_d20, roll_d4, roll_d6, roll_d8, roll_dice};

// Re-export stat derivation and console output
pub use console::{print_roll, render};
pub use stats::{ability_modifier, roll_for_stats};
