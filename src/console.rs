//! Console output module.
//!
//! Renders roll outcomes for humans. The formatter accepts the whole
//! `Result` of a roll, so a failed roll surfaces its error message
//! through the same sink as a successful one.

use crate::error::RollError;
use crate::roll::RollResult;

/// Render a roll outcome as console text.
///
/// A successful roll renders as its block with a trailing newline, so
/// printing it leaves one blank line before whatever follows. A failed
/// roll renders as the error message alone.
///
/// # Examples
///
/// ```rust
/// use rollstat::{render, RollResult, RollValue};
///
/// let outcome = Ok(RollResult::new("d6", vec![RollValue::Plain(3), RollValue::Plain(5)]));
/// let text = render(&outcome);
/// assert!(text.starts_with("Result of 2 d6:"));
/// assert!(text.contains("Total: 8"));
/// ```
pub fn render(outcome: &Result<RollResult, RollError>) -> String {
    match outcome {
        Ok(result) => format!("{}\n", result),
        Err(error) => error.to_string(),
    }
}

/// Print a roll outcome to stdout.
///
/// # Examples
///
/// ```rust
/// use rollstat::{print_roll, roll_d6};
///
/// print_roll(&roll_d6(3, true));
/// print_roll(&roll_d6(0, false)); // prints the error message
/// ```
pub fn print_roll(outcome: &Result<RollResult, RollError>) {
    println!("{}", render(outcome));
}
