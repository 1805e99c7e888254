//! Basic example: rolling dice and printing results
//!
//! This example demonstrates:
//! - The generic roll entry point and the fixed-size wrappers
//! - Sorted rolls
//! - Detailed percentile rolls
//! - Error output through the console sink

use rollstat::*;

fn main() -> Result<(), RollError> {
    // Roll three six-sided dice
    println!("Rolling 3d6...");
    print_roll(&roll_d6(3, false));

    // Roll four twenty-sided dice, ordered descending
    println!("Rolling 4d20, sorted...");
    print_roll(&RollRequest::new(4, 20).sort(true).roll());

    // Percentile rolls keep their component draws when detail is on
    println!("Rolling 2d100 with detail...");
    let result = RollRequest::new(2, 100).detailed(true).roll()?;
    for value in &result.values {
        if let RollValue::Detailed { total, tens, ones } = value {
            println!("  drew {} and {} -> {}", tens, ones, total);
        }
    }
    print_roll(&Ok(result));

    // A bad request surfaces its message through the same sink
    println!("Requesting zero dice...");
    print_roll(&roll_dice(0, 6, false, false));

    Ok(())
}
