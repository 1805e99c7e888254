//! Character example: rolling a full ability score block
//!
//! This example demonstrates:
//! - Rolling 4d6 per ability
//! - Drop-lowest scoring with the printed breakdown
//! - Ability modifiers on the finished sheet

use rollstat::*;

const ABILITIES: [&str; 6] = ["STR", "DEX", "CON", "INT", "WIS", "CHA"];

fn main() -> Result<(), RollError> {
    println!("=== Rolling a new character ===\n");

    let mut scores = Vec::new();
    for ability in ABILITIES {
        println!("--- {} ---", ability);
        let result = roll_d6(4, false)?;
        let score = roll_for_stats(&result, true)?;
        scores.push((ability, score));
        println!();
    }

    println!("=== Final character sheet ===");
    for (ability, score) in &scores {
        let modifier = ability_modifier(*score as i64);
        println!("{}: {} ({:+})", ability, score, modifier);
    }

    Ok(())
}
