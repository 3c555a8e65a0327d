//! Display functions for command results

use super::formatters::colors_to_emoji;
use crate::commands::ScoreResult;
use crate::core::CellColor;
use colored::Colorize;

/// Print the result of scoring a guess
pub fn print_score_result(result: &ScoreResult) {
    println!("\n{}", "─".repeat(40).cyan());
    println!(
        "Target: {}   Guess: {}",
        result.target.to_uppercase().bright_yellow().bold(),
        result.guess.to_uppercase().bold()
    );
    println!("{}", "─".repeat(40).cyan());

    let letters: Vec<String> = result
        .guess
        .chars()
        .zip(result.colors)
        .map(|(letter, color)| {
            let block = format!(" {} ", letter.to_ascii_uppercase());
            match color {
                CellColor::Green => block.black().on_green().to_string(),
                CellColor::Yellow => block.black().on_yellow().to_string(),
                CellColor::Neutral => block.white().on_bright_black().to_string(),
            }
        })
        .collect();

    println!("\n{}  {}", letters.join(" "), colors_to_emoji(&result.colors));

    println!();
    if result.correct {
        println!("{}", "Exact match!".green().bold());
    } else {
        let greens = result
            .colors
            .iter()
            .filter(|&&c| c == CellColor::Green)
            .count();
        let yellows = result
            .colors
            .iter()
            .filter(|&&c| c == CellColor::Yellow)
            .count();
        println!("{greens} exact, {yellows} misplaced");
    }
}
