//! Simple interactive CLI mode
//!
//! Line-based game loop without the TUI. Guesses come in as whole lines and
//! are fed through the engine one character at a time; the round clock is
//! enforced against the wall clock when a guess arrives.

use crate::engine::{
    COLS, Effect, LOSS_PENALTY, ROWS, ResetKind, RoundEngine, RoundState, STREAK_TARGET,
    WIN_REWARD,
};
use crate::output::formatters::{cell_block, format_clock};
use crate::wordlists::provider::WordProvider;
use colored::Colorize;
use std::io::{self, Write};
use std::time::Instant;

/// Run the simple line-based game mode
///
/// # Errors
///
/// Returns an error if there's an I/O error reading user input.
pub fn run_simple(provider: &mut dyn WordProvider, round_seconds: u32) -> Result<(), String> {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║                  WORDLE RUSH - Simple Mode                   ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");

    println!("Guess the 5-letter word, one guess per line.\n");
    println!("  - Right word: +{WIN_REWARD} points");
    println!("  - Wrong word: -{LOSS_PENALTY} point");
    println!("  - {STREAK_TARGET} words in a row wins the game");
    println!("  - Score at 0 loses the game");
    println!(
        "  - Beat the clock each round ({})\n",
        format_clock(round_seconds)
    );
    println!("Commands: 'quit' to exit\n");

    let mut engine = RoundEngine::new();
    let mut round_start = start_round(&mut engine, provider, ResetKind::NextWord);
    let mut row = 0;

    loop {
        let input = get_user_input(&format!("Guess {}/{ROWS}", row + 1))?;

        if input == "quit" {
            println!("Thanks for playing!");
            return Ok(());
        }

        if round_start.elapsed().as_secs() >= u64::from(round_seconds) {
            // Clock ran out before this guess landed
            engine.timer_expired();
        } else {
            if input.len() != 5 || !input.chars().all(|c| c.is_ascii_alphabetic()) {
                println!("Enter exactly 5 letters.\n");
                continue;
            }

            if engine.target().is_none() {
                // Provider failed at round start; retry before this guess
                request_word(&mut engine, provider);
                if engine.target().is_none() {
                    println!("No word available yet, try again.\n");
                    continue;
                }
            }

            for (col, ch) in input.chars().enumerate() {
                engine.submit_char(ch, row, col);
            }
            print_row(&engine, row);
            row += 1;
        }

        if engine.state() != RoundState::InProgress {
            let kind = announce_outcome(&engine);
            round_start = start_round(&mut engine, provider, kind);
            row = 0;
        }
    }
}

/// Print the outcome banner for a finished round and pick the reset kind
fn announce_outcome(engine: &RoundEngine) -> ResetKind {
    let revealed = engine
        .target()
        .map_or_else(|| "?????".to_string(), |w| w.text().to_uppercase());

    if engine.game_won() {
        println!(
            "\n{}",
            format!("YOU WON! {STREAK_TARGET} words in a row!")
                .green()
                .bold()
        );
        println!("The word was \"{revealed}\". Starting a fresh game.\n");
        ResetKind::GameWon
    } else if engine.game_lost() {
        println!("\n{}", "GAME OVER! Your score hit zero.".red().bold());
        println!("The correct word was \"{revealed}\". Starting a fresh game.\n");
        ResetKind::GameLost
    } else if engine.state() == RoundState::Won {
        println!("\n{}", "CONGRATS! You got the word.".green().bold());
        println!("\"{revealed}\" it is. On to the next word.\n");
        ResetKind::NextWord
    } else {
        println!("\n{}", "OH NO! Round lost.".red().bold());
        println!("The correct word was \"{revealed}\". On to the next word.\n");
        ResetKind::NextWord
    }
}

/// Reset the engine for a new round and carry out its effect requests
fn start_round(
    engine: &mut RoundEngine,
    provider: &mut dyn WordProvider,
    kind: ResetKind,
) -> Instant {
    for effect in engine.reset_round(kind) {
        if effect == Effect::RequestWord {
            request_word(engine, provider);
        }
        // RestartTimer is the Instant returned below; MoveFocus is implicit
        // in the one-line-per-guess input model
    }

    println!(
        "Score {} | Streak {}/{STREAK_TARGET}\n",
        engine.score(),
        engine.win_streak()
    );

    Instant::now()
}

fn request_word(engine: &mut RoundEngine, provider: &mut dyn WordProvider) {
    match provider.next_word() {
        Ok(word) => engine.set_target(word),
        Err(e) => println!("Could not get a word: {e}"),
    }
}

fn print_row(engine: &RoundEngine, row: usize) {
    let blocks: Vec<String> = (0..COLS)
        .map(|col| cell_block(engine.grid().cell(row, col)))
        .collect();
    println!("  {}\n", blocks.join(" "));
}

fn get_user_input(prompt: &str) -> Result<String, String> {
    print!("{prompt}: ");
    io::stdout()
        .flush()
        .map_err(|e| format!("Failed to flush stdout: {e}"))?;

    let mut input = String::new();
    io::stdin()
        .read_line(&mut input)
        .map_err(|e| format!("Failed to read input: {e}"))?;

    Ok(input.trim().to_lowercase())
}
