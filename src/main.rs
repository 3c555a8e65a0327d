//! Wordle Rush - CLI
//!
//! Timed Wordle game with scoring and win streaks, playable as a TUI or a
//! plain line-based CLI.

use anyhow::Result;
use clap::{Parser, Subcommand};
use wordle_rush::{
    commands::{run_simple, score_guess},
    core::Word,
    engine::ROUND_SECONDS,
    interactive::{App, run_tui},
    output::print_score_result,
    wordlists::{RandomProvider, WORDS, loader},
};

#[derive(Parser)]
#[command(
    name = "wordle_rush",
    about = "Timed Wordle game: +2 per word, -1 per miss, 3 in a row wins",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Wordlist: 'builtin' (default) or path to a file of 5-letter words
    #[arg(short = 'w', long, global = true, default_value = "builtin")]
    wordlist: String,

    /// Round clock in seconds
    #[arg(short = 's', long, global = true, default_value_t = ROUND_SECONDS)]
    seconds: u32,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI game (default)
    Play,

    /// Line-based CLI game without the TUI
    Simple,

    /// Score a single guess against a target word
    Score {
        /// The target word
        target: String,

        /// The guessed word
        guess: String,
    },
}

/// Load the target-word list based on the -w flag
fn load_words(wordlist_mode: &str) -> Result<Vec<Word>> {
    match wordlist_mode {
        "builtin" => Ok(loader::words_from_slice(WORDS)),
        path => {
            let words = loader::load_from_file(path)?;
            if words.is_empty() {
                anyhow::bail!("No valid 5-letter words found in {path}");
            }
            Ok(words)
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    match command {
        Commands::Play => {
            let words = load_words(&cli.wordlist)?;
            let app = App::new(Box::new(RandomProvider::new(words)), cli.seconds);
            run_tui(app)
        }
        Commands::Simple => {
            let words = load_words(&cli.wordlist)?;
            let mut provider = RandomProvider::new(words);
            run_simple(&mut provider, cli.seconds).map_err(|e| anyhow::anyhow!(e))
        }
        Commands::Score { target, guess } => {
            let result = score_guess(&target, &guess).map_err(|e| anyhow::anyhow!(e))?;
            print_score_result(&result);
            Ok(())
        }
    }
}
