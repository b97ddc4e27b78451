//! Wordle Trainer - CLI
//!
//! Practice harness for Wordle guessing strategies: watch demo games, train
//! a strategy over many rounds, compare strategies, or get live assistance.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use wordle_trainer::{
    commands::{analyze_starters, compare_strategies, run_assist, run_demo, run_training, TrainingConfig},
    core::Word,
    output::{print_comparison, print_starters, print_training_stats},
    solver::Strategy,
    wordlists::{loader::words_from_slice, WORDS},
};

#[derive(Parser)]
#[command(
    name = "wordle_trainer",
    about = "Wordle strategy trainer: demo games, batch training, and live assistance",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Strategy: adaptive (default), frequency, elimination, random
    #[arg(short, long, global = true, default_value = "adaptive")]
    strategy: String,

    /// Wordlist: 'embedded' (default) or path to a file of 5-letter words
    #[arg(short = 'w', long, global = true, default_value = "embedded")]
    wordlist: String,
}

#[derive(Subcommand)]
enum Commands {
    /// Play one visible game and print each round (default)
    Demo {
        /// Fix the secret word instead of drawing one at random
        #[arg(long)]
        secret: Option<String>,

        /// Seed for reproducible runs
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Train a strategy over many games and report statistics
    Train {
        /// Number of games to play
        #[arg(short = 'n', long, default_value = "100")]
        games: usize,

        /// Seed for reproducible runs
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Train every strategy on the same games and compare
    Compare {
        /// Number of games per strategy
        #[arg(short = 'n', long, default_value = "100")]
        games: usize,

        /// Seed for reproducible runs
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Interactive assistant for a game played elsewhere
    Assist,

    /// Rank opening guesses and profile letters by position
    Starters {
        /// Number of starters to show
        #[arg(short = 'n', long, default_value = "20")]
        count: usize,
    },
}

/// Load the word universe based on the -w flag
fn load_universe(wordlist_mode: &str) -> Result<Vec<Word>> {
    use wordle_trainer::wordlists::loader::load_from_file;

    match wordlist_mode {
        "embedded" => Ok(words_from_slice(WORDS)),
        path => {
            let words = load_from_file(path)?;
            anyhow::ensure!(!words.is_empty(), "no valid 5-letter words in {path}");
            Ok(words)
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let strategy = Strategy::from_name(&cli.strategy)?;
    let universe = load_universe(&cli.wordlist)?;

    let command = cli.command.unwrap_or(Commands::Demo {
        secret: None,
        seed: None,
    });

    match command {
        Commands::Demo { secret, seed } => {
            let secret = match secret {
                Some(s) => {
                    Some(Word::new(s.as_str()).with_context(|| format!("bad secret '{s}'"))?)
                }
                None => None,
            };
            run_demo(&universe, strategy, secret, seed)?;
            Ok(())
        }
        Commands::Train { games, seed } => {
            let mut config = TrainingConfig::new(strategy, games);
            config.seed = seed;
            let stats = run_training(&universe, &config);
            print_training_stats(&stats);
            Ok(())
        }
        Commands::Compare { games, seed } => {
            let results = compare_strategies(&universe, games, seed);
            print_comparison(&results);
            Ok(())
        }
        Commands::Assist => run_assist(&universe, strategy).map_err(anyhow::Error::msg),
        Commands::Starters { count } => {
            let analysis = analyze_starters(&universe, count);
            print_starters(&analysis);
            Ok(())
        }
    }
}
