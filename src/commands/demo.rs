//! Demo game
//!
//! Plays one visible game: each guess is printed with colored feedback and
//! the remaining-candidate count, so a strategy's behavior can be watched
//! round by round.

use crate::core::Word;
use crate::game::{Game, GameError, MAX_ATTEMPTS};
use crate::output::formatters::feedback_colored;
use crate::solver::{Engine, Strategy};
use colored::Colorize;
use rand::rngs::StdRng;
use rand::SeedableRng;

/// Candidate counts at or below this are listed in full
const LIST_CANDIDATES_AT: usize = 10;

/// Play one demo game and print it
///
/// A fixed secret can be supplied for reproducibility; otherwise one is
/// drawn from the universe. Returns whether the game was won.
///
/// # Errors
/// Returns `GameError::InvalidGuess` if the oracle rejects a guess; the
/// round stops there and counts as a loss.
pub fn run_demo(
    universe: &[Word],
    strategy: Strategy,
    secret: Option<Word>,
    seed: Option<u64>,
) -> Result<bool, GameError> {
    let seed = seed.unwrap_or_else(rand::random);
    let mut rng = StdRng::seed_from_u64(seed);

    let Some(game) = (match secret {
        Some(secret) => Some(Game::new(universe, secret)),
        None => Game::random(universe, &mut rng),
    }) else {
        println!("{}", "No words loaded; nothing to play.".red());
        return Ok(false);
    };

    println!("\n{}", "─".repeat(60).cyan());
    println!("Demo game - strategy: {}", strategy.to_string().bold());
    println!("{}", "─".repeat(60).cyan());

    let mut engine = Engine::with_seed(universe, strategy, seed);
    engine.reset();

    for attempt in 1..=MAX_ATTEMPTS {
        let Some(guess) = engine.next_guess(attempt) else {
            break;
        };

        let feedback = match game.feedback(&guess) {
            Ok(feedback) => feedback,
            Err(err) => {
                println!("\n{} {err}", "Oracle rejected the guess:".red());
                return Err(err);
            }
        };

        println!("\nAttempt {attempt}: {}", feedback_colored(&feedback));
        engine.apply_feedback(&guess, &feedback);

        if feedback.is_win() {
            println!(
                "\n{}",
                format!("✓ Solved in {attempt} attempt{}!", if attempt == 1 { "" } else { "s" })
                    .green()
                    .bold()
            );
            return Ok(true);
        }

        let remaining = engine.candidates();
        println!("Remaining possible words: {}", remaining.len());
        if (1..=LIST_CANDIDATES_AT).contains(&remaining.len()) {
            let listed: Vec<&str> = remaining.iter().map(Word::text).collect();
            println!("Possibilities: {}", listed.join(", "));
        }
    }

    println!(
        "\n{}",
        format!("✗ Failed. The word was: {}", game.secret())
            .red()
            .bold()
    );
    Ok(false)
}
