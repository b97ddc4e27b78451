//! Interactive assistant
//!
//! Helps play a real Wordle elsewhere: suggests a guess each round, reads
//! the observed feedback pattern from stdin and narrows the candidates.

use crate::core::{Feedback, Word};
use crate::game::MAX_ATTEMPTS;
use crate::solver::{Engine, Strategy};
use colored::Colorize;
use std::io::{self, Write as _};

/// Run the interactive assistant loop
///
/// # Errors
///
/// Returns an error if reading user input fails.
pub fn run_assist(universe: &[Word], strategy: Strategy) -> Result<(), String> {
    println!("\n╔══════════════════════════════════════════════════════════╗");
    println!("║              Wordle Trainer - Assistant Mode             ║");
    println!("╚══════════════════════════════════════════════════════════╝\n");

    println!("I'll suggest guesses; after each one, enter the feedback you saw:");
    println!("  - G/g for green (correct position)");
    println!("  - Y/y for yellow (wrong position)");
    println!("  - -/_ for gray (not in word)");
    println!("  - Or type 'win' if you got it right!\n");
    println!("Commands: 'quit' to exit, 'new' for a new game\n");

    let mut engine = Engine::new(universe, strategy);
    let mut attempt = 1;

    loop {
        if attempt > MAX_ATTEMPTS {
            println!("\n{}", "Out of attempts - better luck next game!".yellow());
            engine.reset();
            attempt = 1;
            continue;
        }

        if engine.candidates().is_empty() && attempt > 1 {
            println!(
                "\n{}",
                "No candidates remain - some feedback may be off. Starting over.".red()
            );
            engine.reset();
            attempt = 1;
            continue;
        }

        let Some(guess) = engine.next_guess(attempt) else {
            println!("{}", "No words loaded; nothing to suggest.".red());
            return Ok(());
        };

        println!("────────────────────────────────────────────────────────────");
        println!(
            "Attempt {attempt}: {} candidates remaining",
            engine.candidates().len()
        );
        println!("\nSuggested guess: {}", guess.text().bold().bright_yellow());

        let suggestion = engine.suggest();
        if !suggestion.alternatives.is_empty() {
            let alternatives: Vec<&str> =
                suggestion.alternatives.iter().map(Word::text).collect();
            println!("Alternatives:    {}", alternatives.join(", ").bright_black());
        }

        loop {
            let input = prompt("Enter feedback (G/Y/-, 'win', or command)")?.to_lowercase();

            match input.as_str() {
                "quit" | "q" | "exit" => {
                    println!("\nThanks for playing!\n");
                    return Ok(());
                }
                "new" | "n" => {
                    engine.reset();
                    attempt = 0; // incremented below
                    println!("\nNew game started!\n");
                    break;
                }
                "win" | "correct" | "solved" => {
                    println!(
                        "\n{}",
                        format!("🎉 Solved in {attempt} attempts!").green().bold()
                    );
                    engine.reset();
                    attempt = 0;
                    break;
                }
                _ => {
                    if let Some(feedback) = Feedback::from_pattern(&guess, &input) {
                        engine.apply_feedback(&guess, &feedback);
                        if feedback.is_win() {
                            println!(
                                "\n{}",
                                format!("🎉 Solved in {attempt} attempts!").green().bold()
                            );
                            engine.reset();
                            attempt = 0;
                        }
                        break;
                    }
                    println!("{}", "Invalid pattern! Use exactly 5 of G/Y/-".red());
                }
            }
        }

        attempt += 1;
    }
}

/// Read one trimmed line from stdin with a prompt
fn prompt(text: &str) -> Result<String, String> {
    print!("{text}: ");
    io::stdout().flush().map_err(|e| e.to_string())?;

    let mut input = String::new();
    io::stdin()
        .read_line(&mut input)
        .map_err(|e| e.to_string())?;

    Ok(input.trim().to_string())
}
