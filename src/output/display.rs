//! Display functions for command results

use super::formatters::create_progress_bar;
use crate::commands::{StarterAnalysis, TrainingStats};
use colored::Colorize;

/// Print the aggregated results of a training run
pub fn print_training_stats(stats: &TrainingStats) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " {} {} ",
        "TRAINING RESULTS:".bright_cyan().bold(),
        stats.strategy.to_string().bright_yellow().bold()
    );
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Performance:".bright_cyan().bold());
    println!("   Games played:     {}", stats.total_games);
    println!(
        "   Wins:             {}",
        format!("{}", stats.wins).green()
    );
    println!(
        "   Losses:           {}",
        format!("{}", stats.losses).red()
    );
    println!(
        "   Win rate:         {}",
        format!("{:.1}%", stats.win_rate).bright_yellow().bold()
    );
    if stats.wins > 0 {
        println!("   Average attempts: {:.2}", stats.average_attempts);
    }

    println!("\n📈 {}", "Attempt distribution (wins):".bright_cyan().bold());
    let max_count = stats
        .attempt_distribution
        .iter()
        .copied()
        .max()
        .unwrap_or(0);
    for (i, &count) in stats.attempt_distribution.iter().enumerate() {
        let bar = create_progress_bar(count as f64, max_count.max(1) as f64, 40);
        println!("   {}: {} {count:4}", i + 1, bar.green());
    }
}

/// Print a side-by-side comparison of strategy results
pub fn print_comparison(results: &[TrainingStats]) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "STRATEGY COMPARISON".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!(
        "\n   {:<12} {:>6} {:>8} {:>10} {:>14}",
        "Strategy", "Games", "Wins", "Win rate", "Avg attempts"
    );
    println!("   {}", "─".repeat(52));

    let best_rate = results
        .iter()
        .map(|s| s.win_rate)
        .fold(0.0_f64, f64::max);

    for stats in results {
        let rate = format!("{:.1}%", stats.win_rate);
        let rate = if (stats.win_rate - best_rate).abs() < f64::EPSILON {
            rate.green().bold().to_string()
        } else {
            rate
        };
        println!(
            "   {:<12} {:>6} {:>8} {:>10} {:>14.2}",
            stats.strategy.to_string(),
            stats.total_games,
            stats.wins,
            rate,
            stats.average_attempts,
        );
    }
}

/// Print starter rankings and the positional letter profile
pub fn print_starters(analysis: &StarterAnalysis) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "STARTER ANALYSIS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 Over {} words:", analysis.universe_size);

    println!("\n   {}", "Best openers:".bright_cyan().bold());
    let top_score = analysis.ranked.first().map_or(0, |(_, score)| *score);
    for (i, (word, score)) in analysis.ranked.iter().enumerate() {
        let bar = create_progress_bar(f64::from(*score), f64::from(top_score.max(1)), 30);
        println!(
            "   {:>2}. {} {} {score}",
            i + 1,
            word.text().bright_yellow(),
            bar.green()
        );
    }

    println!("\n   {}", "Most common letter by position:".bright_cyan().bold());
    for (pos, top) in analysis.top_by_position.iter().enumerate() {
        match top {
            Some((letter, count)) => {
                println!("   Position {}: {} ({count} words)", pos + 1, *letter as char);
            }
            None => println!("   Position {}: -", pos + 1),
        }
    }
}
