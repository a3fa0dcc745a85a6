//! Display functions for command results

use super::formatters::{colored_guess, create_progress_bar, preview_list};
use crate::commands::{BenchmarkResult, LetterScore, ScoreOrder};
use crate::solver::SimulationReport;
use colored::Colorize;

/// Print the guess-by-guess path of a simulation
///
/// Each line shows the guess number, the colored guess and its emoji tiles.
/// Unsolved lines add the candidates left and a preview of the best of them.
pub fn print_simulation_report(report: &SimulationReport) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Solving {} using {}",
        report.answer.text().to_uppercase().bright_yellow().bold(),
        report.strategy.bright_cyan()
    );
    println!("{}", "─".repeat(60).cyan());

    for step in &report.steps {
        let guess = colored_guess(&step.guess, &step.mark);
        let tiles = step.mark.to_emoji();
        if step.mark.is_solved() {
            println!("{:>3} {guess} {tiles}", step.number);
        } else {
            println!(
                "{:>3} {guess} {tiles} {:>5}  {}",
                step.number,
                step.remaining,
                preview_list(&step.preview).bright_black()
            );
        }
    }

    println!();
    println!(
        "{}",
        format!(
            "✅ Solved in {} {}",
            report.guess_count(),
            if report.guess_count() == 1 {
                "guess"
            } else {
                "guesses"
            }
        )
        .green()
        .bold()
    );
}

/// Print the result of a benchmark
pub fn print_benchmark_result(result: &BenchmarkResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " {} {} ",
        "BENCHMARK RESULTS:".bright_cyan().bold(),
        result.strategy.bright_yellow()
    );
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Performance:".bright_cyan().bold());
    println!("   Words tested:     {}", result.total_words);
    println!(
        "   Solved:           {}",
        format!("{}", result.solved).green()
    );
    if !result.failures.is_empty() {
        println!(
            "   Failed:           {}",
            format!("{}", result.failures.len()).red()
        );
    }
    println!(
        "   Average guesses:  {}",
        format!("{:.2}", result.average_guesses)
            .bright_yellow()
            .bold()
    );
    println!(
        "   Best case:        {}",
        format!("{}", result.min_guesses).green()
    );
    println!(
        "   Worst case:       {}",
        format!("{}", result.max_guesses).yellow()
    );
    println!("   Time taken:       {:.2}s", result.duration.as_secs_f64());
    println!("   Words/second:     {:.1}", result.words_per_second);

    if result.solved > 0 {
        println!("\n📈 {}", "Distribution:".bright_cyan().bold());
        for (&guesses, &count) in &result.distribution {
            let pct = (count as f64 / result.solved as f64) * 100.0;
            let bar = create_progress_bar(pct, 100.0, 40);
            println!("   {guesses:>2}: {} {count:4} ({pct:5.1}%)", bar.green());
        }
    }

    if !result.failures.is_empty() {
        println!("\n❌ {}", "Failures:".red().bold());
        for (word, error) in result.failures.iter().take(10) {
            println!("   {}: {error}", word.to_uppercase());
        }
        if result.failures.len() > 10 {
            println!("   … and {} more", result.failures.len() - 10);
        }
    }
}

/// Print letter scores
pub fn print_scores(scores: &[LetterScore], distinct: usize, order: ScoreOrder) {
    let heading = match order {
        ScoreOrder::Largest => "HIGHEST LETTER SCORES",
        ScoreOrder::Smallest => "LOWEST LETTER SCORES",
    };

    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " {} ({distinct} distinct letters) ",
        heading.bright_cyan().bold()
    );
    println!("{}", "═".repeat(60).cyan());

    if scores.is_empty() {
        println!("\n   No words with {distinct} distinct letters");
        return;
    }

    for (rank, entry) in scores.iter().enumerate() {
        println!(
            "   {:>3}. {}  {:.4}",
            rank + 1,
            entry.word.to_uppercase().bright_white().bold(),
            entry.score
        );
    }
}
