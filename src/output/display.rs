//! Display functions for command results

use super::formatters::{colored_guess, create_progress_bar, entropy_bar};
use crate::commands::{BenchmarkReport, RankResult, SolveResult};
use crate::core::Pattern;
use crate::solver::Outcome;
use colored::Colorize;

/// Print the result of solving a word
pub fn print_solve_result(result: &SolveResult, verbose: bool) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Solving: {}",
        result.target.to_uppercase().bright_yellow().bold()
    );
    println!("{}", "─".repeat(60).cyan());

    for (i, step) in result.guesses.iter().enumerate() {
        println!(
            "\nTurn {}: {} {}{}",
            i + 1,
            colored_guess(&step.word, step.pattern),
            step.pattern.to_emoji(),
            if step.explored {
                " (explore)".bright_black().to_string()
            } else {
                String::new()
            }
        );

        if !verbose {
            continue;
        }

        println!(
            "  Candidates: {} → {}",
            step.candidates_before, step.candidates_after
        );

        if let Some(metrics) = step.metrics {
            println!(
                "  Entropy:    [{}] {:.3} bits",
                entropy_bar(metrics.entropy, step.pattern.len(), 20).green(),
                metrics.entropy
            );
            println!("  Expected:   {:.1} candidates", metrics.expected_remaining);
            println!("  Worst case: {} candidates", metrics.max_partition);

            if step.candidates_after > 0 {
                let ratio = step.candidates_before as f64 / step.candidates_after as f64;
                println!(
                    "  Info gained: {:.3} bits ({ratio:.1}x reduction)",
                    ratio.log2()
                );
            }
        }
    }

    println!();
    let count = result.guesses.len();
    match result.outcome {
        Outcome::Solved => println!(
            "{}",
            format!("✅ Solved in {count} guesses!").green().bold()
        ),
        Outcome::Exhausted => println!(
            "{}",
            format!("❌ Failed to solve in {count} guesses").red().bold()
        ),
        Outcome::NoCandidates => println!(
            "{}",
            format!("❌ No dictionary word fits after {count} guesses")
                .red()
                .bold()
        ),
    }
}

/// Print the best candidates for an observation history
pub fn print_rank_result(result: &RankResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "CANDIDATE RANKING".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    if !result.constraints.is_empty() {
        println!("\n🔎 {}", result.constraints.to_string().bright_black());
    }

    if result.ranked.is_empty() {
        println!("\n{}", "No dictionary word fits this feedback.".red().bold());
        return;
    }

    println!("\n📊 {} candidates remain", result.total_candidates);
    println!(
        "\n   {:<4} {:<8} {:>10} {:>10} {:>10} {:>6}",
        "#", "Word", "Score", "Entropy", "Expected", "Worst"
    );
    for (i, guess) in result.ranked.iter().enumerate() {
        println!(
            "   {:<4} {:<8} {:>10.3} {:>10.3} {:>10.1} {:>6}",
            i + 1,
            guess.word.to_uppercase().bright_yellow(),
            guess.score,
            guess.metrics.entropy,
            guess.metrics.expected_remaining,
            guess.metrics.max_partition
        );
    }
}

/// Print the feedback two words give each other
///
/// `a_as_guess` is the pattern of `a` played against `b`, and the other way round.
pub fn print_comparison(a: &str, b: &str, a_as_guess: Pattern, b_as_guess: Pattern) {
    for (guess, secret, pattern) in [(a, b, a_as_guess), (b, a, b_as_guess)] {
        println!(
            "{} against {}: {} {}",
            guess.to_uppercase().bright_yellow(),
            secret.to_uppercase().bright_yellow(),
            colored_guess(guess, pattern),
            pattern
        );
    }
}

/// Print the result of a benchmark
pub fn print_benchmark_result(result: &BenchmarkReport) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "BENCHMARK RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Performance:".bright_cyan().bold());
    println!("   Words tested:     {}", result.total_words());
    println!(
        "   Solved:           {} ({:.1}%)",
        format!("{}", result.solved).green(),
        result.success_rate()
    );
    println!(
        "   Out of steps:     {}",
        format!("{}", result.failed).yellow()
    );
    println!(
        "   No candidates:    {}",
        format!("{}", result.no_candidates).red()
    );
    println!(
        "   Average guesses:  {}",
        format!("{:.3}", result.average_steps).bright_yellow().bold()
    );
    println!("   Time taken:       {:.2}s", result.duration.as_secs_f64());
    println!("   Words/second:     {:.1}", result.words_per_second);

    println!("\n⏱️  {}", "Per-word latency:".bright_cyan().bold());
    println!("   p50: {:.2?}", result.p50);
    println!("   p90: {:.2?}", result.p90);
    println!("   p99: {:.2?}", result.p99);

    if !result.distribution.is_empty() {
        println!("\n📈 {}", "Distribution:".bright_cyan().bold());
        let total = result.total_words() as f64;
        for (&guesses, &count) in &result.distribution {
            let pct = count as f64 / total * 100.0;
            let bar = create_progress_bar(pct, 100.0, 40);
            println!("   {guesses:2}: {} {count:4} ({pct:5.1}%)", bar.green());
        }
    }

    let failures: Vec<&str> = result.failures().map(|r| r.word.as_str()).take(20).collect();
    if !failures.is_empty() {
        println!("\n😰 {}", "Unsolved:".yellow().bold());
        println!("   {}", failures.join(", ").to_uppercase());
    }
}
