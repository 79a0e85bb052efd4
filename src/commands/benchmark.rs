//! Benchmark command
//!
//! Plays the solver against many secrets in parallel and aggregates the results.

use crate::core::Word;
use crate::error::Result;
use crate::solver::{Outcome, Solver};
use indicatif::{ProgressBar, ProgressStyle};
use log::info;
use rayon::prelude::*;
use std::collections::BTreeMap;
use std::time::{Duration, Instant};

/// Result from solving a single secret
#[derive(Debug, Clone)]
pub struct SolveReport {
    pub word: String,
    pub success: bool,
    pub outcome: Outcome,
    pub steps: usize,
    pub duration: Duration,
}

/// Result of a benchmark run
#[derive(Debug, Clone)]
pub struct BenchmarkReport {
    /// Per-secret reports, in input order
    pub results: Vec<SolveReport>,
    pub solved: usize,
    /// Ran out of steps
    pub failed: usize,
    pub no_candidates: usize,
    /// Mean guesses over solved secrets
    pub average_steps: f64,
    /// Guess count → number of solved secrets
    pub distribution: BTreeMap<usize, usize>,
    /// Wall-clock time for the whole run
    pub duration: Duration,
    pub p50: Duration,
    pub p90: Duration,
    pub p99: Duration,
    pub words_per_second: f64,
}

impl BenchmarkReport {
    #[must_use]
    pub fn total_words(&self) -> usize {
        self.results.len()
    }

    #[must_use]
    pub fn success_rate(&self) -> f64 {
        if self.results.is_empty() {
            0.0
        } else {
            self.solved as f64 / self.results.len() as f64 * 100.0
        }
    }

    /// Secrets that were not solved
    pub fn failures(&self) -> impl Iterator<Item = &SolveReport> {
        self.results.iter().filter(|r| !r.success)
    }
}

/// Solve one secret and time it
///
/// # Errors
/// Same as [`Solver::solve`].
pub fn time_solve(solver: &Solver<'_>, secret: &Word) -> Result<SolveReport> {
    let start = Instant::now();
    let result = solver.solve(secret)?;
    let duration = start.elapsed();

    Ok(SolveReport {
        word: secret.text().to_string(),
        success: result.is_solved(),
        outcome: result.outcome,
        steps: result.guess_count(),
        duration,
    })
}

/// Run the solver against every secret, in parallel
///
/// # Errors
/// Stops at the first secret whose solve fails.
pub fn run_benchmark(
    solver: &Solver<'_>,
    secrets: &[Word],
    show_progress: bool,
) -> Result<BenchmarkReport> {
    let pb = if show_progress {
        let pb = ProgressBar::new(secrets.len() as u64);
        if let Ok(style) = ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
        {
            pb.set_style(style.progress_chars("█▓▒░"));
        }
        pb
    } else {
        ProgressBar::hidden()
    };

    let start = Instant::now();
    let results = secrets
        .par_iter()
        .map(|secret| {
            let report = time_solve(solver, secret);
            pb.inc(1);
            report
        })
        .collect::<Result<Vec<_>>>()?;
    let duration = start.elapsed();

    pb.finish_with_message("Complete!");

    let report = summarize(results, duration);
    info!(
        "benchmark: {}/{} solved, {:.3} average steps, {:.0} words/s",
        report.solved,
        report.total_words(),
        report.average_steps,
        report.words_per_second
    );
    Ok(report)
}

fn summarize(results: Vec<SolveReport>, duration: Duration) -> BenchmarkReport {
    let mut distribution = BTreeMap::new();
    let mut solved = 0;
    let mut failed = 0;
    let mut no_candidates = 0;
    let mut solved_steps = 0;

    for result in &results {
        match result.outcome {
            Outcome::Solved => {
                solved += 1;
                solved_steps += result.steps;
                *distribution.entry(result.steps).or_insert(0) += 1;
            }
            Outcome::Exhausted => failed += 1,
            Outcome::NoCandidates => no_candidates += 1,
        }
    }

    let mut durations: Vec<Duration> = results.iter().map(|r| r.duration).collect();
    durations.sort_unstable();

    let secs = duration.as_secs_f64();

    BenchmarkReport {
        solved,
        failed,
        no_candidates,
        average_steps: if solved == 0 {
            0.0
        } else {
            solved_steps as f64 / solved as f64
        },
        distribution,
        duration,
        p50: percentile(&durations, 50),
        p90: percentile(&durations, 90),
        p99: percentile(&durations, 99),
        words_per_second: if secs > 0.0 {
            results.len() as f64 / secs
        } else {
            0.0
        },
        results,
    }
}

/// Nearest-rank percentile of sorted durations
fn percentile(sorted: &[Duration], pct: usize) -> Duration {
    if sorted.is_empty() {
        return Duration::ZERO;
    }
    let rank = (pct * sorted.len()).div_ceil(100).max(1);
    sorted[rank - 1]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solver::SolverConfig;
    use crate::wordlists::Dictionary;

    fn report(word: &str, outcome: Outcome, steps: usize, millis: u64) -> SolveReport {
        SolveReport {
            word: word.to_string(),
            success: outcome == Outcome::Solved,
            outcome,
            steps,
            duration: Duration::from_millis(millis),
        }
    }

    #[test]
    fn benchmark_runs() {
        let dictionary = Dictionary::embedded().unwrap();
        let solver = Solver::new(&dictionary, SolverConfig::default()).unwrap();
        let secrets = &dictionary.words()[..10];

        let result = run_benchmark(&solver, secrets, false).unwrap();

        assert_eq!(result.total_words(), 10);
        assert_eq!(result.solved + result.failed + result.no_candidates, 10);
        assert!(result.solved > 0);
        assert!(result.average_steps >= 1.0);
        assert!(result.p50 <= result.p90 && result.p90 <= result.p99);
    }

    #[test]
    fn benchmark_keeps_input_order() {
        let dictionary = Dictionary::embedded().unwrap();
        let solver = Solver::new(&dictionary, SolverConfig::default()).unwrap();
        let secrets = &dictionary.words()[20..30];

        let result = run_benchmark(&solver, secrets, false).unwrap();
        let words: Vec<&str> = result.results.iter().map(|r| r.word.as_str()).collect();
        let expected: Vec<&str> = secrets.iter().map(Word::text).collect();
        assert_eq!(words, expected);
    }

    #[test]
    fn benchmark_distribution_sums_correctly() {
        let dictionary = Dictionary::embedded().unwrap();
        let solver = Solver::new(&dictionary, SolverConfig::default()).unwrap();
        let result = run_benchmark(&solver, &dictionary.words()[..10], false).unwrap();

        let distribution_sum: usize = result.distribution.values().sum();
        assert_eq!(distribution_sum, result.solved);
        for &steps in result.distribution.keys() {
            assert!((1..=6).contains(&steps));
        }
    }

    #[test]
    fn benchmark_empty_word_list() {
        let dictionary = Dictionary::embedded().unwrap();
        let solver = Solver::new(&dictionary, SolverConfig::default()).unwrap();

        let result = run_benchmark(&solver, &[], false).unwrap();

        assert_eq!(result.total_words(), 0);
        assert_eq!(result.solved, 0);
        assert_eq!(result.p99, Duration::ZERO);
        assert!(result.average_steps.abs() < f64::EPSILON);
    }

    #[test]
    fn time_solve_reports_outcome() {
        let dictionary = Dictionary::from_strs(&["hoard", "wharf", "think"]).unwrap();
        let solver = Solver::new(&dictionary, SolverConfig::default()).unwrap();

        let report = time_solve(&solver, &Word::new("think").unwrap()).unwrap();
        assert_eq!(report.word, "think");
        assert!(report.success);
        assert!(report.steps >= 1);
    }

    #[test]
    fn summary_counts_outcomes_and_percentiles() {
        let results = vec![
            report("hoard", Outcome::Solved, 3, 10),
            report("wharf", Outcome::Solved, 4, 20),
            report("think", Outcome::Exhausted, 6, 30),
            report("other", Outcome::NoCandidates, 2, 40),
        ];

        let summary = summarize(results, Duration::from_secs(2));

        assert_eq!(summary.solved, 2);
        assert_eq!(summary.failed, 1);
        assert_eq!(summary.no_candidates, 1);
        assert!((summary.average_steps - 3.5).abs() < f64::EPSILON);
        assert_eq!(summary.distribution, BTreeMap::from([(3, 1), (4, 1)]));
        assert_eq!(summary.p50, Duration::from_millis(20));
        assert_eq!(summary.p90, Duration::from_millis(40));
        assert!((summary.words_per_second - 2.0).abs() < f64::EPSILON);
        assert!((summary.success_rate() - 50.0).abs() < f64::EPSILON);
        assert_eq!(summary.failures().count(), 2);
    }
}
