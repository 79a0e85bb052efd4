//! Wordle Sieve - CLI
//!
//! Solve, benchmark, rank and compare from the command line.

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use log::info;
use std::path::{Path, PathBuf};
use wordle_sieve::{
    commands::{rank_candidates, run_assist, run_benchmark, solve_word},
    core::{Pattern, Word, compare_mutual},
    output::{print_benchmark_result, print_comparison, print_rank_result, print_solve_result},
    solver::{
        DEFAULT_MAX_STEPS, PairwisePatternTable, Solver, SolverConfig, Strategy, StrategyKind,
    },
    wordlists::{Dictionary, loader::load_from_file},
};

#[derive(Parser)]
#[command(
    name = "wordle_sieve",
    about = "Wordle solver: feedback, constraint filtering and candidate ranking",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Strategy: frequency (default), entropy, random
    #[arg(short, long, global = true, default_value = "frequency")]
    strategy: String,

    /// Word list file, one word per line (default: embedded list)
    #[arg(short, long, global = true)]
    dictionary: Option<PathBuf>,

    /// Random guesses from the candidates after the opening
    #[arg(short, long, global = true, default_value_t = 0)]
    explore: usize,

    /// Guesses allowed per game
    #[arg(short, long, global = true, default_value_t = DEFAULT_MAX_STEPS)]
    max_steps: usize,

    /// Fixed opening guess
    #[arg(short = 'o', long, global = true)]
    opening: Option<String>,

    /// Seed for the random picks
    #[arg(long, global = true)]
    seed: Option<u64>,
}

#[derive(Subcommand)]
enum Commands {
    /// Solve a specific target word
    Solve {
        /// The target word to solve
        word: String,

        /// Show verbose output with candidate counts
        #[arg(short, long)]
        verbose: bool,
    },

    /// Suggest guesses for a game played elsewhere, reading feedback from stdin
    Assist,

    /// Benchmark solver performance
    Benchmark {
        /// Number of dictionary words to test (default: all)
        #[arg(short = 'n', long)]
        count: Option<usize>,

        /// Pattern table file; built and saved there if it does not exist
        #[arg(short, long)]
        table: Option<PathBuf>,
    },

    /// Rank the candidates left by a feedback history
    Rank {
        /// Observed feedback as word:pattern, e.g. arose:ryrrg
        #[arg(short, long = "guess")]
        guesses: Vec<String>,

        /// Number of candidates to show
        #[arg(short = 'n', long, default_value_t = 10)]
        top: usize,
    },

    /// Show the feedback two words give each other
    Compare {
        a: String,
        b: String,
    },
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let dictionary = load_dictionary(cli.dictionary.as_deref())?;
    let config = build_config(&cli)?;

    match cli.command {
        Commands::Solve { word, verbose } => {
            let solver = Solver::new(&dictionary, config)?;
            let result = solve_word(&solver, &word)
                .with_context(|| format!("failed to solve '{word}'"))?;
            print_solve_result(&result, verbose);
        }
        Commands::Assist => {
            let solver = Solver::new(&dictionary, config)?;
            run_assist(&solver, std::io::stdin().lock(), std::io::stdout())?;
        }
        Commands::Benchmark { count, table } => {
            run_benchmark_command(&dictionary, config, count, table.as_deref())?;
        }
        Commands::Rank { guesses, top } => {
            let history = guesses
                .iter()
                .map(|g| parse_observation(g))
                .collect::<Result<Vec<_>>>()?;

            let strategy = Strategy::from_kind(config.strategy, None);
            let Some(scorer) = strategy.scorer() else {
                bail!("the random strategy does not rank candidates; use frequency or entropy");
            };
            let result = rank_candidates(&dictionary, scorer, &history, top)?;
            print_rank_result(&result);
        }
        Commands::Compare { a, b } => {
            let (a, b) = (Word::new(&a)?, Word::new(&b)?);
            let (a_as_guess, b_as_guess) = compare_mutual(&a, &b)?;
            print_comparison(a.text(), b.text(), a_as_guess, b_as_guess);
        }
    }

    Ok(())
}

fn load_dictionary(path: Option<&Path>) -> Result<Dictionary> {
    match path {
        Some(path) => load_from_file(path)
            .with_context(|| format!("failed to load dictionary from {}", path.display())),
        None => Dictionary::embedded().context("embedded word list is malformed"),
    }
}

fn build_config(cli: &Cli) -> Result<SolverConfig> {
    let mut config = SolverConfig::new(StrategyKind::from_name(&cli.strategy))
        .with_max_steps(cli.max_steps)
        .with_explore_steps(cli.explore);

    if let Some(opening) = &cli.opening {
        let word = Word::new(opening).with_context(|| format!("invalid opening '{opening}'"))?;
        config = config.with_opening(word);
    }
    if let Some(seed) = cli.seed {
        config = config.with_seed(seed);
    }

    Ok(config)
}

/// Parse `word:pattern` as typed on the command line
fn parse_observation(text: &str) -> Result<(Word, Pattern)> {
    let Some((word, pattern)) = text.split_once(':') else {
        bail!("expected word:pattern, got '{text}'");
    };

    let word = Word::new(word).with_context(|| format!("invalid guess in '{text}'"))?;
    let pattern =
        Pattern::from_str(pattern).with_context(|| format!("invalid pattern in '{text}'"))?;

    Ok((word, pattern))
}

fn run_benchmark_command(
    dictionary: &Dictionary,
    config: SolverConfig,
    count: Option<usize>,
    table_path: Option<&Path>,
) -> Result<()> {
    let secrets = &dictionary.words()[..count.unwrap_or(dictionary.len()).min(dictionary.len())];
    println!(
        "Running {} benchmark on {} words...",
        config.strategy.name(),
        secrets.len()
    );

    let result = match table_path {
        Some(path) => {
            let table = load_or_build_table(path, dictionary)?;
            let solver = Solver::with_table(dictionary, config, &table)?;
            run_benchmark(&solver, secrets, true)?
        }
        None => {
            let solver = Solver::new(dictionary, config)?;
            run_benchmark(&solver, secrets, true)?
        }
    };

    print_benchmark_result(&result);
    Ok(())
}

fn load_or_build_table(path: &Path, dictionary: &Dictionary) -> Result<PairwisePatternTable> {
    if path.exists() {
        return PairwisePatternTable::load_from_path(path, dictionary)
            .with_context(|| format!("failed to load pattern table from {}", path.display()));
    }

    let table = PairwisePatternTable::build(dictionary);
    table
        .save_to_path(path)
        .with_context(|| format!("failed to save pattern table to {}", path.display()))?;
    info!("saved pattern table to {}", path.display());
    Ok(table)
}
