//! Wordle Simulator - CLI
//!
//! Simulates solving a Wordle puzzle for a known answer, benchmarks the
//! ranking strategies over many answers, and scores words by letter frequency.

use anyhow::{Context, Result, anyhow, bail};
use clap::{Parser, Subcommand};
use colored::Colorize;
use log::info;
use std::path::{Path, PathBuf};
use wordle_sim::{
    commands::{
        ScoreOrder, SimulateConfig, run_benchmark, sample_answers, score_words, simulate_each,
    },
    core::{Alphabet, DEFAULT_ALPHABET, DEFAULT_WORD_LENGTH, GameConfig, Word},
    output::{print_benchmark_result, print_scores, print_simulation_report},
    solver::{RankingStrategy, Simulation, SimulationConfig, StrategyType},
    wordlists::{WordListProvider, WordLists},
};

#[derive(Parser)]
#[command(
    name = "wordle_sim",
    about = "Simulate solving Wordle by filtering candidates and ranking guesses",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Strategy: all (default, runs each in turn), position, usage
    #[arg(short, long, global = true, default_value = "all")]
    strategy: String,

    /// Dictionary file, one word per line (default: embedded list)
    #[arg(short = 'w', long, global = true)]
    words: Option<PathBuf>,

    /// Usage ordering file, most common word first (default: embedded list)
    #[arg(short = 'u', long, global = true)]
    usage: Option<PathBuf>,

    /// Letters words may be built from
    #[arg(long, global = true, default_value = DEFAULT_ALPHABET)]
    alphabet: String,

    /// Give up after this many guesses (default: word list size + 1)
    #[arg(long, global = true)]
    max_iterations: Option<usize>,
}

#[derive(Subcommand)]
enum Commands {
    /// Simulate solving a specific answer
    Simulate {
        /// The answer to the puzzle; its length sets the word length
        answer: String,

        /// Initial guess (default: the strategy's top-ranked word)
        #[arg(short, long)]
        guess: Option<String>,
    },

    /// Run the simulation against many answers
    Benchmark {
        /// Word length
        #[arg(short = 'l', long, default_value_t = DEFAULT_WORD_LENGTH)]
        length: usize,

        /// Number of random answers to test (default: every word)
        #[arg(short = 'n', long)]
        count: Option<usize>,

        /// Seed for the random sample
        #[arg(long)]
        seed: Option<u64>,

        /// Override the first guess of every game
        #[arg(short, long)]
        guess: Option<String>,
    },

    /// Score words with a given number of distinct letters by letter frequency
    Scores {
        /// Word length
        #[arg(short = 'l', long, default_value_t = DEFAULT_WORD_LENGTH)]
        length: usize,

        /// Number of distinct letters a word must have
        #[arg(short = 'd', long, default_value_t = 3)]
        distinct: usize,

        /// How many words to list
        #[arg(short = 'n', long, default_value_t = 10)]
        top: usize,

        /// List the lowest scores instead of the highest
        #[arg(long)]
        smallest: bool,
    },
}

fn main() -> Result<()> {
    let env = env_logger::Env::default().default_filter_or("warn");
    env_logger::Builder::from_env(env).init();

    let cli = Cli::parse();

    let lists = load_word_lists(cli.words.as_deref(), cli.usage.as_deref())?;
    let alphabet = Alphabet::new(&cli.alphabet).context("invalid --alphabet")?;
    let limits = SimulationConfig {
        max_iterations: cli.max_iterations,
        ..SimulationConfig::default()
    };

    match cli.command {
        Commands::Simulate { answer, guess } => {
            let game = GameConfig::new(alphabet, answer.chars().count())
                .with_context(|| format!("cannot play '{answer}'"))?;
            let config = SimulateConfig::new(answer).with_initial_guess(guess);
            run_simulate_command(&cli.strategy, &lists, &game, limits, &config)
        }
        Commands::Benchmark {
            length,
            count,
            seed,
            guess,
        } => {
            let game = GameConfig::new(alphabet, length)?;
            run_benchmark_command(&cli.strategy, &lists, &game, limits, count, seed, guess)
        }
        Commands::Scores {
            length,
            distinct,
            top,
            smallest,
        } => {
            let game = GameConfig::new(alphabet, length)?;
            let order = if smallest {
                ScoreOrder::Smallest
            } else {
                ScoreOrder::Largest
            };
            run_scores_command(&lists, &game, distinct, top, order)
        }
    }
}

/// Start from the embedded lists and swap in any files given on the command line
fn load_word_lists(words: Option<&Path>, usage: Option<&Path>) -> Result<WordLists> {
    let mut lists = WordLists::embedded();
    if let Some(path) = words {
        lists = lists
            .with_dictionary_file(path)
            .with_context(|| format!("failed to read word list {}", path.display()))?;
    }
    if let Some(path) = usage {
        lists = lists
            .with_usage_file(path)
            .with_context(|| format!("failed to read usage list {}", path.display()))?;
    }
    Ok(lists)
}

/// Words of the configured length; an empty vocabulary is a usage error
fn load_words(lists: &WordLists, game: &GameConfig) -> Result<Vec<Word>> {
    let words = lists.words(game);
    let length = game.word_length();
    if words.is_empty() {
        bail!("the word list has no words of length {length}");
    }
    info!("{} words of length {length}", words.len());
    Ok(words)
}

/// Resolve the --strategy flag; "all" yields every strategy in turn
fn strategies(name: &str, usage: &[Word]) -> Result<Vec<StrategyType>> {
    if name == "all" {
        return Ok(StrategyType::NAMES
            .iter()
            .filter_map(|name| StrategyType::from_name(name, usage))
            .collect());
    }

    StrategyType::from_name(name, usage)
        .map(|strategy| vec![strategy])
        .ok_or_else(|| {
            anyhow!(
                "unknown strategy '{name}' (expected all, {})",
                StrategyType::NAMES.join(", ")
            )
        })
}

fn run_simulate_command(
    strategy_name: &str,
    lists: &WordLists,
    game: &GameConfig,
    limits: SimulationConfig,
    config: &SimulateConfig,
) -> Result<()> {
    let words = load_words(lists, game)?;
    let usage = lists.usage_ranking(game);

    let simulations: Vec<_> = strategies(strategy_name, &usage)?
        .into_iter()
        .map(|strategy| Simulation::new(strategy, &words).with_config(limits))
        .collect();

    let results = simulate_each(config, game, &simulations);
    let mut failed = 0;
    for (simulation, result) in simulations.iter().zip(results) {
        match result {
            Ok(report) => print_simulation_report(&report),
            Err(error) => {
                failed += 1;
                let name = simulation.strategy().name();
                eprintln!("{} {name}: {error}", "error:".red().bold());
            }
        }
    }

    if failed > 0 {
        bail!(
            "{failed} of {} strategies failed to solve '{}'",
            simulations.len(),
            config.answer
        );
    }
    Ok(())
}

fn run_benchmark_command(
    strategy_name: &str,
    lists: &WordLists,
    game: &GameConfig,
    limits: SimulationConfig,
    count: Option<usize>,
    seed: Option<u64>,
    guess: Option<String>,
) -> Result<()> {
    let words = load_words(lists, game)?;
    let usage = lists.usage_ranking(game);
    let answers = sample_answers(&words, count, seed);
    let forced_first = guess
        .map(|text| Word::new(text, game))
        .transpose()
        .context("invalid --guess")?;

    for strategy in strategies(strategy_name, &usage)? {
        let simulation = Simulation::new(strategy, &words).with_config(limits);

        if let Some(word) = &forced_first {
            println!(
                "Running {} benchmark on {} answers with forced first word: {word}...",
                simulation.strategy().name(),
                answers.len()
            );
        } else {
            println!(
                "Running {} benchmark on {} answers...",
                simulation.strategy().name(),
                answers.len()
            );
        }

        let result = run_benchmark(&simulation, &answers, forced_first.as_ref(), true);
        print_benchmark_result(&result);
    }
    Ok(())
}

fn run_scores_command(
    lists: &WordLists,
    game: &GameConfig,
    distinct: usize,
    top: usize,
    order: ScoreOrder,
) -> Result<()> {
    let words = load_words(lists, game)?;
    let scores = score_words(&words, distinct, top, order);
    print_scores(&scores, distinct, order);
    Ok(())
}
