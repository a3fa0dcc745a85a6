//! Benchmark command
//!
//! Runs the simulation against many answers and summarizes guess counts.

use crate::core::Word;
use crate::solver::{RankingStrategy, Simulation, SolverError};
use indicatif::{ProgressBar, ProgressStyle};
use log::{debug, warn};
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use std::collections::BTreeMap;
use std::time::{Duration, Instant};

const PROGRESS_TEMPLATE: &str =
    "{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}";

/// Result of a benchmark run
pub struct BenchmarkResult {
    pub strategy: &'static str,
    pub total_words: usize,
    pub solved: usize,
    pub failures: Vec<(String, SolverError)>,
    pub total_guesses: usize,
    pub average_guesses: f64,
    pub min_guesses: usize,
    pub max_guesses: usize,
    pub distribution: BTreeMap<usize, usize>,
    pub duration: Duration,
    pub words_per_second: f64,
}

/// Pick the answers to benchmark against
///
/// `count` of `None` takes every word in order. Otherwise a random sample of
/// that size, reproducible when `seed` is given.
#[must_use]
pub fn sample_answers(words: &[Word], count: Option<usize>, seed: Option<u64>) -> Vec<Word> {
    match count {
        None => words.to_vec(),
        Some(count) if count >= words.len() => words.to_vec(),
        Some(count) => {
            let mut rng = seed.map_or_else(StdRng::from_os_rng, StdRng::seed_from_u64);
            words.choose_multiple(&mut rng, count).cloned().collect()
        }
    }
}

/// Run the simulation for every target word
///
/// If `initial_guess` is provided it opens every game instead of the
/// strategy's own first choice. Failed runs are recorded, not fatal.
pub fn run_benchmark<S: RankingStrategy>(
    simulation: &Simulation<S>,
    target_words: &[Word],
    initial_guess: Option<&Word>,
    show_progress: bool,
) -> BenchmarkResult {
    let pb = if show_progress {
        let pb = ProgressBar::new(target_words.len() as u64);
        pb.set_style(
            ProgressStyle::default_bar()
                .template(PROGRESS_TEMPLATE)
                .unwrap_or_else(|_| ProgressStyle::default_bar())
                .progress_chars("█▓▒░"),
        );
        pb
    } else {
        ProgressBar::hidden()
    };

    let start = Instant::now();
    let mut solved = 0;
    let mut failures = Vec::new();
    let mut total_guesses = 0;
    let mut min_guesses = usize::MAX;
    let mut max_guesses = 0;
    let mut distribution: BTreeMap<usize, usize> = BTreeMap::new();

    // The default opener is the same for every answer
    let opener = initial_guess.cloned().or_else(|| simulation.first_guess());

    for target in target_words {
        pb.set_message(target.text().to_uppercase());

        match simulation.run(target, opener.clone()) {
            Ok(report) => {
                let guesses = report.guess_count();
                debug!("{target}: {guesses} guess(es)");
                solved += 1;
                total_guesses += guesses;
                min_guesses = min_guesses.min(guesses);
                max_guesses = max_guesses.max(guesses);
                *distribution.entry(guesses).or_insert(0) += 1;
            }
            Err(error) => {
                warn!("{target}: {error}");
                failures.push((target.text().to_string(), error));
            }
        }

        pb.inc(1);
    }

    pb.finish_and_clear();

    let duration = start.elapsed();
    let total_words = target_words.len();

    BenchmarkResult {
        strategy: simulation.strategy().name(),
        total_words,
        solved,
        failures,
        total_guesses,
        average_guesses: if solved == 0 {
            0.0
        } else {
            total_guesses as f64 / solved as f64
        },
        min_guesses: if solved == 0 { 0 } else { min_guesses },
        max_guesses,
        distribution,
        duration,
        words_per_second: total_words as f64 / duration.as_secs_f64().max(f64::EPSILON),
    }
}
