//! Fairness audit command
//!
//! Shuffles `0..size` many times in parallel and checks with a chi-square test
//! that every index lands at every position equally often.

use crate::core::{PositionTally, fisher_yates};
use indicatif::{ProgressBar, ProgressStyle};
use rand::SeedableRng;
use rand::rngs::StdRng;
use rayon::prelude::*;
use std::time::{Duration, Instant};

/// z-scores above this are reported as bias
pub const Z_LIMIT: f64 = 4.0;

/// Parameters for a fairness audit
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FairnessConfig {
    /// Elements per shuffle
    pub size: usize,
    /// Number of shuffles
    pub trials: u64,
    /// Base seed; trial `i` uses `seed + i`
    pub seed: u64,
}

/// Result of a fairness audit
#[derive(Debug)]
pub struct FairnessReport {
    pub config: FairnessConfig,
    pub tally: PositionTally,
    pub duration: Duration,
}

impl FairnessReport {
    /// Whether the tally is consistent with a uniform shuffle
    #[must_use]
    pub fn passed(&self) -> bool {
        self.tally.looks_uniform(Z_LIMIT)
    }
}

/// Tally `trials` seeded Fisher–Yates shuffles of `0..size` across threads
///
/// `on_trial` runs once per finished shuffle, from any worker thread.
pub fn tally_shuffles<F>(config: FairnessConfig, on_trial: F) -> PositionTally
where
    F: Fn() + Sync,
{
    let size = config.size;
    (0..config.trials)
        .into_par_iter()
        .fold(
            || PositionTally::new(size),
            |mut tally, trial| {
                let mut rng = StdRng::seed_from_u64(config.seed.wrapping_add(trial));
                let mut items: Vec<usize> = (0..size).collect();
                fisher_yates(&mut items, &mut rng);
                tally.record(&items);
                on_trial();
                tally
            },
        )
        .reduce(|| PositionTally::new(size), PositionTally::merge)
}

/// Run the audit with a progress bar
///
/// # Panics
///
/// Panics if the progress bar template is invalid.
#[must_use]
pub fn run_fairness(config: FairnessConfig) -> FairnessReport {
    println!(
        "🎲 Shuffling {} indices {} times...",
        config.size, config.trials
    );

    let pb = ProgressBar::new(config.trials);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
            .unwrap()
            .progress_chars("█▓▒░"),
    );

    let start = Instant::now();
    let tally = tally_shuffles(config, || pb.inc(1));
    let duration = start.elapsed();

    pb.finish_with_message("Complete!");

    FairnessReport {
        config,
        tally,
        duration,
    }
}
