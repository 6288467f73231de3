//! Gimme Five - CLI
//!
//! Picks a random five-letter word with a roulette-style reveal, or prints
//! draws and shuffle audits for scripting.

use anyhow::Result;
use clap::{Parser, Subcommand};
use gimme_five::{
    commands::{FairnessConfig, draw_words, run_fairness},
    core::WordCatalog,
    interactive::run_tui,
    logging::init_file_logging,
    output::{print_draw_result, print_fairness_report},
    reveal::{ROUND_SIZE, RoundController},
    wordlists::loader::{embedded_catalog, load_from_file},
};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::path::PathBuf;
use tracing::info;

#[derive(Parser)]
#[command(
    name = "gimme_five",
    about = "Draws a random five-letter word for Wordle-like games, with a roulette-style reveal",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Word list file (default: embedded list); only 5-letter alphabetic lines are used
    #[arg(short = 'w', long, global = true)]
    wordlist: Option<PathBuf>,

    /// Seed for a reproducible draw (default: OS entropy)
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Write diagnostic logs to this file
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,

    /// Log filter used with `--log-file`, e.g. `debug` or `gimme_five=trace`
    #[arg(long, global = true, default_value = "info")]
    log_level: String,
}

#[derive(Subcommand)]
enum Commands {
    /// Animated reveal in the terminal (default)
    Play,

    /// Print words drawn from the pool, no animation
    Draw {
        /// Number of words to draw
        #[arg(short = 'n', long, default_value = "1")]
        count: usize,
    },

    /// Check the shuffle for positional bias
    Fairness {
        /// Number of shuffles
        #[arg(short, long, default_value = "100000")]
        trials: u64,

        /// Indices per shuffle
        #[arg(short, long, default_value_t = ROUND_SIZE)]
        size: usize,
    },
}

/// Load the catalog from the -w flag or the embedded list
fn load_catalog(wordlist: Option<&PathBuf>) -> Result<WordCatalog> {
    match wordlist {
        Some(path) => load_from_file(path),
        None => Ok(embedded_catalog()?),
    }
}

fn seeded_rng(seed: Option<u64>) -> StdRng {
    seed.map_or_else(StdRng::from_os_rng, StdRng::seed_from_u64)
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if let Some(path) = &cli.log_file {
        init_file_logging(path, &cli.log_level)?;
    }

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    match command {
        Commands::Play => {
            let catalog = load_catalog(cli.wordlist.as_ref())?;
            info!(words = catalog.len(), "catalog loaded");
            run_play_command(&catalog, cli.seed)
        }
        Commands::Draw { count } => {
            let catalog = load_catalog(cli.wordlist.as_ref())?;
            info!(words = catalog.len(), count, "catalog loaded");
            run_draw_command(&catalog, count, cli.seed);
            Ok(())
        }
        Commands::Fairness { trials, size } => {
            run_fairness_command(trials, size, cli.seed);
            Ok(())
        }
    }
}

fn run_play_command(catalog: &WordCatalog, seed: Option<u64>) -> Result<()> {
    let controller = RoundController::new(catalog, seeded_rng(seed))?;
    run_tui(controller)
}

fn run_draw_command(catalog: &WordCatalog, count: usize, seed: Option<u64>) {
    let result = draw_words(catalog, seeded_rng(seed), count);
    print_draw_result(&result);
}

fn run_fairness_command(trials: u64, size: usize, seed: Option<u64>) {
    // A concrete seed keeps the audit reproducible even when none was given
    let seed = seed.unwrap_or_else(|| rand::rng().random());
    let report = run_fairness(FairnessConfig { size, trials, seed });
    print_fairness_report(&report);
}
