//! Gimme Five
//!
//! Draws a random five-letter word to seed Wordle-like games, revealed with a
//! roulette-style animation in the terminal.
//!
//! Draws come from a shuffled index pool: every word in the catalog is shown
//! once before any word repeats.
//!
//! # Quick Start
//!
//! ```rust
//! use gimme_five::reveal::{Phase, RoundController, Transition};
//! use rand::{SeedableRng, rngs::StdRng};
//!
//! let catalog = gimme_five::wordlists::loader::embedded_catalog().unwrap();
//! let mut controller = RoundController::new(&catalog, StdRng::seed_from_u64(42)).unwrap();
//!
//! // Drive the reveal to the end without a real clock
//! let mut next = controller.begin_round();
//! while let Transition::Schedule(_) = next {
//!     next = controller.on_timer_fire();
//! }
//! assert_eq!(controller.phase(), Phase::Stopped);
//! println!("Today's word: {}", controller.current_word().unwrap());
//! ```

// Catalog, pool and shuffle statistics
pub mod core;

// Round state machine and timing
pub mod reveal;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;

// File-backed tracing setup
pub mod logging;
