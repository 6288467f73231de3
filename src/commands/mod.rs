//! Command implementations

pub mod draw;
pub mod fairness;

pub use draw::{DrawResult, draw_words};
pub use fairness::{FairnessConfig, FairnessReport, run_fairness, tally_shuffles};
