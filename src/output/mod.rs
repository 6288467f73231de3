//! Terminal output formatting
//!
//! Display utilities for the non-interactive commands.

pub mod display;
pub mod formatters;

pub use display::{print_draw_result, print_fairness_report};
