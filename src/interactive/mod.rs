//! Interactive TUI
//!
//! Terminal event loop, input mapping and rendering for the animated reveal.

mod app;
pub mod input;
pub mod rendering;

pub use app::{apply, dispatch, run_tui};
