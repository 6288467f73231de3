//! Word lists for the draw
//!
//! Provides the embedded word list compiled into the binary and loaders that
//! turn raw text into a `WordCatalog`.

mod embedded;
pub mod loader;

pub use embedded::WORDS_ALPHA;
