//! Embedded word list
//!
//! The raw list is compiled into the binary and parsed once at startup.

/// Raw newline-separated word list of mixed lengths
pub const WORDS_ALPHA: &str = include_str!("../../data/words_alpha.txt");
