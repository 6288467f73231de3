//! Draw command
//!
//! Prints words straight from the fair pool, without the animated reveal.

use crate::core::{IndexPool, WordCatalog};
use rand::Rng;

/// Result of a plain draw
pub struct DrawResult {
    pub words: Vec<String>,
    pub catalog_size: usize,
    /// Pool generations used; above 1 means the pool was reshuffled
    pub generations: u64,
}

/// Draw `count` words from a freshly shuffled pool over `catalog`
///
/// Words repeat only once `count` exceeds the catalog size and the pool has
/// been reshuffled.
pub fn draw_words<R: Rng>(catalog: &WordCatalog, rng: R, count: usize) -> DrawResult {
    let mut pool = IndexPool::new(catalog.len(), rng);
    let words = (0..count)
        .map(|_| {
            let index = pool.take(1)[0];
            catalog.word_at(index).to_string()
        })
        .collect();

    DrawResult {
        words,
        catalog_size: catalog.len(),
        generations: pool.generation(),
    }
}
