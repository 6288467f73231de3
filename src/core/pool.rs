//! Fair-draw index pool
//!
//! The pool holds one shuffled permutation of catalog indices and hands them out
//! in order. When fewer indices remain than a caller asks for, the whole
//! permutation is replaced by a fresh shuffle. Every index therefore appears
//! exactly once per generation, with no per-draw uniqueness search.

use rand::Rng;
use tracing::debug;

/// Shuffle `items` in place with the Fisher–Yates algorithm
///
/// For `i` from the last position down to 1, swaps position `i` with a
/// uniformly chosen position in `0..=i`. Every permutation is equally likely
/// given a uniform random source.
///
/// # Examples
/// ```
/// use gimme_five::core::fisher_yates;
/// use rand::{SeedableRng, rngs::StdRng};
///
/// let mut items: Vec<usize> = (0..10).collect();
/// fisher_yates(&mut items, &mut StdRng::seed_from_u64(7));
///
/// let mut sorted = items.clone();
/// sorted.sort_unstable();
/// assert_eq!(sorted, (0..10).collect::<Vec<_>>());
/// ```
pub fn fisher_yates<T, R: Rng + ?Sized>(items: &mut [T], rng: &mut R) {
    for i in (1..items.len()).rev() {
        let j = rng.random_range(0..=i);
        items.swap(i, j);
    }
}

fn shuffled_indices<R: Rng + ?Sized>(len: usize, rng: &mut R) -> Vec<usize> {
    let mut indices: Vec<usize> = (0..len).collect();
    fisher_yates(&mut indices, rng);
    indices
}

/// Shuffled permutation of `0..len` consumed front to back
///
/// Owns its random source so refills need no outside help.
#[derive(Debug, Clone)]
pub struct IndexPool<R> {
    indices: Vec<usize>,
    cursor: usize,
    generation: u64,
    rng: R,
}

impl<R: Rng> IndexPool<R> {
    /// Create a pool over `0..len` with one initial shuffle
    pub fn new(len: usize, mut rng: R) -> Self {
        let indices = shuffled_indices(len, &mut rng);
        Self {
            indices,
            cursor: 0,
            generation: 1,
            rng,
        }
    }

    /// Reshuffle if fewer than `count` indices remain
    ///
    /// Returns `true` when a new generation was started.
    pub fn ensure_capacity(&mut self, count: usize) -> bool {
        if self.remaining() >= count {
            return false;
        }

        self.indices = shuffled_indices(self.indices.len(), &mut self.rng);
        self.cursor = 0;
        self.generation += 1;
        debug!(
            generation = self.generation,
            len = self.indices.len(),
            "index pool reshuffled"
        );
        true
    }

    /// Take the next `count` indices, reshuffling first if needed
    ///
    /// # Panics
    /// Panics if `count` exceeds the pool length, since no reshuffle could
    /// ever satisfy the request.
    pub fn take(&mut self, count: usize) -> Vec<usize> {
        assert!(
            count <= self.indices.len(),
            "cannot take {count} indices from a pool of {}",
            self.indices.len()
        );

        self.ensure_capacity(count);
        let batch = self.indices[self.cursor..self.cursor + count].to_vec();
        self.cursor += count;
        batch
    }
}

impl<R> IndexPool<R> {
    /// Number of indices in one generation
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.indices.len()
    }

    /// True for a pool over an empty range
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    /// Indices not yet handed out in this generation
    #[inline]
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.indices.len() - self.cursor
    }

    /// Position of the next index to hand out
    #[inline]
    #[must_use]
    pub const fn cursor(&self) -> usize {
        self.cursor
    }

    /// Generations shuffled so far, starting at 1
    #[inline]
    #[must_use]
    pub const fn generation(&self) -> u64 {
        self.generation
    }

    /// The current generation's permutation
    #[inline]
    #[must_use]
    pub fn permutation(&self) -> &[usize] {
        &self.indices
    }
}
