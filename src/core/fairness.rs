//! Shuffle uniformity statistics
//!
//! A fair shuffle puts every index at every position with equal probability.
//! `PositionTally` counts where each index lands over many shuffles and scores
//! the counts with Pearson's chi-square test.

/// Index-by-position landing counts over a number of shuffles
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PositionTally {
    size: usize,
    trials: u64,
    /// Row-major: `counts[index * size + position]`
    counts: Vec<u64>,
}

impl PositionTally {
    /// Create an empty tally for permutations of `size` elements
    #[must_use]
    pub fn new(size: usize) -> Self {
        Self {
            size,
            trials: 0,
            counts: vec![0; size * size],
        }
    }

    /// Record one permutation of `0..size`
    ///
    /// # Panics
    /// Panics if `permutation` has the wrong length or holds an index `>= size`.
    pub fn record(&mut self, permutation: &[usize]) {
        assert_eq!(
            permutation.len(),
            self.size,
            "permutation length does not match tally size"
        );
        for (position, &index) in permutation.iter().enumerate() {
            self.counts[index * self.size + position] += 1;
        }
        self.trials += 1;
    }

    /// Combine two tallies of the same size
    ///
    /// # Panics
    /// Panics if the sizes differ.
    #[must_use]
    pub fn merge(mut self, other: Self) -> Self {
        assert_eq!(
            self.size,
            other.size,
            "cannot merge tallies of different sizes"
        );
        for (mine, theirs) in self.counts.iter_mut().zip(other.counts) {
            *mine += theirs;
        }
        self.trials += other.trials;
        self
    }

    /// Number of elements per permutation
    #[must_use]
    pub const fn size(&self) -> usize {
        self.size
    }

    /// Number of permutations recorded
    #[must_use]
    pub const fn trials(&self) -> u64 {
        self.trials
    }

    /// How many times `index` landed at `position`
    #[must_use]
    pub fn count(&self, index: usize, position: usize) -> u64 {
        self.counts[index * self.size + position]
    }

    /// Expected count per cell under a uniform shuffle
    #[must_use]
    pub fn expected(&self) -> f64 {
        if self.size == 0 {
            return 0.0;
        }
        self.trials as f64 / self.size as f64
    }

    /// Pearson chi-square statistic over all cells
    #[must_use]
    pub fn chi_square(&self) -> f64 {
        let expected = self.expected();
        if expected == 0.0 {
            return 0.0;
        }
        self.counts
            .iter()
            .map(|&observed| {
                let diff = observed as f64 - expected;
                diff * diff / expected
            })
            .sum()
    }

    /// Degrees of freedom for the index-by-position table
    ///
    /// Row and column sums are both fixed at `trials`, hence `(size - 1)^2`.
    #[must_use]
    pub const fn degrees_of_freedom(&self) -> usize {
        let free = self.size.saturating_sub(1);
        free * free
    }

    /// Normal approximation of the chi-square statistic
    ///
    /// Values near zero mean "looks uniform"; large positive values mean bias.
    #[must_use]
    pub fn z_score(&self) -> f64 {
        let dof = self.degrees_of_freedom() as f64;
        if dof == 0.0 {
            return 0.0;
        }
        (self.chi_square() - dof) / (2.0 * dof).sqrt()
    }

    /// Largest relative deviation of any cell from the expected count
    #[must_use]
    pub fn max_relative_deviation(&self) -> f64 {
        let expected = self.expected();
        if expected == 0.0 {
            return 0.0;
        }
        self.counts
            .iter()
            .map(|&observed| (observed as f64 - expected).abs() / expected)
            .fold(0.0, f64::max)
    }

    /// Whether the tally is consistent with a uniform shuffle at `z_limit`
    #[must_use]
    pub fn looks_uniform(&self, z_limit: f64) -> bool {
        self.z_score() < z_limit
    }
}
