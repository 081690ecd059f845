//! Rank-weighted parent selection.
//!
//! Genes are sorted ascending by fitness and the gene at rank `i` gets
//! weight `i + 1`: the worst gene has weight 1 and the best has weight `n`.
//! Selection probability therefore grows linearly with rank and is
//! independent of the raw fitness values.
//!
//! Sampling draws a uniform real `r` in `[0, total)` and returns the smallest
//! rank whose cumulative weight exceeds `r` (an upper-bound binary search).
//!
//! # References
//!
//! - Baker (1985), "Adaptive Selection Methods for Genetic Algorithms"

use rand::Rng;

/// Cumulative rank-weight table for a population of fixed size.
///
/// `cumulative()[i] = 1 + 2 + ... + (i + 1)`.
///
/// # Examples
///
/// ```
/// use u_genepool::ga::RankTable;
///
/// let table = RankTable::new(4);
/// assert_eq!(table.cumulative(), &[1, 3, 6, 10]);
/// assert_eq!(table.total(), 10);
/// assert_eq!(table.rank_for(0.5), 0);
/// assert_eq!(table.rank_for(9.99), 3);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RankTable {
    cumulative: Vec<u64>,
}

impl RankTable {
    /// Builds the table for `n` ranked genes.
    ///
    /// # Panics
    /// Panics if `n` is zero.
    pub fn new(n: usize) -> Self {
        assert!(n > 0, "cannot rank an empty population");

        let cumulative = (1..=n as u64)
            .scan(0u64, |acc, weight| {
                *acc += weight;
                Some(*acc)
            })
            .collect();
        Self { cumulative }
    }

    /// Number of ranks in the table.
    pub fn len(&self) -> usize {
        self.cumulative.len()
    }

    /// Always false; a table has at least one rank.
    pub fn is_empty(&self) -> bool {
        self.cumulative.is_empty()
    }

    /// The cumulative weights, strictly increasing.
    pub fn cumulative(&self) -> &[u64] {
        &self.cumulative
    }

    /// Sum of all weights, `n * (n + 1) / 2`.
    pub fn total(&self) -> u64 {
        self.cumulative[self.cumulative.len() - 1]
    }

    /// Returns the smallest rank `i` with `cumulative[i] > r`.
    ///
    /// `r` is expected in `[0, total)`. Values at or past the total map to the
    /// best rank.
    pub fn rank_for(&self, r: f64) -> usize {
        let idx = self.cumulative.partition_point(|&c| c as f64 <= r);
        idx.min(self.cumulative.len() - 1)
    }

    /// Draws one rank. Repeated draws are independent and may repeat.
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> usize {
        let r = rng.random::<f64>() * self.total() as f64;
        self.rank_for(r)
    }
}
