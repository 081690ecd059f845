//! Engine configuration.
//!
//! [`EvolutionConfig`] holds every parameter the engine reads. It is fixed
//! for the lifetime of an [`Evolution`](super::Evolution).

/// Configuration for the evolution engine.
///
/// # Defaults
///
/// ```
/// use u_genepool::ga::EvolutionConfig;
///
/// let config = EvolutionConfig::default();
/// assert_eq!(config.n_genes, 100);
/// assert_eq!(config.n_iter, 1000);
/// assert!((config.mutation_chance - 0.1).abs() < 1e-12);
/// ```
///
/// # Builder Pattern
///
/// ```
/// use u_genepool::ga::EvolutionConfig;
///
/// let config = EvolutionConfig::default()
///     .with_n_genes(50)
///     .with_n_iter(200)
///     .with_mutation_chance(0.05)
///     .with_seed(42);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EvolutionConfig {
    /// Number of genes in the population. Must be at least 2.
    pub n_genes: usize,

    /// Number of generations executed by [`Evolution::run`](super::Evolution::run).
    pub n_iter: usize,

    /// Passed unchanged to every crossover call (0.0–1.0).
    ///
    /// The engine does not interpret this value.
    pub mutation_chance: f64,

    /// Whether to evaluate fitness in parallel using rayon.
    ///
    /// Only honoured when the crate is built with the `parallel` feature.
    /// Scores are collected in population order, so results match the
    /// sequential pass.
    pub parallel: bool,

    /// Random seed for reproducibility.
    ///
    /// `None` uses a random seed.
    pub seed: Option<u64>,
}

impl Default for EvolutionConfig {
    fn default() -> Self {
        Self {
            n_genes: 100,
            n_iter: 1000,
            mutation_chance: 0.1,
            parallel: false,
            seed: None,
        }
    }
}

impl EvolutionConfig {
    /// Sets the population size.
    pub fn with_n_genes(mut self, n: usize) -> Self {
        self.n_genes = n;
        self
    }

    /// Sets the number of generations run by default.
    pub fn with_n_iter(mut self, n: usize) -> Self {
        self.n_iter = n;
        self
    }

    /// Sets the mutation chance.
    pub fn with_mutation_chance(mut self, chance: f64) -> Self {
        self.mutation_chance = chance.clamp(0.0, 1.0);
        self
    }

    /// Enables or disables parallel fitness evaluation.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Sets the random seed for reproducibility.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validates the configuration.
    ///
    /// Only the population size is checked: a population needs at least two
    /// genes to be paired. `n_iter == 0` is allowed and simply runs nothing.
    pub fn validate(&self) -> Result<(), String> {
        if self.n_genes < 2 {
            return Err(format!(
                "n_genes must be at least 2, got {}",
                self.n_genes
            ));
        }
        Ok(())
    }
}
