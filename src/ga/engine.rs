//! The evolution engine.
//!
//! [`Evolution`] owns the population and advances it one generation per
//! [`step`](Evolution::step): evaluate → rank → sample pairs → recombine →
//! replace.

use super::config::EvolutionConfig;
use super::selection::RankTable;
use super::types::GeneProblem;
use crate::error::EvolutionError;
use log::{debug, info, trace};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Outcome of one generation step.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GenerationReport<G> {
    /// Zero-based index of the generation that produced this report.
    pub index: usize,

    /// Highest-scoring gene of the evaluated population.
    pub best_gene: G,

    /// Score of `best_gene`.
    pub best_score: f64,
}

type Observer<G> = Box<dyn FnMut(&GenerationReport<G>) + Send>;

/// Rank-weighted evolutionary search over a population of opaque genes.
///
/// # Usage
///
/// ```
/// use u_genepool::ga::{Evolution, EvolutionConfig, FnProblem};
/// use rand::Rng;
///
/// // Maximize a number in 0..=100.
/// let problem = FnProblem::new(
///     |rng| rng.random_range(0..=100u32),
///     |a: &u32, b: &u32, _m, _rng| (*a).max(*b),
///     |g: &u32| f64::from(*g),
/// );
/// let config = EvolutionConfig::default()
///     .with_n_genes(20)
///     .with_n_iter(30)
///     .with_seed(42);
///
/// let mut engine = Evolution::new(problem, config).unwrap();
/// let reports = engine.run().unwrap();
/// assert_eq!(reports.len(), 30);
/// assert_eq!(engine.generation(), 30);
/// assert!(engine.population().iter().all(|&g| g <= 100));
/// ```
pub struct Evolution<P: GeneProblem, R = StdRng> {
    problem: P,
    config: EvolutionConfig,
    rng: R,
    population: Vec<P::Gene>,
    generation: usize,
    observer: Option<Observer<P::Gene>>,
}

impl<P: GeneProblem> Evolution<P, StdRng> {
    /// Builds an engine and seeds its population.
    ///
    /// Uses `config.seed` when set, a random seed otherwise.
    pub fn new(problem: P, config: EvolutionConfig) -> Result<Self, EvolutionError<P::Error>> {
        let seed = config.seed.unwrap_or_else(rand::random);
        Self::with_rng(problem, config, StdRng::seed_from_u64(seed))
    }
}

impl<P: GeneProblem, R: Rng> Evolution<P, R> {
    /// Builds an engine that draws all randomness from `rng`.
    ///
    /// `config.seed` is ignored. The generator is called `config.n_genes`
    /// times, in order, to seed the population.
    pub fn with_rng(
        problem: P,
        config: EvolutionConfig,
        mut rng: R,
    ) -> Result<Self, EvolutionError<P::Error>> {
        config
            .validate()
            .map_err(EvolutionError::InvalidConfiguration)?;

        let population = (0..config.n_genes)
            .map(|_| problem.generate(&mut rng))
            .collect::<Result<Vec<_>, _>>()
            .map_err(EvolutionError::CallbackFailure)?;

        trace!("seeded population of {} genes", population.len());

        Ok(Self {
            problem,
            config,
            rng,
            population,
            generation: 0,
            observer: None,
        })
    }

    /// Registers a hook called with every report right after it is produced.
    pub fn with_observer<F>(mut self, observer: F) -> Self
    where
        F: FnMut(&GenerationReport<P::Gene>) + Send + 'static,
    {
        self.observer = Some(Box::new(observer));
        self
    }

    /// The current population.
    pub fn population(&self) -> &[P::Gene] {
        &self.population
    }

    /// Number of generation steps completed so far.
    pub fn generation(&self) -> usize {
        self.generation
    }

    /// The configuration this engine was built with.
    pub fn config(&self) -> &EvolutionConfig {
        &self.config
    }

    /// The problem supplying the callbacks.
    pub fn problem(&self) -> &P {
        &self.problem
    }

    /// Consumes the engine and returns its final population.
    pub fn into_population(self) -> Vec<P::Gene> {
        self.population
    }

    /// Runs `config.n_iter` generations.
    pub fn run(&mut self) -> Result<Vec<GenerationReport<P::Gene>>, P::Error> {
        self.run_for(self.config.n_iter)
    }

    /// Runs exactly `iterations` generations, returning one report each.
    ///
    /// Stops at the first callback error. Generations completed before the
    /// error stay committed.
    pub fn run_for(
        &mut self,
        iterations: usize,
    ) -> Result<Vec<GenerationReport<P::Gene>>, P::Error> {
        info!(
            "evolving {} genes for {} generations (from generation {})",
            self.config.n_genes, iterations, self.generation
        );

        let mut reports = Vec::with_capacity(iterations);
        for _ in 0..iterations {
            reports.push(self.step()?);
        }

        if let Some(last) = reports.last() {
            info!(
                "finished at generation {} with best score {:.6}",
                self.generation, last.best_score
            );
        }
        Ok(reports)
    }

    /// Advances the population by one generation.
    ///
    /// On error the population is left exactly as it was before the call.
    pub fn step(&mut self) -> Result<GenerationReport<P::Gene>, P::Error> {
        let n = self.population.len();

        // 1. Evaluate
        let scores = self.evaluate_population()?;

        // 2. Rank: indices sorted ascending by score, stable for ties
        let mut ranked: Vec<usize> = (0..n).collect();
        ranked.sort_by(|&a, &b| scores[a].total_cmp(&scores[b]));

        // 3-5. Sample parent pairs by rank and recombine
        let table = RankTable::new(n);
        let mut next_gen = Vec::with_capacity(n);
        for _ in 0..n {
            let p1 = &self.population[ranked[table.sample(&mut self.rng)]];
            let p2 = &self.population[ranked[table.sample(&mut self.rng)]];
            let child =
                self.problem
                    .crossover(p1, p2, self.config.mutation_chance, &mut self.rng)?;
            next_gen.push(child);
        }

        // 7. Best of the evaluated population, first found on ties
        let best_idx = best_index(&scores);
        let report = GenerationReport {
            index: self.generation,
            best_gene: self.population[best_idx].clone(),
            best_score: scores[best_idx],
        };

        // 6. Replace
        self.population = next_gen;
        self.generation += 1;

        debug!(
            "generation {}: best score {:.6}",
            report.index, report.best_score
        );

        if let Some(observer) = self.observer.as_mut() {
            observer(&report);
        }

        Ok(report)
    }

    fn evaluate_population(&self) -> Result<Vec<f64>, P::Error> {
        let problem = &self.problem;

        #[cfg(feature = "parallel")]
        if self.config.parallel {
            return self
                .population
                .par_iter()
                .map(|gene| problem.evaluate(gene))
                .collect();
        }

        self.population
            .iter()
            .map(|gene| problem.evaluate(gene))
            .collect()
    }
}

/// Index of the maximum score; the earliest index wins ties.
fn best_index(scores: &[f64]) -> usize {
    let mut best = 0;
    for (i, &s) in scores.iter().enumerate().skip(1) {
        if s > scores[best] {
            best = i;
        }
    }
    best
}

// ============================================================================
// Tests
// ============================================================================
