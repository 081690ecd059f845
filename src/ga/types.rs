//! Core trait definitions for the evolution engine.
//!
//! [`GeneProblem`] is the contract between the generic engine and a
//! domain-specific client. [`FnProblem`] adapts three plain closures to it.

use rand::{Rng, RngCore};
use std::convert::Infallible;
use std::fmt;

/// Defines an evolutionary search problem.
///
/// The engine treats genes as opaque values: it only hands them to these
/// three callbacks and moves or clones them whole.
///
/// 1. **Generation**: how to create a random gene
/// 2. **Crossover**: how to combine two parents into one offspring
/// 3. **Evaluation**: how to score a gene (higher is better)
///
/// Any error returned by a callback aborts the current step and is passed to
/// the caller unchanged.
///
/// # Thread Safety
///
/// `GeneProblem` must be `Send + Sync` because the engine may evaluate genes
/// in parallel using rayon (feature `parallel`).
///
/// # Implementing
///
/// ```
/// use rand::Rng;
/// use std::convert::Infallible;
/// use u_genepool::ga::GeneProblem;
///
/// struct MaxByte;
///
/// impl GeneProblem for MaxByte {
///     type Gene = u8;
///     type Error = Infallible;
///
///     fn generate<R: Rng>(&self, rng: &mut R) -> Result<u8, Infallible> {
///         Ok(rng.random())
///     }
///
///     fn crossover<R: Rng>(
///         &self,
///         a: &u8,
///         b: &u8,
///         _mutation_chance: f64,
///         _rng: &mut R,
///     ) -> Result<u8, Infallible> {
///         Ok(a / 2 + b / 2)
///     }
///
///     fn evaluate(&self, gene: &u8) -> Result<f64, Infallible> {
///         Ok(f64::from(*gene))
///     }
/// }
/// ```
pub trait GeneProblem: Send + Sync {
    /// The candidate solution type.
    type Gene: Clone + Send + Sync;

    /// Error type shared by all three callbacks.
    type Error: Send;

    /// Creates a random gene. Called `n_genes` times when the engine is built.
    fn generate<R: Rng>(&self, rng: &mut R) -> Result<Self::Gene, Self::Error>;

    /// Combines two parents into exactly one new offspring.
    ///
    /// `parent1` and `parent2` may be the same gene. `mutation_chance` is
    /// passed through from the configuration; its meaning is up to the
    /// implementation.
    fn crossover<R: Rng>(
        &self,
        parent1: &Self::Gene,
        parent2: &Self::Gene,
        mutation_chance: f64,
        rng: &mut R,
    ) -> Result<Self::Gene, Self::Error>;

    /// Scores a gene. Higher is better.
    fn evaluate(&self, gene: &Self::Gene) -> Result<f64, Self::Error>;
}

/// A [`GeneProblem`] built from three infallible closures.
///
/// Closures receive the engine's generator as `&mut dyn RngCore`, which
/// implements [`Rng`].
///
/// ```
/// use u_genepool::ga::{EvolutionConfig, Evolution, FnProblem};
///
/// let problem = FnProblem::new(
///     |_rng| 7u32,
///     |a: &u32, _b: &u32, _m, _rng| *a,
///     |g: &u32| f64::from(*g),
/// );
/// let config = EvolutionConfig::default().with_n_genes(4).with_seed(1);
/// let engine = Evolution::new(problem, config).unwrap();
/// assert_eq!(engine.population(), &[7, 7, 7, 7]);
/// ```
pub struct FnProblem<G, Gen, Cross, Eval> {
    generate: Gen,
    crossover: Cross,
    evaluate: Eval,
    _gene: std::marker::PhantomData<fn() -> G>,
}

impl<G, Gen, Cross, Eval> FnProblem<G, Gen, Cross, Eval>
where
    Gen: Fn(&mut dyn RngCore) -> G,
    Cross: Fn(&G, &G, f64, &mut dyn RngCore) -> G,
    Eval: Fn(&G) -> f64,
{
    /// Wraps the generate, crossover and evaluate closures.
    pub fn new(generate: Gen, crossover: Cross, evaluate: Eval) -> Self {
        Self {
            generate,
            crossover,
            evaluate,
            _gene: std::marker::PhantomData,
        }
    }
}

impl<G, Gen, Cross, Eval> fmt::Debug for FnProblem<G, Gen, Cross, Eval> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FnProblem").finish_non_exhaustive()
    }
}

impl<G, Gen, Cross, Eval> GeneProblem for FnProblem<G, Gen, Cross, Eval>
where
    G: Clone + Send + Sync,
    Gen: Fn(&mut dyn RngCore) -> G + Send + Sync,
    Cross: Fn(&G, &G, f64, &mut dyn RngCore) -> G + Send + Sync,
    Eval: Fn(&G) -> f64 + Send + Sync,
{
    type Gene = G;
    type Error = Infallible;

    fn generate<R: Rng>(&self, rng: &mut R) -> Result<G, Infallible> {
        let rng: &mut dyn RngCore = rng;
        Ok((self.generate)(rng))
    }

    fn crossover<R: Rng>(
        &self,
        parent1: &G,
        parent2: &G,
        mutation_chance: f64,
        rng: &mut R,
    ) -> Result<G, Infallible> {
        let rng: &mut dyn RngCore = rng;
        Ok((self.crossover)(parent1, parent2, mutation_chance, rng))
    }

    fn evaluate(&self, gene: &G) -> Result<f64, Infallible> {
        Ok((self.evaluate)(gene))
    }
}
