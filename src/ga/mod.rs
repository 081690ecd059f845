//! Rank-weighted evolution engine.
//!
//! A generic, domain-agnostic engine built on a single trait. Users define
//! their problem by implementing [`GeneProblem`] (or wrapping three closures
//! in [`FnProblem`]): how to generate a gene, how to cross two parents, and
//! how to score a gene.
//!
//! # Generation step
//!
//! 1. Evaluate every gene once
//! 2. Sort ascending by score (stable)
//! 3. Build a [`RankTable`]: rank `i` has weight `i + 1`
//! 4. Draw two parents per offspring by upper-bound search on the table
//! 5. Cross them into one offspring, `n_genes` times
//! 6. Replace the population with the offspring
//!
//! Parents may be the same gene; pairing a gene with itself is a valid
//! degenerate crossover and helps the population converge.
//!
//! # Key Types
//!
//! - [`EvolutionConfig`]: population size, iteration count, mutation chance
//! - [`Evolution`]: owns the population and runs generation steps
//! - [`GenerationReport`]: best gene and score of one generation

mod config;
mod engine;
mod selection;
mod types;

pub use config::EvolutionConfig;
pub use engine::{Evolution, GenerationReport};
pub use selection::RankTable;
pub use types::{FnProblem, GeneProblem};
