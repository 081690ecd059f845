//! Rank-weighted evolutionary search.
//!
//! Provides a small, generic evolution engine and one client of it:
//!
//! - **Evolution engine** ([`ga`]): keeps a population of opaque genes and
//!   evolves it one generation at a time. Parents are drawn with probability
//!   linear in their fitness *rank*, so the best gene is never certain to
//!   breed and the worst is never excluded.
//! - **Substitution cipher** ([`cipher`]): generate, crossover and fitness
//!   callbacks that search for the key of a monoalphabetic cipher by matching
//!   English letter frequencies.
//!
//! # Architecture
//!
//! The engine knows nothing about gene structure. Domain logic lives entirely
//! behind the [`ga::GeneProblem`] trait, and randomness comes from an explicit,
//! seedable generator owned by the engine.

pub mod cipher;
pub mod error;
pub mod ga;

pub use error::{CipherError, EvolutionError};
