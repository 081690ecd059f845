//! Error types for the evolution engine and the cipher client.

use thiserror::Error;

/// Error returned when an [`Evolution`](crate::ga::Evolution) cannot be built.
///
/// Once an engine exists, [`step`](crate::ga::Evolution::step) and
/// [`run`](crate::ga::Evolution::run) return the problem's own error type
/// unchanged; this enum only covers construction.
#[derive(Debug, Error)]
pub enum EvolutionError<E> {
    /// The configuration violates an engine invariant (e.g. `n_genes < 2`).
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// The generator callback failed while seeding the population.
    #[error(transparent)]
    CallbackFailure(E),
}

impl<E> EvolutionError<E> {
    /// Returns true for [`EvolutionError::InvalidConfiguration`].
    pub fn is_invalid_configuration(&self) -> bool {
        matches!(self, Self::InvalidConfiguration(_))
    }
}

/// Error type for building substitution-cipher problems and keys.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CipherError {
    /// The ciphertext has no characters, so letter frequencies are undefined.
    #[error("Ciphertext must not be empty")]
    EmptyCiphertext,

    /// A key string has the wrong number of symbols.
    #[error("Key length mismatch: expected {expected}, got {actual}")]
    KeyLength { expected: usize, actual: usize },

    /// A key string contains a symbol outside `A..=Z`.
    #[error("Invalid key symbol {0:?}: expected an uppercase ASCII letter")]
    KeySymbol(char),
}
