//! The substitution cipher as a [`GeneProblem`].

use super::frequency::{decoded_histogram, frequency_score, letter_histogram};
use super::key::{CipherKey, KEY_LEN};
use crate::error::CipherError;
use crate::ga::GeneProblem;
use rand::Rng;
use std::convert::Infallible;

/// Searches for the key of a monoalphabetic substitution cipher.
///
/// Fitness is how closely the decoded letter counts follow English letter
/// frequencies (see [`frequency_score`]).
///
/// ```
/// use u_genepool::cipher::{CipherKey, CipherProblem};
/// use u_genepool::ga::GeneProblem;
///
/// let problem = CipherProblem::new("GUR DHVPX OEBJA SBK").unwrap();
/// let rot13: CipherKey = "NOPQRSTUVWXYZABCDEFGHIJKLM".parse().unwrap();
/// let right = problem.evaluate(&rot13).unwrap();
/// let wrong = problem.evaluate(&CipherKey::IDENTITY).unwrap();
/// assert!(right > wrong);
/// ```
#[derive(Debug, Clone)]
pub struct CipherProblem {
    ciphertext: String,
    cipher_counts: [usize; KEY_LEN],
    len: usize,
}

impl CipherProblem {
    /// Builds a problem for `ciphertext`. ASCII letters are upper-cased.
    pub fn new(ciphertext: &str) -> Result<Self, CipherError> {
        let ciphertext = ciphertext.to_ascii_uppercase();
        let len = ciphertext.chars().count();
        if len == 0 {
            return Err(CipherError::EmptyCiphertext);
        }
        Ok(Self {
            cipher_counts: letter_histogram(&ciphertext),
            ciphertext,
            len,
        })
    }

    /// The (upper-cased) ciphertext.
    pub fn ciphertext(&self) -> &str {
        &self.ciphertext
    }

    /// Decodes the ciphertext with `key`.
    pub fn decode(&self, key: &CipherKey) -> String {
        key.decode(&self.ciphertext)
    }

    /// Fitness of `key`; higher is a closer match to English.
    pub fn score(&self, key: &CipherKey) -> f64 {
        frequency_score(&decoded_histogram(key, &self.cipher_counts), self.len)
    }
}

impl GeneProblem for CipherProblem {
    type Gene = CipherKey;
    type Error = Infallible;

    fn generate<R: Rng>(&self, rng: &mut R) -> Result<CipherKey, Infallible> {
        Ok(CipherKey::random(rng))
    }

    fn crossover<R: Rng>(
        &self,
        parent1: &CipherKey,
        parent2: &CipherKey,
        mutation_chance: f64,
        rng: &mut R,
    ) -> Result<CipherKey, Infallible> {
        Ok(parent1.crossover(parent2, mutation_chance, rng))
    }

    fn evaluate(&self, gene: &CipherKey) -> Result<f64, Infallible> {
        Ok(self.score(gene))
    }
}
