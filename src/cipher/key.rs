//! Substitution keys and the operators that breed them.

use super::ALPHABET;
use crate::error::CipherError;
use rand::Rng;
use std::fmt;
use std::str::FromStr;

/// Number of symbols in a key.
pub const KEY_LEN: usize = 26;

/// A substitution key: 26 uppercase letters, one per alphabet position.
///
/// Ciphertext letter `key[i]` decodes to `ALPHABET[i]`. Keys are not
/// required to be permutations; when a letter appears more than once the
/// last position wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CipherKey([u8; KEY_LEN]);

impl CipherKey {
    /// The key that decodes every letter to itself.
    pub const IDENTITY: CipherKey = CipherKey(*ALPHABET);

    /// The key symbols as ASCII bytes.
    pub fn symbols(&self) -> &[u8; KEY_LEN] {
        &self.0
    }

    /// Builds a key from 26 ASCII bytes.
    pub fn from_symbols(symbols: [u8; KEY_LEN]) -> Result<Self, CipherError> {
        match symbols.iter().find(|b| !b.is_ascii_uppercase()) {
            Some(&bad) => Err(CipherError::KeySymbol(char::from(bad))),
            None => Ok(Self(symbols)),
        }
    }

    /// Draws every symbol uniformly from the alphabet, with repetition.
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self(std::array::from_fn(|_| random_symbol(rng)))
    }

    /// Per-position recombination with mutation.
    ///
    /// For each position a uniform `r` in `[0, 1)` is drawn:
    /// - `r < 0.5 - m/2` takes the symbol of `self`
    /// - `r < 1 - m` takes the symbol of `other`
    /// - otherwise a uniformly random letter is substituted
    pub fn crossover<R: Rng + ?Sized>(&self, other: &Self, mutation_chance: f64, rng: &mut R) -> Self {
        let take_first = 0.5 - mutation_chance / 2.0;
        let take_second = 1.0 - mutation_chance;
        Self(std::array::from_fn(|i| {
            let r: f64 = rng.random();
            if r < take_first {
                self.0[i]
            } else if r < take_second {
                other.0[i]
            } else {
                random_symbol(rng)
            }
        }))
    }

    /// Decoding table indexed by ciphertext letter.
    ///
    /// `None` means the letter does not occur in the key and decodes to itself.
    pub fn decoding_table(&self) -> [Option<u8>; KEY_LEN] {
        let mut table = [None; KEY_LEN];
        for (plain, &cipher) in ALPHABET.iter().zip(self.0.iter()) {
            table[usize::from(cipher - b'A')] = Some(*plain);
        }
        table
    }

    /// Applies the key to `ciphertext`.
    ///
    /// Characters other than `A..=Z` pass through unchanged.
    pub fn decode(&self, ciphertext: &str) -> String {
        let table = self.decoding_table();
        ciphertext
            .chars()
            .map(|c| {
                if c.is_ascii_uppercase() {
                    let plain = table[usize::from(c as u8 - b'A')].unwrap_or(c as u8);
                    char::from(plain)
                } else {
                    c
                }
            })
            .collect()
    }
}

fn random_symbol<R: Rng + ?Sized>(rng: &mut R) -> u8 {
    ALPHABET[rng.random_range(0..KEY_LEN)]
}

impl Default for CipherKey {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl fmt::Display for CipherKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &b in &self.0 {
            write!(f, "{}", char::from(b))?;
        }
        Ok(())
    }
}

impl FromStr for CipherKey {
    type Err = CipherError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let actual = s.chars().count();
        if actual != KEY_LEN {
            return Err(CipherError::KeyLength {
                expected: KEY_LEN,
                actual,
            });
        }
        if let Some(bad) = s.chars().find(|c| !c.is_ascii_uppercase()) {
            return Err(CipherError::KeySymbol(bad));
        }

        let mut symbols = [0u8; KEY_LEN];
        symbols.copy_from_slice(s.as_bytes());
        Ok(Self(symbols))
    }
}
