//! Substitution-cipher breaking on top of the evolution engine.
//!
//! A gene is a [`CipherKey`]: 26 letters where ciphertext letter `key[i]`
//! decodes to the `i`-th letter of the alphabet. The engine evolves keys
//! whose decoded text best matches English letter frequencies.
//!
//! - [`CipherKey::random`]: the generator (uniform letters, with repetition)
//! - [`CipherKey::crossover`]: per-position parent choice with mutation
//! - [`CipherProblem`]: wires both plus the frequency fitness into
//!   [`GeneProblem`](crate::ga::GeneProblem)
//! - [`consensus_key`]: per-position majority vote over a final population

mod frequency;
mod key;
mod problem;

pub use frequency::{decoded_histogram, frequency_score, letter_histogram, ENGLISH_FREQUENCIES};
pub use key::{CipherKey, KEY_LEN};
pub use problem::CipherProblem;

/// The plain alphabet, in key order.
pub const ALPHABET: &[u8; KEY_LEN] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// ROT13 encryption of [`PLAINTEXT`].
pub const SAMPLE_CIPHERTEXT: &str = "GUR ZBQHYRF QRFPEVORQ VA GUVF PUNCGRE CEBIVQR N JVQR ENATR BS \
FGEVAT ZNAVCHYNGVBA BCRENGVBAF NAQ BGURE GRKG CEBPRFFVAT FREIVPR";

/// Plain text behind [`SAMPLE_CIPHERTEXT`].
pub const PLAINTEXT: &str = "THE MODULES DESCRIBED IN THIS CHAPTER PROVIDE A WIDE RANGE OF \
STRING MANIPULATION OPERATIONS AND OTHER TEXT PROCESSING SERVICE";

/// Builds a key from the most common symbol at each position.
///
/// Ties go to the letter earliest in the alphabet. Returns `None` for an
/// empty population.
///
/// ```
/// use u_genepool::cipher::{consensus_key, CipherKey};
///
/// let a: CipherKey = "ABCDEFGHIJKLMNOPQRSTUVWXYZ".parse().unwrap();
/// let b: CipherKey = "BBCDEFGHIJKLMNOPQRSTUVWXYZ".parse().unwrap();
/// assert_eq!(consensus_key(&[a, b, a]), Some(a));
/// ```
pub fn consensus_key(population: &[CipherKey]) -> Option<CipherKey> {
    if population.is_empty() {
        return None;
    }

    let mut votes = [[0usize; KEY_LEN]; KEY_LEN];
    for key in population {
        for (position, &symbol) in key.symbols().iter().enumerate() {
            votes[position][usize::from(symbol - b'A')] += 1;
        }
    }

    let symbols = std::array::from_fn(|position| {
        let tally = &votes[position];
        let mut best = 0;
        for letter in 1..KEY_LEN {
            if tally[letter] > tally[best] {
                best = letter;
            }
        }
        ALPHABET[best]
    });
    CipherKey::from_symbols(symbols).ok()
}
