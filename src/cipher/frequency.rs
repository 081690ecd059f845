//! Letter-frequency fitness.

use super::key::{CipherKey, KEY_LEN};

/// Relative frequency of each letter `A..=Z` in English text.
///
/// Source: <https://en.wikipedia.org/wiki/Letter_frequency>
pub const ENGLISH_FREQUENCIES: [f64; KEY_LEN] = [
    0.08167, 0.01492, 0.02782, 0.04253, 0.12702, 0.02228, 0.02015, // A-G
    0.06094, 0.06966, 0.00153, 0.00772, 0.04025, 0.02406, 0.06749, // H-N
    0.07507, 0.01929, 0.00095, 0.05987, 0.06327, 0.09056, 0.02758, // O-U
    0.00978, 0.02361, 0.00150, 0.01974, 0.00074, // V-Z
];

/// Counts of each uppercase letter in `text`.
pub fn letter_histogram(text: &str) -> [usize; KEY_LEN] {
    let mut counts = [0usize; KEY_LEN];
    for b in text.bytes().filter(u8::is_ascii_uppercase) {
        counts[usize::from(b - b'A')] += 1;
    }
    counts
}

/// Scores decoded letter counts against English frequencies.
///
/// Returns `1 - Σ (count_c - freq_c·len)² / (2·len²)`, where `len` is the
/// length of the whole text including spaces and punctuation. A perfect match
/// approaches 1; the score is never above 1.
pub fn frequency_score(counts: &[usize; KEY_LEN], len: usize) -> f64 {
    let len = len as f64;
    let squared_error: f64 = counts
        .iter()
        .zip(ENGLISH_FREQUENCIES.iter())
        .map(|(&count, &freq)| {
            let diff = count as f64 - freq * len;
            diff * diff
        })
        .sum();
    1.0 - squared_error / 2.0 / (len * len)
}

/// Letter counts of the text obtained by decoding a ciphertext with `key`,
/// computed from the ciphertext histogram without building the string.
pub fn decoded_histogram(key: &CipherKey, cipher_counts: &[usize; KEY_LEN]) -> [usize; KEY_LEN] {
    let table = key.decoding_table();
    let mut counts = [0usize; KEY_LEN];
    for (cipher, &n) in cipher_counts.iter().enumerate() {
        let plain = table[cipher].map_or(cipher, |p| usize::from(p - b'A'));
        counts[plain] += n;
    }
    counts
}
