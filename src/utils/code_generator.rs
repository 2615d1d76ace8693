//! Short code generation.

use rand::Rng;

/// The 62-character alphabet short codes are drawn from.
const ALPHABET: &[u8] = b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

/// Generates a random short code of exactly `length` characters.
///
/// Characters are drawn uniformly, with replacement, from the 62-character
/// alphanumeric alphabet. At the default length of 7 this gives 62^7
/// (~3.5e12) possible codes, so the caller-side collision retry is a
/// defensive cap rather than an expected path.
///
/// Entropy comes from the process-wide thread-local RNG, which is seeded
/// once rather than per call, so rapid successive calls stay uncorrelated.
///
/// `length` must be at least 1; no other validation is performed.
pub fn generate_code(length: usize) -> String {
    debug_assert!(length >= 1);

    let mut rng = rand::rng();
    (0..length)
        .map(|_| ALPHABET[rng.random_range(0..ALPHABET.len())] as char)
        .collect()
}
