//! Password generation.

use crate::rand::Rand;

use super::charset;

/// Generate a password of `length` characters sampled from the fixed pool.
pub fn generate(length: usize) -> String {
    let bytes: Vec<u8> = (0..length)
        .map(|_| random_byte(charset::ALPHABET, Rand::get()))
        .collect();
    // Safety: charset is all ASCII
    unsafe { String::from_utf8_unchecked(bytes) }
}

#[inline]
fn random_byte(chars: &[u8], rng: usize) -> u8 {
    chars[rng % chars.len()]
}
