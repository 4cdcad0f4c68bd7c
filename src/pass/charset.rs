//! Fixed character pool for password generation.

/// The sampling pool: lowercase letters (no `v`), digits, and punctuation.
/// Indices from the RNG map straight into this byte string.
pub const ALPHABET: &[u8] = b"abcdefghijklmnopqrstuwxyz1234567890!@#$%^&*()-=_+;:,.<>/?[]{}";
