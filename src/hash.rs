//! 32-bit rolling hash over UTF-16 code units.
//!
//! The formula is the classic polynomial accumulator
//! `acc = acc * 31 + code_unit`, folded to a signed 32-bit value at every
//! step. It matches the `String.hashCode` family of hashes bit for bit,
//! which is what keeps tokens produced here interchangeable with tokens
//! produced by other implementations of the same scheme.
//!
//! Deterministic, order-sensitive, and not a security primitive: collisions
//! are expected and acceptable.

/// Hash `text` to a signed 32-bit integer.
///
/// Iterates UTF-16 code units left to right, so characters outside the BMP
/// contribute their two surrogate halves. The empty string hashes to `0`.
pub fn hash32(text: &str) -> i32 {
    fold_code_units(0, text)
}

/// Continue a rolling hash from `acc` across the code units of `text`.
///
/// Because the hash is a plain polynomial over the code-unit sequence,
/// `fold_code_units(fold_code_units(0, a), b)` equals `hash32` of the
/// concatenation of `a` and `b`. The token encoder relies on this to hash
/// `url + salt` without building the intermediate string.
pub(crate) fn fold_code_units(acc: i32, text: &str) -> i32 {
    text.encode_utf16().fold(acc, |acc, unit| {
        acc.wrapping_mul(31).wrapping_add(i32::from(unit))
    })
}
