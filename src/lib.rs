//! # urltoken
//!
//! Salted URL hashing and reversible token encoding.
//!
//! The crate turns a `(url, salt)` pair into a URL-safe token that embeds
//! the URL alongside a 32-bit fingerprint of `url + salt`. A receiver that
//! knows the salt can decode the token, recompute the fingerprint, and
//! detect a URL that was altered in transit. The fingerprint is the classic
//! `acc * 31 + code_unit` polynomial over UTF-16 code units, so tokens are
//! bit-compatible with other implementations of the same scheme.
//!
//! The hash is deliberately not cryptographic; collisions are expected and
//! the token offers no secrecy. Use it for cache-busting and casual tamper
//! detection, never as a security primitive.
//!
//! ## Example
//!
//! ```
//! use urltoken::{decode, encode, hash32};
//!
//! let out = encode("http://example.com", "pepper").expect("ascii payload encodes");
//! assert_eq!(out.hash, hash32("http://example.compepper"));
//!
//! let (url, hash) = decode(&out.encoded).expect("own tokens decode");
//! assert_eq!(url, "http://example.com");
//! assert_eq!(hash, out.hash);
//! ```

mod hash;
mod token;

pub use hash::hash32;
pub use token::{decode, encode, EncodedUrl, TokenError};
