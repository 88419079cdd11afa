//! Token encoding and decoding for salted URLs.
//!
//! A token packs a URL together with the 32-bit hash of `url + salt` so a
//! receiver holding the salt can recompute the hash and spot a tampered URL.
//! The wire form is `base64(url + "|" + decimal_hash)`, percent-encoded so
//! it can sit inside a query string or form field unescaped.
//!
//! The payload is treated as one byte per UTF-16 code unit, which is the
//! domain of `btoa`-style base64: code units above U+00FF cannot be
//! represented and are rejected with [`TokenError::UnencodableCodeUnit`]
//! instead of being silently corrupted.

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use percent_encoding::{percent_decode_str, utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, warn};

use crate::hash::fold_code_units;

/// Characters left bare by `encodeURIComponent`: alphanumerics plus
/// `- _ . ! ~ * ' ( )`. Everything else is percent-escaped, which for
/// standard base64 output means `+`, `/` and `=`.
const COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Errors produced while encoding or decoding a token.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TokenError {
    /// The payload contains a UTF-16 code unit above U+00FF, which the
    /// byte-per-code-unit base64 view cannot hold.
    #[error("payload code unit U+{0:04X} is outside the encodable byte range")]
    UnencodableCodeUnit(u16),
    /// Percent-decoding did not yield valid text.
    #[error("token is not valid percent-encoded text")]
    MalformedPercentEncoding,
    /// The percent-decoded token is not valid standard base64.
    #[error("token is not valid base64: {0}")]
    MalformedBase64(String),
    /// The decoded payload carries no `|` separator.
    #[error("decoded payload has no '|' separator")]
    MissingSeparator,
    /// The field after the last `|` is not a decimal 32-bit integer.
    #[error("decoded hash field {0:?} is not a 32-bit integer")]
    MalformedHash(String),
}

/// A salted URL token together with the raw hash it embeds.
///
/// Callers that only need the wire form project out `encoded`; the `hash`
/// field is exposed so it can be displayed or checked independently.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct EncodedUrl {
    /// Percent-encoded base64 of `url + "|" + hash`.
    pub encoded: String,
    /// `hash32(url + salt)`.
    pub hash: i32,
}

/// Encode `url` with `salt` into a URL-safe token.
///
/// The hash covers the direct concatenation `url + salt` (no separator);
/// the salt itself never appears in the token. Deterministic and pure:
/// identical inputs always produce an identical [`EncodedUrl`].
pub fn encode(url: &str, salt: &str) -> Result<EncodedUrl, TokenError> {
    let hash = fold_code_units(fold_code_units(0, url), salt);

    // payload = url | decimal hash, one byte per code unit.
    let mut payload = Vec::with_capacity(url.len() + 12);
    push_code_unit_bytes(&mut payload, url)?;
    payload.push(b'|');
    payload.extend_from_slice(hash.to_string().as_bytes());

    let encoded = utf8_percent_encode(&BASE64.encode(&payload), COMPONENT).to_string();
    debug!(hash, token_len = encoded.len(), "encoded url token");
    Ok(EncodedUrl { encoded, hash })
}

/// Decode a token back into the URL and hash it carries.
///
/// The payload splits at the last `|`: URLs may legally contain `|`, the
/// decimal hash field cannot. Decoding never partially succeeds; any
/// malformed layer maps to its own [`TokenError`] variant.
pub fn decode(token: &str) -> Result<(String, i32), TokenError> {
    let base64_text = percent_decode_str(token)
        .decode_utf8()
        .map_err(|_| TokenError::MalformedPercentEncoding)?;
    let payload_bytes = BASE64
        .decode(base64_text.as_bytes())
        .map_err(|err| TokenError::MalformedBase64(err.to_string()))?;

    // Inverse of the byte-per-code-unit view: each byte is one char.
    let payload: String = payload_bytes.iter().map(|&b| char::from(b)).collect();

    let sep = payload.rfind('|').ok_or(TokenError::MissingSeparator)?;
    let (url, hash_field) = (&payload[..sep], &payload[sep + 1..]);
    let hash = hash_field
        .parse::<i32>()
        .map_err(|_| TokenError::MalformedHash(hash_field.to_string()))?;

    debug!(hash, url_len = url.len(), "decoded url token");
    Ok((url.to_string(), hash))
}

fn push_code_unit_bytes(out: &mut Vec<u8>, text: &str) -> Result<(), TokenError> {
    for unit in text.encode_utf16() {
        match u8::try_from(unit) {
            Ok(byte) => out.push(byte),
            Err(_) => {
                warn!(code_unit = unit, "rejecting payload outside byte range");
                return Err(TokenError::UnencodableCodeUnit(unit));
            }
        }
    }
    Ok(())
}
