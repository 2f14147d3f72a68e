//! Base64URL encoding/decoding per RFC 4648
//!
//! Thin wrapper around the `base64` crate using the URL-safe alphabet
//! without padding, as required by the JWS compact serialization.

use crate::error::{Error, Result};
use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine};

/// Encode bytes to a Base64URL string
pub(crate) fn encode_bytes(input: &[u8]) -> String {
    URL_SAFE_NO_PAD.encode(input)
}

/// Encode a string to Base64URL
pub(crate) fn encode(input: &str) -> String {
    encode_bytes(input.as_bytes())
}

/// Decode a Base64URL string to bytes
pub(crate) fn decode_bytes(input: &str) -> Result<Vec<u8>> {
    URL_SAFE_NO_PAD
        .decode(input)
        .map_err(|e| Error::Malformed(format!("Base64URL decode failed: {e}")))
}

/// Decode a Base64URL string to a UTF-8 string
pub(crate) fn decode(input: &str) -> Result<String> {
    decode_bytes(input).and_then(|bytes| {
        String::from_utf8(bytes).map_err(|e| Error::Malformed(format!("Invalid UTF-8: {e}")))
    })
}
