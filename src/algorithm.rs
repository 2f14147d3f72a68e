//! HS256 signing and verification primitives
//!
//! The crate signs and verifies with a single symmetric algorithm,
//! HMAC-SHA-256. Verification compares signatures in constant time.

use crate::error::{Error, Result};
use crate::utils::base64url;

use constant_time_eq::constant_time_eq;
use hmac::{Hmac, Mac};
use sha2::Sha256;

/// The only algorithm accepted in token headers
pub(crate) const HS256: &str = "HS256";

/// Compute the HMAC-SHA-256 tag over the signing input
pub(crate) fn sign_hs256(signing_input: &str, secret: &[u8]) -> Result<Vec<u8>> {
    let mut mac =
        Hmac::<Sha256>::new_from_slice(secret).map_err(|e| Error::SigningFailure(e.to_string()))?;
    mac.update(signing_input.as_bytes());
    Ok(mac.finalize().into_bytes().to_vec())
}

/// Verify an HS256 signature with constant-time comparison
///
/// Any failure to decode the signature segment is reported as
/// [`Error::SignatureInvalid`]: a signature that cannot be decoded
/// cannot match either.
pub(crate) fn verify_hs256(signing_input: &str, signature: &str, secret: &[u8]) -> Result<()> {
    let provided_signature =
        base64url::decode_bytes(signature).map_err(|_| Error::SignatureInvalid)?;

    let expected_signature = sign_hs256(signing_input, secret)?;

    if provided_signature.len() != expected_signature.len() {
        return Err(Error::SignatureInvalid);
    }

    if constant_time_eq(&provided_signature, &expected_signature) {
        Ok(())
    } else {
        Err(Error::SignatureInvalid)
    }
}
