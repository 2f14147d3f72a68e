//! Error types for token generation and parsing
//!
//! All failures are terminal for the call that produced them: a malformed,
//! tampered, or expired token is a permanent condition for that input and
//! nothing is retried internally.

use thiserror::Error;

/// Errors that can occur while generating or parsing tokens
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Input is not a parseable compact token: wrong segment count,
    /// Base64URL failure, or JSON failure in header or payload
    #[error("Malformed token: {0}")]
    Malformed(String),

    /// Header declares an algorithm other than HS256
    ///
    /// The unsigned `"none"` algorithm is always rejected per
    /// [RFC 8725](https://datatracker.ietf.org/doc/html/rfc8725).
    #[error("Algorithm '{0}' is not supported")]
    AlgorithmUnsupported(String),

    /// Signature does not verify under the stored secret
    #[error("Signature verification failed")]
    SignatureInvalid,

    /// Token expired (exp claim)
    #[error("Token expired at {expired_at} (now: {now}, leeway: {leeway}s)")]
    Expired {
        expired_at: i64,
        now: i64,
        leeway: u64,
    },

    /// Token not yet valid (nbf claim)
    #[error("Token not valid until {not_before} (now: {now}, leeway: {leeway}s)")]
    NotYetValid {
        not_before: i64,
        now: i64,
        leeway: u64,
    },

    /// Payload carried a `data` value that cannot be decoded as the
    /// expected claims type
    #[error("Claims data does not match the expected type: {0}")]
    ClaimsTypeMismatch(String),

    /// Signing itself failed (serialization or MAC construction)
    #[error("Signing failed: {0}")]
    SigningFailure(String),

    /// Secret rejected at construction (empty)
    #[error("Invalid secret: {0}")]
    InvalidSecret(String),
}

/// Result type alias for sugar operations
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        assert_eq!(
            Error::SignatureInvalid.to_string(),
            "Signature verification failed"
        );
        assert_eq!(
            Error::Malformed("expected three parts".to_string()).to_string(),
            "Malformed token: expected three parts"
        );
        assert_eq!(
            Error::Expired {
                expired_at: 100,
                now: 200,
                leeway: 0,
            }
            .to_string(),
            "Token expired at 100 (now: 200, leeway: 0s)"
        );
    }
}
