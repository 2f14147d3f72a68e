use crate::algorithm::HS256;
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};

/// JWT header structure
///
/// Field order matters on the wire: generated headers serialize as
/// `{"alg":"HS256","typ":"JWT"}`, matching standard implementations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenHeader {
    /// Algorithm used for signing
    #[serde(rename = "alg")]
    pub algorithm: String,

    /// Token type (typically "JWT")
    #[serde(rename = "typ", skip_serializing_if = "Option::is_none")]
    pub token_type: Option<String>,
}

impl TokenHeader {
    /// Header for a freshly signed HS256 token
    pub(crate) fn hs256() -> Self {
        Self {
            algorithm: HS256.to_string(),
            token_type: Some("JWT".to_string()),
        }
    }

    /// Reject any algorithm other than HS256
    pub(crate) fn ensure_hs256(&self) -> Result<()> {
        if self.algorithm == HS256 {
            Ok(())
        } else {
            Err(Error::AlgorithmUnsupported(self.algorithm.clone()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hs256_header_wire_form() {
        let json = serde_json::to_string(&TokenHeader::hs256()).unwrap();
        assert_eq!(json, r#"{"alg":"HS256","typ":"JWT"}"#);
    }

    #[test]
    fn test_ensure_hs256_accepts_hs256() {
        assert!(TokenHeader::hs256().ensure_hs256().is_ok());
    }

    #[test]
    fn test_ensure_hs256_rejects_none() {
        let header: TokenHeader = serde_json::from_str(r#"{"alg":"none"}"#).unwrap();
        assert!(matches!(
            header.ensure_hs256(),
            Err(Error::AlgorithmUnsupported(alg)) if alg == "none"
        ));
    }

    #[test]
    fn test_ensure_hs256_rejects_rs256() {
        let header: TokenHeader = serde_json::from_str(r#"{"alg":"RS256","typ":"JWT"}"#).unwrap();
        assert!(matches!(
            header.ensure_hs256(),
            Err(Error::AlgorithmUnsupported(_))
        ));
    }

    #[test]
    fn test_missing_typ_deserializes() {
        let header: TokenHeader = serde_json::from_str(r#"{"alg":"HS256"}"#).unwrap();
        assert_eq!(header.algorithm, "HS256");
        assert!(header.token_type.is_none());
    }
}
