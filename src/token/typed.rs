use crate::algorithm::{sign_hs256, verify_hs256};
use crate::claims::{unix_now, Claims};
use crate::error::{Error, Result};
use crate::token::TokenHeader;
use crate::utils::base64url;

use serde::de::DeserializeOwned;
use serde::Serialize;
use std::marker::PhantomData;

/// Symmetric-key JWT handler for claims with a typed `data` payload
///
/// A `TypedToken` is constructed once with a secret and reused across any
/// number of [`generate`](TypedToken::generate) and
/// [`parse`](TypedToken::parse) calls. It holds no mutable state, so it is
/// freely shareable across threads.
///
/// # Examples
///
/// ```ignore
/// use std::time::Duration;
/// use sugar::{Claims, TypedToken};
///
/// #[derive(serde::Serialize, serde::Deserialize, PartialEq, Debug)]
/// struct User { id: i64, name: String }
///
/// let jwt = TypedToken::<User>::new("secret")?;
///
/// let token = jwt.generate(
///     &Claims::with_data(User { id: 1, name: "test".into() })
///         .issued_now()
///         .expires_in(Duration::from_secs(3600)),
/// )?;
///
/// let claims = jwt.parse(&token)?;
/// assert_eq!(claims.data.unwrap().id, 1);
/// ```
pub struct TypedToken<T> {
    secret: Vec<u8>,
    leeway: u64,
    _claims: PhantomData<fn() -> T>,
}

impl<T> TypedToken<T> {
    /// Create a handler from the given secret
    ///
    /// The secret is stored as-is for the lifetime of the handler. Empty
    /// secrets are rejected: an empty HMAC key makes every signature
    /// forgeable by anyone who knows the algorithm.
    pub fn new(secret: impl Into<Vec<u8>>) -> Result<Self> {
        let secret = secret.into();
        if secret.is_empty() {
            return Err(Error::InvalidSecret("secret must not be empty".to_string()));
        }

        Ok(Self {
            secret,
            leeway: 0,
            _claims: PhantomData,
        })
    }

    /// Set the clock-skew tolerance in seconds for exp/nbf validation
    ///
    /// Defaults to zero.
    pub fn with_leeway(mut self, seconds: u64) -> Self {
        self.leeway = seconds;
        self
    }

    /// Create and sign a token from the provided claims
    ///
    /// Produces the JWS compact serialization: three dot-separated
    /// Base64URL segments (header, payload, HMAC-SHA-256 signature).
    /// Claims without a payload serialize without a `data` key.
    pub fn generate(&self, claims: &Claims<T>) -> Result<String>
    where
        T: Serialize,
    {
        let header_json = serde_json::to_string(&TokenHeader::hs256())
            .map_err(|e| Error::SigningFailure(format!("header serialization: {e}")))?;
        let payload_json = serde_json::to_string(claims)
            .map_err(|e| Error::SigningFailure(format!("claims serialization: {e}")))?;

        let signing_input = format!(
            "{}.{}",
            base64url::encode(&header_json),
            base64url::encode(&payload_json)
        );
        let signature = sign_hs256(&signing_input, &self.secret)?;

        Ok(format!(
            "{}.{}",
            signing_input,
            base64url::encode_bytes(&signature)
        ))
    }

    /// Parse and validate a token string, returning its claims
    ///
    /// The signature is verified before the payload is decoded; time
    /// claims (exp, nbf) are validated when present. Either the fully
    /// decoded claims are returned or a classified error, never a
    /// partially populated value.
    pub fn parse(&self, token: &str) -> Result<Claims<T>>
    where
        T: DeserializeOwned,
    {
        self.parse_at(token, unix_now())
    }

    /// Parse with an explicit notion of "now", in seconds since Unix epoch
    fn parse_at(&self, token: &str, now: i64) -> Result<Claims<T>>
    where
        T: DeserializeOwned,
    {
        let parts: Vec<&str> = token.split('.').collect();
        if parts.len() != 3 {
            return Err(Error::Malformed(
                "expected three Base64URL parts separated by '.'".to_string(),
            ));
        }

        let header_json = base64url::decode(parts[0])?;
        let header: TokenHeader = serde_json::from_str(&header_json)
            .map_err(|e| Error::Malformed(format!("header JSON: {e}")))?;
        header.ensure_hs256()?;

        // Verify before touching the payload; the signing input needs
        // only the raw segments.
        let signing_input = format!("{}.{}", parts[0], parts[1]);
        verify_hs256(&signing_input, parts[2], &self.secret)?;

        let payload_json = base64url::decode(parts[1])?;
        let raw: Claims<serde_json::Value> = serde_json::from_str(&payload_json)
            .map_err(|e| Error::Malformed(format!("payload JSON: {e}")))?;

        raw.validate_time(now, self.leeway)?;

        let data = match raw.data {
            Some(value) => Some(
                serde_json::from_value::<T>(value)
                    .map_err(|e| Error::ClaimsTypeMismatch(e.to_string()))?,
            ),
            None => None,
        };

        Ok(Claims {
            issuer: raw.issuer,
            subject: raw.subject,
            audience: raw.audience,
            expiration: raw.expiration,
            not_before: raw.not_before,
            issued_at: raw.issued_at,
            jwt_id: raw.jwt_id,
            data,
        })
    }
}
