//! Registered JWT claims with an optional typed data payload
//!
//! [`Claims`] carries the standard registered claims from
//! [RFC 7519 Section 4.1](https://datatracker.ietf.org/doc/html/rfc7519#section-4.1)
//! plus a generic application payload serialized under the `"data"` key.
//! An absent payload is omitted from the wire form entirely, never encoded
//! as `null` or a zero value.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::time::{Duration, SystemTime, UNIX_EPOCH};

/// JWT claims: registered fields plus an optional typed `data` payload
///
/// All registered claims are optional. Time claims are integer seconds
/// since the Unix epoch, matching the NumericDate encoding used by
/// standard JWT implementations.
///
/// # Examples
///
/// ```ignore
/// use std::time::Duration;
/// use sugar::Claims;
///
/// #[derive(serde::Serialize, serde::Deserialize)]
/// struct User { id: i64, name: String }
///
/// let claims = Claims::with_data(User { id: 1, name: "test".into() })
///     .issued_now()
///     .expires_in(Duration::from_secs(3600));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Claims<T> {
    /// Issuer (iss) - identifies the principal that issued the token
    #[serde(rename = "iss", skip_serializing_if = "Option::is_none")]
    pub issuer: Option<String>,

    /// Subject (sub) - identifies the principal that is the subject of the token
    #[serde(rename = "sub", skip_serializing_if = "Option::is_none")]
    pub subject: Option<String>,

    /// Audience (aud) - identifies the recipients the token is intended for
    ///
    /// Parsed as a single string; the array form from RFC 7519 is not
    /// supported.
    #[serde(rename = "aud", skip_serializing_if = "Option::is_none")]
    pub audience: Option<String>,

    /// Expiration Time (exp) - seconds since Unix epoch
    #[serde(rename = "exp", skip_serializing_if = "Option::is_none")]
    pub expiration: Option<i64>,

    /// Not Before (nbf) - time before which the token must not be accepted
    #[serde(rename = "nbf", skip_serializing_if = "Option::is_none")]
    pub not_before: Option<i64>,

    /// Issued At (iat) - time at which the token was issued
    #[serde(rename = "iat", skip_serializing_if = "Option::is_none")]
    pub issued_at: Option<i64>,

    /// JWT ID (jti) - unique identifier for the token
    #[serde(rename = "jti", skip_serializing_if = "Option::is_none")]
    pub jwt_id: Option<String>,

    /// Typed application payload, omitted from the wire form when `None`
    #[serde(rename = "data", skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

// Manual impl to avoid requiring T: Default
impl<T> Default for Claims<T> {
    fn default() -> Self {
        Self {
            issuer: None,
            subject: None,
            audience: None,
            expiration: None,
            not_before: None,
            issued_at: None,
            jwt_id: None,
            data: None,
        }
    }
}

impl<T> Claims<T> {
    /// Create empty claims with no payload
    pub fn new() -> Self {
        Self::default()
    }

    /// Create claims carrying the given payload
    pub fn with_data(data: T) -> Self {
        Self {
            data: Some(data),
            ..Self::default()
        }
    }

    /// Set the issuer (iss)
    pub fn issuer(mut self, issuer: impl Into<String>) -> Self {
        self.issuer = Some(issuer.into());
        self
    }

    /// Set the subject (sub)
    pub fn subject(mut self, subject: impl Into<String>) -> Self {
        self.subject = Some(subject.into());
        self
    }

    /// Set the audience (aud)
    pub fn audience(mut self, audience: impl Into<String>) -> Self {
        self.audience = Some(audience.into());
        self
    }

    /// Set the token id (jti)
    pub fn jwt_id(mut self, jwt_id: impl Into<String>) -> Self {
        self.jwt_id = Some(jwt_id.into());
        self
    }

    /// Set the expiration time (exp) as seconds since Unix epoch
    pub fn expires_at(mut self, timestamp: i64) -> Self {
        self.expiration = Some(timestamp);
        self
    }

    /// Set the expiration time (exp) relative to the current time
    pub fn expires_in(mut self, lifetime: Duration) -> Self {
        let seconds = i64::try_from(lifetime.as_secs()).unwrap_or(i64::MAX);
        self.expiration = Some(unix_now().saturating_add(seconds));
        self
    }

    /// Set the not-before time (nbf) as seconds since Unix epoch
    pub fn not_before(mut self, timestamp: i64) -> Self {
        self.not_before = Some(timestamp);
        self
    }

    /// Set the issued-at time (iat) as seconds since Unix epoch
    pub fn issued_at(mut self, timestamp: i64) -> Self {
        self.issued_at = Some(timestamp);
        self
    }

    /// Set the issued-at time (iat) to the current time
    pub fn issued_now(mut self) -> Self {
        self.issued_at = Some(unix_now());
        self
    }

    /// Validate exp and nbf against `now` with the given leeway in seconds
    ///
    /// Absent time claims pass validation; only claims present in the
    /// token are checked. Leeway is applied with saturating arithmetic:
    /// parsed tokens may carry any i64 timestamp.
    pub(crate) fn validate_time(&self, now: i64, leeway: u64) -> Result<()> {
        if let Some(expired_at) = self.expiration {
            if now > expired_at.saturating_add(leeway as i64) {
                return Err(Error::Expired {
                    expired_at,
                    now,
                    leeway,
                });
            }
        }

        if let Some(not_before) = self.not_before {
            if now < not_before.saturating_sub(leeway as i64) {
                return Err(Error::NotYetValid {
                    not_before,
                    now,
                    leeway,
                });
            }
        }

        Ok(())
    }
}

/// Current time as seconds since Unix epoch
pub(crate) fn unix_now() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs() as i64)
        .unwrap_or(0)
}
